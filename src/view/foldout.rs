//! Endpoint and layout configuration for the result foldout panel.

/// Where and how the foldout detail panel loads its content
#[derive(Debug, Clone, PartialEq)]
pub struct FoldoutConfig {
    /// Optional language segment prefixed to the endpoint
    pub language: Option<String>,
    /// Number of grid columns the foldout spans
    pub cols: u32,
}

impl Default for FoldoutConfig {
    fn default() -> Self {
        Self {
            language: None,
            cols: 4,
        }
    }
}

impl FoldoutConfig {
    pub fn new(language: Option<String>, cols: u32) -> Self {
        Self { language, cols }
    }

    /// The foldout endpoint, with the language segment when configured
    pub fn endpoint(&self) -> String {
        match &self.language {
            Some(language) => format!("/{}/detail/foldout/", language),
            None => "/detail/foldout/".to_string(),
        }
    }

    /// Full URL for one document's foldout content
    pub fn url_for(&self, doc_id: &str) -> String {
        format!("{}{}?cols={}", self.endpoint(), doc_id, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_without_language() {
        let config = FoldoutConfig::default();
        assert_eq!(config.endpoint(), "/detail/foldout/");
        assert_eq!(config.cols, 4);
    }

    #[test]
    fn test_endpoint_with_language() {
        let config = FoldoutConfig::new(Some("nl".to_string()), 4);
        assert_eq!(config.endpoint(), "/nl/detail/foldout/");
    }

    #[test]
    fn test_url_for_document() {
        let config = FoldoutConfig::new(None, 6);
        assert_eq!(
            config.url_for("dcn_archive_1234"),
            "/detail/foldout/dcn_archive_1234?cols=6"
        );
    }
}
