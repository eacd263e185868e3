//! Hidden query-field contract.
//!
//! The search form carries one hidden input per active query term or
//! selected facet. Each input has a `name` ("q" for free-text terms,
//! "qf" for facet selections), a `value` that is submitted, and a
//! `data-text` attribute holding the human-readable label.

use serde::{Deserialize, Serialize};

/// The field name of a hidden input
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldName {
    /// A free-text query term ("q")
    Query,
    /// A selected facet ("qf")
    Facet,
    /// Anything else, kept verbatim
    Other(String),
}

impl FieldName {
    /// Parses a field name from the HTML `name` attribute
    pub fn parse(name: &str) -> Self {
        match name {
            "q" => Self::Query,
            "qf" => Self::Facet,
            other => Self::Other(other.to_string()),
        }
    }

    /// The HTML `name` attribute this field submits under
    pub fn as_str(&self) -> &str {
        match self {
            Self::Query => "q",
            Self::Facet => "qf",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One hidden form field mirrored into the tag strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryField {
    pub name: FieldName,
    pub value: String,
    /// The `data-text` attribute shown on the visual tag
    pub display_text: String,
}

impl QueryField {
    pub fn new(name: FieldName, value: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            display_text: display_text.into(),
        }
    }

    /// A free-text query term; label defaults to the value
    pub fn query(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(FieldName::Query, value.clone(), value)
    }

    /// A facet selection with a separate display label
    pub fn facet(value: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self::new(FieldName::Facet, value, display_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_parsing() {
        assert_eq!(FieldName::parse("q"), FieldName::Query);
        assert_eq!(FieldName::parse("qf"), FieldName::Facet);
        assert_eq!(
            FieldName::parse("page"),
            FieldName::Other("page".to_string())
        );
    }

    #[test]
    fn test_field_name_round_trip() {
        for name in ["q", "qf", "rows"] {
            assert_eq!(FieldName::parse(name).as_str(), name);
        }
    }

    #[test]
    fn test_query_field_constructors() {
        let q = QueryField::query("amsterdam");
        assert_eq!(q.name, FieldName::Query);
        assert_eq!(q.display_text, "amsterdam");

        let f = QueryField::facet("municipality:Amsterdam", "Amsterdam");
        assert_eq!(f.name, FieldName::Facet);
        assert_eq!(f.value, "municipality:Amsterdam");
        assert_eq!(f.display_text, "Amsterdam");
    }
}
