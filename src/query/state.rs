//! The set of hidden query fields and its mirror, the tag strip.
//!
//! Mutations that change what the form would submit request exactly one
//! resubmission; the event loop consumes it with [`QueryState::take_submission`].

use crate::query::field::QueryField;
use crate::query::tags::Tag;

/// Ordered hidden query fields plus the derived tag list
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    fields: Vec<QueryField>,
    tags: Vec<Tag>,
    submission_pending: bool,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds state from the fields found in the form
    pub fn from_fields(fields: Vec<QueryField>) -> Self {
        let mut state = Self {
            fields,
            tags: Vec::new(),
            submission_pending: false,
        };
        state.rebuild_tags();
        state
    }

    /// Appends a field and refreshes the tag strip. Does not resubmit:
    /// new fields arrive via a form submission the server already saw.
    pub fn add_field(&mut self, field: QueryField) {
        self.fields.push(field);
        self.rebuild_tags();
    }

    /// Removes exactly one field whose value matches (first match wins)
    /// and requests one resubmission. Returns whether a field was removed.
    pub fn remove_by_value(&mut self, value: &str) -> bool {
        let position = self.fields.iter().position(|f| f.value == value);
        match position {
            Some(index) => {
                self.fields.remove(index);
                self.rebuild_tags();
                self.submission_pending = true;
                true
            }
            None => false,
        }
    }

    /// Removes every field and requests one resubmission
    pub fn clear_all(&mut self) {
        self.fields.clear();
        self.rebuild_tags();
        self.submission_pending = true;
    }

    /// Consumes the pending resubmission request, if any
    pub fn take_submission(&mut self) -> bool {
        std::mem::take(&mut self.submission_pending)
    }

    pub fn fields(&self) -> &[QueryField] {
        &self.fields
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// URL-encodes the fields in order as `name=value&name=value...`
    /// for the geo fetch.
    pub fn query_string(&self) -> String {
        let mut out = String::new();
        for field in &self.fields {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(&encode_component(field.name.as_str()));
            out.push('=');
            out.push_str(&encode_component(&field.value));
        }
        out
    }

    fn rebuild_tags(&mut self) {
        self.tags = self.fields.iter().map(Tag::from_field).collect();
    }
}

/// Percent-encodes everything outside the URL-unreserved set.
fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::field::FieldName;
    use crate::query::tags::TagStyle;

    fn sample_state() -> QueryState {
        QueryState::from_fields(vec![
            QueryField::query("windmill"),
            QueryField::facet("municipality:Amsterdam", "Amsterdam"),
            QueryField::facet("century:17", "17th century"),
        ])
    }

    #[test]
    fn test_tags_mirror_fields() {
        let state = sample_state();
        assert_eq!(state.tags().len(), 3);
        assert_eq!(state.tags()[0].style, TagStyle::Query);
        assert_eq!(state.tags()[1].label, "Amsterdam");
    }

    #[test]
    fn test_remove_takes_exactly_one_field() {
        let mut state = QueryState::from_fields(vec![
            QueryField::query("mill"),
            QueryField::facet("mill", "mill facet"),
        ]);

        assert!(state.remove_by_value("mill"));
        // Only the first match goes; the facet with the same value stays.
        assert_eq!(state.fields().len(), 1);
        assert_eq!(state.fields()[0].name, FieldName::Facet);

        // Exactly one submission for the whole mutation.
        assert!(state.take_submission());
        assert!(!state.take_submission());
    }

    #[test]
    fn test_remove_missing_value_is_a_no_op() {
        let mut state = sample_state();
        assert!(!state.remove_by_value("nonexistent"));
        assert_eq!(state.fields().len(), 3);
        assert!(!state.take_submission());
    }

    #[test]
    fn test_clear_all() {
        let mut state = sample_state();
        state.clear_all();
        assert!(state.is_empty());
        assert!(state.tags().is_empty());
        assert!(state.take_submission());
        assert!(!state.take_submission());
    }

    #[test]
    fn test_query_string_encoding() {
        let state = QueryState::from_fields(vec![
            QueryField::query("wind mill"),
            QueryField::facet("municipality:Amsterdam", "Amsterdam"),
        ]);
        assert_eq!(
            state.query_string(),
            "q=wind%20mill&qf=municipality%3AAmsterdam"
        );
    }

    #[test]
    fn test_empty_query_string() {
        assert_eq!(QueryState::new().query_string(), "");
    }
}
