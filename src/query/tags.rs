//! Visual tags derived from the hidden query fields.

use crate::query::field::{FieldName, QueryField};

/// Visual style of a tag, chosen solely by the field name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    /// "q" fields
    Query,
    /// "qf" fields
    Facet,
    /// Everything else
    Default,
}

impl TagStyle {
    pub fn for_field(name: &FieldName) -> Self {
        match name {
            FieldName::Query => Self::Query,
            FieldName::Facet => Self::Facet,
            FieldName::Other(_) => Self::Default,
        }
    }

    /// CSS-style class string for HTML front ends
    pub fn class_str(&self) -> &'static str {
        match self {
            Self::Query => "label label-query",
            Self::Facet => "label label-facet",
            Self::Default => "label label-default",
        }
    }
}

/// One removable tag in the tag strip
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    /// What the tag displays
    pub label: String,
    /// The hidden-field value the tag stands for
    pub value: String,
    pub style: TagStyle,
}

impl Tag {
    pub fn from_field(field: &QueryField) -> Self {
        Self {
            label: field.display_text.clone(),
            value: field.value.clone(),
            style: TagStyle::for_field(&field.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_follows_field_name() {
        assert_eq!(TagStyle::for_field(&FieldName::Query), TagStyle::Query);
        assert_eq!(TagStyle::for_field(&FieldName::Facet), TagStyle::Facet);
        assert_eq!(
            TagStyle::for_field(&FieldName::Other("rows".into())),
            TagStyle::Default
        );
    }

    #[test]
    fn test_tag_from_field() {
        let field = QueryField::facet("municipality:Amsterdam", "Amsterdam");
        let tag = Tag::from_field(&field);
        assert_eq!(tag.label, "Amsterdam");
        assert_eq!(tag.value, "municipality:Amsterdam");
        assert_eq!(tag.style, TagStyle::Facet);
    }

    #[test]
    fn test_class_str() {
        assert_eq!(TagStyle::Query.class_str(), "label label-query");
        assert_eq!(TagStyle::Default.class_str(), "label label-default");
    }
}
