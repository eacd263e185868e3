//! Re-sorting of the facet panel entries.

/// One entry in a facet list
#[derive(Debug, Clone, PartialEq)]
pub struct FacetEntry {
    pub label: String,
    pub count: u64,
    /// Identifier of the facet container the entry belongs to
    pub id: String,
}

impl FacetEntry {
    pub fn new(label: impl Into<String>, count: u64, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            count,
            id: id.into(),
        }
    }
}

/// Sort order selected by the panel's sort toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetSort {
    /// Case-insensitive alphabetical by label
    ByLabel,
    /// Descending by count, label as tiebreak
    ByCount,
}

/// Sorts entries in place. Stable with respect to equal keys.
pub fn sort_entries(entries: &mut [FacetEntry], order: FacetSort) {
    match order {
        FacetSort::ByLabel => {
            entries.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
        }
        FacetSort::ByCount => {
            entries.sort_by(|a, b| {
                b.count
                    .cmp(&a.count)
                    .then_with(|| a.label.to_lowercase().cmp(&b.label.to_lowercase()))
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<FacetEntry> {
        vec![
            FacetEntry::new("Rotterdam", 12, "municipality"),
            FacetEntry::new("amsterdam", 40, "municipality"),
            FacetEntry::new("Utrecht", 12, "municipality"),
        ]
    }

    #[test]
    fn test_sort_by_label_is_case_insensitive() {
        let mut list = entries();
        sort_entries(&mut list, FacetSort::ByLabel);
        let labels: Vec<&str> = list.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["amsterdam", "Rotterdam", "Utrecht"]);
    }

    #[test]
    fn test_sort_by_count_descending_with_label_tiebreak() {
        let mut list = entries();
        sort_entries(&mut list, FacetSort::ByCount);
        let labels: Vec<&str> = list.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["amsterdam", "Rotterdam", "Utrecht"]);
        assert_eq!(list[0].count, 40);
    }
}
