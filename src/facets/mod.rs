pub mod links;
pub mod sort;

pub use links::normalize_facet_href;
pub use sort::{sort_entries, FacetEntry, FacetSort};
