pub mod field;
pub mod state;
pub mod tags;

pub use field::{FieldName, QueryField};
pub use state::QueryState;
pub use tags::{Tag, TagStyle};
