pub mod factor;

pub use factor::{factor_for_span, ClusterBucket, FACTOR_TABLE, MIN_FACTOR};
