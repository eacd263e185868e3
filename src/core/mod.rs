pub mod config;
pub mod geo;
pub mod viewport;

// Re-export the essential types
pub use config::{SearchProfile, SearchViewOptions};
pub use geo::{LatLng, LatLngBounds, Point};
pub use viewport::Viewport;
