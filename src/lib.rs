//! # Searchlet
//!
//! A headless engine for a faceted search-results screen.
//!
//! The crate models the state and behavior of the three result views
//! (list, grid, geo), the tag strip mirroring hidden query fields, the
//! facet helpers, and a map view that re-queries a GeoJSON endpoint with
//! a span-derived clustering factor whenever the viewport settles. An
//! optional `egui` feature renders the widgets natively.

pub mod backend;
pub mod cluster;
pub mod core;
pub mod data;
pub mod events;
pub mod facets;
pub mod map;
pub mod prelude;
pub mod query;
pub mod runtime;
pub mod spatial;
#[cfg(feature = "egui")]
pub mod ui;
pub mod view;

// Re-export public API
pub use core::{
    config::{SearchProfile, SearchViewOptions},
    geo::{LatLng, LatLngBounds, Point},
    viewport::Viewport,
};

pub use cluster::factor::{factor_for_span, ClusterBucket, MIN_FACTOR};

pub use data::geojson::{FeatureCollection, GeoFeature};

pub use query::{
    field::{FieldName, QueryField},
    state::QueryState,
    tags::{Tag, TagStyle},
};

pub use map::{
    layer::{GeoLayer, LayerSlot, TileLayerConfig},
    marker::{ClusterMarker, Marker},
    view::MapView,
};

pub use view::{
    foldout::FoldoutConfig,
    panel::SidePanel,
    tabs::{TabState, ViewTab},
};

pub use backend::{
    client::SearchClient,
    fetch::{FetchJob, FetchOutcome, GeoFetcher},
};

pub use events::{EventManager, ViewEvent};

pub use spatial::index::SpatialIndex;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = SearchError;
