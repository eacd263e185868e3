//! Configuration for the search view: endpoints, tile defaults, and
//! behavior toggles.
//!
//! A profile preset resolves to concrete options; individual fields can
//! be adjusted with the builder-style `with_*` methods.

use crate::core::geo::LatLng;

/// Behavior presets for the search view
#[derive(Debug, Clone, PartialEq)]
pub enum SearchProfile {
    /// Production defaults
    Balanced,
    /// Fewer refreshes, no popup detail fetches
    LowBandwidth,
    /// Log every fetch and refresh decision
    Verbose,
    Custom(SearchViewOptions),
}

impl SearchProfile {
    pub fn resolve(&self) -> SearchViewOptions {
        match self {
            Self::Balanced => SearchViewOptions::default(),
            Self::LowBandwidth => SearchViewOptions {
                min_refresh_interval_ms: 1500,
                enable_popups: false,
                ..Default::default()
            },
            Self::Verbose => SearchViewOptions {
                log_fetches: true,
                ..Default::default()
            },
            Self::Custom(options) => options.clone(),
        }
    }
}

impl Default for SearchProfile {
    fn default() -> Self {
        Self::Balanced
    }
}

/// Options controlling endpoints, map defaults, and refresh behavior
#[derive(Debug, Clone, PartialEq)]
pub struct SearchViewOptions {
    /// Base path of the search endpoint
    pub search_endpoint: String,
    /// Base path of the detail-resolution endpoint
    pub resolve_endpoint: String,
    /// Optional language segment for the foldout endpoint
    pub language: Option<String>,
    /// Number of columns in the foldout grid
    pub foldout_cols: u32,
    /// Tile URL template handed to whatever renders the base layer
    pub tile_template: String,
    /// Maximum tile zoom level
    pub tile_max_zoom: f64,
    /// Initial map center
    pub default_center: LatLng,
    /// Initial map zoom
    pub default_zoom: f64,
    /// Whether markers carry popups with resolve links
    pub enable_popups: bool,
    /// Whether the map refreshes on every settled viewport
    pub refresh_on_settle: bool,
    /// Minimum time between two refreshes
    pub min_refresh_interval_ms: u64,
    /// Log each issued fetch at debug level
    pub log_fetches: bool,
}

impl Default for SearchViewOptions {
    fn default() -> Self {
        Self {
            search_endpoint: "/search/".to_string(),
            resolve_endpoint: "/resolve".to_string(),
            language: None,
            foldout_cols: 4,
            tile_template: "http://{s}.tile.osm.org/{z}/{x}/{y}.png".to_string(),
            tile_max_zoom: 22.0,
            default_center: LatLng::new(51.55, 0.0),
            default_zoom: 5.0,
            enable_popups: true,
            refresh_on_settle: true,
            min_refresh_interval_ms: 0,
            log_fetches: false,
        }
    }
}

impl SearchViewOptions {
    pub fn with_search_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.search_endpoint = endpoint.into();
        self
    }

    pub fn with_resolve_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.resolve_endpoint = endpoint.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_foldout_cols(mut self, cols: u32) -> Self {
        self.foldout_cols = cols;
        self
    }

    pub fn with_tile_template(mut self, template: impl Into<String>, max_zoom: f64) -> Self {
        self.tile_template = template.into();
        self.tile_max_zoom = max_zoom;
        self
    }

    pub fn with_default_view(mut self, center: LatLng, zoom: f64) -> Self {
        self.default_center = center;
        self.default_zoom = zoom;
        self
    }
}
