//! Marker layers and the slot that owns the current one.

use crate::core::geo::{LatLng, LatLngBounds};
use crate::map::marker::{ClusterMarker, Marker};

/// Base-layer tile configuration handed to whatever renders tiles
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayerConfig {
    pub url_template: String,
    pub max_zoom: f64,
}

impl TileLayerConfig {
    pub fn new(url_template: impl Into<String>, max_zoom: f64) -> Self {
        Self {
            url_template: url_template.into(),
            max_zoom,
        }
    }

    pub fn from_options(options: &crate::core::config::SearchViewOptions) -> Self {
        Self::new(options.tile_template.clone(), options.tile_max_zoom)
    }
}

/// The marker layer produced by one refresh
#[derive(Debug, Clone, PartialEq)]
pub enum GeoLayer {
    /// One marker per individual point (factor at table minimum)
    Markers(Vec<Marker>),
    /// Aggregated cluster markers
    Clusters(Vec<ClusterMarker>),
}

impl GeoLayer {
    pub fn len(&self) -> usize {
        match self {
            Self::Markers(markers) => markers.len(),
            Self::Clusters(clusters) => clusters.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Positions of everything on the layer
    pub fn positions(&self) -> Vec<LatLng> {
        match self {
            Self::Markers(markers) => markers.iter().map(|m| m.position).collect(),
            Self::Clusters(clusters) => clusters.iter().map(|c| c.position).collect(),
        }
    }

    /// Bounds covering the whole layer
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for position in self.positions() {
            if let Some(ref mut b) = bounds {
                b.extend(&position);
            } else {
                bounds = Some(LatLngBounds::new(position, position));
            }
        }
        bounds
    }
}

/// Owns the currently rendered marker layer.
///
/// Installing a new layer takes the previous one out by value first, so
/// the removal and the addition cannot interleave and a remove of a
/// never-added layer is unrepresentable.
#[derive(Debug, Default)]
pub struct LayerSlot {
    current: Option<GeoLayer>,
}

impl LayerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current layer, returning the displaced one
    pub fn install(&mut self, layer: GeoLayer) -> Option<GeoLayer> {
        self.current.replace(layer)
    }

    /// Removes the current layer, if any
    pub fn clear(&mut self) -> Option<GeoLayer> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&GeoLayer> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
