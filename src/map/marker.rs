//! Individual and aggregated markers on the geo view.

use crate::cluster::factor::ClusterBucket;
use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// One individual result point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: LatLng,
    pub doc_id: String,
    pub doc_type: String,
    /// Popup markup, when popups are enabled
    pub popup: Option<String>,
}

impl Marker {
    pub fn new(position: LatLng, doc_id: impl Into<String>, doc_type: impl Into<String>) -> Self {
        Self {
            position,
            doc_id: doc_id.into(),
            doc_type: doc_type.into(),
            popup: None,
        }
    }

    pub fn with_popup(mut self, popup: impl Into<String>) -> Self {
        self.popup = Some(popup.into());
        self
    }

    /// URL of the detail-resolution endpoint for this document
    pub fn resolve_url(&self, base: &str) -> String {
        format!("{}/{}/{}", base.trim_end_matches('/'), self.doc_type, self.doc_id)
    }

    /// Human-readable title for the popup: one leading `dcn_` prefix
    /// stripped, underscores replaced by spaces.
    pub fn display_title(&self) -> String {
        let stripped = self.doc_id.strip_prefix("dcn_").unwrap_or(&self.doc_id);
        stripped.replace('_', " ")
    }
}

/// One aggregated cluster of result points
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterMarker {
    pub position: LatLng,
    pub count: u64,
    pub bucket: ClusterBucket,
}

impl ClusterMarker {
    pub fn new(position: LatLng, count: u64) -> Self {
        Self {
            position,
            count,
            bucket: ClusterBucket::for_count(count),
        }
    }

    /// The text shown inside the marker icon
    pub fn label(&self) -> String {
        self.count.to_string()
    }
}
