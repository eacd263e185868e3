//! The map view and its refresh protocol.
//!
//! On every settled viewport the view derives a clustering factor from
//! the longitudinal span, issues a tokenized fetch, and later applies
//! the outcome if its token is still the latest. Empty result sets mark
//! the geo/grid tabs hidden for the rest of the session.

use crate::backend::fetch::{FetchJob, FetchOutcome};
use crate::cluster::factor::{factor_for_span, MIN_FACTOR};
use crate::core::config::SearchViewOptions;
use crate::core::geo::{LatLng, Point};
use crate::core::viewport::Viewport;
use crate::data::geojson::FeatureCollection;
use crate::events::{EventManager, ViewEvent};
use crate::map::layer::{GeoLayer, LayerSlot, TileLayerConfig};
use crate::map::marker::{ClusterMarker, Marker};
use crate::spatial::index::{SpatialIndex, SpatialItem};
use crate::view::tabs::TabState;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::time::Instant;

/// Owns the viewport, the marker layer slot, and the request-token
/// bookkeeping for the geo view.
pub struct MapView {
    viewport: Viewport,
    options: SearchViewOptions,
    tile: TileLayerConfig,
    slot: LayerSlot,
    index: SpatialIndex<Marker>,
    events: EventManager,
    outcome_tx: Sender<FetchOutcome>,
    outcome_rx: Receiver<FetchOutcome>,
    /// Token of the most recently issued fetch; only outcomes carrying
    /// it are applied
    current_token: u64,
    /// Sticky: set once an empty result set arrives, never cleared
    exhausted: bool,
    last_refresh: Option<Instant>,
}

impl MapView {
    pub fn new(options: SearchViewOptions) -> Self {
        let viewport = Viewport::new(
            options.default_center,
            options.default_zoom,
            Point::new(800.0, 600.0),
        );
        let tile = TileLayerConfig::from_options(&options);
        let (outcome_tx, outcome_rx) = unbounded();

        Self {
            viewport,
            options,
            tile,
            slot: LayerSlot::new(),
            index: SpatialIndex::new(),
            events: EventManager::new(),
            outcome_tx,
            outcome_rx,
            current_token: 0,
            exhausted: false,
            last_refresh: None,
        }
    }

    /// A view with defaults suitable for tests (no throttling)
    pub fn for_testing() -> Self {
        Self::new(SearchViewOptions::default())
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn tile_config(&self) -> &TileLayerConfig {
        &self.tile
    }

    pub fn current_layer(&self) -> Option<&GeoLayer> {
        self.slot.current()
    }

    /// Whether the session has seen an empty geo result set
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn events_mut(&mut self) -> &mut EventManager {
        &mut self.events
    }

    /// Sender handed to fetch workers for delivering outcomes
    pub fn outcome_sender(&self) -> Sender<FetchOutcome> {
        self.outcome_tx.clone()
    }

    /// Resizes the viewport after the map container changed
    pub fn invalidate_size(&mut self, size: Point) {
        self.viewport.invalidate_size(size);
    }

    /// The initial geo probe: one query with factor 1 to learn whether
    /// the current search has any geo results at all. Issued before the
    /// map is ever shown.
    pub fn probe_job(&mut self, query_string: &str) -> Option<FetchJob> {
        if self.exhausted {
            return None;
        }
        Some(self.issue(1.0, query_string))
    }

    /// Called when the viewport settles (pan/zoom end or first map
    /// activation). Computes the factor from the current span and
    /// returns the fetch to run, or None when no refresh is due.
    pub fn view_settled(&mut self, query_string: &str) -> Option<FetchJob> {
        if self.exhausted || !self.options.refresh_on_settle {
            return None;
        }
        if let Some(last) = self.last_refresh {
            let elapsed = last.elapsed().as_millis() as u64;
            if elapsed < self.options.min_refresh_interval_ms {
                return None;
            }
        }

        let bounds = self.viewport.bounds();
        let factor = factor_for_span(bounds.lng_span());
        self.events.emit(ViewEvent::ViewSettled { bounds });
        Some(self.issue(factor, query_string))
    }

    fn issue(&mut self, factor: f64, query_string: &str) -> FetchJob {
        self.current_token += 1;
        self.last_refresh = Some(Instant::now());
        if self.options.log_fetches {
            log::debug!(
                "issuing geo fetch token={} factor={}",
                self.current_token,
                factor
            );
        }
        FetchJob {
            token: self.current_token,
            factor,
            query: query_string.to_string(),
        }
    }

    /// Drains completed fetches and applies the ones that are still
    /// current. Called once per frame from the event loop.
    pub fn poll(&mut self, tabs: &mut TabState) -> Vec<ViewEvent> {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome, tabs);
        }
        self.events.process_events()
    }

    /// Applies a single fetch outcome. Stale tokens are dropped, failed
    /// fetches leave the current layer untouched.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome, tabs: &mut TabState) {
        if outcome.token != self.current_token {
            log::debug!(
                "dropping stale geo outcome token={} current={}",
                outcome.token,
                self.current_token
            );
            return;
        }

        let collection = match outcome.result {
            Ok(collection) => collection,
            Err(e) => {
                // Keep the current layer; the next settle retries.
                log::warn!("geo fetch failed: {}", e);
                return;
            }
        };

        if collection.is_empty() {
            self.exhausted = true;
            self.slot.clear();
            self.index.clear();
            tabs.hide_geo_views();
            self.events.emit(ViewEvent::GeoExhausted);
            return;
        }

        self.render_features(&collection, outcome.factor, outcome.token);
    }

    fn render_features(&mut self, collection: &FeatureCollection, factor: f64, token: u64) {
        let features = collection.geo_features();

        // A single feature centers the map on it, keeping the zoom.
        if let [only] = features.as_slice() {
            let zoom = self.viewport.zoom;
            self.viewport.set_view(only.point, zoom);
        }

        let layer = if factor == MIN_FACTOR {
            let markers: Vec<Marker> = features
                .iter()
                .map(|feature| self.build_marker(feature))
                .collect();
            self.rebuild_index(&markers);
            GeoLayer::Markers(markers)
        } else {
            self.index.clear();
            let clusters = features
                .iter()
                .map(|feature| {
                    ClusterMarker::new(feature.point, feature.count.unwrap_or(1))
                })
                .collect();
            GeoLayer::Clusters(clusters)
        };

        let markers = layer.len();
        // The displaced layer is dropped before anything can observe
        // both; stale and fresh markers are never visible together.
        self.slot.install(layer);
        self.events.emit(ViewEvent::GeoRefreshed { token, markers });
    }

    fn build_marker(&self, feature: &crate::data::geojson::GeoFeature) -> Marker {
        let doc_id = feature.id.clone().unwrap_or_default();
        let doc_type = feature.doc_type.clone().unwrap_or_default();
        let mut marker = Marker::new(feature.point, doc_id, doc_type);
        if self.options.enable_popups {
            let url = marker.resolve_url(&self.options.resolve_endpoint);
            let popup = format!("<a href=\"{}\">{}</a>", url, marker.display_title());
            marker = marker.with_popup(popup);
        }
        marker
    }

    fn rebuild_index(&mut self, markers: &[Marker]) {
        self.index.clear();
        for (i, marker) in markers.iter().enumerate() {
            let item = SpatialItem::from_lat_lng(
                format!("marker-{}", i),
                marker.position,
                marker.clone(),
            );
            self.index.insert(item);
        }
    }

    /// Finds the individual marker closest to a screen position, within
    /// `radius_px` pixels. Cluster layers have no hit targets.
    pub fn hit_test(&self, pixel: Point, radius_px: f64) -> Option<&Marker> {
        let at = self.viewport.pixel_to_lat_lng(&pixel);
        let radius_degrees = self.viewport.degrees_per_pixel() * radius_px;
        self.index
            .nearest(&Point::new(at.lng, at.lat), radius_degrees)
            .map(|item| &item.data)
    }
}
