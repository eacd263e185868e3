//! Prelude module for common searchlet types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use searchlet::prelude::*;`

pub use crate::core::{
    config::{SearchProfile, SearchViewOptions},
    geo::{LatLng, LatLngBounds, Point},
    viewport::Viewport,
};

pub use crate::cluster::factor::{factor_for_span, ClusterBucket, MIN_FACTOR};

pub use crate::data::geojson::{FeatureCollection, GeoFeature};

pub use crate::query::{
    field::{FieldName, QueryField},
    state::QueryState,
    tags::{Tag, TagStyle},
};

pub use crate::facets::{
    links::normalize_facet_href,
    sort::{sort_entries, FacetEntry, FacetSort},
};

pub use crate::map::{
    layer::{GeoLayer, LayerSlot, TileLayerConfig},
    marker::{ClusterMarker, Marker},
    view::MapView,
};

pub use crate::view::{
    foldout::FoldoutConfig,
    image_fit::{fit_rect, FitMode, HorizontalAlign, Rect, Size, VerticalAlign},
    panel::SidePanel,
    tabs::{TabState, ViewTab},
};

pub use crate::backend::{
    client::SearchClient,
    fetch::{spawn_fetch, FetchJob, FetchOutcome, GeoFetcher},
};

pub use crate::events::{EventManager, KeyCode, ViewEvent};

pub use crate::spatial::index::{SpatialIndex, SpatialItem};

pub use crate::runtime::{runtime, spawn, spawn_with_result, AsyncHandle, AsyncSpawner};

#[cfg(feature = "egui")]
pub use crate::ui::{
    panel::PanelUi,
    popup::{Popup, PopupManager, PopupStyle},
    tabs::TabsUi,
    tags::TagsUi,
};

pub use crate::{Error as SearchError, Result};

pub use std::{
    sync::Arc,
    time::{Duration, Instant},
};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet, FxHasher};

pub use futures::Future;
