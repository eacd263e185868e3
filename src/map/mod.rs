pub mod layer;
pub mod marker;
pub mod view;

pub use layer::{GeoLayer, LayerSlot, TileLayerConfig};
pub use marker::{ClusterMarker, Marker};
pub use view::MapView;
