pub mod geojson;

pub use geojson::{Feature, FeatureCollection, FeatureProperties, GeoFeature, Geometry};
