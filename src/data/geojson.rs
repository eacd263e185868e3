//! The GeoJSON payload returned by the search endpoint.
//!
//! The endpoint only ever returns point features, each carrying a
//! document type and, when clustered, an aggregate count. Anything else
//! in the feature stream is skipped rather than treated as an error.

use crate::core::geo::{LatLng, LatLngBounds};
use serde::Deserialize;

/// Geometry of a search result feature. Only points are rendered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        /// GeoJSON order: [longitude, latitude]
        coordinates: [f64; 2],
    },
    #[serde(other)]
    Other,
}

/// Properties attached to a search result feature
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// One raw feature as returned by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub id: Option<String>,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: FeatureProperties,
}

/// The feature collection returned for `format=geojson`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A typed point feature extracted from the raw collection
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    pub id: Option<String>,
    pub doc_type: Option<String>,
    pub count: Option<u64>,
    pub point: LatLng,
}

impl FeatureCollection {
    /// Parses a collection from a raw JSON body
    pub fn from_str(body: &str) -> crate::Result<Self> {
        let collection: FeatureCollection = serde_json::from_str(body)
            .map_err(|e| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e)))?;
        Ok(collection)
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Extracts the point features, skipping non-point geometries
    pub fn geo_features(&self) -> Vec<GeoFeature> {
        self.features
            .iter()
            .filter_map(|feature| match &feature.geometry {
                Geometry::Point { coordinates } => Some(GeoFeature {
                    id: feature.id.clone(),
                    doc_type: feature.properties.doc_type.clone(),
                    count: feature.properties.count,
                    point: LatLng::new(coordinates[1], coordinates[0]),
                }),
                Geometry::Other => {
                    log::debug!("skipping non-point feature {:?}", feature.id);
                    None
                }
            })
            .collect()
    }

    /// Bounds covering all point features, or None if there are none
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for feature in self.geo_features() {
            if let Some(ref mut b) = bounds {
                b.extend(&feature.point);
            } else {
                bounds = Some(LatLngBounds::new(feature.point, feature.point));
            }
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": "dcn_archive_1234",
                "geometry": {"type": "Point", "coordinates": [4.89, 52.37]},
                "properties": {"doc_type": "record", "count": 1}
            },
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [0.0, 51.55]},
                "properties": {"doc_type": "record", "count": 73}
            }
        ]
    }"#;

    #[test]
    fn test_parse_feature_collection() {
        let collection = FeatureCollection::from_str(BODY).unwrap();
        assert_eq!(collection.len(), 2);

        let features = collection.geo_features();
        assert_eq!(features[0].id.as_deref(), Some("dcn_archive_1234"));
        assert_eq!(features[0].doc_type.as_deref(), Some("record"));
        assert_eq!(features[1].count, Some(73));
        // GeoJSON coordinate order is [lng, lat]
        assert!((features[0].point.lat - 52.37).abs() < 1e-9);
        assert!((features[0].point.lng - 4.89).abs() < 1e-9);
    }

    #[test]
    fn test_empty_collection() {
        let collection =
            FeatureCollection::from_str(r#"{"type": "FeatureCollection", "features": []}"#)
                .unwrap();
        assert!(collection.is_empty());
        assert!(collection.bounds().is_none());
    }

    #[test]
    fn test_non_point_geometries_are_skipped() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "LineString", "coordinates": [[0,0],[1,1]]},
                    "properties": {}
                },
                {
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
                    "properties": {}
                }
            ]
        }"#;
        let collection = FeatureCollection::from_str(body).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.geo_features().len(), 1);
    }

    #[test]
    fn test_bounds_cover_all_points() {
        let collection = FeatureCollection::from_str(BODY).unwrap();
        let bounds = collection.bounds().unwrap();
        assert!(bounds.contains(&LatLng::new(52.37, 4.89)));
        assert!(bounds.contains(&LatLng::new(51.55, 0.0)));
    }

    #[test]
    fn test_invalid_body_is_a_parse_error() {
        let err = FeatureCollection::from_str("not json").unwrap_err();
        assert!(err.to_string().contains("Invalid GeoJSON"));
    }
}
