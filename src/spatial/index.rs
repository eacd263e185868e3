use crate::core::geo::{LatLng, Point};

use rstar::{PointDistance, RTree, RTreeObject, AABB};

/// A point item that can be indexed via an R-tree.
///
/// Positions are stored as (lng, lat) degree pairs, matching the
/// coordinate order of the GeoJSON payload.
#[derive(Debug, Clone)]
pub struct SpatialItem<T> {
    pub id: String,
    pub position: Point,
    pub data: T,
}

impl<T> SpatialItem<T> {
    pub fn new(id: String, position: Point, data: T) -> Self {
        Self { id, position, data }
    }

    pub fn from_lat_lng(id: String, lat_lng: LatLng, data: T) -> Self {
        Self::new(id, Point::new(lat_lng.lng, lat_lng.lat), data)
    }
}

impl<T> PartialEq for SpatialItem<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for SpatialItem<T> {}

// --- rstar integration -------------------------------------------------------------------------

impl<T> RTreeObject for SpatialItem<T> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.position.x, self.position.y])
    }
}

impl<T> PointDistance for SpatialItem<T> {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.position.x - point[0];
        let dy = self.position.y - point[1];
        dx * dx + dy * dy
    }
}

/// R-tree based index over marker positions, rebuilt on every refresh,
/// so a click can find the marker nearest the cursor.
pub struct SpatialIndex<T> {
    rtree: RTree<SpatialItem<T>>,
}

impl<T> SpatialIndex<T> {
    pub fn new() -> Self {
        Self {
            rtree: RTree::new(),
        }
    }

    pub fn insert(&mut self, item: SpatialItem<T>) {
        self.rtree.insert(item);
    }

    /// The item closest to `point`, if any lies within `max_distance`
    pub fn nearest(&self, point: &Point, max_distance: f64) -> Option<&SpatialItem<T>> {
        let at = [point.x, point.y];
        self.rtree
            .nearest_neighbor(&at)
            .filter(|item| item.distance_2(&at) <= max_distance * max_distance)
    }

    /// All items within `radius` of `point`
    pub fn within_radius(&self, point: &Point, radius: f64) -> Vec<&SpatialItem<T>> {
        self.rtree
            .locate_within_distance([point.x, point.y], radius * radius)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn clear(&mut self) {
        self.rtree = RTree::new();
    }
}

impl<T> Default for SpatialIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> SpatialIndex<&'static str> {
        let mut index = SpatialIndex::new();
        index.insert(SpatialItem::from_lat_lng(
            "amsterdam".to_string(),
            LatLng::new(52.37, 4.89),
            "amsterdam",
        ));
        index.insert(SpatialItem::from_lat_lng(
            "london".to_string(),
            LatLng::new(51.51, -0.13),
            "london",
        ));
        index
    }

    #[test]
    fn test_nearest_within_distance() {
        let index = index();
        let near_amsterdam = Point::new(4.9, 52.4);

        let hit = index.nearest(&near_amsterdam, 0.5).unwrap();
        assert_eq!(hit.id, "amsterdam");

        // Too far away for the allowed distance.
        assert!(index.nearest(&near_amsterdam, 0.001).is_none());
    }

    #[test]
    fn test_within_radius() {
        let index = index();
        let hits = index.within_radius(&Point::new(0.0, 51.5), 1.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].data, "london");
    }

    #[test]
    fn test_clear() {
        let mut index = index();
        assert_eq!(index.len(), 2);
        index.clear();
        assert!(index.is_empty());
    }
}
