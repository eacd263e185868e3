//! Selection of the server-side clustering factor from the viewport's
//! longitudinal span.
//!
//! The backend aggregates geo points before returning them; the factor
//! in `[0, 1]` controls how aggressively. A narrow viewport (zoomed in)
//! wants individual points, a wide one wants coarse clusters. The
//! mapping is a fixed breakpoint table with nearest-breakpoint
//! selection, no interpolation.

/// Factor meaning "no clustering, send individual points"
pub const MIN_FACTOR: f64 = 0.0;

/// Breakpoints of (longitudinal span in degrees, clustering factor)
pub const FACTOR_TABLE: [(f64, f64); 8] = [
    (0.2, MIN_FACTOR),
    (0.4, 0.55),
    (0.8, 0.64),
    (1.6, 0.67),
    (3.2, 0.70),
    (6.4, 0.73),
    (12.8, 0.80),
    (40.0, 1.0),
];

/// Returns the clustering factor for a viewport spanning `span_degrees`
/// of longitude.
///
/// Picks the table entry whose breakpoint is numerically closest to the
/// span. Exact tie-distances resolve to the earlier (smaller) breakpoint
/// because the scan only replaces the candidate on a strictly smaller
/// proximity. Total over all finite inputs: out-of-range spans clamp to
/// the nearest end of the table.
pub fn factor_for_span(span_degrees: f64) -> f64 {
    let mut distance = f64::INFINITY;
    let mut factor = MIN_FACTOR;

    for (breakpoint, candidate) in FACTOR_TABLE {
        let proximity = (breakpoint - span_degrees).abs();
        if proximity < distance {
            distance = proximity;
            factor = candidate;
        }
    }

    factor
}

/// Size bucket for an aggregated cluster marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterBucket {
    Small,
    Medium,
}

impl ClusterBucket {
    /// Buckets a cluster by its point count: strictly above 50 is medium.
    pub fn for_count(count: u64) -> Self {
        if count > 50 {
            Self::Medium
        } else {
            Self::Small
        }
    }

    /// CSS-style class name for the marker icon
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Small => "marker-cluster marker-cluster-small",
            Self::Medium => "marker-cluster marker-cluster-medium",
        }
    }

    /// Icon size in pixels
    pub fn icon_size(&self) -> (u32, u32) {
        (26, 26)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_breakpoint_selection() {
        // |0.5 - 0.4| = 0.1 beats |0.5 - 0.8| = 0.3
        assert_eq!(factor_for_span(0.5), 0.55);
        assert_eq!(factor_for_span(40.0), 1.0);
        assert_eq!(factor_for_span(0.2), MIN_FACTOR);
    }

    #[test]
    fn test_tie_resolves_to_earlier_entry() {
        // 0.3 is equidistant from 0.2 and 0.4
        assert_eq!(factor_for_span(0.3), MIN_FACTOR);
        // 0.6 is equidistant from 0.4 and 0.8
        assert_eq!(factor_for_span(0.6), 0.55);
    }

    #[test]
    fn test_total_over_extreme_inputs() {
        assert_eq!(factor_for_span(0.0), MIN_FACTOR);
        assert_eq!(factor_for_span(-5.0), MIN_FACTOR);
        assert_eq!(factor_for_span(1e9), 1.0);
    }

    #[test]
    fn test_every_entry_is_reachable() {
        for (breakpoint, factor) in FACTOR_TABLE {
            assert_eq!(factor_for_span(breakpoint), factor);
        }
    }

    #[test]
    fn test_bucket_boundary() {
        assert_eq!(ClusterBucket::for_count(50), ClusterBucket::Small);
        assert_eq!(ClusterBucket::for_count(51), ClusterBucket::Medium);
        assert_eq!(ClusterBucket::for_count(1), ClusterBucket::Small);
    }

    #[test]
    fn test_bucket_icon() {
        assert_eq!(
            ClusterBucket::Medium.icon_class(),
            "marker-cluster marker-cluster-medium"
        );
        assert_eq!(ClusterBucket::Small.icon_size(), (26, 26));
    }
}
