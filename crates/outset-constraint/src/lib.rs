//! Size-condition evaluation.
//!
//! Applies a condition's inclusive bounds to a computed dimension. The
//! maximum is applied before the minimum, so a contradictory pair
//! (`min > max`) deterministically resolves to the minimum rather than
//! being an error.

use outset_core::{Condition, Dimension, SizeBounds};

/// Clamp a computed dimension against a bound pair.
///
/// Max first, then min: with `min > max` the minimum wins.
pub fn clamp(value: f64, bounds: SizeBounds) -> f64 {
    let mut value = value;
    if let Some(max) = bounds.max {
        if value > max {
            value = max;
        }
    }
    if let Some(min) = bounds.min {
        if value < min {
            value = min;
        }
    }
    value
}

/// Clamp a computed width or height against the matching pair of a
/// condition's bounds.
pub fn clamp_dimension(value: f64, condition: &Condition, dimension: Dimension) -> f64 {
    clamp(value, condition.bounds(dimension))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: Option<f64>, max: Option<f64>) -> SizeBounds {
        SizeBounds { min, max }
    }

    #[test]
    fn test_unbounded_passes_through() {
        assert_eq!(clamp(120.0, bounds(None, None)), 120.0);
    }

    #[test]
    fn test_clamps_to_max() {
        assert_eq!(clamp(120.0, bounds(None, Some(100.0))), 100.0);
        assert_eq!(clamp(80.0, bounds(None, Some(100.0))), 80.0);
    }

    #[test]
    fn test_clamps_to_min() {
        assert_eq!(clamp(30.0, bounds(Some(50.0), None)), 50.0);
        assert_eq!(clamp(60.0, bounds(Some(50.0), None)), 60.0);
    }

    #[test]
    fn test_min_wins_over_contradictory_max() {
        assert_eq!(clamp(100.0, bounds(Some(50.0), Some(30.0))), 50.0);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(clamp(100.0, bounds(Some(100.0), Some(100.0))), 100.0);
    }

    #[test]
    fn test_dimension_selection() {
        let mut condition = Condition::new("w<=100;h>=50");
        condition.max_width = Some(100.0);
        condition.min_height = Some(50.0);

        assert_eq!(clamp_dimension(120.0, &condition, Dimension::Width), 100.0);
        assert_eq!(clamp_dimension(120.0, &condition, Dimension::Height), 120.0);
        assert_eq!(clamp_dimension(20.0, &condition, Dimension::Height), 50.0);
    }
}
