//! Greedy diversity filter over ranked candidates.
//!
//! A candidate is kept when its Euclidean RGB distance to every color kept
//! so far is at least the current threshold. If a pass keeps fewer than
//! requested while more candidates than requested exist, the threshold is
//! relaxed by [`RELAXATION`] and the pass is rerun, at most
//! [`MAX_FILTER_PASSES`] times in total. The last pass wins even if short.

use tracing::debug;

use crate::histogram::QuantizedRgb;

/// Starting distance threshold.
pub const MIN_DISTANCE: f64 = 40.0;

/// Threshold multiplier between passes.
pub const RELAXATION: f64 = 0.8;

/// Upper bound on filter passes.
pub const MAX_FILTER_PASSES: usize = 10;

/// Euclidean distance between two quantized colors.
pub fn color_distance(a: &QuantizedRgb, b: &QuantizedRgb) -> f64 {
    let sq = |x: u16, y: u16| {
        let d = f64::from(x) - f64::from(y);
        d * d
    };
    (sq(a[0], b[0]) + sq(a[1], b[1]) + sq(a[2], b[2])).sqrt()
}

/// Picks up to `max` mutually distinct colors from `candidates`, in order.
pub fn filter_similar(candidates: &[QuantizedRgb], max: usize) -> Vec<QuantizedRgb> {
    let mut threshold = MIN_DISTANCE;
    let mut pass = 1;
    loop {
        let kept = single_pass(candidates, max, threshold);
        if kept.len() >= max || candidates.len() <= max || pass >= MAX_FILTER_PASSES {
            return kept;
        }
        debug!(kept = kept.len(), max, threshold, "relaxing diversity threshold");
        threshold *= RELAXATION;
        pass += 1;
    }
}

fn single_pass(candidates: &[QuantizedRgb], max: usize, threshold: f64) -> Vec<QuantizedRgb> {
    let mut kept: Vec<QuantizedRgb> = Vec::with_capacity(max);
    for c in candidates {
        if kept.len() >= max {
            break;
        }
        if kept.iter().all(|k| color_distance(c, k) >= threshold) {
            kept.push(*c);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(color_distance(&[0, 0, 0], &[0, 0, 0]), 0.0);
        assert_eq!(color_distance(&[0, 0, 0], &[30, 40, 0]), 50.0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let kept = filter_similar(&[[0, 0, 0], [40, 0, 0]], 2);
        assert_eq!(kept, [[0, 0, 0], [40, 0, 0]]);
    }

    #[test]
    fn test_relaxes_when_short() {
        let candidates = [
            [0, 0, 0],
            [16, 0, 0],
            [32, 0, 0],
            [48, 0, 0],
            [64, 0, 0],
            [80, 0, 0],
        ];
        // At 40 only 0 and 48 survive; at 32 the third slot opens up.
        let kept = filter_similar(&candidates, 3);
        assert_eq!(kept, [[0, 0, 0], [32, 0, 0], [64, 0, 0]]);
    }

    #[test]
    fn test_no_relaxation_without_surplus() {
        let candidates = [[0, 0, 0], [16, 0, 0], [48, 0, 0]];
        assert_eq!(filter_similar(&candidates, 3), [[0, 0, 0], [48, 0, 0]]);
    }

    #[test]
    fn test_bounded_passes() {
        // Identical colors never pass a positive threshold.
        let candidates = [[8, 8, 8]; 4];
        assert_eq!(filter_similar(&candidates, 2), [[8, 8, 8]]);
    }

    #[test]
    fn test_zero_requested() {
        assert!(filter_similar(&[[0, 0, 0]], 0).is_empty());
    }
}
