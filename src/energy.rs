//! Energy model: total color distance and the O(1) swap delta.
//!
//! The energy of a configuration is the sum over positions of the distance
//! between the target color and the working color. A run computes it in
//! full exactly once; afterwards it is updated with [`swap_delta`] only.

use crate::color::Color;

/// Sum of `distance(target[i], working[i])` over all positions.
///
/// Extra elements of the longer slice are ignored; callers validate the
/// lengths beforehand.
pub fn total_distance(target: &[Color], working: &[Color]) -> f64 {
    target
        .iter()
        .zip(working)
        .map(|(t, w)| t.distance(*w))
        .sum()
}

/// Change in total distance if `working[p1]` and `working[p2]` were exchanged.
///
/// Negative means the swap improves the match. Returns exactly `0.0` when
/// `p1 == p2`.
///
/// # Panics
///
/// Panics if either index is out of bounds for either slice.
#[inline]
pub fn swap_delta(target: &[Color], working: &[Color], p1: usize, p2: usize) -> f64 {
    if p1 == p2 {
        return 0.0;
    }
    let (t1, t2) = (target[p1], target[p2]);
    let (w1, w2) = (working[p1], working[p2]);

    let before = t1.distance(w1) + t2.distance(w2);
    let after = t1.distance(w2) + t2.distance(w1);
    after - before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> (Vec<Color>, Vec<Color>) {
        let target = vec![Color::BLACK, Color::WHITE, Color::BLACK, Color::WHITE];
        let working = vec![Color::WHITE, Color::BLACK, Color::WHITE, Color::BLACK];
        (target, working)
    }

    #[test]
    fn test_total_distance_checker() {
        let (target, working) = checker();
        let expected = 4.0 * Color::BLACK.distance(Color::WHITE);
        assert!((total_distance(&target, &working) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_total_distance_identical_is_zero() {
        let (target, _) = checker();
        assert_eq!(total_distance(&target, &target), 0.0);
    }

    #[test]
    fn test_swap_delta_same_index_is_zero() {
        let (target, working) = checker();
        for i in 0..target.len() {
            assert_eq!(swap_delta(&target, &working, i, i), 0.0);
        }
    }

    #[test]
    fn test_swap_delta_fixes_pair() {
        let (target, working) = checker();
        let d = swap_delta(&target, &working, 0, 1);
        let expected = -2.0 * Color::BLACK.distance(Color::WHITE);
        assert!((d - expected).abs() < 1e-12);
    }

    #[test]
    fn test_swap_delta_same_color_pair_is_zero() {
        let (target, working) = checker();
        // positions 0 and 2 hold identical colors in both buffers
        assert_eq!(swap_delta(&target, &working, 0, 2), 0.0);
    }

    #[test]
    fn test_swap_delta_matches_recomputation() {
        let target = vec![
            Color::new(0.1, 0.2, 0.3),
            Color::new(0.9, 0.1, 0.4),
            Color::new(0.5, 0.5, 0.5),
            Color::new(0.0, 1.0, 0.2),
        ];
        let mut working = vec![
            Color::new(0.7, 0.7, 0.1),
            Color::new(0.2, 0.3, 0.3),
            Color::new(0.0, 0.9, 0.1),
            Color::new(0.4, 0.6, 0.5),
        ];
        let before = total_distance(&target, &working);
        let d = swap_delta(&target, &working, 1, 3);
        working.swap(1, 3);
        let after = total_distance(&target, &working);
        assert!((before + d - after).abs() < 1e-12);
    }
}
