//! Simulated decision policy
//!
//! Uniform sampling over the configured decision grid, and the randomized
//! resampling interval used by the continuous-mode simulation loop. The
//! thread-local rng is created and dropped inside each call so the callers'
//! futures stay `Send`.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use ecopool_core::DecisionGrid;

/// Draw one extraction value, uniform over the grid
pub fn sample_extraction(grid: &DecisionGrid) -> f64 {
    let values = grid.values();
    let mut rng = rand::thread_rng();
    values.choose(&mut rng).copied().unwrap_or(grid.min)
}

/// Draw the delay until the next simulated submission
pub fn resample_interval(min_ms: u64, max_ms: u64) -> Duration {
    if min_ms >= max_ms {
        return Duration::from_millis(min_ms);
    }
    let mut rng = rand::thread_rng();
    Duration::from_millis(rng.gen_range(min_ms..=max_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_stays_on_grid() {
        let grid = DecisionGrid {
            min: 0.0,
            max: 5.0,
            step: 1.0,
        };
        let values = grid.values();
        for _ in 0..100 {
            let v = sample_extraction(&grid);
            assert!(values.contains(&v));
        }
    }

    #[test]
    fn test_sample_empty_grid_falls_back_to_min() {
        let grid = DecisionGrid {
            min: 3.0,
            max: 3.0,
            step: 1.0,
        };
        assert_eq!(sample_extraction(&grid), 3.0);
    }

    #[test]
    fn test_resample_interval_in_range() {
        for _ in 0..100 {
            let d = resample_interval(2000, 10000);
            assert!(d >= Duration::from_millis(2000));
            assert!(d <= Duration::from_millis(10000));
        }
        assert_eq!(resample_interval(1500, 1500), Duration::from_millis(1500));
    }
}
