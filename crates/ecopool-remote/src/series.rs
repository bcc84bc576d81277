//! Rolling plot series
//!
//! Append-only x/y vectors for the life of a part.

/// One rolling series of plot points
#[derive(Debug, Clone, Default)]
pub struct PlotSeries {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PlotSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    pub fn len(&self) -> usize {
        self.ys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }

    pub fn last_y(&self) -> Option<f64> {
        self.ys.last().copied()
    }

    pub fn sum_y(&self) -> f64 {
        self.ys.iter().sum()
    }

    /// Zip the series into (x, y) pairs
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.xs.iter().copied().zip(self.ys.iter().copied()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_points() {
        let mut s = PlotSeries::new();
        s.push(0.0, 5.0);
        s.push(1.0, 3.0);
        assert_eq!(s.len(), 2);
        assert_eq!(s.points(), vec![(0.0, 5.0), (1.0, 3.0)]);
        assert_eq!(s.last_y(), Some(3.0));
        assert_eq!(s.sum_y(), 8.0);
    }

    #[test]
    fn test_empty_series() {
        let s = PlotSeries::new();
        assert!(s.is_empty());
        assert_eq!(s.last_y(), None);
        assert_eq!(s.sum_y(), 0.0);
    }
}
