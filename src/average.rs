//! The dispersion averaging engine.
//!
//! Every model evaluation reduces to the same nested weighted sum: for each
//! combination of weight points across all averaged parameters, evaluate the
//! single-point kernel, weight it by the product of the point weights, and
//! divide the total by the sum of those products.
//!
//! # Example
//!
//! ```
//! use sasmodel::average::WeightGrid;
//! use sasmodel::WeightPoint;
//!
//! let sizes = [WeightPoint::new(1.0, 1.0), WeightPoint::new(3.0, 1.0)];
//! let lengths = [WeightPoint::new(10.0, 1.0)];
//! let grid = WeightGrid::new().axis(&sizes).axis(&lengths);
//!
//! let avg = grid.average(|p| p[0] * p[1]);
//! assert_eq!(avg.value(), 20.0);
//! assert_eq!(grid.combinations(), 2);
//! ```

use crate::types::WeightPoint;

/// Accumulated weighted sum and normalization.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Average {
    /// Sum of `weight * f(point)` over all combinations.
    pub sum: f64,
    /// Sum of the combination weights.
    pub norm: f64,
}

impl Average {
    /// The weighted mean `sum / norm`.
    ///
    /// The division is not guarded: a zero `norm` yields NaN or infinity.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.sum / self.norm
    }
}

/// The Cartesian product of one weight-point sequence per averaged parameter.
#[derive(Clone, Debug, Default)]
pub struct WeightGrid<'a> {
    axes: Vec<&'a [WeightPoint]>,
}

impl<'a> WeightGrid<'a> {
    /// An empty grid. It has exactly one combination: the empty point.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A grid over the given axes, in order.
    #[must_use]
    pub fn from_axes(axes: Vec<&'a [WeightPoint]>) -> Self {
        Self { axes }
    }

    /// Appends an axis.
    #[must_use]
    pub fn axis(mut self, points: &'a [WeightPoint]) -> Self {
        self.axes.push(points);
        self
    }

    /// Number of axes.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.axes.len()
    }

    /// Number of point combinations (saturating).
    #[must_use]
    pub fn combinations(&self) -> usize {
        self.axes
            .iter()
            .fold(1_usize, |acc, axis| acc.saturating_mul(axis.len()))
    }

    /// Evaluates `f` at every combination and accumulates the weighted sum.
    ///
    /// `f` receives one value per axis, in axis order. Combinations are
    /// visited with the last axis varying fastest. A grid with an empty axis
    /// has no combinations and returns a zero [`Average`].
    pub fn average<F>(&self, mut f: F) -> Average
    where
        F: FnMut(&[f64]) -> f64,
    {
        let mut acc = Average::default();
        if self.axes.iter().any(|axis| axis.is_empty()) {
            return acc;
        }

        let n = self.axes.len();
        let mut index = vec![0_usize; n];
        let mut point: Vec<f64> = self.axes.iter().map(|axis| axis[0].value).collect();

        loop {
            let weight: f64 = self
                .axes
                .iter()
                .zip(&index)
                .map(|(axis, &i)| axis[i].weight)
                .product();
            acc.sum += weight * f(&point);
            acc.norm += weight;

            // Odometer step
            let mut d = n;
            loop {
                if d == 0 {
                    return acc;
                }
                d -= 1;
                index[d] += 1;
                if index[d] < self.axes[d].len() {
                    point[d] = self.axes[d][index[d]].value;
                    break;
                }
                index[d] = 0;
                point[d] = self.axes[d][0].value;
            }
        }
    }
}
