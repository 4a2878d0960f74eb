//! Dispersion distributions.
//!
//! A [`Dispersion`] describes how a parameter varies across an ensemble of
//! particles. Every variant produces a finite list of [`WeightPoint`]s around
//! a center value; the list is recomputed on every call and depends only on
//! the center and the variant's own settings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::WeightPoint;

/// Largest point count that survives export as a settings number exactly.
pub const MAX_NPTS: u64 = 1 << 53;

/// Gaussian dispersion: `npts` points spanning `nsigmas` standard deviations
/// on each side of the center, weighted by the normal density.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaussianDispersion {
    /// Standard deviation, in the parameter's units.
    pub width: f64,
    /// Number of points.
    pub npts: usize,
    /// Number of standard deviations covered on each side of the center.
    pub nsigmas: f64,
}

impl Default for GaussianDispersion {
    fn default() -> Self {
        Self {
            width: 0.0,
            npts: 1,
            nsigmas: 3.0,
        }
    }
}

impl GaussianDispersion {
    fn generate(&self, center: f64) -> Vec<WeightPoint> {
        if self.width.is_nan() || self.width <= 0.0 || self.npts < 2 {
            return vec![WeightPoint::single(center)];
        }
        let half_span = self.nsigmas * self.width;
        linspace(center - half_span, center + half_span, self.npts)
            .map(|x| WeightPoint::new(x, gaussian_pdf(x, center, self.width)))
            .collect()
    }
}

/// Rectangular (uniform) dispersion over `[center - width, center + width]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RectangularDispersion {
    /// Half-width of the interval.
    pub width: f64,
    /// Number of points.
    pub npts: usize,
}

impl Default for RectangularDispersion {
    fn default() -> Self {
        Self {
            width: 0.0,
            npts: 1,
        }
    }
}

impl RectangularDispersion {
    #[allow(clippy::cast_precision_loss)]
    fn generate(&self, center: f64) -> Vec<WeightPoint> {
        if self.width.is_nan() || self.width <= 0.0 || self.npts < 2 {
            return vec![WeightPoint::single(center)];
        }
        let weight = 1.0 / self.npts as f64;
        linspace(center - self.width, center + self.width, self.npts)
            .map(|x| WeightPoint::new(x, weight))
            .collect()
    }
}

/// Explicit `(value, weight)` pairs supplied by the host.
///
/// The center is ignored: the stored values are absolute.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ArrayParts", into = "ArrayParts"))]
pub struct ArrayDispersion {
    values: Vec<f64>,
    weights: Vec<f64>,
}

impl ArrayDispersion {
    /// Creates an array dispersion from parallel value and weight lists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDispersionSpec`] if the lists differ in length,
    /// any value is not finite, or any weight is negative or not finite.
    pub fn new(values: Vec<f64>, weights: Vec<f64>) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(Error::spec(format!(
                "array dispersion has {} values but {} weights",
                values.len(),
                weights.len()
            )));
        }
        if let Some(v) = values.iter().find(|v| !v.is_finite()) {
            return Err(Error::spec(format!("array dispersion value {v} is not finite")));
        }
        if let Some(w) = weights.iter().find(|w| !(w.is_finite() && **w >= 0.0)) {
            return Err(Error::spec(format!(
                "array dispersion weight {w} is not a non-negative number"
            )));
        }
        Ok(Self { values, weights })
    }

    /// The stored values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The stored weights.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of stored points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no points are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn generate(&self, center: f64) -> Vec<WeightPoint> {
        if self.values.is_empty() {
            return vec![WeightPoint::single(center)];
        }
        self.values
            .iter()
            .zip(&self.weights)
            .map(|(&v, &w)| WeightPoint::new(v, w))
            .collect()
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct ArrayParts {
    values: Vec<f64>,
    weights: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<ArrayParts> for ArrayDispersion {
    type Error = Error;

    fn try_from(parts: ArrayParts) -> Result<Self> {
        ArrayDispersion::new(parts.values, parts.weights)
    }
}

#[cfg(feature = "serde")]
impl From<ArrayDispersion> for ArrayParts {
    fn from(array: ArrayDispersion) -> Self {
        Self {
            values: array.values,
            weights: array.weights,
        }
    }
}

/// Enum wrapping all dispersion types.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Dispersion {
    /// No dispersion: a single point at the center.
    #[default]
    Delta,
    /// A Gaussian dispersion.
    Gaussian(GaussianDispersion),
    /// A rectangular dispersion.
    Rectangular(RectangularDispersion),
    /// An explicit array of points.
    Array(ArrayDispersion),
}

impl Dispersion {
    /// Gaussian dispersion with the given standard deviation, point count, and span.
    #[must_use]
    pub fn gaussian(width: f64, npts: usize, nsigmas: f64) -> Self {
        Dispersion::Gaussian(GaussianDispersion {
            width,
            npts,
            nsigmas,
        })
    }

    /// Rectangular dispersion with the given half-width and point count.
    #[must_use]
    pub fn rectangular(width: f64, npts: usize) -> Self {
        Dispersion::Rectangular(RectangularDispersion { width, npts })
    }

    /// Array dispersion from parallel value and weight lists.
    ///
    /// # Errors
    ///
    /// See [`ArrayDispersion::new`].
    pub fn array(values: Vec<f64>, weights: Vec<f64>) -> Result<Self> {
        ArrayDispersion::new(values, weights).map(Dispersion::Array)
    }

    /// The discriminant used in exported settings.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Dispersion::Delta => "delta",
            Dispersion::Gaussian(_) => "gaussian",
            Dispersion::Rectangular(_) => "rectangular",
            Dispersion::Array(_) => "array",
        }
    }

    /// Checks the settings every parameter-attached dispersion must satisfy:
    /// finite widths, a finite non-negative `nsigmas`, and at most
    /// [`MAX_NPTS`] points. Anything that passes exports to settings that
    /// import back to an equal dispersion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDispersionSpec`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        match self {
            Dispersion::Delta | Dispersion::Array(_) => Ok(()),
            Dispersion::Gaussian(g) => {
                check_width(g.width)?;
                check_npts(g.npts)?;
                if !(g.nsigmas.is_finite() && g.nsigmas >= 0.0) {
                    return Err(Error::spec(format!(
                        "'nsigmas' must be a finite non-negative number, got {}",
                        g.nsigmas
                    )));
                }
                Ok(())
            }
            Dispersion::Rectangular(r) => {
                check_width(r.width)?;
                check_npts(r.npts)
            }
        }
    }

    /// Generates the weight points around `center`.
    ///
    /// The result is never empty; a degenerate configuration yields the
    /// single point `(center, 1.0)`.
    #[must_use]
    pub fn generate_weights(&self, center: f64) -> Vec<WeightPoint> {
        match self {
            Dispersion::Delta => vec![WeightPoint::single(center)],
            Dispersion::Gaussian(g) => g.generate(center),
            Dispersion::Rectangular(r) => r.generate(center),
            Dispersion::Array(a) => a.generate(center),
        }
    }
}

fn check_width(width: f64) -> Result<()> {
    if width.is_finite() {
        Ok(())
    } else {
        Err(Error::spec(format!("'width' must be a finite number, got {width}")))
    }
}

fn check_npts(npts: usize) -> Result<()> {
    if u64::try_from(npts).is_ok_and(|n| n <= MAX_NPTS) {
        Ok(())
    } else {
        Err(Error::spec(format!("'npts' must be at most {MAX_NPTS}, got {npts}")))
    }
}

/// `n` evenly spaced points from `low` to `high` inclusive; `n >= 2`.
#[allow(clippy::cast_precision_loss)]
fn linspace(low: f64, high: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = (high - low) / (n - 1) as f64;
    (0..n).map(move |i| low + step * i as f64)
}

fn gaussian_pdf(x: f64, mean: f64, sigma: f64) -> f64 {
    let z = (x - mean) / sigma;
    (-0.5 * z * z).exp() / (sigma * (2.0 * core::f64::consts::PI).sqrt())
}
