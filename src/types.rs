//! Core value types shared by dispersions, parameters, and models.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One `(value, weight)` sample of a dispersion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightPoint {
    /// The parameter value at this point.
    pub value: f64,
    /// The (unnormalized) weight of this point.
    pub weight: f64,
}

impl WeightPoint {
    /// Creates a new weight point.
    #[must_use]
    pub const fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }

    /// A single point carrying the whole weight.
    #[must_use]
    pub const fn single(value: f64) -> Self {
        Self { value, weight: 1.0 }
    }
}

/// A host-supplied evaluation coordinate: a scalar or a pair.
///
/// How a pair is interpreted depends on the entry point: `run` reads it
/// as `(q, phi)`, `run_xy` as `(qx, qy)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QInput {
    /// A scalar `q`.
    Scalar(f64),
    /// A two-component coordinate.
    Pair(f64, f64),
}

impl QInput {
    /// Interprets a host sequence: one value is a scalar, two values a pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongArity`] for any other length.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [q] => Ok(QInput::Scalar(q)),
            [a, b] => Ok(QInput::Pair(a, b)),
            _ => Err(Error::WrongArity {
                expected: 2,
                got: values.len(),
            }),
        }
    }
}

impl From<f64> for QInput {
    fn from(q: f64) -> Self {
        QInput::Scalar(q)
    }
}

impl From<(f64, f64)> for QInput {
    fn from((a, b): (f64, f64)) -> Self {
        QInput::Pair(a, b)
    }
}

/// Input for vectorized evaluation.
#[derive(Clone, Copy, Debug)]
pub enum EvalInput<'a> {
    /// Orientation-averaged intensities at each `q`.
    Q(&'a [f64]),
    /// Oriented intensities at each `(qx[i], qy[i])`.
    QxQy(&'a [f64], &'a [f64]),
}
