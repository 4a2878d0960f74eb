//! Model parameters with bounds and an optional dispersion.
//!
//! A [`Parameter`] is a named scalar. Parameters flagged as dispersible own a
//! [`Dispersion`] describing how the value varies across the particle
//! ensemble; [`Parameter::weights`] turns it into the weight points the
//! averaging engine sums over.
//!
//! # Example
//!
//! ```
//! use sasmodel::{Dispersion, Parameter};
//!
//! let mut radius = Parameter::new("radius", 50.0).units("A").min(0.0).dispersible();
//! radius.set_dispersion(Dispersion::rectangular(5.0, 10)).unwrap();
//!
//! let points = radius.weights();
//! assert_eq!(points.len(), 10);
//! assert!(radius.set_value(-1.0).is_err());
//! ```

use core::fmt;

use crate::distribution::{Dispersion, GaussianDispersion};
use crate::error::{Error, Result};
use crate::types::WeightPoint;

/// A named model parameter.
///
/// Bounds default to `(-inf, inf)`. The value is kept inside the bounds:
/// [`set_value`](Self::set_value) and the bound setters reject anything that
/// would break that.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    name: String,
    units: String,
    value: f64,
    min: f64,
    max: f64,
    dispersible: bool,
    orientation: bool,
    dispersion: Dispersion,
}

impl Parameter {
    /// Creates a non-dispersible, unbounded parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            units: String::new(),
            value,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            dispersible: false,
            orientation: false,
            dispersion: Dispersion::Delta,
        }
    }

    /// Sets the display units.
    #[must_use]
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Sets the lower bound. The upper bound is raised to `min` if it lies
    /// below, and the value is clamped into the new range. NaN is ignored.
    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        if min.is_nan() {
            return self;
        }
        self.min = min;
        self.max = self.max.max(min);
        self.value = self.value.clamp(self.min, self.max);
        self
    }

    /// Sets the upper bound. The lower bound is lowered to `max` if it lies
    /// above, and the value is clamped into the new range. NaN is ignored.
    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        if max.is_nan() {
            return self;
        }
        self.max = max;
        self.min = self.min.min(max);
        self.value = self.value.clamp(self.min, self.max);
        self
    }

    /// Allows a dispersion to be attached. Starts with a zero-width Gaussian.
    #[must_use]
    pub fn dispersible(mut self) -> Self {
        self.dispersible = true;
        self.dispersion = Dispersion::Gaussian(GaussianDispersion::default());
        self
    }

    /// Marks the parameter as an orientation angle.
    #[must_use]
    pub fn orientation(mut self) -> Self {
        self.orientation = true;
        self
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display units; empty for dimensionless parameters.
    #[must_use]
    pub fn unit_label(&self) -> &str {
        &self.units
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The lower bound (`-inf` when unbounded).
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.min
    }

    /// The upper bound (`inf` when unbounded).
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.max
    }

    /// Whether a dispersion can be attached.
    #[must_use]
    pub fn is_dispersible(&self) -> bool {
        self.dispersible
    }

    /// Whether this is an orientation angle.
    #[must_use]
    pub fn is_orientation(&self) -> bool {
        self.orientation
    }

    /// The attached dispersion. Always [`Dispersion::Delta`] for
    /// non-dispersible parameters.
    #[must_use]
    pub fn dispersion(&self) -> &Dispersion {
        &self.dispersion
    }

    /// Whether `value` lies in `[min, max]`. NaN never does.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Sets the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `value` is outside `[min, max]`.
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        if !self.contains(value) {
            return Err(self.out_of_bounds(value));
        }
        self.value = value;
        Ok(())
    }

    /// Sets the lower bound.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `min > max`, or
    /// [`Error::OutOfBounds`] if the current value would fall below `min`.
    pub fn set_min(&mut self, min: f64) -> Result<()> {
        self.set_bounds(min, self.max)
    }

    /// Sets the upper bound.
    ///
    /// # Errors
    ///
    /// See [`set_min`](Self::set_min).
    pub fn set_max(&mut self, max: f64) -> Result<()> {
        self.set_bounds(self.min, max)
    }

    /// Sets both bounds at once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `min > max` or either is NaN, or
    /// [`Error::OutOfBounds`] if the current value is outside the new range.
    pub fn set_bounds(&mut self, min: f64, max: f64) -> Result<()> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(Error::InvalidBounds {
                name: self.name.clone(),
                min,
                max,
            });
        }
        if !(min..=max).contains(&self.value) {
            return Err(Error::OutOfBounds {
                name: self.name.clone(),
                value: self.value,
                min,
                max,
            });
        }
        self.min = min;
        self.max = max;
        Ok(())
    }

    /// Replaces the dispersion. The value is not changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotDispersible`] if the parameter does not accept one,
    /// or [`Error::InvalidDispersionSpec`] if the dispersion fails
    /// [`Dispersion::validate`].
    pub fn set_dispersion(&mut self, dispersion: Dispersion) -> Result<()> {
        if !self.dispersible {
            return Err(Error::NotDispersible(self.name.clone()));
        }
        dispersion.validate()?;
        self.dispersion = dispersion;
        Ok(())
    }

    /// The weight points for the current value.
    ///
    /// Points are generated by the dispersion around the current value, and
    /// only those strictly inside the bounds are kept. If none survive, the
    /// result is the single point `(value, 1.0)`. Non-dispersible parameters
    /// always yield that single point.
    #[must_use]
    pub fn weights(&self) -> Vec<WeightPoint> {
        if !self.dispersible {
            return vec![WeightPoint::single(self.value)];
        }
        let mut points = self.dispersion.generate_weights(self.value);
        points.retain(|p| p.value > self.min && p.value < self.max);
        if points.is_empty() {
            points.push(WeightPoint::single(self.value));
        }
        points
    }

    fn out_of_bounds(&self, value: f64) -> Error {
        Error::OutOfBounds {
            name: self.name.clone(),
            value,
            min: self.min,
            max: self.max,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)?;
        if !self.units.is_empty() {
            write!(f, " {}", self.units)?;
        }
        Ok(())
    }
}
