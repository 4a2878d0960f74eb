//! Scattering models and the [`Model`] trait.
//!
//! A model owns a [`ParameterSet`] and evaluates an intensity at a scattering
//! vector. Models with dispersible parameters read the current values and
//! weight points at the start of every evaluation and average their kernel
//! over all weight-point combinations with [`WeightGrid`](crate::average::WeightGrid).
//!
//! # Implementing a custom model
//!
//! ```
//! use sasmodel::prelude::*;
//!
//! #[derive(Debug)]
//! struct Flat {
//!     params: ParameterSet,
//! }
//!
//! impl Model for Flat {
//!     fn name(&self) -> &'static str {
//!         "Flat"
//!     }
//!
//!     fn description(&self) -> &'static str {
//!         "I(q) = level"
//!     }
//!
//!     fn parameters(&self) -> &ParameterSet {
//!         &self.params
//!     }
//!
//!     fn parameters_mut(&mut self) -> &mut ParameterSet {
//!         &mut self.params
//!     }
//!
//!     fn evaluate(&self, _q: f64) -> f64 {
//!         self.params[0].value()
//!     }
//!
//!     fn evaluate_xy(&self, _qx: f64, _qy: f64) -> f64 {
//!         self.params[0].value()
//!     }
//! }
//!
//! let mut flat = Flat {
//!     params: ParameterSet::new().with(Parameter::new("level", 2.0)),
//! };
//! flat.set_param("level", 3.0).unwrap();
//! assert_eq!(flat.run(&[0.1, 0.5]).unwrap(), 3.0);
//! ```

mod hardsphere;
mod lorentzian;
mod parallelepiped;
mod teubner_strey;

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use hardsphere::{HardsphereInputs, HardsphereStructure};
pub use lorentzian::Lorentzian;
pub use parallelepiped::{ParallelepipedInputs, ParallelepipedModel};
pub use teubner_strey::TeubnerStrey;

use crate::distribution::Dispersion;
use crate::error::{Error, Result};
use crate::param::ParameterSet;
use crate::registry::{DispersionHandle, DispersionRegistry};
use crate::settings::DispersionSettings;
use crate::types::{EvalInput, QInput};

/// Current schema version of [`ModelSnapshot`].
pub const SNAPSHOT_VERSION: u32 = 1;

/// Names accepted by [`create`].
pub const MODEL_NAMES: [&str; 4] = [
    HardsphereStructure::NAME,
    ParallelepipedModel::NAME,
    Lorentzian::NAME,
    TeubnerStrey::NAME,
];

/// The full parameter and dispersion state of a model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelSnapshot {
    /// Schema version for forward compatibility.
    pub version: u32,
    /// Name of the model the snapshot was taken from.
    pub model: String,
    /// Parameter values by name.
    pub params: BTreeMap<String, f64>,
    /// Dispersion settings of the dispersible parameters, by name.
    pub dispersion: BTreeMap<String, DispersionSettings>,
}

/// A scattering intensity model.
///
/// Evaluation never fails: numeric degeneracies come back as NaN or
/// infinity. The trait is object safe so hosts can hold `Box<dyn Model>`.
///
/// Evaluating one instance from several threads is fine; mutating it while
/// another thread evaluates is prevented by the borrow rules.
pub trait Model: core::fmt::Debug + Send + Sync {
    /// The model name.
    fn name(&self) -> &'static str;

    /// A one-line description of the function evaluated.
    fn description(&self) -> &'static str;

    /// The model's parameters.
    fn parameters(&self) -> &ParameterSet;

    /// Mutable access to the model's parameters.
    fn parameters_mut(&mut self) -> &mut ParameterSet;

    /// Orientation-averaged intensity at `q`.
    fn evaluate(&self, q: f64) -> f64;

    /// Intensity at the Cartesian scattering vector `(qx, qy)`.
    fn evaluate_xy(&self, qx: f64, qy: f64) -> f64;

    /// Intensity at the polar scattering vector `(q, phi)`.
    fn evaluate_rphi(&self, q: f64, phi: f64) -> f64 {
        let (sin_phi, cos_phi) = phi.sin_cos();
        self.evaluate_xy(q * cos_phi, q * sin_phi)
    }

    /// Whether `q == 0` is answered with `0.0` without evaluating the kernel.
    fn skips_zero_q(&self) -> bool {
        false
    }

    /// Effective radius for coupling a form factor with a structure factor.
    ///
    /// `None` for models without a particle size.
    fn effective_radius(&self) -> Option<f64> {
        None
    }

    /// Clears state accumulated between evaluations. No built-in model keeps
    /// any, so the default does nothing.
    fn reset(&mut self) {}

    /// Evaluates a scalar `q` or a polar `(q, phi)` pair.
    fn run_input(&self, input: QInput) -> f64 {
        match input {
            QInput::Scalar(q) => self.evaluate(q),
            QInput::Pair(q, _) if q == 0.0 && self.skips_zero_q() => 0.0,
            QInput::Pair(q, phi) => self.evaluate_rphi(q, phi),
        }
    }

    /// Evaluates a scalar `q` or a Cartesian `(qx, qy)` pair.
    fn run_xy_input(&self, input: QInput) -> f64 {
        match input {
            QInput::Scalar(q) => self.evaluate(q),
            QInput::Pair(qx, qy) => self.evaluate_xy(qx, qy),
        }
    }

    /// [`run_input`](Self::run_input) on a host sequence of one or two values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongArity`] for any other length.
    fn run(&self, input: &[f64]) -> Result<f64> {
        QInput::from_slice(input).map(|input| self.run_input(input))
    }

    /// [`run_xy_input`](Self::run_xy_input) on a host sequence of one or two values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongArity`] for any other length.
    fn run_xy(&self, input: &[f64]) -> Result<f64> {
        QInput::from_slice(input).map(|input| self.run_xy_input(input))
    }

    /// Evaluates every point of a 1D or 2D input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `qx` and `qy` differ in length.
    fn eval_distribution(&self, input: EvalInput<'_>) -> Result<Vec<f64>> {
        match input {
            EvalInput::Q(q) => Ok(q.iter().map(|&q| self.evaluate(q)).collect()),
            EvalInput::QxQy(qx, qy) => {
                if qx.len() != qy.len() {
                    return Err(Error::LengthMismatch {
                        qx: qx.len(),
                        qy: qy.len(),
                    });
                }
                Ok(qx
                    .iter()
                    .zip(qy)
                    .map(|(&x, &y)| self.evaluate_xy(x, y))
                    .collect())
            }
        }
    }

    /// The current value of a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`].
    fn param(&self, name: &str) -> Result<f64> {
        self.parameters().value(name)
    }

    /// Sets a parameter value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`] or [`Error::OutOfBounds`].
    fn set_param(&mut self, name: &str, value: f64) -> Result<()> {
        self.parameters_mut().set_value(name, value)
    }

    /// Attaches a dispersion to a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`], [`Error::NotDispersible`], or
    /// [`Error::InvalidDispersionSpec`]; nothing is changed on error.
    fn set_dispersion(&mut self, name: &str, dispersion: Dispersion) -> Result<()> {
        self.parameters_mut().set_dispersion(name, dispersion)?;
        trace_info!(
            model = self.name(),
            parameter = name,
            kind = self.parameters().get(name).map_or("", |p| p.dispersion().type_name()),
            "dispersion attached"
        );
        Ok(())
    }

    /// Attaches a copy of a registered dispersion to a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownHandle`], [`Error::UnknownParameter`], or
    /// [`Error::NotDispersible`].
    fn set_dispersion_from(
        &mut self,
        registry: &DispersionRegistry,
        name: &str,
        handle: DispersionHandle,
    ) -> Result<()> {
        let dispersion = registry.get(handle)?;
        self.set_dispersion(name, dispersion)
    }

    /// Exported dispersion settings of every dispersible parameter.
    fn dispersion_settings(&self) -> BTreeMap<String, DispersionSettings> {
        self.parameters().dispersion_settings()
    }

    /// Imports dispersion settings into one parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`], [`Error::NotDispersible`], or
    /// [`Error::InvalidDispersionSpec`]; nothing is changed on error.
    fn apply_dispersion_settings(
        &mut self,
        name: &str,
        settings: &DispersionSettings,
    ) -> Result<()> {
        self.parameters_mut().apply_dispersion_settings(name, settings)?;
        trace_info!(model = self.name(), parameter = name, "dispersion settings imported");
        Ok(())
    }

    /// Captures all parameter values and dispersion settings.
    fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            version: SNAPSHOT_VERSION,
            model: self.name().to_string(),
            params: self.parameters().values(),
            dispersion: self.dispersion_settings(),
        }
    }

    /// Restores a snapshot taken from a model of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelMismatch`] for a snapshot of another model, or
    /// the first error from applying its entries; nothing is changed on error.
    fn restore(&mut self, snapshot: &ModelSnapshot) -> Result<()> {
        if snapshot.model != self.name() {
            return Err(Error::ModelMismatch {
                expected: self.name().to_string(),
                found: snapshot.model.clone(),
            });
        }
        self.parameters_mut()
            .apply_all(&snapshot.params, &snapshot.dispersion)
    }
}

/// Creates a model with default parameters by name.
///
/// # Errors
///
/// Returns [`Error::UnknownModel`] if the name is not one of [`MODEL_NAMES`].
pub fn create(name: &str) -> Result<Box<dyn Model>> {
    match name {
        HardsphereStructure::NAME => Ok(Box::new(HardsphereStructure::new())),
        ParallelepipedModel::NAME => Ok(Box::new(ParallelepipedModel::new())),
        Lorentzian::NAME => Ok(Box::new(Lorentzian::new())),
        TeubnerStrey::NAME => Ok(Box::new(TeubnerStrey::new())),
        other => Err(Error::UnknownModel(other.to_string())),
    }
}

/// Creates a model from a snapshot.
///
/// # Errors
///
/// Returns [`Error::UnknownModel`] or any error from [`Model::restore`].
pub fn from_snapshot(snapshot: &ModelSnapshot) -> Result<Box<dyn Model>> {
    let mut model = create(&snapshot.model)?;
    model.restore(snapshot)?;
    Ok(model)
}
