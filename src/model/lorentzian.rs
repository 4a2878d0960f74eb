use super::Model;
use crate::kernel::{LorentzianParameters, lorentzian};
use crate::param::ParameterSet;
use crate::parameter::Parameter;

const SCALE: usize = 0;
const GAMMA: usize = 1;
const CENTER: usize = 2;

/// Lorentzian peak `scale/π · (γ/2) / ((x − x₀)² + (γ/2)²)`.
///
/// The 2D form is the product of the 1D function at `qx` and at `qy`.
#[derive(Clone, Debug, PartialEq)]
pub struct Lorentzian {
    params: ParameterSet,
}

impl Lorentzian {
    /// Model name used by [`create`](super::create).
    pub const NAME: &'static str = "Lorentzian";

    /// A model with default parameters.
    #[must_use]
    pub fn new() -> Self {
        let params = ParameterSet::new()
            .with(Parameter::new("scale", 1.0))
            .with(Parameter::new("gamma", 1.0))
            .with(Parameter::new("center", 0.0));
        Self { params }
    }

    fn resolve(&self) -> LorentzianParameters {
        LorentzianParameters {
            scale: self.params[SCALE].value(),
            gamma: self.params[GAMMA].value(),
            center: self.params[CENTER].value(),
        }
    }
}

impl Default for Lorentzian {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for Lorentzian {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "f(x) = scale/pi * (gamma/2) / ((x - x0)^2 + (gamma/2)^2)"
    }

    fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut ParameterSet {
        &mut self.params
    }

    fn evaluate(&self, q: f64) -> f64 {
        lorentzian(&self.resolve(), q)
    }

    fn evaluate_xy(&self, qx: f64, qy: f64) -> f64 {
        let p = self.resolve();
        lorentzian(&p, qx) * lorentzian(&p, qy)
    }
}
