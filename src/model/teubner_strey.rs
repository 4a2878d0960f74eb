use super::Model;
use crate::kernel::{TeubnerStreyParameters, teubner_strey};
use crate::param::ParameterSet;
use crate::parameter::Parameter;

const SCALE: usize = 0;
const C1: usize = 1;
const C2: usize = 2;
const BKD: usize = 3;

/// Teubner–Strey microemulsion model `1/(a₂ + c₁q² + c₂q⁴) + bkd`, where
/// `bkd` is the incoherent background.
///
/// The 2D form is the product of the 1D function at `qx` and at `qy`.
#[derive(Clone, Debug, PartialEq)]
pub struct TeubnerStrey {
    params: ParameterSet,
}

impl TeubnerStrey {
    /// Model name used by [`create`](super::create).
    pub const NAME: &'static str = "TeubnerStrey";

    /// A model with default parameters.
    #[must_use]
    pub fn new() -> Self {
        let params = ParameterSet::new()
            .with(Parameter::new("scale", 0.1))
            .with(Parameter::new("c1", -30.0))
            .with(Parameter::new("c2", 5000.0))
            .with(Parameter::new("bkd", 0.1).units("1/cm"));
        Self { params }
    }

    fn kernel(&self) -> TeubnerStreyParameters {
        TeubnerStreyParameters {
            scale: self.params[SCALE].value(),
            c1: self.params[C1].value(),
            c2: self.params[C2].value(),
        }
    }

    /// Correlation length of the current coefficients.
    #[must_use]
    pub fn correlation_length(&self) -> Option<f64> {
        self.kernel().correlation_length()
    }

    /// Repeat distance of the current coefficients.
    #[must_use]
    pub fn repeat_distance(&self) -> Option<f64> {
        self.kernel().repeat_distance()
    }
}

impl Default for TeubnerStrey {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for TeubnerStrey {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "I(q) = 1/(scale + c1*q^2 + c2*q^4) + bkd"
    }

    fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut ParameterSet {
        &mut self.params
    }

    fn evaluate(&self, q: f64) -> f64 {
        teubner_strey(&self.kernel(), q) + self.params[BKD].value()
    }

    fn evaluate_xy(&self, qx: f64, qy: f64) -> f64 {
        self.evaluate(qx) * self.evaluate(qy)
    }
}
