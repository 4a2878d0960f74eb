use super::Model;
use crate::average::WeightGrid;
use crate::kernel::{HardsphereParameters, hardsphere_1d, hardsphere_2d};
use crate::param::ParameterSet;
use crate::parameter::Parameter;
use crate::types::WeightPoint;

const RADIUS: usize = 0;
const VOLFRACTION: usize = 1;

/// Percus–Yevick hard-sphere structure factor averaged over a radius dispersion.
///
/// | Parameter     | Default | Dispersible |
/// |---------------|---------|-------------|
/// | `radius`      | 50 Å    | yes         |
/// | `volfraction` | 0.20    | no          |
#[derive(Clone, Debug, PartialEq)]
pub struct HardsphereStructure {
    params: ParameterSet,
}

/// One evaluation's view of a [`HardsphereStructure`].
#[derive(Clone, Debug, PartialEq)]
pub struct HardsphereInputs {
    /// Volume fraction of spheres.
    pub volfraction: f64,
    /// Radius weight points.
    pub radius: Vec<WeightPoint>,
}

impl HardsphereStructure {
    /// Model name used by [`create`](super::create).
    pub const NAME: &'static str = "HardsphereStructure";

    /// A model with default parameters.
    #[must_use]
    pub fn new() -> Self {
        let params = ParameterSet::new()
            .with(Parameter::new("radius", 50.0).units("A").min(0.0).dispersible())
            .with(Parameter::new("volfraction", 0.20).min(0.0));
        Self { params }
    }

    /// Reads the current values and weight points.
    #[must_use]
    pub fn resolve(&self) -> HardsphereInputs {
        HardsphereInputs {
            volfraction: self.params[VOLFRACTION].value(),
            radius: self.params[RADIUS].weights(),
        }
    }
}

impl Default for HardsphereStructure {
    fn default() -> Self {
        Self::new()
    }
}

impl HardsphereInputs {
    fn kernel(&self, radius: f64) -> HardsphereParameters {
        HardsphereParameters {
            radius,
            volfraction: self.volfraction,
        }
    }

    /// Dispersion-averaged `S(q)`.
    #[must_use]
    pub fn intensity(&self, q: f64) -> f64 {
        let grid = WeightGrid::new().axis(&self.radius);
        trace_debug!(
            model = HardsphereStructure::NAME,
            combinations = grid.combinations(),
            "1D average"
        );
        grid.average(|p| hardsphere_1d(&self.kernel(p[0]), q)).value()
    }

    /// Dispersion-averaged `S(qx, qy)`.
    #[must_use]
    pub fn intensity_xy(&self, qx: f64, qy: f64) -> f64 {
        let grid = WeightGrid::new().axis(&self.radius);
        trace_debug!(
            model = HardsphereStructure::NAME,
            combinations = grid.combinations(),
            "2D average"
        );
        grid.average(|p| hardsphere_2d(&self.kernel(p[0]), qx, qy)).value()
    }

    /// Weighted mean radius.
    #[must_use]
    pub fn effective_radius(&self) -> f64 {
        WeightGrid::new().axis(&self.radius).average(|p| p[0]).value()
    }
}

impl Model for HardsphereStructure {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Hard sphere structure factor in the Percus-Yevick closure"
    }

    fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut ParameterSet {
        &mut self.params
    }

    fn evaluate(&self, q: f64) -> f64 {
        self.resolve().intensity(q)
    }

    fn evaluate_xy(&self, qx: f64, qy: f64) -> f64 {
        self.resolve().intensity_xy(qx, qy)
    }

    fn effective_radius(&self) -> Option<f64> {
        Some(self.resolve().effective_radius())
    }
}
