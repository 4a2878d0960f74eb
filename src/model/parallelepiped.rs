use super::Model;
use crate::average::WeightGrid;
use crate::kernel::{
    ParallelepipedParameters, cylinder_effective_diameter, parallelepiped_1d, parallelepiped_2d,
};
use crate::param::ParameterSet;
use crate::parameter::Parameter;
use crate::types::WeightPoint;

const SCALE: usize = 0;
const SHORT_A: usize = 1;
const LONG_B: usize = 2;
const LONG_C: usize = 3;
const CONTRAST: usize = 4;
const BACKGROUND: usize = 5;
const THETA: usize = 6;
const PHI: usize = 7;

/// Rectangular parallelepiped form factor with edge and orientation dispersion.
///
/// | Parameter        | Default   | Dispersible |
/// |------------------|-----------|-------------|
/// | `scale`          | 1         | no          |
/// | `short_edgeA`    | 35 Å      | yes         |
/// | `longer_edgeB`   | 75 Å      | yes         |
/// | `longuest_edgeC` | 400 Å     | yes         |
/// | `contrast`       | 5.3e-6 Å⁻²| no          |
/// | `background`     | 0 cm⁻¹    | no          |
/// | `parallel_theta` | 1.0 rad   | yes         |
/// | `parallel_phi`   | 1.0 rad   | yes         |
///
/// The 1D intensity averages over the three edges; the 2D intensity also
/// averages over both angles. `run` with `q == 0` in polar form returns 0.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallelepipedModel {
    params: ParameterSet,
}

/// One evaluation's view of a [`ParallelepipedModel`].
#[derive(Clone, Debug, PartialEq)]
pub struct ParallelepipedInputs {
    /// Scale factor.
    pub scale: f64,
    /// Flat background.
    pub background: f64,
    /// Current values of every kernel parameter.
    pub base: ParallelepipedParameters,
    /// Edge A weight points.
    pub short_a: Vec<WeightPoint>,
    /// Edge B weight points.
    pub long_b: Vec<WeightPoint>,
    /// Edge C weight points.
    pub long_c: Vec<WeightPoint>,
    /// Polar angle weight points.
    pub theta: Vec<WeightPoint>,
    /// Azimuthal angle weight points.
    pub phi: Vec<WeightPoint>,
}

impl ParallelepipedModel {
    /// Model name used by [`create`](super::create).
    pub const NAME: &'static str = "ParallelepipedModel";

    /// A model with default parameters.
    #[must_use]
    pub fn new() -> Self {
        let params = ParameterSet::new()
            .with(Parameter::new("scale", 1.0))
            .with(Parameter::new("short_edgeA", 35.0).units("A").min(0.0).dispersible())
            .with(Parameter::new("longer_edgeB", 75.0).units("A").min(0.0).dispersible())
            .with(Parameter::new("longuest_edgeC", 400.0).units("A").min(0.0).dispersible())
            .with(Parameter::new("contrast", 5.3e-6).units("1/A^2"))
            .with(Parameter::new("background", 0.0).units("1/cm"))
            .with(Parameter::new("parallel_theta", 1.0).units("rad").orientation().dispersible())
            .with(Parameter::new("parallel_phi", 1.0).units("rad").orientation().dispersible());
        Self { params }
    }

    /// Reads the current values and weight points.
    #[must_use]
    pub fn resolve(&self) -> ParallelepipedInputs {
        let p = &self.params;
        ParallelepipedInputs {
            scale: p[SCALE].value(),
            background: p[BACKGROUND].value(),
            base: ParallelepipedParameters {
                short_a: p[SHORT_A].value(),
                long_b: p[LONG_B].value(),
                long_c: p[LONG_C].value(),
                contrast: p[CONTRAST].value(),
                theta: p[THETA].value(),
                phi: p[PHI].value(),
            },
            short_a: p[SHORT_A].weights(),
            long_b: p[LONG_B].weights(),
            long_c: p[LONG_C].weights(),
            theta: p[THETA].weights(),
            phi: p[PHI].weights(),
        }
    }
}

impl Default for ParallelepipedModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelepipedInputs {
    fn edges(&self) -> WeightGrid<'_> {
        WeightGrid::new()
            .axis(&self.short_a)
            .axis(&self.long_b)
            .axis(&self.long_c)
    }

    /// Edge-averaged `I(q)`; exactly 0 at `q == 0`.
    #[must_use]
    pub fn intensity(&self, q: f64) -> f64 {
        if q == 0.0 {
            return 0.0;
        }
        let grid = self.edges();
        trace_debug!(
            model = ParallelepipedModel::NAME,
            combinations = grid.combinations(),
            "1D average"
        );
        let avg = grid.average(|p| {
            let kernel = ParallelepipedParameters {
                short_a: p[0],
                long_b: p[1],
                long_c: p[2],
                ..self.base
            };
            parallelepiped_1d(&kernel, q)
        });
        self.scale * avg.value() + self.background
    }

    /// Edge- and orientation-averaged `I(qx, qy)`.
    #[must_use]
    pub fn intensity_xy(&self, qx: f64, qy: f64) -> f64 {
        let grid = self.edges().axis(&self.theta).axis(&self.phi);
        trace_debug!(
            model = ParallelepipedModel::NAME,
            combinations = grid.combinations(),
            "2D average"
        );
        let avg = grid.average(|p| {
            let kernel = ParallelepipedParameters {
                short_a: p[0],
                long_b: p[1],
                long_c: p[2],
                theta: p[3],
                phi: p[4],
                ..self.base
            };
            parallelepiped_2d(&kernel, qx, qy)
        });
        self.scale * avg.value() + self.background
    }

    /// Edge-averaged radius of the cylinder with the same length and
    /// cross-section area. Falls back to the current edges if every weight
    /// is zero.
    #[must_use]
    pub fn effective_radius(&self) -> f64 {
        let radius = |a: f64, b: f64, c: f64| {
            cylinder_effective_diameter(c, (a * b / core::f64::consts::PI).sqrt()) / 2.0
        };
        let avg = self.edges().average(|p| radius(p[0], p[1], p[2]));
        if avg.norm == 0.0 {
            radius(self.base.short_a, self.base.long_b, self.base.long_c)
        } else {
            avg.value()
        }
    }
}

impl Model for ParallelepipedModel {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Form factor of a rectangular parallelepiped with edges A <= B <= C"
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

    fn skips_zero_q(&self) -> bool {
        true
    }

    fn effective_radius(&self) -> Option<f64> {
        Some(self.resolve().effective_radius())
    }
}
