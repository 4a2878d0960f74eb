#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Small-angle scattering intensity models with parameter dispersion.
//!
//! Every model exposes named parameters. A parameter marked dispersible can
//! carry a [`Dispersion`] describing how it varies across the particle
//! ensemble; evaluating the model then averages its single-point kernel over
//! every combination of weight points, normalized by the total weight.
//!
//! # Getting Started
//!
//! ```
//! use sasmodel::prelude::*;
//!
//! let mut model = ParallelepipedModel::new();
//! model.set_param("short_edgeA", 30.0).unwrap();
//! model
//!     .set_dispersion("longuest_edgeC", Dispersion::gaussian(40.0, 11, 3.0))
//!     .unwrap();
//!
//! let i_q = model.run(&[0.05]).unwrap();
//! let i_qxy = model.run_xy(&[0.03, 0.04]).unwrap();
//! assert!(i_q > 0.0 && i_qxy > 0.0);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Model`] | Evaluate an intensity at `q`, `(q, φ)` or `(qx, qy)`; get and set parameters. |
//! | [`Parameter`] | A named value with bounds, units, and an optional dispersion. |
//! | [`Dispersion`] | Delta, Gaussian, rectangular, or explicit array distribution of a parameter. |
//! | [`WeightGrid`](average::WeightGrid) | Weighted average of a kernel over the product of weight points. |
//! | [`DispersionRegistry`] | Host-owned dispersions addressed by [`DispersionHandle`]. |
//! | [`settings`] | Flat key/value export and import of a dispersion's configuration. |
//!
//! # Models
//!
//! | Model | Function | Dispersible parameters |
//! |-------|----------|------------------------|
//! | [`HardsphereStructure`] | Percus–Yevick hard-sphere `S(q)` | `radius` |
//! | [`ParallelepipedModel`] | Rectangular parallelepiped `P(q)` | three edges, `parallel_theta`, `parallel_phi` |
//! | [`Lorentzian`] | Lorentzian peak | none |
//! | [`TeubnerStrey`] | Teubner–Strey microemulsion | none |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on public types, [`save_snapshot`]/[`load_snapshot`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) on dispersion changes and averages | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod average;
mod distribution;
mod error;
pub mod kernel;
pub mod model;
mod param;
mod parameter;
pub mod registry;
pub mod settings;
#[cfg(feature = "serde")]
mod snapshot;
mod types;

pub use distribution::{ArrayDispersion, Dispersion, GaussianDispersion, RectangularDispersion};
pub use error::{Error, Result};
pub use model::{
    HardsphereStructure, Lorentzian, Model, ModelSnapshot, ParallelepipedModel, TeubnerStrey,
};
pub use param::ParameterSet;
pub use parameter::Parameter;
pub use registry::{DispersionHandle, DispersionRegistry};
#[cfg(feature = "serde")]
pub use snapshot::{load_snapshot, save_snapshot};
pub use types::{EvalInput, QInput, WeightPoint};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use sasmodel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::average::{Average, WeightGrid};
    pub use crate::distribution::{
        ArrayDispersion, Dispersion, GaussianDispersion, RectangularDispersion,
    };
    pub use crate::error::{Error, Result};
    pub use crate::model::{
        HardsphereStructure, Lorentzian, Model, ModelSnapshot, ParallelepipedModel, TeubnerStrey,
    };
    pub use crate::param::ParameterSet;
    pub use crate::parameter::Parameter;
    pub use crate::registry::{DispersionHandle, DispersionRegistry};
    pub use crate::settings::{DispersionSettings, SettingValue};
    #[cfg(feature = "serde")]
    pub use crate::snapshot::{load_snapshot, save_snapshot};
    pub use crate::types::{EvalInput, QInput, WeightPoint};
}
