//! Single-point scattering kernels.
//!
//! Kernels are pure functions of fully resolved parameters and a scattering
//! vector. They know nothing about dispersion; the models in
//! [`crate::model`] average them over weight points.

mod hardsphere;
mod lorentzian;
mod parallelepiped;
pub mod quadrature;
mod teubner_strey;

pub use hardsphere::{HardsphereParameters, hardsphere_1d, hardsphere_2d};
pub use lorentzian::{LorentzianParameters, lorentzian};
pub use parallelepiped::{
    ParallelepipedParameters, cylinder_effective_diameter, parallelepiped_1d, parallelepiped_2d,
};
pub use teubner_strey::{TeubnerStreyParameters, teubner_strey};

/// `(sin x / x)^2`, with the limit 1 at `x == 0`.
#[inline]
#[must_use]
pub fn sinc_sq(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let s = x.sin() / x;
        s * s
    }
}

/// `|q|` for a Cartesian scattering vector.
#[inline]
#[must_use]
pub fn magnitude(qx: f64, qy: f64) -> f64 {
    qx.hypot(qy)
}
