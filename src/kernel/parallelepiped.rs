//! Form factor of a rectangular parallelepiped with edges `A <= B <= C`.

use super::quadrature::gauss76;
use super::sinc_sq;

/// Converts `Å⁻²·Å³` contrast-volume products to `cm⁻¹`.
const UNIT_SCALE: f64 = 1.0e8;

/// Resolved parameters of the parallelepiped form factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallelepipedParameters {
    /// Shortest edge A (Å).
    pub short_a: f64,
    /// Middle edge B (Å).
    pub long_b: f64,
    /// Longest edge C (Å).
    pub long_c: f64,
    /// Scattering length density contrast (Å⁻²).
    pub contrast: f64,
    /// Polar angle of the C axis relative to the beam (rad).
    pub theta: f64,
    /// Azimuthal angle of the C axis in the detector plane (rad).
    pub phi: f64,
}

impl ParallelepipedParameters {
    /// Particle volume (Å³).
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.short_a * self.long_b * self.long_c
    }

    fn prefactor(&self) -> f64 {
        self.contrast * self.contrast * self.volume() * UNIT_SCALE
    }
}

/// Orientation-averaged `P(q)`, without scale or background.
///
/// The average runs over the polar cosine `σ` of the C axis and the
/// normalized azimuth `u` in the A–B plane, both on `[0, 1]` with the
/// 76-point rule; lengths are expressed relative to B.
#[must_use]
pub fn parallelepiped_1d(p: &ParallelepipedParameters, q: f64) -> f64 {
    let rule = gauss76();
    let mu = q * p.long_b;
    let a_rel = p.short_a / p.long_b;
    let c_rel = p.long_c / p.long_b;

    let average = rule.integrate(0.0, 1.0, |sigma| {
        let mu_perp = mu * (1.0 - sigma * sigma).sqrt();
        let cross_section = rule.integrate(0.0, 1.0, |u| cross_section_kernel(a_rel, mu_perp, u));
        cross_section * sinc_sq(mu * c_rel * sigma / 2.0)
    });

    average * p.prefactor()
}

/// Oriented `P(qx, qy)`, without scale or background.
///
/// The C axis points along `(sinθ cosφ, sinθ sinφ, cosθ)` with the beam on
/// z; the A axis lies along the θ unit vector and B along the φ unit vector.
#[must_use]
pub fn parallelepiped_2d(p: &ParallelepipedParameters, qx: f64, qy: f64) -> f64 {
    let (sin_t, cos_t) = p.theta.sin_cos();
    let (sin_p, cos_p) = p.phi.sin_cos();

    let q_c = qx * sin_t * cos_p + qy * sin_t * sin_p;
    let q_a = qx * cos_t * cos_p + qy * cos_t * sin_p;
    let q_b = -qx * sin_p + qy * cos_p;

    let amplitude_sq = sinc_sq(q_a * p.short_a / 2.0)
        * sinc_sq(q_b * p.long_b / 2.0)
        * sinc_sq(q_c * p.long_c / 2.0);

    amplitude_sq * p.prefactor()
}

/// Effective diameter of a cylinder of the given length and radius, from its
/// second virial coefficient. Zero for a degenerate cylinder.
#[must_use]
pub fn cylinder_effective_diameter(length: f64, radius: f64) -> f64 {
    if radius == 0.0 || length == 0.0 {
        return 0.0;
    }
    let a = radius;
    let b = length / 2.0;
    let t1 = a * a * 2.0 * b / 2.0;
    let t2 = 1.0 + (b / a) * (1.0 + a / b / 2.0) * (1.0 + core::f64::consts::PI * a / b / 2.0);
    (3.0 * t1 * t2).cbrt()
}

fn cross_section_kernel(a_rel: f64, mu: f64, u: f64) -> f64 {
    let (s, c) = (core::f64::consts::FRAC_PI_2 * u).sin_cos();
    sinc_sq(mu / 2.0 * c) * sinc_sq(mu * a_rel / 2.0 * s)
}
