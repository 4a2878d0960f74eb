//! Percus–Yevick hard-sphere structure factor.

use super::magnitude;

/// Below this `2qR` the closed form cancels catastrophically and the
/// power series of the direct correlation function is used instead.
const SERIES_CUTOFF: f64 = 1.0;

/// Series terms; the last one is below `1/21!` at the cutoff.
const SERIES_TERMS: usize = 10;

/// Resolved parameters of the hard-sphere structure factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HardsphereParameters {
    /// Sphere radius (Å).
    pub radius: f64,
    /// Volume fraction of spheres.
    pub volfraction: f64,
}

/// `S(q)` in the Percus–Yevick closure.
///
/// At `q * radius == 0` the exact limit `(1 - φ)^4 / (1 + 2φ)^2` is returned,
/// and for `2qR < 1` the result comes from a power series in `(2qR)²` that
/// tends continuously to it.
#[must_use]
pub fn hardsphere_1d(p: &HardsphereParameters, q: f64) -> f64 {
    let phi = p.volfraction;
    let denom = (1.0 - phi).powi(4);
    let dnum = (1.0 + 2.0 * phi).powi(2);

    let a = 2.0 * q * p.radius;
    if a == 0.0 {
        return denom / dnum;
    }

    let alpha = dnum / denom;
    let beta = -6.0 * phi * (1.0 + phi / 2.0).powi(2) / denom;
    let gamma = 0.5 * phi * dnum / denom;

    if a.abs() < SERIES_CUTOFF {
        // -c = 24φ Σ_j (-1)^j a^2j / (2j+1)! [α/(2j+3) + β/(2j+4) + γ/(2j+6)]
        let asq = a * a;
        let mut term = 1.0;
        let mut sum = 0.0;
        let mut k = 0.0;
        for _ in 0..SERIES_TERMS {
            sum += term * (alpha / (k + 3.0) + beta / (k + 4.0) + gamma / (k + 6.0));
            term *= -asq / ((k + 2.0) * (k + 3.0));
            k += 2.0;
        }
        return 1.0 / (1.0 + 24.0 * phi * sum);
    }

    let asq = a * a;
    let ath = asq * a;
    let afor = ath * a;
    let (rsa, rca) = a.sin_cos();

    let calp = alpha * (rsa / asq - rca / a);
    let cbeta = beta * (2.0 * rsa / asq - (asq - 2.0) * rca / ath - 2.0 / ath);
    let cgam = gamma
        * (-rca / a
            + (4.0 / a) * ((3.0 * asq - 6.0) * rca / afor + (asq - 6.0) * rsa / ath + 6.0 / afor));

    let c = -24.0 * phi / a * (calp + cbeta + cgam);
    1.0 / (1.0 - c)
}

/// `S(qx, qy)`; isotropic, so `S(|q|)`.
#[must_use]
pub fn hardsphere_2d(p: &HardsphereParameters, qx: f64, qy: f64) -> f64 {
    hardsphere_1d(p, magnitude(qx, qy))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: HardsphereParameters = HardsphereParameters {
        radius: 50.0,
        volfraction: 0.2,
    };

    #[test]
    fn tends_to_one_at_high_q() {
        let s = hardsphere_1d(&DEFAULT, 10.0);
        assert!((s - 1.0).abs() < 1e-3, "S = {s}");
    }

    #[test]
    fn zero_volume_fraction_is_ideal_gas() {
        let p = HardsphereParameters {
            radius: 50.0,
            volfraction: 0.0,
        };
        for q in [0.0, 0.001, 0.01, 0.1] {
            assert!((hardsphere_1d(&p, q) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn low_q_matches_compressibility_limit() {
        let limit = hardsphere_1d(&DEFAULT, 0.0);
        assert!((limit - 0.8f64.powi(4) / 1.4f64.powi(2)).abs() < 1e-15);
        // Suppressed scattering at low q for a repulsive fluid
        let s = hardsphere_1d(&DEFAULT, 1e-3);
        assert!((s - limit).abs() < 1e-3, "S = {s}, limit = {limit}");
    }

    #[test]
    fn small_q_is_continuous_with_the_limit() {
        let limit = hardsphere_1d(&DEFAULT, 0.0);
        for q in [1e-7, 1e-6, 1e-5, 1e-4] {
            let s = hardsphere_1d(&DEFAULT, q);
            assert!((s - limit).abs() < 1e-5, "S({q}) = {s}, limit = {limit}");
        }
        // Monotone rise towards the first peak
        assert!(hardsphere_1d(&DEFAULT, 1e-4) >= hardsphere_1d(&DEFAULT, 1e-6));
    }

    #[test]
    fn series_matches_closed_form_at_the_cutoff() {
        // 2qR on either side of the switch
        let below = hardsphere_1d(&DEFAULT, (SERIES_CUTOFF - 1e-9) / 100.0);
        let above = hardsphere_1d(&DEFAULT, (SERIES_CUTOFF + 1e-9) / 100.0);
        assert!((below - above).abs() < 1e-10, "{below} vs {above}");
        // Known value from the closed form well inside its stable range
        assert!((hardsphere_1d(&DEFAULT, 0.01) - 0.224_433_405_444_175).abs() < 1e-12);
    }

    #[test]
    fn has_a_correlation_peak() {
        // First peak near q = 2π / (2R)
        let peak = hardsphere_1d(&DEFAULT, core::f64::consts::PI / 50.0);
        assert!(peak > 1.0, "S = {peak}");
    }

    #[test]
    fn two_dimensional_is_isotropic() {
        let s1 = hardsphere_2d(&DEFAULT, 0.03, 0.04);
        let s2 = hardsphere_2d(&DEFAULT, -0.05, 0.0);
        assert!((s1 - s2).abs() < 1e-12);
        assert!((s1 - hardsphere_1d(&DEFAULT, 0.05)).abs() < 1e-12);
    }
}
