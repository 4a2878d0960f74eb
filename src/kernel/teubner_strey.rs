//! Teubner–Strey microemulsion model.

/// Resolved parameters of the Teubner–Strey function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeubnerStreyParameters {
    /// Constant term `a₂`.
    pub scale: f64,
    /// Quadratic coefficient.
    pub c1: f64,
    /// Quartic coefficient.
    pub c2: f64,
}

impl TeubnerStreyParameters {
    /// Correlation length `ξ`, if defined for these coefficients.
    #[must_use]
    pub fn correlation_length(&self) -> Option<f64> {
        if self.c2 <= 0.0 || self.scale < 0.0 {
            return None;
        }
        let inv_sq = 0.5 * (self.scale / self.c2).sqrt() + self.c1 / (4.0 * self.c2);
        (inv_sq > 0.0).then(|| inv_sq.powf(-0.5))
    }

    /// Quasi-periodic repeat distance `d / 2π`, if defined for these coefficients.
    #[must_use]
    pub fn repeat_distance(&self) -> Option<f64> {
        if self.c2 <= 0.0 || self.scale < 0.0 {
            return None;
        }
        let inv_sq = 0.5 * (self.scale / self.c2).sqrt() - self.c1 / (4.0 * self.c2);
        (inv_sq > 0.0).then(|| inv_sq.powf(-0.5))
    }
}

/// `1 / (a₂ + c₁ q² + c₂ q⁴)`, without background.
#[must_use]
pub fn teubner_strey(p: &TeubnerStreyParameters, q: f64) -> f64 {
    let q2 = q * q;
    1.0 / (p.scale + p.c1 * q2 + p.c2 * q2 * q2)
}
