//! Lorentzian peak.

/// Resolved parameters of the Lorentzian.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LorentzianParameters {
    /// Peak area.
    pub scale: f64,
    /// Full width at half maximum.
    pub gamma: f64,
    /// Peak position.
    pub center: f64,
}

/// `scale / π · (γ/2) / ((x - x₀)² + (γ/2)²)`.
#[must_use]
pub fn lorentzian(p: &LorentzianParameters, x: f64) -> f64 {
    let half = 0.5 * p.gamma;
    let dx = x - p.center;
    p.scale / core::f64::consts::PI * half / (dx * dx + half * half)
}
