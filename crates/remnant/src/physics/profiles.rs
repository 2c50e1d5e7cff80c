//! Normalized radial profiles behind the shock, as functions of ξ = r/R.

use crate::constants::{COMPRESSION_RATIO, GAMMA, PROFILE_BREAK_XI};

/// Gas velocity as a fraction of the shock speed.
///
/// Interior (ξ < 0.8): 1 − 1.2ξ + 0.8ξ².
/// Near the front (ξ ≥ 0.8): linear falloff 0.5 (1 − ξ) / 0.2.
///
/// The two branches do not meet at the breakpoint (0.552 vs 0.5); tracers
/// crossing ξ = 0.8 see a small step in speed.
pub fn velocity_profile(xi: f64) -> f64 {
    if xi < PROFILE_BREAK_XI {
        1.0 - 1.2 * xi + 0.8 * xi * xi
    } else {
        0.5 * (1.0 - xi) / (1.0 - PROFILE_BREAK_XI)
    }
}

/// Gas density as a fraction of the ambient density:
/// (1 − ξ)^{1/(γ−1)} × (1 − ξ/α)^{−1}, with α the strong-shock compression.
pub fn density_profile(xi: f64) -> f64 {
    (1.0 - xi).powf(1.0 / (GAMMA - 1.0)) / (1.0 - xi / COMPRESSION_RATIO)
}

/// Temperature as a fraction of the post-shock temperature: √(1 − ξ).
pub fn temperature_profile(xi: f64) -> f64 {
    (1.0 - xi).sqrt()
}
