//! Radial and azimuthal distributions of the tracer ensemble.

use serde::Serialize;
use units::Length;

use crate::constants::{PI, TAU};
use crate::physics::Particle;

/// One radial shell of the ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialBin {
    pub index: usize,
    /// Bin centre (pc)
    pub radius: f64,
    pub count: usize,
    /// Summed tracer mass (g)
    pub mass: f64,
    /// Mass per annulus area (g/pc²)
    pub density: f64,
}

/// One azimuthal sector of the ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngularBin {
    pub index: usize,
    /// Sector centre in [0, 2π) (radians)
    pub angle: f64,
    pub count: usize,
}

/// Bin tracers by distance from the centre into `bins` equal shells
/// spanning [0, R_shock].
///
/// Tracers at or numerically beyond the shock land in the last bin. Density is
/// normalized by the 2D annulus area π((i+1)² − i²)Δr², matching the
/// projected view the distribution is drawn for. With R = 0 every tracer
/// falls in bin 0 and all densities are zero.
pub fn radial_histogram(
    particles: &[Particle],
    shock_radius: Length,
    bins: usize,
) -> Vec<RadialBin> {
    let width = shock_radius.to_parsecs() / bins as f64;

    let mut histogram: Vec<RadialBin> = (0..bins)
        .map(|index| RadialBin {
            index,
            radius: (index as f64 + 0.5) * width,
            count: 0,
            mass: 0.0,
            density: 0.0,
        })
        .collect();

    if bins == 0 {
        return histogram;
    }

    for particle in particles {
        let index = if width > 0.0 {
            ((particle.radius() / width).floor() as usize).min(bins - 1)
        } else {
            0
        };
        histogram[index].count += 1;
        histogram[index].mass += particle.mass;
    }

    if width > 0.0 {
        for bin in &mut histogram {
            let i = bin.index as f64;
            let annulus = PI * ((i + 1.0).powi(2) - i.powi(2)) * width * width;
            bin.density = bin.mass / annulus;
        }
    }

    histogram
}

/// Count tracers per azimuthal sector, using atan2(y, x) + π in [0, 2π].
pub fn angular_histogram(particles: &[Particle], bins: usize) -> Vec<AngularBin> {
    let sector = TAU / bins as f64;

    let mut histogram: Vec<AngularBin> = (0..bins)
        .map(|index| AngularBin {
            index,
            angle: (index as f64 + 0.5) * sector,
            count: 0,
        })
        .collect();

    if bins == 0 {
        return histogram;
    }

    for particle in particles {
        let index = ((particle.azimuth() / sector).floor() as usize).min(bins - 1);
        histogram[index].count += 1;
    }

    histogram
}
