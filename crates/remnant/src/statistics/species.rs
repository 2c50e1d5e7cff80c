//! Per-element breakdown of the ensemble, for legends and composition plots.

use serde::Serialize;

use crate::physics::Particle;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesSummary {
    pub element: String,
    /// Display tag carried by the element's tracers
    pub tag: String,
    pub count: usize,
    /// Summed tracer mass (g)
    pub total_mass: f64,
    pub mean_xi: f64,
    /// Mean tracer temperature (K)
    pub mean_temperature: f64,
}

/// Group tracers by element, in order of first appearance.
///
/// The model creates species in contiguous runs, so a linear scan with a
/// short list of groups is enough.
pub fn summarize_species(particles: &[Particle]) -> Vec<SpeciesSummary> {
    let mut summaries: Vec<SpeciesSummary> = Vec::new();

    for particle in particles {
        let index = match summaries.iter().position(|s| s.element == particle.element) {
            Some(index) => index,
            None => {
                summaries.push(SpeciesSummary {
                    element: particle.element.clone(),
                    tag: particle.tag.clone(),
                    count: 0,
                    total_mass: 0.0,
                    mean_xi: 0.0,
                    mean_temperature: 0.0,
                });
                summaries.len() - 1
            }
        };
        let summary = &mut summaries[index];
        summary.count += 1;
        summary.total_mass += particle.mass;
        // Running sums, divided below
        summary.mean_xi += particle.xi;
        summary.mean_temperature += particle.temperature;
    }

    for summary in &mut summaries {
        let n = summary.count as f64;
        summary.mean_xi /= n;
        summary.mean_temperature /= n;
    }

    summaries
}
