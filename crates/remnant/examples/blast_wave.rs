//! Evolve a canonical 10⁵¹ erg remnant for 10 kyr and print its statistics.
//!
//! Run with `RUST_LOG=debug` to see every step.

use remnant::{AggregatorConfig, ModelConfig, Simulation};
use units::Time;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ModelConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => ModelConfig::default(),
    };
    let mut sim = Simulation::new(config, AggregatorConfig::default())?;

    println!("=== Sedov-Taylor blast wave ===");
    println!(
        "{:>10} {:>10} {:>12} {:>12}",
        "t (yr)", "R (pc)", "v (km/s)", "T (keV)"
    );

    let dt = Time::from_years(100.0);
    for step in 1..=100 {
        let state = sim.advance(dt);
        if step % 10 == 0 {
            println!(
                "{:>10.0} {:>10.2} {:>12.0} {:>12.2}",
                state.time.to_years(),
                state.radius.to_parsecs(),
                state.velocity.to_km_per_sec(),
                state.temperature.to_kev()
            );
        }
    }

    let stats = sim.statistics();

    println!("\n=== Radial distribution ===");
    let peak = stats
        .radial_histogram()
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(1)
        .max(1);
    for bin in stats.radial_histogram().iter().step_by(5) {
        let bar = "#".repeat(bin.count * 40 / peak);
        println!("{:>6.2} pc {:>5} {}", bin.radius, bin.count, bar);
    }

    println!("\n=== Composition ===");
    for species in stats.species_summary() {
        println!(
            "{:>3} ({}): {:>5} tracers, mean ξ = {:.3}, mean T = {:.2e} K",
            species.element,
            species.tag,
            species.count,
            species.mean_xi,
            species.mean_temperature
        );
    }

    Ok(())
}
