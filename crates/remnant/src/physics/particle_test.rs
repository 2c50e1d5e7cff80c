//! Tests for tracer spawning, advancement and the polar reflection.

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::{AMU_G, Energy, Time, Velocity, VolumeDensity};

use crate::config::ElementSpecies;
use crate::constants::PI;
use crate::physics::{Particle, ParticleId, ShockState, reflect_polar, velocity_profile};

fn ambient() -> VolumeDensity {
    VolumeDensity::from_grams_per_cm3(1.0e-24)
}

fn shock_at(years: f64) -> ShockState {
    ShockState::at(Energy::from_erg(1.0e51), ambient(), Time::from_years(years))
}

#[test]
fn spawned_particles_start_near_the_centre() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let iron = ElementSpecies::iron();

    for i in 0..500 {
        let p = Particle::spawn(ParticleId(i), &iron, &mut rng);
        assert!((0.0..=1.0).contains(&p.xi));
        // |N(0, 0.1)| × 0.1 is essentially never above 0.06 (6σ)
        assert!(p.xi < 0.06, "xi = {}", p.xi);
        assert!((0.0..=PI).contains(&p.phi));
        assert!((0.0..std::f64::consts::TAU).contains(&p.theta));
    }
}

#[test]
fn spawned_mass_and_diffusion_follow_species() {
    let mut rng = ChaChaRng::seed_from_u64(2);
    let carbon = ElementSpecies::carbon();

    for i in 0..200 {
        let p = Particle::spawn(ParticleId(i), &carbon, &mut rng);
        assert_eq!(p.element, "C");
        assert_eq!(p.mass_number, 12);
        assert!(p.mass >= 0.5 * 12.0 * AMU_G && p.mass < 1.5 * 12.0 * AMU_G);
        assert_relative_eq!(p.diffusion, 1.5e24 / 12.0_f64.sqrt());
    }
}

#[test]
fn spawned_directions_cover_the_sphere() {
    let mut rng = ChaChaRng::seed_from_u64(3);
    let oxygen = ElementSpecies::oxygen();

    let mut mean_cos = 0.0;
    let n = 4000;
    for i in 0..n {
        let p = Particle::spawn(ParticleId(i), &oxygen, &mut rng);
        mean_cos += p.phi.cos();
    }
    mean_cos /= n as f64;

    // cos φ is uniform on (-1, 1) for an isotropic draw
    assert!(mean_cos.abs() < 0.05, "mean cos(phi) = {mean_cos}");
}

#[test]
fn advance_keeps_coordinates_in_range() {
    let mut rng = ChaChaRng::seed_from_u64(4);
    let silicon = ElementSpecies::silicon();
    let mut particles: Vec<Particle> = (0..100)
        .map(|i| Particle::spawn(ParticleId(i), &silicon, &mut rng))
        .collect();

    let dt = Time::from_years(25.0);
    for step in 1..=200 {
        let shock = shock_at(step as f64 * 25.0);
        for p in &mut particles {
            p.advance(&shock, dt.to_seconds(), ambient(), &mut rng);
            assert!((0.0..=1.0).contains(&p.xi));
            assert!((0.0..=PI).contains(&p.phi));
        }
    }
}

#[test]
fn derived_fields_follow_self_similar_state() {
    let mut rng = ChaChaRng::seed_from_u64(5);
    let iron = ElementSpecies::iron();
    let mut p = Particle::spawn(ParticleId(0), &iron, &mut rng);

    let shock = shock_at(300.0);
    let xi_before = p.xi;
    p.advance(&shock, Time::from_years(10.0).to_seconds(), ambient(), &mut rng);

    // Position sits on the sphere of radius ξR
    assert_relative_eq!(p.radius(), p.xi * shock.radius.to_parsecs(), max_relative = 1e-12);
    assert_relative_eq!(p.position.z, p.radius() * p.phi.cos(), epsilon = 1e-12);

    // Velocity is the advective speed of the pre-step ξ, along the new direction
    let expected_speed = shock.velocity.to_km_per_sec() * velocity_profile(xi_before);
    assert_relative_eq!(p.velocity.norm(), expected_speed, max_relative = 1e-12);
    assert_relative_eq!(p.velocity.normalize().dot(&p.direction()), 1.0, epsilon = 1e-12);

    assert_relative_eq!(
        p.temperature,
        shock.temperature.to_kelvin() * (1.0 - p.xi).sqrt(),
        max_relative = 1e-12
    );
    assert!(p.density > 0.0);
}

/// A species whose random-walk step is negligible next to the shock radius.
fn non_diffusing() -> ElementSpecies {
    ElementSpecies::new("X", "", 16, 1.0, 1.0e-30)
}

#[test]
fn advance_moves_xi_by_the_advective_step() {
    let mut rng = ChaChaRng::seed_from_u64(8);
    let shock = shock_at(500.0);
    let dt_sec = Time::from_years(20.0).to_seconds();

    for xi_before in [0.0, 0.3, 0.79, 0.85] {
        let mut p = Particle::spawn(ParticleId(0), &non_diffusing(), &mut rng);
        p.xi = xi_before;

        p.advance(&shock, dt_sec, ambient(), &mut rng);

        let expected = xi_before
            + shock.velocity.to_cm_per_sec() * velocity_profile(xi_before) * dt_sec
                / shock.radius.to_cm();
        assert_relative_eq!(p.xi, expected, max_relative = 1e-12);
    }
}

#[test]
fn advance_clamps_xi_at_the_shock_front() {
    let mut rng = ChaChaRng::seed_from_u64(9);
    let shock = shock_at(100.0);
    let mut p = Particle::spawn(ParticleId(0), &non_diffusing(), &mut rng);
    p.xi = 0.99;

    // Unclamped this would be 0.99 + 0.4 × 10 × 0.025 = 1.09
    p.advance(&shock, Time::from_years(1_000.0).to_seconds(), ambient(), &mut rng);

    assert_eq!(p.xi, 1.0);
    assert_relative_eq!(p.radius(), shock.radius.to_parsecs(), max_relative = 1e-12);
    assert_eq!(p.temperature, 0.0);
}

#[test]
fn advance_at_zero_radius_leaves_xi_alone() {
    let mut rng = ChaChaRng::seed_from_u64(6);
    let iron = ElementSpecies::iron();
    let mut p = Particle::spawn(ParticleId(0), &iron, &mut rng);
    let xi = p.xi;

    p.advance(&shock_at(0.0), 0.0, ambient(), &mut rng);

    assert_eq!(p.xi, xi);
    assert_eq!(p.radius(), 0.0);
    assert_eq!(p.velocity.norm(), 0.0);
    assert!(p.temperature.is_finite());
}

#[test]
fn refresh_uses_given_speed() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let mut p = Particle::spawn(ParticleId(0), &ElementSpecies::carbon(), &mut rng);

    p.refresh(&shock_at(100.0), Velocity::from_km_per_sec(250.0), ambient());

    assert_relative_eq!(p.velocity.norm(), 250.0, max_relative = 1e-12);
}

#[test]
fn reflect_polar_folds_both_poles() {
    assert_relative_eq!(reflect_polar(-0.05), 0.05);
    assert_relative_eq!(reflect_polar(PI + 0.05), PI - 0.05, epsilon = 1e-12);
    assert_eq!(reflect_polar(1.0), 1.0);
    assert_eq!(reflect_polar(0.0), 0.0);
    assert_eq!(reflect_polar(PI), PI);
}

#[test]
fn azimuth_is_shifted_atan2() {
    let mut rng = ChaChaRng::seed_from_u64(8);
    let mut p = Particle::spawn(ParticleId(0), &ElementSpecies::oxygen(), &mut rng);
    p.theta = 0.5;
    p.phi = PI / 2.0;
    p.xi = 0.5;
    p.refresh(&shock_at(1_000.0), Velocity::zero(), ambient());

    assert_relative_eq!(p.azimuth(), 0.5 + PI, epsilon = 1e-12);
}
