//! WASM bindings for the remnant blast-wave model.
//!
//! The browser front end owns rendering and the animation loop; this crate
//! only exposes the model and its statistics.
//!
//! # Architecture
//!
//! Simulations live in thread-local storage (WASM is single-threaded) keyed
//! by an opaque id. Mutating calls take the id; reads return serializable
//! snapshots, so JavaScript never holds a reference into particle state.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! const simId = remnant_create({ energy: 1e51, density: 1e-24 });
//!
//! function frame() {
//!   remnant_step(simId, 10.0);                    // 10 years per frame
//!   const particles = remnant_particles(simId);   // positions in pc
//!   const radial = remnant_radial_histogram(simId);
//!   draw(particles, radial);
//!   requestAnimationFrame(frame);
//! }
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use remnant::{AggregatorConfig, ModelConfig, Particle, RemnantError, ShockState, Simulation};
use units::Time;

// =============================================================================
// Serialization helpers
// =============================================================================

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn to_js_error(error: RemnantError) -> JsError {
    JsError::new(&error.to_string())
}

/// `undefined`/`null` select the defaults; anything else must parse.
fn config_from_js<T: serde::de::DeserializeOwned + Default>(value: JsValue) -> Result<T, JsError> {
    if value.is_undefined() || value.is_null() {
        Ok(T::default())
    } else {
        from_js(value)
    }
}

// =============================================================================
// Thread-local storage for simulation state
// =============================================================================

thread_local! {
    static SIMULATIONS: RefCell<HashMap<u32, Simulation>> = RefCell::new(HashMap::new());
    static NEXT_SIM_ID: RefCell<u32> = const { RefCell::new(0) };
}

fn with_simulation<R>(
    sim_id: u32,
    f: impl FnOnce(&mut Simulation) -> Result<R, JsError>,
) -> Result<R, JsError> {
    SIMULATIONS.with(|sims| {
        let mut sims = sims.borrow_mut();
        let sim = sims
            .get_mut(&sim_id)
            .ok_or_else(|| JsError::new(&format!("Simulation {} not found", sim_id)))?;
        f(sim)
    })
}

// =============================================================================
// Serializable types for JavaScript interop
// =============================================================================

/// Full configuration accepted by `remnant_create`: model fields at the top
/// level, aggregator settings under `statistics`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConfig {
    #[serde(flatten)]
    pub model: ModelConfig,
    #[serde(default)]
    pub statistics: AggregatorConfig,
}

/// Shock state with plain numbers in display units.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    /// Years since explosion
    pub time: f64,
    /// Shock radius in pc
    pub radius: f64,
    /// Shock speed in km/s
    pub velocity: f64,
    /// Post-shock temperature in K
    pub temperature: f64,
    /// Post-shock temperature in keV
    pub temperature_kev: f64,
}

impl From<ShockState> for StateSnapshot {
    fn from(state: ShockState) -> Self {
        Self {
            time: state.time.to_years(),
            radius: state.radius.to_parsecs(),
            velocity: state.velocity.to_km_per_sec(),
            temperature: state.temperature.to_kelvin(),
            temperature_kev: state.temperature.to_kev(),
        }
    }
}

/// Per-tracer data needed to draw a frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleSnapshot {
    pub id: u32,
    pub element: String,
    /// Display tag of the element, for colouring
    pub tag: String,
    /// Position [x, y, z] in pc
    pub position: [f64; 3],
    /// Velocity [x, y, z] in km/s
    pub velocity: [f64; 3],
    pub xi: f64,
    pub temperature: f64,
    pub density: f64,
}

impl From<&Particle> for ParticleSnapshot {
    fn from(p: &Particle) -> Self {
        Self {
            id: p.id.0,
            element: p.element.clone(),
            tag: p.tag.clone(),
            position: [p.position.x, p.position.y, p.position.z],
            velocity: [p.velocity.x, p.velocity.y, p.velocity.z],
            xi: p.xi,
            temperature: p.temperature,
            density: p.density,
        }
    }
}

// =============================================================================
// Simulation management functions
// =============================================================================

/// Create a new simulation.
///
/// # Arguments
/// * `config` - Optional object; missing fields take the model defaults
///   (1e51 erg, 1e-24 g/cm³, Fe/Si/O/C, 2000 tracers, seed 42)
///
/// # Returns
/// A simulation ID for use with other functions
#[wasm_bindgen]
pub fn remnant_create(config: JsValue) -> Result<u32, JsError> {
    let config: CreateConfig = config_from_js(config)?;
    let simulation = Simulation::new(config.model, config.statistics).map_err(to_js_error)?;

    let id = NEXT_SIM_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    SIMULATIONS.with(|sims| {
        sims.borrow_mut().insert(id, simulation);
    });

    Ok(id)
}

/// Delete a simulation to free memory.
#[wasm_bindgen]
pub fn remnant_delete(sim_id: u32) {
    SIMULATIONS.with(|sims| {
        sims.borrow_mut().remove(&sim_id);
    });
}

/// Rebuild a simulation from a new configuration, keeping its ID.
///
/// On an invalid configuration the running simulation is left untouched.
#[wasm_bindgen]
pub fn remnant_reset(sim_id: u32, config: JsValue) -> Result<(), JsError> {
    let config: ModelConfig = config_from_js(config)?;
    with_simulation(sim_id, |sim| sim.reset(config).map_err(to_js_error))
}

// =============================================================================
// Time stepping
// =============================================================================

/// Advance by `dt_years` and refresh all statistics.
///
/// # Returns
/// The new shock state
#[wasm_bindgen]
pub fn remnant_step(sim_id: u32, dt_years: f64) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| {
        let state = sim.advance(Time::from_years(dt_years));
        to_js(&StateSnapshot::from(state))
    })
}

/// Advance `steps` times by `dt_years`.
#[wasm_bindgen]
pub fn remnant_run(sim_id: u32, dt_years: f64, steps: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| {
        let state = sim.run(Time::from_years(dt_years), steps as usize);
        to_js(&StateSnapshot::from(state))
    })
}

// =============================================================================
// Queries
// =============================================================================

#[wasm_bindgen]
pub fn remnant_state(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| to_js(&StateSnapshot::from(sim.state())))
}

/// Snapshot of every tracer, ordered by id.
#[wasm_bindgen]
pub fn remnant_particles(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| {
        let particles: Vec<ParticleSnapshot> =
            sim.model().particles().iter().map(ParticleSnapshot::from).collect();
        to_js(&particles)
    })
}

/// Flat [x0, y0, z0, x1, ...] positions in pc for direct upload to a buffer.
#[wasm_bindgen]
pub fn remnant_positions(sim_id: u32) -> Result<Vec<f64>, JsError> {
    with_simulation(sim_id, |sim| {
        Ok(sim
            .model()
            .particles()
            .iter()
            .flat_map(|p| [p.position.x, p.position.y, p.position.z])
            .collect())
    })
}

#[wasm_bindgen]
pub fn remnant_radial_histogram(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| to_js(&sim.statistics().radial_histogram()))
}

#[wasm_bindgen]
pub fn remnant_angular_histogram(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| to_js(&sim.statistics().angular_histogram()))
}

/// Retained samples, oldest first.
#[wasm_bindgen]
pub fn remnant_time_series(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| to_js(&sim.statistics().time_series().to_vec()))
}

#[wasm_bindgen]
pub fn remnant_species_summary(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| to_js(&sim.statistics().species_summary()))
}

/// Configured element species (name, A, tag, massFrac, D0) for legends.
#[wasm_bindgen]
pub fn remnant_species(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| to_js(&sim.model().species()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use remnant::PhysicsModel;

    #[test]
    fn state_snapshot_converts_units() {
        let model = PhysicsModel::with_seed(ModelConfig::default(), 1).unwrap();
        let mut sim = Simulation::from_parts(model, Default::default());
        let state = sim.advance(Time::from_years(100.0));

        let snapshot = StateSnapshot::from(state);

        assert_eq!(snapshot.time, 100.0);
        assert_eq!(snapshot.radius, state.radius.to_parsecs());
        assert!(snapshot.temperature_kev > 0.0);
    }

    #[test]
    fn particle_snapshot_copies_position() {
        let mut model = PhysicsModel::with_seed(ModelConfig::default(), 1).unwrap();
        model.step(Time::from_years(100.0));
        let p = &model.particles()[10];

        let snapshot = ParticleSnapshot::from(p);

        assert_eq!(snapshot.id, 10);
        assert_eq!(snapshot.element, p.element);
        assert_eq!(snapshot.tag, "#ff6b35");
        assert_eq!(snapshot.position, [p.position.x, p.position.y, p.position.z]);
    }
}
