//! Model configuration: explosion parameters and the element species that
//! make up the tracer ensemble.
//!
//! | field            | default                                   |
//! |------------------|-------------------------------------------|
//! | `energy`         | 1e51 erg                                  |
//! | `density`        | 1e-24 g/cm³                               |
//! | `elements`       | Fe 0.15, Si 0.25, O 0.35, C 0.25          |
//! | `particleBudget` | 2000                                      |
//! | `seed`           | 42                                        |
//!
//! Missing JSON fields take these defaults. Mass fractions are never
//! normalized; a set that does not sum to one is logged and used as given.

use log::warn;
use serde::{Deserialize, Serialize};
use units::{Energy, VolumeDensity};

use crate::constants::DEFAULT_PARTICLE_BUDGET;
use crate::error::{Result, invalid};

/// Tolerance on the mass-fraction total before a warning is logged
const MASS_FRACTION_TOLERANCE: f64 = 1e-6;

/// One chemical element tracked by the ensemble.
///
/// Immutable once the model is built. Serialized with the short keys used by
/// the front end (`A`, `massFrac`, `D0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSpecies {
    pub name: String,

    /// Atomic mass number A
    ///
    /// Signed so that a negative value in a JSON config is reported by
    /// `validate` rather than as a parse failure.
    #[serde(rename = "A")]
    pub mass_number: i32,

    /// Display tag for legends (a CSS colour in the default set)
    #[serde(default)]
    pub tag: String,

    /// Fraction of the particle budget assigned to this species, in (0, 1]
    #[serde(rename = "massFrac")]
    pub mass_fraction: f64,

    /// Base diffusion scale D0 (cm²/s) before the 1/√A scaling
    #[serde(rename = "D0")]
    pub base_diffusion: f64,
}

impl ElementSpecies {
    pub fn new(
        name: impl Into<String>,
        tag: impl Into<String>,
        mass_number: i32,
        mass_fraction: f64,
        base_diffusion: f64,
    ) -> Self {
        Self {
            name: name.into(),
            mass_number,
            tag: tag.into(),
            mass_fraction,
            base_diffusion,
        }
    }

    /// Same species with a different share of the particle budget.
    pub fn with_fraction(mut self, mass_fraction: f64) -> Self {
        self.mass_fraction = mass_fraction;
        self
    }

    pub fn iron() -> Self {
        Self::new("Fe", "#ff6b35", 56, 0.15, 8.0e23)
    }

    pub fn silicon() -> Self {
        Self::new("Si", "#4ecdc4", 28, 0.25, 1.0e24)
    }

    pub fn oxygen() -> Self {
        Self::new("O", "#45b7d1", 16, 0.35, 1.2e24)
    }

    pub fn carbon() -> Self {
        Self::new("C", "#96ceb4", 12, 0.25, 1.5e24)
    }

    /// The four-species reference composition (Fe, Si, O, C).
    pub fn default_set() -> Vec<Self> {
        vec![Self::iron(), Self::silicon(), Self::oxygen(), Self::carbon()]
    }

    /// Per-particle diffusion coefficient D = D0 / √A (cm²/s).
    ///
    /// Heavier nuclei spread more slowly.
    pub fn diffusion_coefficient(&self) -> f64 {
        self.base_diffusion / f64::from(self.mass_number).sqrt()
    }

    fn validate(&self) -> Result<()> {
        if self.mass_number <= 0 {
            return Err(invalid(format!(
                "species {}: mass number must be positive",
                self.name
            )));
        }
        if !(self.mass_fraction > 0.0 && self.mass_fraction <= 1.0) {
            return Err(invalid(format!(
                "species {}: mass fraction {} outside (0, 1]",
                self.name, self.mass_fraction
            )));
        }
        if !(self.base_diffusion.is_finite() && self.base_diffusion > 0.0) {
            return Err(invalid(format!(
                "species {}: diffusion scale {} must be positive",
                self.name, self.base_diffusion
            )));
        }
        Ok(())
    }
}

/// Explosion parameters and ensemble composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelConfig {
    /// Explosion energy (erg)
    pub energy: Energy,
    /// Ambient medium density (g/cm³)
    pub density: VolumeDensity,
    pub elements: Vec<ElementSpecies>,
    /// Total tracer particles, split across species by mass fraction
    pub particle_budget: usize,
    /// Seed used when the model builds its own random source
    pub seed: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            energy: Energy::from_erg(1.0e51),
            density: VolumeDensity::from_grams_per_cm3(1.0e-24),
            elements: ElementSpecies::default_set(),
            particle_budget: DEFAULT_PARTICLE_BUDGET,
            seed: 42,
        }
    }
}

impl ModelConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// ```
    /// use remnant::ModelConfig;
    ///
    /// let config = ModelConfig::from_json_str(r#"{ "energy": 2e51 }"#).unwrap();
    /// assert_eq!(config.energy.to_erg(), 2e51);
    /// assert_eq!(config.elements.len(), 4);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ModelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_energy(mut self, energy: Energy) -> Self {
        self.energy = energy;
        self
    }

    pub fn with_density(mut self, density: VolumeDensity) -> Self {
        self.density = density;
        self
    }

    pub fn with_elements(mut self, elements: Vec<ElementSpecies>) -> Self {
        self.elements = elements;
        self
    }

    pub fn with_particle_budget(mut self, budget: usize) -> Self {
        self.particle_budget = budget;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every field, failing on the first violation.
    pub fn validate(&self) -> Result<()> {
        let energy = self.energy.to_erg();
        if !(energy.is_finite() && energy > 0.0) {
            return Err(invalid(format!("energy must be positive, got {energy}")));
        }

        let density = self.density.to_grams_per_cm3();
        if !(density.is_finite() && density > 0.0) {
            return Err(invalid(format!("density must be positive, got {density}")));
        }

        if self.elements.is_empty() {
            return Err(invalid("at least one element species is required"));
        }
        if self.particle_budget == 0 {
            return Err(invalid("particle budget must be positive"));
        }

        for species in &self.elements {
            species.validate()?;
        }

        let total = self.mass_fraction_total();
        if (total - 1.0).abs() > MASS_FRACTION_TOLERANCE {
            warn!("Element mass fractions sum to {total:.4}, not 1; using them as given");
        }

        Ok(())
    }

    pub fn mass_fraction_total(&self) -> f64 {
        self.elements.iter().map(|s| s.mass_fraction).sum()
    }

    /// Particles allotted to each species: ⌊budget × massFrac⌋.
    ///
    /// The product is floored as computed, so 100 × 0.29 (28.999…) gives 28.
    /// The rounding remainder is dropped, not redistributed.
    pub fn species_counts(&self) -> Vec<usize> {
        let budget = self.particle_budget as f64;
        self.elements
            .iter()
            .map(|s| (budget * s.mass_fraction).floor() as usize)
            .collect()
    }
}
