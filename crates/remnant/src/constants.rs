//! Physical and model constants for the blast-wave surrogate.

/// Pi
pub const PI: f64 = std::f64::consts::PI;

/// Tau (full turn)
pub const TAU: f64 = std::f64::consts::TAU;

/// Dimensionless Sedov-Taylor constant β in R = β (E/ρ)^{1/5} t^{2/5}
pub const SEDOV_BETA: f64 = 1.15;

/// Adiabatic index of a monatomic ideal gas
pub const GAMMA: f64 = 5.0 / 3.0;

/// Strong-shock compression ratio α = (γ+1)/(γ-1), equal to 4 for γ = 5/3
pub const COMPRESSION_RATIO: f64 = (GAMMA + 1.0) / (GAMMA - 1.0);

/// Mean molecular weight of fully ionized solar-composition gas
pub const MEAN_MOLECULAR_WEIGHT: f64 = 0.6;

/// Shock speed as a fraction of R/t (dR/dt for R ∝ t^{2/5})
pub const SHOCK_SPEED_FACTOR: f64 = 0.4;

/// Breakpoint between the interior and near-front velocity profile branches
pub const PROFILE_BREAK_XI: f64 = 0.8;

/// Total tracer particles shared across all species
pub const DEFAULT_PARTICLE_BUDGET: usize = 2000;

/// Width σ of the half-normal draw for the initial self-similar radius
pub const CORE_SPREAD: f64 = 0.1;

/// Scale applied to the half-normal draw (keeps the progenitor core compact)
pub const CORE_SCALE: f64 = 0.1;

/// Tracer mass draws are A × AMU × Uniform(0.5, 1.5)
pub const MASS_JITTER_RANGE: (f64, f64) = (0.5, 1.5);

/// Half-width (radians) of the per-step angular random walk
pub const ANGULAR_JITTER: f64 = 0.075;
