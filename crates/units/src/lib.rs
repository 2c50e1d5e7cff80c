pub mod energy;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod volume_density;

#[cfg(test)]
mod length_test;

pub use energy::{Energy, FOE_ERG};
pub use length::{Length, PC_TO_CM};
pub use mass::{Mass, AMU_G, SOLAR_MASS_G};
pub use temperature::Temperature;
pub use time::{Time, SECONDS_PER_YEAR};
pub use velocity::Velocity;
pub use volume_density::VolumeDensity;
