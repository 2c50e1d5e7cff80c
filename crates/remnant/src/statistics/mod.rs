//! Ensemble statistics recomputed after every physics step.
//!
//! Histograms are rebuilt from scratch on each ingest rather than updated
//! incrementally, so bin membership depends only on the current snapshot.

mod aggregator;
mod histogram;
mod species;
mod time_series;

#[cfg(test)]
mod aggregator_test;

pub use aggregator::{AggregatorConfig, StatisticsAggregator};
pub use histogram::{AngularBin, RadialBin, angular_histogram, radial_histogram};
pub use species::{SpeciesSummary, summarize_species};
pub use time_series::{TimeSeries, TimeSeriesSample};
