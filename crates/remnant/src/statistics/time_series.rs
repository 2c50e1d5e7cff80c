//! Bounded history of the macroscopic shock state.

use std::collections::VecDeque;

use serde::Serialize;

use crate::physics::ShockState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesSample {
    pub time: f64,        // years
    pub radius: f64,      // pc
    pub velocity: f64,    // km/s
    pub temperature: f64, // K
    pub particle_count: usize,
}

impl TimeSeriesSample {
    pub fn from_state(state: &ShockState, particle_count: usize) -> Self {
        Self {
            time: state.time.to_years(),
            radius: state.radius.to_parsecs(),
            velocity: state.velocity.to_km_per_sec(),
            temperature: state.temperature.to_kelvin(),
            particle_count,
        }
    }
}

/// FIFO of samples capped at `capacity`; the oldest sample is evicted first.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    samples: VecDeque<TimeSeriesSample>,
    capacity: usize,
}

impl TimeSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a sample, evicting from the front once over capacity.
    pub fn push(&mut self, sample: TimeSeriesSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<&TimeSeriesSample> {
        self.samples.front()
    }

    pub fn latest(&self) -> Option<&TimeSeriesSample> {
        self.samples.back()
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &TimeSeriesSample> {
        self.samples.iter()
    }

    pub fn to_vec(&self) -> Vec<TimeSeriesSample> {
        self.samples.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
