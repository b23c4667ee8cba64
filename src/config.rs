//! Scenario configuration
//!
//! A scenario describes the elevators, where they start and which floors
//! each one should visit. It can be read from a TOML file; any field left
//! out falls back to the reference scenario (one elevator, ten time units
//! per floor, starting at floor 12 and visiting 2, 9, 11 and 32).

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::simulation::{FloorRange, SimError, DEFAULT_DELTA, DEFAULT_TRAVEL_TIME};

/// Starting floor of the reference scenario
pub const REFERENCE_INITIAL_FLOOR: i32 = 12;

/// Floors visited in the reference scenario
pub const REFERENCE_FLOORS: [i32; 4] = [2, 9, 11, 32];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub elevator_count: usize,
    /// Time units needed to travel one floor, one entry per elevator
    pub travel_times: Vec<f64>,
    pub initial_floor: i32,
    pub floor_range: FloorRange,
    /// Duration of one tick
    pub delta: f64,
    /// Give up after this many ticks. Unlimited when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks: Option<u64>,
    /// Floors to visit, indexed by elevator id
    pub desired_floors: Vec<Vec<i32>>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            elevator_count: 1,
            travel_times: vec![DEFAULT_TRAVEL_TIME],
            initial_floor: REFERENCE_INITIAL_FLOOR,
            floor_range: FloorRange::default(),
            delta: DEFAULT_DELTA,
            max_ticks: None,
            desired_floors: vec![REFERENCE_FLOORS.to_vec()],
        }
    }
}

impl ScenarioConfig {
    /// Parse a scenario from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ScenarioConfig =
            toml::from_str(text).context("Failed to parse scenario configuration")?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize scenario configuration")
    }

    /// Check the settings that no other component validates
    ///
    /// Elevator count and floor checks happen when the manager is built.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(SimError::InvalidTimeStep(self.delta));
        }
        if !self.floor_range.is_valid() {
            return Err(SimError::InvalidFloorRange {
                lowest: self.floor_range.lowest,
                highest: self.floor_range.highest,
            });
        }
        Ok(())
    }

    /// Replace every elevator's queue with `stops` random floors
    ///
    /// Passing a seed makes the generated queues reproducible. Fails without
    /// touching the queues when the floor range is empty.
    pub fn randomize_floors(&mut self, stops: usize, seed: Option<u64>) -> Result<(), SimError> {
        if !self.floor_range.is_valid() {
            return Err(SimError::InvalidFloorRange {
                lowest: self.floor_range.lowest,
                highest: self.floor_range.highest,
            });
        }

        match seed {
            Some(seed) => self.fill_random_floors(stops, &mut StdRng::seed_from_u64(seed)),
            None => self.fill_random_floors(stops, &mut rand::rng()),
        }
        Ok(())
    }

    fn fill_random_floors<R: Rng>(&mut self, stops: usize, rng: &mut R) {
        let range = self.floor_range;
        self.desired_floors = (0..self.elevator_count)
            .map(|_| {
                (0..stops)
                    .map(|_| rng.random_range(range.lowest..=range.highest))
                    .collect()
            })
            .collect();
    }
}

/// Load a scenario from a TOML file
pub fn load_config(path: &Path) -> Result<ScenarioConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
    ScenarioConfig::from_toml_str(&text)
        .with_context(|| format!("Invalid configuration in {}", path.display()))
}
