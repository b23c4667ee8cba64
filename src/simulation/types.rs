//! Core types for the elevator simulation

use serde::{Deserialize, Serialize};

/// Tolerance used when comparing a fractional position against a floor
pub const ARRIVAL_TOLERANCE: f64 = 1e-6;

/// Default lowest valid floor
pub const DEFAULT_LOWEST_FLOOR: i32 = 0;

/// Default highest valid floor
pub const DEFAULT_HIGHEST_FLOOR: i32 = 100;

/// Default number of time steps needed to travel one floor
pub const DEFAULT_TRAVEL_TIME: f64 = 10.0;

/// Default duration of a single tick
pub const DEFAULT_DELTA: f64 = 1.0;

/// A wrapper type for elevator IDs
///
/// Ids are handed out densely from zero by the manager, so the ordering of
/// ids is also the order elevators are updated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElevatorId(pub usize);

impl std::fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Inclusive range of floors an elevator may be sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorRange {
    pub lowest: i32,
    pub highest: i32,
}

impl FloorRange {
    pub fn new(lowest: i32, highest: i32) -> Self {
        Self { lowest, highest }
    }

    pub fn is_valid(&self) -> bool {
        self.lowest <= self.highest
    }

    pub fn contains(&self, floor: i32) -> bool {
        (self.lowest..=self.highest).contains(&floor)
    }

    /// Clamp a fractional position into the range
    pub fn clamp_position(&self, position: f64) -> f64 {
        position.clamp(self.lowest as f64, self.highest as f64)
    }
}

impl Default for FloorRange {
    fn default() -> Self {
        Self {
            lowest: DEFAULT_LOWEST_FLOOR,
            highest: DEFAULT_HIGHEST_FLOOR,
        }
    }
}

impl std::fmt::Display for FloorRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lowest, self.highest)
    }
}
