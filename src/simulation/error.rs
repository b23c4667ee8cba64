//! Error types for the elevator simulation
//!
//! Every variant is fatal for the run it occurs in. Nothing in the library
//! retries; the caller decides whether to terminate.

use super::types::{ElevatorId, FloorRange};

/// Simulation error types
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A commanded floor lies outside the configured valid range
    OutOfRangeFloor { floor: i32, range: FloorRange },

    /// Elevator count and travel time list disagree at construction
    ElevatorCountMismatch { elevators: usize, travel_times: usize },

    /// No elevator is configured under this id
    UnknownElevator(ElevatorId),

    /// Travel time per floor must be finite and strictly positive
    InvalidTravelTime(f64),

    /// Lowest floor is above the highest floor
    InvalidFloorRange { lowest: i32, highest: i32 },

    /// Tick duration must be finite and strictly positive
    InvalidTimeStep(f64),

    /// The run did not finish within the configured number of ticks
    StepLimitExceeded { max_ticks: u64 },
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::OutOfRangeFloor { floor, range } => {
                write!(f, "Floor {} is outside the valid range {}", floor, range)
            }
            SimError::ElevatorCountMismatch {
                elevators,
                travel_times,
            } => write!(
                f,
                "Number of elevators ({}) didn't match number of travel times ({})",
                elevators, travel_times
            ),
            SimError::UnknownElevator(id) => write!(f, "Unknown elevator {}", id),
            SimError::InvalidTravelTime(time) => {
                write!(f, "Invalid travel time per floor: {}", time)
            }
            SimError::InvalidFloorRange { lowest, highest } => write!(
                f,
                "Invalid floor range: lowest {} is above highest {}",
                lowest, highest
            ),
            SimError::InvalidTimeStep(dt) => write!(f, "Invalid time step: {}", dt),
            SimError::StepLimitExceeded { max_ticks } => {
                write!(f, "Simulation did not finish within {} ticks", max_ticks)
            }
        }
    }
}

impl std::error::Error for SimError {}
