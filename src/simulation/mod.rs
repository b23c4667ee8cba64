//! Standalone elevator simulation module
//!
//! This module contains the elevator model, the manager that schedules
//! queued floors across elevators, and the driver that runs a scenario
//! to completion.

mod driver;
mod elevator;
mod elevator_manager;
mod error;
mod types;

pub use driver::{build_manager, run, run_until_idle, SimReport};
pub use elevator::Elevator;
pub use elevator_manager::ElevatorManager;
pub use error::SimError;
pub use types::{
    ElevatorId, FloorRange, ARRIVAL_TOLERANCE, DEFAULT_DELTA, DEFAULT_HIGHEST_FLOOR,
    DEFAULT_LOWEST_FLOOR, DEFAULT_TRAVEL_TIME,
};
