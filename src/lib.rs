//! Elevator Simulation Library
//!
//! Discrete-time simulation of elevators working through queues of floors.

pub mod config;
pub mod simulation;
