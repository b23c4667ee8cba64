//! Runs a complete scenario
//!
//! The driver owns the manager for the length of a run: it loads every
//! queue, ticks until nothing is pending and collects what each elevator
//! visited.

use log::{info, warn};
use std::collections::BTreeMap;

use super::elevator_manager::ElevatorManager;
use super::error::SimError;
use super::types::ElevatorId;
use crate::config::ScenarioConfig;

/// Outcome of a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct SimReport {
    /// Number of ticks executed
    pub ticks: u64,
    /// Simulated time, `ticks * delta`
    pub elapsed_time: f64,
    pub visited: BTreeMap<ElevatorId, Vec<i32>>,
}

impl SimReport {
    pub fn visited_floors(&self, id: ElevatorId) -> Option<&[i32]> {
        self.visited.get(&id).map(Vec::as_slice)
    }

    /// `(ticks, [floors])` for one elevator
    pub fn summary_line(&self, id: ElevatorId) -> Option<String> {
        self.visited_floors(id)
            .map(|floors| format!("({}, {:?})", self.ticks, floors))
    }
}

/// Build a manager and load the queues described by `config`
pub fn build_manager(config: &ScenarioConfig) -> Result<ElevatorManager, SimError> {
    config.validate()?;

    let mut manager = ElevatorManager::new(
        config.elevator_count,
        &config.travel_times,
        config.initial_floor,
        config.floor_range,
    )?;

    for (idx, floors) in config.desired_floors.iter().enumerate() {
        manager.set_desired_floors(ElevatorId(idx), floors.clone())?;
    }

    Ok(manager)
}

/// Tick `manager` until no elevator has floors queued
///
/// Returns the number of ticks run. With `max_ticks` set, a run that is
/// still busy after that many ticks fails instead of looping forever.
pub fn run_until_idle(
    manager: &mut ElevatorManager,
    delta: f64,
    max_ticks: Option<u64>,
) -> Result<u64, SimError> {
    let mut ticks: u64 = 0;
    while manager.has_pending_work() {
        if let Some(max_ticks) = max_ticks {
            if ticks >= max_ticks {
                warn!("Stopping simulation after {} ticks with work still pending", ticks);
                return Err(SimError::StepLimitExceeded { max_ticks });
            }
        }
        ticks += 1;
        manager.tick(delta)?;
    }
    Ok(ticks)
}

/// Run the scenario described by `config` to completion
pub fn run(config: &ScenarioConfig) -> Result<SimReport, SimError> {
    let mut manager = build_manager(config)?;

    info!(
        "Starting simulation with {} elevator(s), delta {}",
        manager.elevator_count(),
        config.delta
    );

    let ticks = run_until_idle(&mut manager, config.delta, config.max_ticks)?;

    let mut visited = BTreeMap::new();
    for id in manager.elevator_ids() {
        visited.insert(id, manager.visited_floors(id)?.to_vec());
    }

    let report = SimReport {
        ticks,
        elapsed_time: ticks as f64 * config.delta,
        visited,
    };
    info!(
        "Simulation finished after {} ticks ({:.1} time units)",
        report.ticks, report.elapsed_time
    );
    Ok(report)
}
