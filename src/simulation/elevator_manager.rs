//! Elevator scheduling for the simulation
//!
//! The manager owns every elevator together with the queue of floors it
//! still has to visit, and advances all of them once per tick.

use log::{debug, info};
use std::collections::{BTreeMap, VecDeque};

use super::elevator::Elevator;
use super::error::SimError;
use super::types::{ElevatorId, FloorRange};

/// Owns the elevators and their pending floor queues
#[derive(Debug, Clone)]
pub struct ElevatorManager {
    /// All elevators, iterated in ascending id order
    elevators: BTreeMap<ElevatorId, Elevator>,

    /// Floors each elevator has yet to reach, front first
    pending_floors: BTreeMap<ElevatorId, VecDeque<i32>>,
}

impl ElevatorManager {
    /// Create `elevator_count` elevators, one per entry in `travel_times`,
    /// all parked at `initial_floor`
    pub fn new(
        elevator_count: usize,
        travel_times: &[f64],
        initial_floor: i32,
        floor_range: FloorRange,
    ) -> Result<Self, SimError> {
        if elevator_count != travel_times.len() {
            return Err(SimError::ElevatorCountMismatch {
                elevators: elevator_count,
                travel_times: travel_times.len(),
            });
        }

        let mut elevators = BTreeMap::new();
        let mut pending_floors = BTreeMap::new();
        for (idx, &travel_time) in travel_times.iter().enumerate() {
            let id = ElevatorId(idx);
            elevators.insert(id, Elevator::new(travel_time, initial_floor, floor_range)?);
            pending_floors.insert(id, VecDeque::new());
        }

        info!(
            "Created {} elevator(s) at floor {} with valid floors {}",
            elevator_count, initial_floor, floor_range
        );

        Ok(Self {
            elevators,
            pending_floors,
        })
    }

    /// Replace the queue of floors for one elevator
    ///
    /// An elevator that isn't travelling is sent to the first floor of the
    /// new queue right away. The whole queue is range-checked before
    /// anything changes.
    pub fn set_desired_floors(&mut self, id: ElevatorId, floors: Vec<i32>) -> Result<(), SimError> {
        let elevator = self
            .elevators
            .get_mut(&id)
            .ok_or(SimError::UnknownElevator(id))?;

        let range = elevator.valid_range();
        if let Some(&floor) = floors.iter().find(|&&floor| !range.contains(floor)) {
            return Err(SimError::OutOfRangeFloor { floor, range });
        }

        let queue = VecDeque::from(floors);
        if elevator.is_idle() || elevator.is_at_target() {
            if let Some(&first) = queue.front() {
                elevator.change_floor(first)?;
            }
        }

        debug!("Elevator {} queue set to {:?}", id, queue);
        self.pending_floors.insert(id, queue);
        Ok(())
    }

    /// Whether any elevator still has floors queued
    pub fn has_pending_work(&self) -> bool {
        self.pending_floors.values().any(|queue| !queue.is_empty())
    }

    /// Advance every elevator by one time step of length `dt`
    ///
    /// Elevators are processed one after another in id order. When an
    /// elevator is done moving, the floor it reached is dropped from the
    /// front of its queue and it is sent on to the next one.
    pub fn tick(&mut self, dt: f64) -> Result<(), SimError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidTimeStep(dt));
        }

        for (&id, elevator) in self.elevators.iter_mut() {
            let queue = self
                .pending_floors
                .get_mut(&id)
                .ok_or(SimError::UnknownElevator(id))?;

            if elevator.advance(dt)? {
                debug!("Elevator {} arrived at floor {:.0}", id, elevator.current_floor());
            }

            if !elevator.is_idle() && !elevator.is_at_target() {
                continue;
            }

            // Only the floor actually reached leaves the queue. A queue that
            // was replaced mid-trip keeps its front until it is visited.
            if queue.front().is_some_and(|&front| elevator.is_at_floor(front)) {
                queue.pop_front();
            }

            if let Some(&next) = queue.front() {
                elevator.change_floor(next)?;
            }
        }

        Ok(())
    }

    /// Floors the elevator has visited so far
    pub fn visited_floors(&self, id: ElevatorId) -> Result<&[i32], SimError> {
        self.elevators
            .get(&id)
            .map(Elevator::visited_floors)
            .ok_or(SimError::UnknownElevator(id))
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.elevators.get(&id)
    }

    /// Floors still queued for an elevator, front first
    pub fn pending_floors(&self, id: ElevatorId) -> Result<&VecDeque<i32>, SimError> {
        self.pending_floors
            .get(&id)
            .ok_or(SimError::UnknownElevator(id))
    }

    pub fn elevator_count(&self) -> usize {
        self.elevators.len()
    }

    pub fn elevator_ids(&self) -> impl Iterator<Item = ElevatorId> + '_ {
        self.elevators.keys().copied()
    }
}
