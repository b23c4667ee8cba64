//! Elevator movement logic
//!
//! An elevator holds a continuous position and moves toward a single
//! commanded floor at a fixed rate. It never picks its own next floor; that
//! is the manager's job.

use log::debug;

use super::error::SimError;
use super::types::{FloorRange, ARRIVAL_TOLERANCE};

/// A single elevator in the simulation
#[derive(Debug, Clone)]
pub struct Elevator {
    /// Floors traversed per unit of simulated time
    travel_rate: f64,
    floor_range: FloorRange,
    initial_floor: i32,
    current_floor: f64,
    /// Commanded target, `None` while idle
    next_floor: Option<f64>,
    floors_visited: Vec<i32>,
}

impl Elevator {
    /// Create an elevator parked at `initial_floor`
    ///
    /// `travel_time` is the number of time units needed to move one floor.
    pub fn new(
        travel_time: f64,
        initial_floor: i32,
        floor_range: FloorRange,
    ) -> Result<Self, SimError> {
        if !travel_time.is_finite() || travel_time <= 0.0 {
            return Err(SimError::InvalidTravelTime(travel_time));
        }
        if !floor_range.is_valid() {
            return Err(SimError::InvalidFloorRange {
                lowest: floor_range.lowest,
                highest: floor_range.highest,
            });
        }
        if !floor_range.contains(initial_floor) {
            return Err(SimError::OutOfRangeFloor {
                floor: initial_floor,
                range: floor_range,
            });
        }

        Ok(Self {
            travel_rate: 1.0 / travel_time,
            floor_range,
            initial_floor,
            current_floor: initial_floor as f64,
            next_floor: None,
            floors_visited: vec![initial_floor],
        })
    }

    /// Command the elevator to travel to `target`
    ///
    /// Commanding the floor the elevator already sits at does not start any
    /// motion and leaves the current target untouched.
    pub fn change_floor(&mut self, target: i32) -> Result<(), SimError> {
        if !self.floor_range.contains(target) {
            return Err(SimError::OutOfRangeFloor {
                floor: target,
                range: self.floor_range,
            });
        }

        if self.is_at_floor(target) {
            return Ok(());
        }

        debug!("Elevator commanded from {:.3} to floor {}", self.current_floor, target);
        self.next_floor = Some(target as f64);
        Ok(())
    }

    /// Whether the elevator has reached its commanded target
    ///
    /// Always false while idle.
    pub fn is_at_target(&self) -> bool {
        match self.next_floor {
            Some(target) => self.position_matches(target),
            None => false,
        }
    }

    /// Whether the elevator currently sits at `floor`
    pub fn is_at_floor(&self, floor: i32) -> bool {
        self.position_matches(floor as f64)
    }

    fn position_matches(&self, position: f64) -> bool {
        (self.current_floor - position).abs() < ARRIVAL_TOLERANCE
    }

    /// Move one time step of length `dt` toward the target
    ///
    /// Returns true when this step completed an arrival. Does nothing while
    /// idle or once the target has been reached. `dt` must be finite and
    /// positive.
    pub fn advance(&mut self, dt: f64) -> Result<bool, SimError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidTimeStep(dt));
        }

        let target = match self.next_floor {
            Some(target) => target,
            None => return Ok(false),
        };

        let remaining = target - self.current_floor;
        if remaining.abs() < ARRIVAL_TOLERANCE {
            return Ok(false);
        }

        // The last step of a trip is shortened so a rate that doesn't evenly
        // divide the distance still lands on the target.
        let step = (self.travel_rate * dt).min(remaining.abs());
        self.current_floor += remaining.signum() * step;
        self.current_floor = self.floor_range.clamp_position(self.current_floor);

        if !self.is_at_target() {
            return Ok(false);
        }

        let reached = self.current_floor.round() as i32;
        if self.floors_visited.last() != Some(&reached) {
            self.floors_visited.push(reached);
        }
        Ok(true)
    }

    /// Floors reached so far, in visiting order
    pub fn visited_floors(&self) -> &[i32] {
        &self.floors_visited
    }

    pub fn valid_range(&self) -> FloorRange {
        self.floor_range
    }

    pub fn current_floor(&self) -> f64 {
        self.current_floor
    }

    pub fn target_floor(&self) -> Option<f64> {
        self.next_floor
    }

    pub fn travel_rate(&self) -> f64 {
        self.travel_rate
    }

    pub fn initial_floor(&self) -> i32 {
        self.initial_floor
    }

    pub fn is_idle(&self) -> bool {
        self.next_floor.is_none()
    }

    /// Reinitialize the elevator at a new starting floor
    pub fn initialize_to_floor(&mut self, starting_floor: i32) -> Result<(), SimError> {
        if !self.floor_range.contains(starting_floor) {
            return Err(SimError::OutOfRangeFloor {
                floor: starting_floor,
                range: self.floor_range,
            });
        }
        self.initial_floor = starting_floor;
        self.reset();
        Ok(())
    }

    /// Return to the initial floor and forget all history
    pub fn reset(&mut self) {
        self.current_floor = self.initial_floor as f64;
        self.floors_visited = vec![self.initial_floor];
        self.next_floor = None;
    }
}
