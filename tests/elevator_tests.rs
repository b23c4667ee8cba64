//! Elevator movement tests

use elevator_sim::simulation::{Elevator, FloorRange, SimError};

fn ticks_until_arrival(elevator: &mut Elevator, dt: f64) -> u32 {
    let mut ticks = 0;
    while !elevator.is_at_target() {
        elevator.advance(dt).unwrap();
        ticks += 1;
        assert!(ticks < 100_000, "elevator never arrived");
    }
    ticks
}

/// Test that a new elevator sits idle at its initial floor
#[test]
fn test_new_elevator_is_idle_at_initial_floor() {
    let elevator = Elevator::new(10.0, 12, FloorRange::default()).unwrap();
    assert!(elevator.is_idle());
    assert!(!elevator.is_at_target());
    assert_eq!(elevator.current_floor(), 12.0);
    assert_eq!(elevator.visited_floors(), &[12]);
    assert_eq!(elevator.valid_range(), FloorRange::new(0, 100));
    assert!((elevator.travel_rate() - 0.1).abs() < 1e-12);
}

/// Test that bad travel times, floors and ranges are rejected at construction
#[test]
fn test_invalid_construction() {
    assert_eq!(
        Elevator::new(0.0, 0, FloorRange::default()).unwrap_err(),
        SimError::InvalidTravelTime(0.0)
    );
    assert!(matches!(
        Elevator::new(-1.0, 0, FloorRange::default()),
        Err(SimError::InvalidTravelTime(_))
    ));
    assert_eq!(
        Elevator::new(10.0, 101, FloorRange::default()).unwrap_err(),
        SimError::OutOfRangeFloor {
            floor: 101,
            range: FloorRange::new(0, 100)
        }
    );
    assert_eq!(
        Elevator::new(10.0, 0, FloorRange::new(5, 1)).unwrap_err(),
        SimError::InvalidFloorRange {
            lowest: 5,
            highest: 1
        }
    );
}

/// Test that commanding a floor outside the range fails and leaves the elevator idle
#[test]
fn test_change_floor_out_of_range() {
    let mut elevator = Elevator::new(10.0, 0, FloorRange::default()).unwrap();
    assert_eq!(
        elevator.change_floor(150),
        Err(SimError::OutOfRangeFloor {
            floor: 150,
            range: FloorRange::new(0, 100)
        })
    );
    assert!(elevator.change_floor(-1).is_err());
    assert!(elevator.is_idle());
}

/// Test that commanding the current floor starts no motion
#[test]
fn test_change_floor_to_current_floor_does_nothing() {
    let mut elevator = Elevator::new(10.0, 7, FloorRange::default()).unwrap();
    elevator.change_floor(7).unwrap();
    assert!(elevator.is_idle());

    assert!(!elevator.advance(1.0).unwrap());
    assert_eq!(elevator.current_floor(), 7.0);
    assert_eq!(elevator.visited_floors(), &[7]);
}

/// Test that each step moves the elevator by its travel rate toward the target
#[test]
fn test_advance_moves_toward_target_by_rate() {
    let mut elevator = Elevator::new(10.0, 12, FloorRange::default()).unwrap();
    elevator.change_floor(2).unwrap();
    assert_eq!(elevator.target_floor(), Some(2.0));

    assert!(!elevator.advance(1.0).unwrap());
    assert!((elevator.current_floor() - 11.9).abs() < 1e-9);

    elevator.change_floor(20).unwrap();
    elevator.advance(1.0).unwrap();
    assert!((elevator.current_floor() - 12.0).abs() < 1e-9);
}

/// Test that zero, negative and non-finite time steps are refused without moving
#[test]
fn test_advance_rejects_invalid_time_step() {
    let mut elevator = Elevator::new(10.0, 12, FloorRange::default()).unwrap();
    elevator.change_floor(2).unwrap();

    assert_eq!(elevator.advance(-1.0), Err(SimError::InvalidTimeStep(-1.0)));
    assert_eq!(elevator.advance(0.0), Err(SimError::InvalidTimeStep(0.0)));
    assert!(matches!(
        elevator.advance(f64::NAN),
        Err(SimError::InvalidTimeStep(_))
    ));
    assert!(elevator.advance(f64::INFINITY).is_err());

    assert_eq!(elevator.current_floor(), 12.0);
    assert_eq!(elevator.visited_floors(), &[12]);
}

/// Test that arrival takes travel time per floor, even when the rate does not sum exactly
#[test]
fn test_arrival_takes_travel_time_per_floor() {
    let mut elevator = Elevator::new(10.0, 12, FloorRange::default()).unwrap();
    elevator.change_floor(2).unwrap();
    assert_eq!(ticks_until_arrival(&mut elevator, 1.0), 100);
    assert_eq!(elevator.visited_floors(), &[12, 2]);

    // Rate of a third of a floor per tick accumulates rounding error
    let mut elevator = Elevator::new(3.0, 0, FloorRange::default()).unwrap();
    elevator.change_floor(10).unwrap();
    assert_eq!(ticks_until_arrival(&mut elevator, 1.0), 30);
    assert_eq!(elevator.visited_floors(), &[0, 10]);
}

/// Test that a larger time step covers proportionally more floors per tick
#[test]
fn test_larger_delta_covers_more_floors() {
    let mut elevator = Elevator::new(10.0, 12, FloorRange::default()).unwrap();
    elevator.change_floor(2).unwrap();
    assert_eq!(ticks_until_arrival(&mut elevator, 2.0), 50);
}

/// Test that the final step stops on the target instead of overshooting
#[test]
fn test_last_step_does_not_overshoot() {
    // 2.5 floors per tick never lands on floor 100 exactly
    let mut elevator = Elevator::new(0.4, 96, FloorRange::default()).unwrap();
    elevator.change_floor(100).unwrap();

    assert!(!elevator.advance(1.0).unwrap());
    assert!((elevator.current_floor() - 98.5).abs() < 1e-9);
    assert!(elevator.advance(1.0).unwrap());
    assert_eq!(elevator.current_floor(), 100.0);
    assert_eq!(elevator.visited_floors(), &[96, 100]);
}

/// Test that advancing after arrival neither moves nor records the floor twice
#[test]
fn test_redundant_advance_after_arrival() {
    let mut elevator = Elevator::new(1.0, 3, FloorRange::default()).unwrap();
    elevator.change_floor(4).unwrap();
    assert!(elevator.advance(1.0).unwrap());
    assert!(!elevator.advance(1.0).unwrap());
    assert!(!elevator.advance(1.0).unwrap());

    assert_eq!(elevator.current_floor(), 4.0);
    assert_eq!(elevator.visited_floors(), &[3, 4]);
    assert!(elevator.is_at_target());
}

/// Test that floor ranges below zero work
#[test]
fn test_negative_floors() {
    let mut elevator = Elevator::new(1.0, 0, FloorRange::new(-5, 5)).unwrap();
    elevator.change_floor(-3).unwrap();
    assert_eq!(ticks_until_arrival(&mut elevator, 1.0), 3);
    assert_eq!(elevator.visited_floors(), &[0, -3]);
}

/// Test that reset and reinitialization restore a clean elevator
#[test]
fn test_reset_and_initialize() {
    let mut elevator = Elevator::new(1.0, 3, FloorRange::default()).unwrap();
    elevator.change_floor(6).unwrap();
    ticks_until_arrival(&mut elevator, 1.0);

    elevator.reset();
    assert!(elevator.is_idle());
    assert_eq!(elevator.current_floor(), 3.0);
    assert_eq!(elevator.visited_floors(), &[3]);

    elevator.initialize_to_floor(40).unwrap();
    assert_eq!(elevator.initial_floor(), 40);
    assert_eq!(elevator.current_floor(), 40.0);
    assert_eq!(elevator.visited_floors(), &[40]);

    assert!(matches!(
        elevator.initialize_to_floor(400),
        Err(SimError::OutOfRangeFloor { floor: 400, .. })
    ));
    assert_eq!(elevator.initial_floor(), 40);
}
