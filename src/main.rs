use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use elevator_sim::config::{load_config, ScenarioConfig};
use elevator_sim::simulation::{self, ElevatorId, DEFAULT_TRAVEL_TIME};

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Discrete-time elevator simulation")]
struct Cli {
    /// Scenario file (TOML). Flags below override values read from it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of elevators
    #[arg(long)]
    elevators: Option<usize>,

    /// Time units needed to travel one floor, repeat once per elevator
    #[arg(long = "travel-time")]
    travel_times: Vec<f64>,

    /// Floor every elevator starts at
    #[arg(long, allow_negative_numbers = true)]
    initial_floor: Option<i32>,

    /// Comma separated floors for elevator 0 to visit
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    floors: Option<Vec<i32>>,

    /// Lowest valid floor
    #[arg(long, allow_negative_numbers = true)]
    lowest_floor: Option<i32>,

    /// Highest valid floor
    #[arg(long, allow_negative_numbers = true)]
    highest_floor: Option<i32>,

    /// Time delta per tick
    #[arg(long)]
    delta: Option<f64>,

    /// Abort if the simulation is still running after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Give every elevator this many random floors to visit
    #[arg(long)]
    random_stops: Option<usize>,

    /// Seed for --random-stops
    #[arg(long, requires = "random_stops")]
    seed: Option<u64>,
}

impl Cli {
    fn into_config(self) -> Result<ScenarioConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ScenarioConfig::default(),
        };

        if !self.travel_times.is_empty() {
            config.travel_times = self.travel_times;
            config.elevator_count = config.travel_times.len();
        }
        if let Some(elevators) = self.elevators {
            if config.travel_times.len() != elevators && config.travel_times.len() <= 1 {
                let travel_time = config
                    .travel_times
                    .first()
                    .copied()
                    .unwrap_or(DEFAULT_TRAVEL_TIME);
                config.travel_times = vec![travel_time; elevators];
            }
            config.elevator_count = elevators;
        }
        if let Some(initial_floor) = self.initial_floor {
            config.initial_floor = initial_floor;
        }
        if let Some(floors) = self.floors {
            match config.desired_floors.first_mut() {
                Some(first) => *first = floors,
                None => config.desired_floors.push(floors),
            }
        }
        if let Some(lowest) = self.lowest_floor {
            config.floor_range.lowest = lowest;
        }
        if let Some(highest) = self.highest_floor {
            config.floor_range.highest = highest;
        }
        if let Some(delta) = self.delta {
            config.delta = delta;
        }
        if self.max_ticks.is_some() {
            config.max_ticks = self.max_ticks;
        }
        if let Some(stops) = self.random_stops {
            config.randomize_floors(stops, self.seed)?;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,elevator_sim=info"),
    )
    .init();

    let config = Cli::parse().into_config()?;
    let report = simulation::run(&config).context("Simulation aborted")?;

    if let Some(line) = report.summary_line(ElevatorId(0)) {
        println!("{}", line);
    }

    if report.visited.len() > 1 {
        for (id, floors) in &report.visited {
            println!("Elevator {}: {:?}", id, floors);
        }
    }
    println!("Elapsed time: {:.1}", report.elapsed_time);

    Ok(())
}
