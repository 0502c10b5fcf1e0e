/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use log::{error, info};
use std::io::BufRead;
use std::path::PathBuf;
use std::thread::{sleep, Builder};
use std::time::{Duration, Instant};

/* Custom libraries */
use elevator_sim::config::{self, Config};
use elevator_sim::console::{self, Command};
use elevator_sim::unwrap_or_exit;
use elevator_sim::{Building, DoorModel, ElevatorId, Enqueued, Floor, Step};

/* Command line */
#[derive(Parser, Debug)]
#[clap(name = "elevator-sim", version, about = "Elevator dispatch simulation")]
struct Args {
    /// Path to the TOML configuration file
    #[clap(long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of floors
    #[clap(long)]
    floors: Option<u8>,

    /// Number of elevators
    #[clap(long)]
    elevators: Option<u8>,

    /// Milliseconds between ticks, 0 to only step on command
    #[clap(long)]
    tick_interval: Option<u64>,

    /// Milliseconds the doors stay open on arrival
    #[clap(long)]
    door_open_time: Option<u64>,

    /// Door model, "instant" or "dwell"
    #[clap(long)]
    door_model: Option<DoorModel>,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(floors) = self.floors {
            config.simulation.n_floors = floors;
        }
        if let Some(elevators) = self.elevators {
            config.simulation.n_elevators = elevators;
        }
        if let Some(door_model) = self.door_model {
            config.simulation.door_model = door_model;
        }
        if let Some(tick_interval) = self.tick_interval {
            config.driver.tick_interval = tick_interval;
        }
        if let Some(door_open_time) = self.door_open_time {
            config.driver.door_open_time = door_open_time;
        }
    }
}

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load the configuration
    let args = Args::parse();
    let mut config = unwrap_or_exit!(config::load_config(&args.config), "Failed to load configuration");
    args.apply(&mut config);

    // Create the building
    let mut building = unwrap_or_exit!(Building::new(&config.simulation), "Invalid building configuration");

    // Start the input reader
    let (command_tx, command_rx) = cbc::unbounded::<Command>();
    let stdin_reader_thread = Builder::new().name("stdin_reader".into());
    unwrap_or_exit!(
        stdin_reader_thread.spawn(move || read_commands(command_tx)),
        "Failed to start stdin reader"
    );

    println!("\nSimulation starting...");
    println!("{}", building.status_report());
    println!("{}", console::USAGE);

    let tick_interval = Duration::from_millis(config.driver.tick_interval);
    let mut next_tick = Instant::now() + tick_interval;
    loop {
        let command = if tick_interval.is_zero() {
            Some(command_rx.recv().unwrap_or(Command::Quit))
        } else {
            cbc::select! {
                recv(command_rx) -> command => Some(command.unwrap_or(Command::Quit)),
                recv(cbc::at(next_tick)) -> _ => None,
            }
        };

        match command {
            None => {
                advance(&mut building, &config);
                next_tick = console::next_tick_deadline(next_tick, tick_interval, Instant::now());
            }
            Some(Command::Step) => advance(&mut building, &config),
            Some(Command::Request(floor)) => match building.assign(floor) {
                Ok(assignment) => {
                    println!("{}", console::describe_assignment(&assignment));
                    if assignment.outcome == Enqueued::ServedInPlace {
                        cycle_doors(assignment.elevator, assignment.floor, &config);
                    }
                }
                Err(e) => println!("{}", console::describe_rejection(&e)),
            },
            Some(Command::Skip) => (),
            Some(Command::Status) => print!("{}", building.status_report()),
            Some(Command::Json) => match console::status_json(&building.status_snapshot()) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("Failed to serialize status: {}", e),
            },
            Some(Command::Unknown(input)) => println!("Unrecognised input '{}'. {}", input, console::USAGE),
            Some(Command::Quit) => break,
        }
    }

    info!("Simulation stopped");
}

// One tick, with the door pauses and status printout of the console
fn advance(building: &mut Building, config: &Config) {
    let report = building.tick_all();

    for (id, step) in report.steps.iter() {
        match *step {
            Step::Arrived { floor } => cycle_doors(*id, floor, config),
            Step::DoorClosed { .. } => println!("{}", console::door_closing_line(*id)),
            Step::Moved { .. } | Step::Idle => (),
        }
    }

    if report.moved {
        print!("\n{}", building.status_report());
    }
}

// Arrivals and requests served in place share the same door presentation
fn cycle_doors(id: ElevatorId, floor: Floor, config: &Config) {
    let (opening, closing) = console::door_cycle_lines(id, floor, config.simulation.door_model);
    println!("\n{}", opening);
    sleep(Duration::from_millis(config.driver.door_open_time));
    if let Some(closing) = closing {
        println!("{}", closing);
    }
}

fn read_commands(command_tx: cbc::Sender<Command>) {
    let stdin = std::io::stdin();

    for line in stdin.lock().lines() {
        let command = match line {
            Ok(line) => console::parse_command(&line),
            Err(e) => {
                error!("Error reading from stdin: {}", e);
                Command::Quit
            }
        };

        let quit = command == Command::Quit;
        if command_tx.send(command).is_err() || quit {
            return;
        }
    }

    // EOF
    let _ = command_tx.send(Command::Quit);
}
