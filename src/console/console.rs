/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::dispatcher::Assignment;
use crate::elevator::Enqueued;
use crate::shared::{BuildingStatus, DoorModel, ElevatorId, Floor, SimError};

pub const USAGE: &str =
    "Commands: <floor> to call an elevator (-1 to skip), step | t, status | s, json, quit | q";

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Request(Floor),
    Skip,
    Step,
    Status,
    Json,
    Quit,
    Unknown(String),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_command(line: &str) -> Command {
    let input = line.trim();

    match input.to_ascii_lowercase().as_str() {
        "" | "-1" => Command::Skip,
        "step" | "t" => Command::Step,
        "status" | "s" => Command::Status,
        "json" => Command::Json,
        "quit" | "q" | "exit" => Command::Quit,
        _ => match input.parse::<Floor>() {
            Ok(floor) => Command::Request(floor),
            Err(_) => Command::Unknown(input.to_string()),
        },
    }
}

pub fn describe_assignment(assignment: &Assignment) -> String {
    match assignment.outcome {
        Enqueued::Queued(_) => format!(
            "Dispatched Elevator {} to floor {}",
            assignment.elevator, assignment.floor
        ),
        Enqueued::Duplicate => format!(
            "Floor {} is already queued for Elevator {}",
            assignment.floor, assignment.elevator
        ),
        Enqueued::ServedInPlace => format!(
            "Elevator {} is already at floor {}",
            assignment.elevator, assignment.floor
        ),
        Enqueued::OutOfRange => format!(
            "Floor {} is outside the reach of Elevator {}",
            assignment.floor, assignment.elevator
        ),
    }
}

pub fn describe_rejection(error: &SimError) -> String {
    format!("Request rejected: {}", error)
}

pub fn door_opening_line(elevator: ElevatorId, floor: Floor) -> String {
    format!("Elevator {}: Doors opening at floor {}", elevator, floor)
}

pub fn door_closing_line(elevator: ElevatorId) -> String {
    format!("Elevator {}: Doors closing.", elevator)
}

/// Lines printed when a car opens its doors at `floor`: the opening line, shown before the
/// `door_open_time` pause, and the closing line shown after it. Under `DoorModel::Dwell` the
/// close is a tick of its own and is printed from `Step::DoorClosed` instead.
pub fn door_cycle_lines(elevator: ElevatorId, floor: Floor, door_model: DoorModel) -> (String, Option<String>) {
    let closing = match door_model {
        DoorModel::Instant => Some(door_closing_line(elevator)),
        DoorModel::Dwell => None,
    };
    (door_opening_line(elevator, floor), closing)
}

/// Deadline of the tick after the one scheduled for `deadline`.
///
/// Ticks stay on a fixed grid, so commands arriving in between do not push the next tick back.
/// A tick that overran its slot (the door pause) starts a fresh interval from `now` instead of
/// firing the missed ticks back to back.
pub fn next_tick_deadline(deadline: Instant, interval: Duration, now: Instant) -> Instant {
    let next = deadline + interval;
    if next > now {
        next
    } else {
        now + interval
    }
}

pub fn status_json(status: &BuildingStatus) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(status)
}
