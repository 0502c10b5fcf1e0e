/*
 * Unit tests for console module
 *
 * Tests:
 * - test_parse_command
 * - test_describe_assignment
 * - test_describe_rejection
 * - test_door_cycle_lines
 * - test_next_tick_deadline
 * - test_status_json
 *
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod console_tests {
    use crate::console::{
        describe_assignment, describe_rejection, door_cycle_lines, next_tick_deadline, parse_command, status_json, Command,
    };
    use crate::dispatcher::Assignment;
    use crate::elevator::Enqueued;
    use crate::shared::Direction::{Idle, Up};
    use crate::shared::DoorState::Closed;
    use crate::shared::{BuildingStatus, DoorModel, ElevatorStatus, SimError};
    use std::time::{Duration, Instant};

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("5"), Command::Request(5));
        assert_eq!(parse_command("  12 \n"), Command::Request(12));
        assert_eq!(parse_command("0"), Command::Request(0));
        assert_eq!(parse_command("-3"), Command::Request(-3));
        assert_eq!(parse_command("-1"), Command::Skip);
        assert_eq!(parse_command(""), Command::Skip);
        assert_eq!(parse_command("t"), Command::Step);
        assert_eq!(parse_command("STEP"), Command::Step);
        assert_eq!(parse_command("s"), Command::Status);
        assert_eq!(parse_command("json"), Command::Json);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("five"), Command::Unknown("five".to_string()));
    }

    #[test]
    fn test_describe_assignment() {
        // Arrange
        let queued = Assignment { elevator: 1, floor: 5, outcome: Enqueued::Queued(Up) };
        let duplicate = Assignment { elevator: 2, floor: 7, outcome: Enqueued::Duplicate };
        let in_place = Assignment { elevator: 1, floor: 1, outcome: Enqueued::ServedInPlace };
        let out_of_range = Assignment { elevator: 1, floor: 12, outcome: Enqueued::OutOfRange };

        // Act + Assert
        assert_eq!(describe_assignment(&queued), "Dispatched Elevator 1 to floor 5");
        assert_eq!(describe_assignment(&duplicate), "Floor 7 is already queued for Elevator 2");
        assert_eq!(describe_assignment(&in_place), "Elevator 1 is already at floor 1");
        assert_eq!(describe_assignment(&out_of_range), "Floor 12 is outside the reach of Elevator 1");
    }

    #[test]
    fn test_describe_rejection() {
        let error = SimError::InvalidFloor { floor: 12, n_floors: 10 };

        assert_eq!(
            describe_rejection(&error),
            "Request rejected: floor 12 is outside the building (valid floors are 1..=10)"
        );
    }

    #[test]
    fn test_door_cycle_lines() {
        // Purpose: Serving a request in place prints the same door cycle as an arrival,
        // with the close following the pause only under the instant door model

        // Act
        let (instant_open, instant_close) = door_cycle_lines(2, 4, DoorModel::Instant);
        let (dwell_open, dwell_close) = door_cycle_lines(2, 4, DoorModel::Dwell);

        // Assert
        assert_eq!(instant_open, "Elevator 2: Doors opening at floor 4");
        assert_eq!(instant_close.as_deref(), Some("Elevator 2: Doors closing."));
        assert_eq!(dwell_open, instant_open);
        assert_eq!(dwell_close, None);
    }

    #[test]
    fn test_next_tick_deadline() {
        // Purpose: Ticks keep a fixed period no matter how many commands arrive in between,
        // and an overrun restarts the period instead of bursting

        // Arrange
        let interval = Duration::from_millis(1000);
        let start = Instant::now();
        let first = start + interval;

        // Act
        let on_time = next_tick_deadline(first, interval, first + Duration::from_millis(5));
        let overrun_now = first + Duration::from_millis(3500);
        let overrun = next_tick_deadline(first, interval, overrun_now);

        // Assert
        assert_eq!(on_time, start + 2 * interval);
        assert_eq!(overrun, overrun_now + interval);
    }

    #[test]
    fn test_status_json() {
        // Arrange
        let status = BuildingStatus {
            elevators: vec![
                ElevatorStatus { id: 1, floor: 3, direction: Up, door: Closed },
                ElevatorStatus { id: 2, floor: 1, direction: Idle, door: Closed },
            ],
        };

        // Act
        let json = status_json(&status).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        // Assert
        assert_eq!(value["elevators"][0]["id"], 1);
        assert_eq!(value["elevators"][0]["floor"], 3);
        assert_eq!(value["elevators"][0]["direction"], "up");
        assert_eq!(value["elevators"][1]["direction"], "idle");
        assert_eq!(value["elevators"][1]["door"], "closed");
    }
}
