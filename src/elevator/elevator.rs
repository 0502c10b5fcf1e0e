/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use std::collections::BTreeSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, DoorModel, DoorState, ElevatorId, ElevatorStatus, Floor};

/***************************************/
/*               Enums                 */
/***************************************/

/// What a single call to [`Elevator::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Idle,
    Moved { from: Floor, to: Floor },
    Arrived { floor: Floor },
    DoorClosed { floor: Floor },
}

/// What a single call to [`Elevator::enqueue`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enqueued {
    Queued(Direction),
    Duplicate,
    ServedInPlace,
    /// The floor is outside `1..=n_floors`, nothing was queued.
    OutOfRange,
}

/**
 * Simulates one elevator car.
 *
 * The `Elevator` is a small state machine stepped by its owner. Pending floors live in two
 * ordered sets, one per travel direction, and the travel direction is always derived from them.
 *
 * # Fields
 * - `id`:              Stable 1-based identity.
 * - `n_floors`:        Highest floor of the building, the lowest is 1.
 * - `current_floor`:   Floor the car is at, only changed by `advance`.
 * - `direction`:       `Idle` exactly when both request sets are empty.
 * - `door`:            Door state, only `Open` between an arrival and the next tick under `DoorModel::Dwell`.
 * - `door_model`:      Whether the door cycle takes an extra tick.
 * - `up_requests`:     Floors to visit while going up, front is the lowest.
 * - `down_requests`:   Floors to visit while going down, front is the highest.
 *
 */
#[derive(Debug, Clone)]
pub struct Elevator {
    id: ElevatorId,
    n_floors: Floor,
    current_floor: Floor,
    direction: Direction,
    door: DoorState,
    door_model: DoorModel,
    up_requests: BTreeSet<Floor>,
    down_requests: BTreeSet<Floor>,
}

impl Elevator {
    pub fn new(id: ElevatorId, n_floors: Floor, start_floor: Floor, door_model: DoorModel) -> Elevator {
        Elevator {
            id,
            n_floors,
            current_floor: start_floor,
            direction: Direction::Idle,
            door: DoorState::Closed,
            door_model,
            up_requests: BTreeSet::new(),
            down_requests: BTreeSet::new(),
        }
    }

    /// Queues `floor` for the upward or downward sweep.
    ///
    /// Floors outside the building are ignored. A request for the floor the car is standing at
    /// while nothing else is pending is served on the spot.
    pub fn enqueue(&mut self, floor: Floor, upward: bool) -> Enqueued {
        if !(1..=self.n_floors).contains(&floor) {
            debug!("Elevator {}: ignoring floor {} outside 1..={}", self.id, floor, self.n_floors);
            return Enqueued::OutOfRange;
        }

        if self.has_request(floor) {
            return Enqueued::Duplicate;
        }

        if floor == self.current_floor && self.is_idle() {
            self.open_door();
            if self.door_model == DoorModel::Instant {
                self.close_door();
            }
            return Enqueued::ServedInPlace;
        }

        if upward {
            self.up_requests.insert(floor);
        } else {
            self.down_requests.insert(floor);
        }
        self.update_direction();

        Enqueued::Queued(self.direction)
    }

    /// Runs one tick: close a dwelling door, arrive at the target, or move one floor toward it.
    pub fn advance(&mut self) -> Step {
        if self.door == DoorState::Open {
            self.close_door();
            return Step::DoorClosed {
                floor: self.current_floor,
            };
        }

        self.update_direction();
        let target = match self.next_target() {
            Some(target) => target,
            None => return Step::Idle,
        };

        if self.current_floor == target {
            self.open_door();
            match self.direction {
                Direction::Up => self.up_requests.remove(&target),
                Direction::Down => self.down_requests.remove(&target),
                Direction::Idle => false,
            };
            if self.door_model == DoorModel::Instant {
                self.close_door();
            }
            self.update_direction();

            Step::Arrived { floor: target }
        } else {
            let from = self.current_floor;
            self.current_floor += (target - from).signum();

            Step::Moved {
                from,
                to: self.current_floor,
            }
        }
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            id: self.id,
            floor: self.current_floor,
            direction: self.direction,
            door: self.door,
        }
    }

    /// The floor the next `advance` heads for, if any.
    pub fn next_target(&self) -> Option<Floor> {
        match self.direction {
            Direction::Up => self.up_requests.first().copied(),
            Direction::Down => self.down_requests.last().copied(),
            Direction::Idle => None,
        }
    }

    pub fn up_requests(&self) -> Vec<Floor> {
        self.up_requests.iter().copied().collect()
    }

    pub fn down_requests(&self) -> Vec<Floor> {
        self.down_requests.iter().rev().copied().collect()
    }

    pub fn has_request(&self, floor: Floor) -> bool {
        self.up_requests.contains(&floor) || self.down_requests.contains(&floor)
    }

    pub fn pending_requests(&self) -> usize {
        self.up_requests.len() + self.down_requests.len()
    }

    pub fn is_idle(&self) -> bool {
        self.direction == Direction::Idle
    }

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn door(&self) -> DoorState {
        self.door
    }

    fn update_direction(&mut self) {
        let up_pending = !self.up_requests.is_empty();
        let down_pending = !self.down_requests.is_empty();

        self.direction = match (self.direction, up_pending, down_pending) {
            (_, false, false) => Direction::Idle,
            // Keep sweeping while the active queue has floors left
            (Direction::Up, true, _) => Direction::Up,
            (Direction::Down, _, true) => Direction::Down,
            (_, true, false) => Direction::Up,
            (_, false, true) => Direction::Down,
            (Direction::Idle, true, true) => Direction::Up,
        };
    }

    fn open_door(&mut self) {
        self.door = DoorState::Open;
        debug!("Elevator {}: doors opening at floor {}", self.id, self.current_floor);
    }

    fn close_door(&mut self) {
        if self.door == DoorState::Closed {
            return;
        }
        self.door = DoorState::Closed;
        debug!("Elevator {}: doors closing", self.id);
    }

    /***************************************/
    /*             Test API                */
    /***************************************/
    #[cfg(test)]
    pub fn test_set_floor(&mut self, floor: Floor) {
        self.current_floor = floor;
    }
}
