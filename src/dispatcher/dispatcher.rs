/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimulationConfig;
use crate::elevator::{Elevator, Enqueued, Step};
use crate::shared::{BuildingStatus, ElevatorId, Floor, SimError};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub elevator: ElevatorId,
    pub floor: Floor,
    pub outcome: Enqueued,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Whether any elevator changed floor during the tick.
    pub moved: bool,
    /// One entry per elevator, in index order.
    pub steps: Vec<(ElevatorId, Step)>,
}

impl TickReport {
    pub fn arrivals(&self) -> impl Iterator<Item = (ElevatorId, Floor)> + '_ {
        self.steps.iter().filter_map(|(id, step)| match step {
            Step::Arrived { floor } => Some((*id, *floor)),
            _ => None,
        })
    }
}

/**
 * Dispatches floor requests to a fixed set of elevators and steps them in lockstep.
 *
 * Requests go to the nearest idle elevator, or to the nearest elevator overall when none is
 * idle. Ties go to the elevator with the lowest index.
 *
 * # Fields
 * - `n_floors`:    Number of floors, valid floors are `1..=n_floors`.
 * - `elevators`:   The elevators, ordered by id. Never empty and never resized.
 *
 */
#[derive(Debug, Clone)]
pub struct Building {
    n_floors: Floor,
    elevators: Vec<Elevator>,
}

impl Building {
    pub fn new(config: &SimulationConfig) -> Result<Building, SimError> {
        if config.n_floors == 0 {
            return Err(SimError::NoFloors);
        }
        if config.n_elevators == 0 {
            return Err(SimError::NoElevators);
        }

        let n_floors = Floor::from(config.n_floors);
        let start_floor = Floor::from(config.start_floor);
        if !(1..=n_floors).contains(&start_floor) {
            return Err(SimError::InvalidFloor {
                floor: start_floor,
                n_floors,
            });
        }

        let elevators = (1..=config.n_elevators)
            .map(|id| Elevator::new(id, n_floors, start_floor, config.door_model))
            .collect();

        info!(
            "Building ready with {} floors and {} elevators",
            n_floors, config.n_elevators
        );

        Ok(Building {
            n_floors,
            elevators,
        })
    }

    /// Binds a floor request to an elevator.
    ///
    /// Floors outside the building are rejected without touching any elevator. A floor that is
    /// already queued on some elevator is reported as a duplicate for that elevator.
    pub fn assign(&mut self, floor: Floor) -> Result<Assignment, SimError> {
        if !(1..=self.n_floors).contains(&floor) {
            return Err(SimError::InvalidFloor {
                floor,
                n_floors: self.n_floors,
            });
        }

        // Already pending somewhere, nothing new to dispatch
        if let Some(elevator) = self.elevators.iter().find(|e| e.has_request(floor)) {
            debug!("Floor {} already queued for Elevator {}", floor, elevator.id());
            return Ok(Assignment {
                elevator: elevator.id(),
                floor,
                outcome: Enqueued::Duplicate,
            });
        }

        let index = self.select_elevator(floor);
        let elevator = &mut self.elevators[index];
        let upward = floor > elevator.current_floor();
        let outcome = elevator.enqueue(floor, upward);

        info!("Dispatched Elevator {} to floor {}", elevator.id(), floor);

        Ok(Assignment {
            elevator: elevator.id(),
            floor,
            outcome,
        })
    }

    /// Advances every elevator by one tick, in index order.
    pub fn tick_all(&mut self) -> TickReport {
        let steps: Vec<(ElevatorId, Step)> = self
            .elevators
            .iter_mut()
            .map(|elevator| (elevator.id(), elevator.advance()))
            .collect();

        let moved = steps
            .iter()
            .any(|(_, step)| matches!(step, Step::Moved { .. }));

        if moved {
            debug!("\n{}", self.status_snapshot());
        }

        TickReport { moved, steps }
    }

    pub fn status_snapshot(&self) -> BuildingStatus {
        BuildingStatus {
            elevators: self.elevators.iter().map(Elevator::status).collect(),
        }
    }

    /// Renders the status as text, one line per elevator under a header line.
    pub fn status_report(&self) -> String {
        self.status_snapshot().to_string()
    }

    pub fn n_floors(&self) -> Floor {
        self.n_floors
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    // Nearest idle elevator, falling back to the nearest of all of them
    fn select_elevator(&self, floor: Floor) -> usize {
        let nearest_idle = self
            .elevators
            .iter()
            .enumerate()
            .filter(|&(_, elevator)| elevator.is_idle())
            .min_by_key(|&(_, elevator)| distance(elevator, floor))
            .map(|(index, _)| index);

        nearest_idle.unwrap_or_else(|| {
            self.elevators
                .iter()
                .enumerate()
                .min_by_key(|&(_, elevator)| distance(elevator, floor))
                .map(|(index, _)| index)
                .unwrap_or(0)
        })
    }

    /***************************************/
    /*             Test API                */
    /***************************************/
    #[cfg(test)]
    pub fn test_elevator_mut(&mut self, index: usize) -> &mut Elevator {
        &mut self.elevators[index]
    }
}

fn distance(elevator: &Elevator, floor: Floor) -> Floor {
    (elevator.current_floor() - floor).abs()
}
