/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/***************************************/
/*            Type aliases             */
/***************************************/
pub type Floor = i32;
pub type ElevatorId = u8;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Idle,
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Idle => write!(f, "Idle"),
            Direction::Up => write!(f, "Going Up"),
            Direction::Down => write!(f, "Going Down"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DoorState {
    Open,
    Closed,
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DoorState::Open => write!(f, "Open"),
            DoorState::Closed => write!(f, "Closed"),
        }
    }
}

/// How long the door stays open after an arrival.
///
/// `Instant` opens and closes the door inside the arrival tick. `Dwell` keeps
/// it open until the following tick, which the elevator spends standing still.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DoorModel {
    #[default]
    Instant,
    Dwell,
}

impl FromStr for DoorModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "instant" => Ok(DoorModel::Instant),
            "dwell" => Ok(DoorModel::Dwell),
            other => Err(format!("unknown door model '{}', expected 'instant' or 'dwell'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElevatorStatus {
    pub id: ElevatorId,
    pub floor: Floor,
    pub direction: Direction,
    pub door: DoorState,
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Elevator {}: Floor {} | {} | Doors {}",
            self.id, self.floor, self.direction, self.door
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BuildingStatus {
    pub elevators: Vec<ElevatorStatus>,
}

impl fmt::Display for BuildingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Building Status =====")?;
        for elevator in &self.elevators {
            writeln!(f, "{}", elevator)?;
        }
        Ok(())
    }
}
