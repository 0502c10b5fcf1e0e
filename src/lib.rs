/* Modules */
pub mod config;
pub mod console;
pub mod dispatcher;
pub mod elevator;
pub mod ffi;
pub mod shared;

/* Re-exports */
pub use config::{Config, DriverConfig, SimulationConfig};
pub use dispatcher::{Assignment, Building, TickReport};
pub use elevator::{Elevator, Enqueued, Step};
pub use shared::{BuildingStatus, Direction, DoorModel, DoorState, ElevatorId, ElevatorStatus, Floor, SimError};
