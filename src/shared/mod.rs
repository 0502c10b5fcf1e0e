pub mod error;
pub mod macros;
pub mod structs;

pub use error::SimError;
pub use structs::BuildingStatus;
pub use structs::Direction;
pub use structs::DoorModel;
pub use structs::DoorState;
pub use structs::ElevatorId;
pub use structs::ElevatorStatus;
pub use structs::Floor;
