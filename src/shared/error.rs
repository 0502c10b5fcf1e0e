use crate::shared::Floor;

/// Errors raised by the simulation core at its boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// A request or start floor lies outside `[1, n_floors]`.
    #[error("floor {floor} is outside the building (valid floors are 1..={n_floors})")]
    InvalidFloor { floor: Floor, n_floors: Floor },

    /// The building was configured without any floors.
    #[error("building must have at least one floor")]
    NoFloors,

    /// The building was configured without any elevators.
    #[error("building must have at least one elevator")]
    NoElevators,
}
