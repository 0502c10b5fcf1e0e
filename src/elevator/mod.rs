pub mod elevator;

pub use elevator::Elevator;
pub use elevator::Enqueued;
pub use elevator::Step;
