pub mod dispatcher;

pub use dispatcher::Assignment;
pub use dispatcher::Building;
pub use dispatcher::TickReport;
