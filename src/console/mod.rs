pub mod console;
pub mod console_tests;

pub use console::*;
