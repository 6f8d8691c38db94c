// Core test modules
pub mod assertions;

pub use assertions::*;
pub use fixtures::*;
