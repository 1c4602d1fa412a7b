//! Domain models that do not cross the `shared` boundary.

pub mod criteria;
pub mod roster;

pub use criteria::*;
pub use roster::*;
