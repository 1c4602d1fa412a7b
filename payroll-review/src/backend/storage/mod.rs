//! # Storage Module
//!
//! Record store abstractions for the payroll review engine. The domain layer
//! only talks to the traits in [`traits`]; the in-memory repositories are the
//! data-access collaborator used by the dashboard and the tests.

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;
