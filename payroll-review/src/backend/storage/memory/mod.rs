//! In-memory repositories. Nothing is persisted across processes.

pub mod roster_repository;
pub mod view_repository;

pub use roster_repository::*;
pub use view_repository::*;
