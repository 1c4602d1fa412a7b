//! # UI Module
//!
//! Framework-agnostic dashboard state and the coordinator that drives it.
//! A rendering layer only needs [`DashboardController`] and the
//! [`DashboardAction`] intents.

pub mod app_coordinator;
pub mod state;

pub use app_coordinator::*;
pub use state::*;
