//! Payroll review engine: filter, derive and edit a pay period's roster.
//!
//! - [`backend`]: domain services and record stores
//! - [`ui`]: dashboard state reducer and controller
//! - [`config`]: YAML configuration

pub mod backend;
pub mod config;
pub mod ui;
