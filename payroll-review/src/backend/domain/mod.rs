//! # Domain Module
//!
//! Contains all business logic for the payroll review dashboard.
//!
//! This module holds the rules that decide which employees are shown, why their
//! figures changed, and how aggregates stay consistent after an inline edit. It
//! operates independently of any UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **tag_service**: Period-over-period change tags
//! - **filter_service**: Search, basic, named and advanced filters over the roster
//! - **roster_service**: Inline edits with aggregate recompute, period confirmation
//! - **summary_service**: Roster-wide totals and counts
//! - **sorting**: Stable downstream sort stage
//! - **saved_view_service**: Saved filter views and custom column views
//! - **pay_table**: Currency formatting and edit input parsing
//! - **synthetic_roster**: Seeded in-memory roster used as the data feed
//!
//! ## Business Rules
//!
//! - `totalIncome` always equals the sum of the six income elements
//! - `takeHomePay` always equals `totalIncome - deductions`
//! - `employerCost` always equals `totalIncome + employerNI + employerPension`
//! - Aggregates are derived and cannot be edited directly
//! - Filtering never mutates the roster and preserves roster order
//! - Percentage comparisons against a zero baseline evaluate to 0, never NaN

pub mod commands;
pub mod filter_service;
pub mod models;
pub mod pay_table;
pub mod roster_service;
pub mod saved_view_service;
pub mod sorting;
pub mod summary_service;
pub mod synthetic_roster;
pub mod tag_service;

#[cfg(test)]
pub mod test_utils;

pub use filter_service::*;
pub use pay_table::*;
pub use roster_service::*;
pub use saved_view_service::*;
pub use sorting::*;
pub use summary_service::*;
pub use synthetic_roster::*;
pub use tag_service::*;
