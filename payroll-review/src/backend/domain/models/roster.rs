//! Domain model for the roster held by the record store.
use shared::{Employee, PayElement};
use std::sync::Arc;

/// Ordered roster. Records are shared so an edit can replace one entry
/// while every other entry stays pointer-equal.
pub type Roster = Vec<Arc<Employee>>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RosterError {
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),
    #[error("{0} is derived from other pay elements and cannot be edited")]
    DerivedField(PayElement),
    #[error("Invalid amount for {element}: {value}")]
    InvalidAmount { element: PayElement, value: f64 },
    #[error("Employee {id} was modified concurrently (expected version {expected}, found {actual})")]
    VersionConflict { id: String, expected: u64, actual: u64 },
    #[error("Payroll period {0} is confirmed and can no longer be edited")]
    PeriodLocked(String),
    #[error("{0} current employee(s) have not been approved")]
    UnapprovedEmployees(usize),
}
