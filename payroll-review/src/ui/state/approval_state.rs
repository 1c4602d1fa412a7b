//! # Approval State Module
//!
//! Tracks which employees are approved for the current pay run. Approval is
//! monotonic in the primary flow; the table variant can toggle it.

use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApprovalState {
    approved: HashSet<String>,
}

impl ApprovalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the employee was not approved before
    pub fn approve(&mut self, employee_id: &str) -> bool {
        self.approved.insert(employee_id.to_string())
    }

    /// Flip approval, returning the new state
    pub fn toggle(&mut self, employee_id: &str) -> bool {
        if self.approved.remove(employee_id) {
            false
        } else {
            self.approved.insert(employee_id.to_string());
            true
        }
    }

    /// Approve every id, returning how many were newly approved
    pub fn approve_many<I, S>(&mut self, employee_ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        employee_ids
            .into_iter()
            .filter(|id| self.approve(id.as_ref()))
            .count()
    }

    pub fn is_approved(&self, employee_id: &str) -> bool {
        self.approved.contains(employee_id)
    }

    pub fn count(&self) -> usize {
        self.approved.len()
    }

    pub fn approved_ids(&self) -> &HashSet<String> {
        &self.approved
    }

    /// Ordered copy for period confirmation
    pub fn to_sorted_ids(&self) -> BTreeSet<String> {
        self.approved.iter().cloned().collect()
    }
}
