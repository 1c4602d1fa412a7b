//! # Storage Traits
//!
//! Abstractions that let the domain layer work against any record store.

use anyhow::Result;
use shared::{CustomView, Employee, PayrollPeriod, SavedFilterView};
use std::sync::Arc;

use crate::backend::domain::models::Roster;

/// Record store for the roster of the current pay period
pub trait RosterStorage: Send + Sync {
    /// Load the full roster in display order
    fn load_roster(&self) -> Result<Roster>;

    /// Read, check and replace the roster as one atomic step.
    ///
    /// `edit` sees the current period and roster under the store's write lock
    /// and returns the roster to store. If it fails the roster is untouched.
    fn modify_roster(
        &self,
        edit: &mut dyn FnMut(&PayrollPeriod, &[Arc<Employee>]) -> Result<Roster>,
    ) -> Result<()>;

    /// Get the pay period the roster belongs to
    fn get_period(&self) -> Result<PayrollPeriod>;

    /// Update the pay period (status changes)
    fn update_period(&self, period: &PayrollPeriod) -> Result<()>;
}

/// Storage for saved filter views and custom column views
pub trait ViewStorage: Send + Sync {
    /// Store a new saved filter view
    fn store_saved_view(&self, view: &SavedFilterView) -> Result<()>;

    /// List saved filter views in creation order
    fn list_saved_views(&self) -> Result<Vec<SavedFilterView>>;

    fn get_saved_view(&self, view_id: &str) -> Result<Option<SavedFilterView>>;

    /// Delete a saved filter view.
    /// Returns true if the view was found and deleted, false otherwise
    fn delete_saved_view(&self, view_id: &str) -> Result<bool>;

    /// Insert a custom view, or replace the one with the same ID
    fn store_custom_view(&self, view: &CustomView) -> Result<()>;

    /// List custom views in creation order
    fn list_custom_views(&self) -> Result<Vec<CustomView>>;

    fn get_custom_view(&self, view_id: &str) -> Result<Option<CustomView>>;

    /// Delete a custom view.
    /// Returns true if the view was found and deleted, false otherwise
    fn delete_custom_view(&self, view_id: &str) -> Result<bool>;
}
