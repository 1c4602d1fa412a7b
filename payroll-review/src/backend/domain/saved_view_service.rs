//! Saved filter views and custom column views.
//!
//! ## Business Rules
//!
//! - Saved filter view names are non-empty and unique (case-insensitive)
//! - Saved filter views are immutable; they can only be deleted
//! - Custom views need a non-empty name and at least one distinct column
//! - Updating a custom view bumps `updated_at`

use anyhow::Result;
use chrono::Utc;
use log::info;
use shared::{CustomView, SavedFilterView, ViewColumn};
use std::collections::HashSet;

use crate::backend::domain::commands::views::{CreateCustomViewCommand, SaveFilterViewCommand, UpdateCustomViewCommand};
use crate::backend::storage::ViewStorage;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    #[error("View name cannot be empty")]
    EmptyName,
    #[error("A view named '{0}' already exists")]
    DuplicateName(String),
    #[error("View not found: {0}")]
    NotFound(String),
    #[error("A custom view needs at least one column")]
    NoFields,
    #[error("Column {0} is selected more than once")]
    DuplicateField(ViewColumn),
}

/// Service managing saved filter views and custom views
#[derive(Clone)]
pub struct SavedViewService<V: ViewStorage> {
    storage: V,
}

impl<V: ViewStorage> SavedViewService<V> {
    pub fn new(storage: V) -> Self {
        Self { storage }
    }

    /// Snapshot the given filters under a new name
    pub fn save_filter_view(&self, command: SaveFilterViewCommand) -> Result<SavedFilterView> {
        let name = command.name.trim().to_string();
        if name.is_empty() {
            return Err(ViewError::EmptyName.into());
        }
        let existing = self.storage.list_saved_views()?;
        if existing.iter().any(|v| v.name.eq_ignore_ascii_case(&name)) {
            return Err(ViewError::DuplicateName(name).into());
        }

        let now = Utc::now();
        let view = SavedFilterView {
            id: SavedFilterView::generate_id(now.timestamp_millis()),
            name,
            advanced_filters: command.advanced_filters,
            basic_filters: command.basic_filters,
            created_at: now,
        };
        self.storage.store_saved_view(&view)?;
        info!("Saved filter view '{}' with {} advanced filter(s)", view.name, view.advanced_filters.len());
        Ok(view)
    }

    pub fn list_filter_views(&self) -> Result<Vec<SavedFilterView>> {
        self.storage.list_saved_views()
    }

    pub fn get_filter_view(&self, view_id: &str) -> Result<SavedFilterView> {
        self.storage
            .get_saved_view(view_id)?
            .ok_or_else(|| ViewError::NotFound(view_id.to_string()).into())
    }

    pub fn delete_filter_view(&self, view_id: &str) -> Result<()> {
        if !self.storage.delete_saved_view(view_id)? {
            return Err(ViewError::NotFound(view_id.to_string()).into());
        }
        info!("Deleted filter view {}", view_id);
        Ok(())
    }

    pub fn create_custom_view(&self, command: CreateCustomViewCommand) -> Result<CustomView> {
        let name = validate_name(&command.name)?;
        validate_fields(&command.fields)?;

        let now = Utc::now();
        let view = CustomView {
            id: format!("custom::{}", uuid::Uuid::new_v4()),
            name,
            fields: command.fields,
            created_at: now,
            updated_at: now,
        };
        self.storage.store_custom_view(&view)?;
        info!("Created custom view '{}'", view.name);
        Ok(view)
    }

    pub fn update_custom_view(&self, command: UpdateCustomViewCommand) -> Result<CustomView> {
        let mut view = self
            .storage
            .get_custom_view(&command.view_id)?
            .ok_or_else(|| ViewError::NotFound(command.view_id.clone()))?;

        if let Some(name) = command.name {
            view.name = validate_name(&name)?;
        }
        if let Some(fields) = command.fields {
            validate_fields(&fields)?;
            view.fields = fields;
        }
        view.updated_at = Utc::now();

        self.storage.store_custom_view(&view)?;
        Ok(view)
    }

    pub fn delete_custom_view(&self, view_id: &str) -> Result<()> {
        if !self.storage.delete_custom_view(view_id)? {
            return Err(ViewError::NotFound(view_id.to_string()).into());
        }
        Ok(())
    }

    pub fn list_custom_views(&self) -> Result<Vec<CustomView>> {
        self.storage.list_custom_views()
    }
}

fn validate_name(name: &str) -> Result<String, ViewError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ViewError::EmptyName);
    }
    Ok(trimmed.to_string())
}

fn validate_fields(fields: &[ViewColumn]) -> Result<(), ViewError> {
    if fields.is_empty() {
        return Err(ViewError::NoFields);
    }
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(*field) {
            return Err(ViewError::DuplicateField(*field));
        }
    }
    Ok(())
}
