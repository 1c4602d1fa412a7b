//! # In-Memory View Repository
//!
//! Saved filter views and custom column views for the current session.

use anyhow::{anyhow, Result};
use log::debug;
use shared::{CustomView, SavedFilterView};
use std::sync::{Arc, RwLock};

use crate::backend::storage::ViewStorage;

#[derive(Debug, Default)]
struct ViewRecords {
    saved_views: Vec<SavedFilterView>,
    custom_views: Vec<CustomView>,
}

/// View store backed by process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryViewRepository {
    records: Arc<RwLock<ViewRecords>>,
}

impl InMemoryViewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewStorage for InMemoryViewRepository {
    fn store_saved_view(&self, view: &SavedFilterView) -> Result<()> {
        let mut records = self.records.write().map_err(|_| anyhow!("View store lock poisoned"))?;
        if records.saved_views.iter().any(|v| v.id == view.id) {
            return Err(anyhow!("Saved view {} already exists", view.id));
        }
        records.saved_views.push(view.clone());
        debug!("Stored saved view {}", view.id);
        Ok(())
    }

    fn list_saved_views(&self) -> Result<Vec<SavedFilterView>> {
        let records = self.records.read().map_err(|_| anyhow!("View store lock poisoned"))?;
        Ok(records.saved_views.clone())
    }

    fn get_saved_view(&self, view_id: &str) -> Result<Option<SavedFilterView>> {
        let records = self.records.read().map_err(|_| anyhow!("View store lock poisoned"))?;
        Ok(records.saved_views.iter().find(|v| v.id == view_id).cloned())
    }

    fn delete_saved_view(&self, view_id: &str) -> Result<bool> {
        let mut records = self.records.write().map_err(|_| anyhow!("View store lock poisoned"))?;
        let before = records.saved_views.len();
        records.saved_views.retain(|v| v.id != view_id);
        Ok(records.saved_views.len() < before)
    }

    fn store_custom_view(&self, view: &CustomView) -> Result<()> {
        let mut records = self.records.write().map_err(|_| anyhow!("View store lock poisoned"))?;
        match records.custom_views.iter_mut().find(|v| v.id == view.id) {
            Some(existing) => *existing = view.clone(),
            None => records.custom_views.push(view.clone()),
        }
        debug!("Stored custom view {}", view.id);
        Ok(())
    }

    fn list_custom_views(&self) -> Result<Vec<CustomView>> {
        let records = self.records.read().map_err(|_| anyhow!("View store lock poisoned"))?;
        Ok(records.custom_views.clone())
    }

    fn get_custom_view(&self, view_id: &str) -> Result<Option<CustomView>> {
        let records = self.records.read().map_err(|_| anyhow!("View store lock poisoned"))?;
        Ok(records.custom_views.iter().find(|v| v.id == view_id).cloned())
    }

    fn delete_custom_view(&self, view_id: &str) -> Result<bool> {
        let mut records = self.records.write().map_err(|_| anyhow!("View store lock poisoned"))?;
        let before = records.custom_views.len();
        records.custom_views.retain(|v| v.id != view_id);
        Ok(records.custom_views.len() < before)
    }
}
