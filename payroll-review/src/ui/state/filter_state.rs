//! # Filter State Module
//!
//! This module contains all state related to narrowing down the roster.
//!
//! ## Responsibilities:
//! - Search text
//! - Basic filters (changes only, department, employment type)
//! - The single-select card filter and the multi-select filter chips
//! - The ordered advanced filter list
//!
//! ## Purpose:
//! Card filters and basic filters are presented as mutually exclusive. The
//! clearing rules live here as explicit transitions so they can be tested on
//! their own.

use shared::{AdvancedFilter, BasicFilterSettings, SavedFilterView, ALL_SENTINEL};
use std::collections::BTreeSet;

use crate::backend::domain::models::FilterCriteria;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search_text: String,
    pub basic: BasicFilterSettings,
    /// Named filter selected by clicking a summary tile
    pub active_card: Option<String>,
    /// Named filters toggled on from the chip bar
    pub active_chips: BTreeSet<String>,
    pub advanced_filters: Vec<AdvancedFilter>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a card, or deselect it when it is already active.
    /// Clears search text, the department filter and "changes only".
    pub fn select_card(&mut self, card_id: &str) {
        if self.active_card.as_deref() == Some(card_id) {
            self.active_card = None;
        } else {
            self.active_card = Some(card_id.to_string());
        }
        self.search_text.clear();
        self.basic.department = ALL_SENTINEL.to_string();
        self.basic.show_changes_only = false;
    }

    /// Toggle a chip. Clears "changes only", the department filter and the card.
    pub fn toggle_chip(&mut self, chip_id: &str) {
        if !self.active_chips.remove(chip_id) {
            self.active_chips.insert(chip_id.to_string());
        }
        self.basic.show_changes_only = false;
        self.basic.department = ALL_SENTINEL.to_string();
        self.active_card = None;
    }

    pub fn set_department(&mut self, department: &str) {
        self.basic.department = department.to_string();
        self.active_card = None;
    }

    pub fn set_employment_type(&mut self, employment_type: &str) {
        self.basic.employment_type = employment_type.to_string();
    }

    pub fn set_changes_only(&mut self, enabled: bool) {
        self.basic.show_changes_only = enabled;
        if enabled {
            self.active_card = None;
        }
    }

    pub fn add_advanced_filter(&mut self, filter: AdvancedFilter) {
        self.advanced_filters.push(filter);
    }

    /// Returns true if a filter with this id was removed
    pub fn remove_advanced_filter(&mut self, filter_id: &str) -> bool {
        let before = self.advanced_filters.len();
        self.advanced_filters.retain(|f| f.id != filter_id);
        self.advanced_filters.len() != before
    }

    /// Replace the filter with the same id in place, keeping list order
    pub fn update_advanced_filter(&mut self, filter: AdvancedFilter) -> bool {
        match self.advanced_filters.iter_mut().find(|f| f.id == filter.id) {
            Some(slot) => {
                *slot = filter;
                true
            }
            None => false,
        }
    }

    /// Replace advanced filters and basic filters wholesale. Cards and chips
    /// are not part of a saved view, so they are cleared.
    pub fn apply_saved_view(&mut self, view: &SavedFilterView) {
        self.advanced_filters = view.advanced_filters.clone();
        self.basic = view.basic_filters.clone();
        self.active_card = None;
        self.active_chips.clear();
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Basic filter settings as they would be stored in a saved view
    pub fn snapshot_basic(&self) -> BasicFilterSettings {
        self.basic.clone()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_text.is_empty()
            || !self.basic.is_default()
            || self.active_card.is_some()
            || !self.active_chips.is_empty()
            || !self.advanced_filters.is_empty()
    }

    /// Criteria for the filter engine. The card comes first, then chips in id order.
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_text: self.search_text.clone(),
            named_filters: self
                .active_card
                .iter()
                .chain(self.active_chips.iter())
                .cloned()
                .collect(),
            advanced_filters: self.advanced_filters.clone(),
            ..FilterCriteria::default()
        }
        .with_basic(&self.basic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::{FilterCondition, PayElement};

    fn create_busy_state() -> FilterState {
        let mut state = FilterState::new();
        state.search_text = "sar".to_string();
        state.basic.department = "Sales".to_string();
        state.basic.show_changes_only = true;
        state.basic.employment_type = "part-time".to_string();
        state
    }

    #[test]
    fn test_select_card_clears_basic_filters() {
        let mut state = create_busy_state();
        state.select_card("new-joiners");

        assert_eq!(state.active_card.as_deref(), Some("new-joiners"));
        assert!(state.search_text.is_empty());
        assert_eq!(state.basic.department, "all");
        assert!(!state.basic.show_changes_only);
        assert_eq!(state.basic.employment_type, "part-time");

        state.select_card("new-joiners");
        assert_eq!(state.active_card, None);
    }

    #[test]
    fn test_toggle_chip_clears_card_and_basic_filters() {
        let mut state = create_busy_state();
        state.active_card = Some("leavers".to_string());

        state.toggle_chip("bonus");
        assert!(state.active_chips.contains("bonus"));
        assert_eq!(state.active_card, None);
        assert_eq!(state.basic.department, "all");
        assert!(!state.basic.show_changes_only);
        assert_eq!(state.search_text, "sar");

        state.toggle_chip("bonus");
        assert!(state.active_chips.is_empty());
    }

    #[test]
    fn test_advanced_filter_list_edits() {
        let mut state = FilterState::new();
        let first = AdvancedFilter::new(PayElement::BasePay, FilterCondition::Greater, 1500.0);
        let second = AdvancedFilter::new(PayElement::Bonus, FilterCondition::Greater, 0.0);
        state.add_advanced_filter(first.clone());
        state.add_advanced_filter(second.clone());

        let mut changed = first.clone();
        changed.value = 2000.0;
        assert!(state.update_advanced_filter(changed));
        assert_eq!(state.advanced_filters[0].value, 2000.0);
        assert_eq!(state.advanced_filters[1], second);

        assert!(state.remove_advanced_filter(&first.id));
        assert!(!state.remove_advanced_filter(&first.id));
        assert_eq!(state.advanced_filters, vec![second]);
    }

    #[test]
    fn test_apply_saved_view_replaces_wholesale() {
        let mut state = create_busy_state();
        state.add_advanced_filter(AdvancedFilter::new(PayElement::Ni, FilterCondition::Less, 10.0));

        let view = SavedFilterView {
            id: "view::1".to_string(),
            name: "Bonus".to_string(),
            advanced_filters: vec![AdvancedFilter::new(PayElement::Bonus, FilterCondition::Greater, 0.0)],
            basic_filters: BasicFilterSettings::default(),
            created_at: Utc::now(),
        };
        state.apply_saved_view(&view);

        assert_eq!(state.advanced_filters, view.advanced_filters);
        assert_eq!(state.snapshot_basic(), view.basic_filters);
        assert_eq!(state.active_card, None);
    }

    #[test]
    fn test_to_criteria_combines_card_and_chips() {
        let mut state = FilterState::new();
        assert!(!state.has_active_filters());

        state.toggle_chip("overtime");
        state.toggle_chip("bonus");
        state.active_card = Some("leavers".to_string());
        state.basic.employment_type = "contractor".to_string();

        let criteria = state.to_criteria();
        assert_eq!(criteria.named_filters, vec!["leavers", "bonus", "overtime"]);
        assert_eq!(criteria.employment_type, "contractor");
        assert_eq!(criteria.department, "all");
        assert!(state.has_active_filters());
    }
}
