//! # Dashboard State Module
//!
//! The single transition function for UI state. Every user intent is a
//! [`DashboardAction`]; [`DashboardState::reduce`] applies it to the filter,
//! table and approval sub-states.

use log::debug;
use shared::{AdvancedFilter, BreakdownView, DensityMode, SavedFilterView, SortField};

use super::{ApprovalState, FilterState, TableState};
use crate::backend::domain::models::FilterCriteria;

/// User intents that change UI state
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SetSearch(String),
    SelectCard(String),
    ToggleChip(String),
    SetDepartment(String),
    SetEmploymentType(String),
    SetChangesOnly(bool),
    AddAdvancedFilter(AdvancedFilter),
    UpdateAdvancedFilter(AdvancedFilter),
    RemoveAdvancedFilter(String),
    ClearAdvancedFilters,
    ApplySavedView(SavedFilterView),
    ClearAllFilters,
    SortBy(SortField),
    SetBreakdown(BreakdownView),
    SetDensity(DensityMode),
    Approve(String),
    ToggleApproval(String),
    ApproveMany(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub filters: FilterState,
    pub table: TableState,
    pub approvals: ApprovalState,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&mut self, action: DashboardAction) {
        debug!("Reducing {:?}", action);
        match action {
            DashboardAction::SetSearch(text) => self.filters.search_text = text,
            DashboardAction::SelectCard(card_id) => self.filters.select_card(&card_id),
            DashboardAction::ToggleChip(chip_id) => self.filters.toggle_chip(&chip_id),
            DashboardAction::SetDepartment(department) => self.filters.set_department(&department),
            DashboardAction::SetEmploymentType(employment_type) => {
                self.filters.set_employment_type(&employment_type)
            }
            DashboardAction::SetChangesOnly(enabled) => self.filters.set_changes_only(enabled),
            DashboardAction::AddAdvancedFilter(filter) => self.filters.add_advanced_filter(filter),
            DashboardAction::UpdateAdvancedFilter(filter) => {
                self.filters.update_advanced_filter(filter);
            }
            DashboardAction::RemoveAdvancedFilter(filter_id) => {
                self.filters.remove_advanced_filter(&filter_id);
            }
            DashboardAction::ClearAdvancedFilters => self.filters.advanced_filters.clear(),
            DashboardAction::ApplySavedView(view) => self.filters.apply_saved_view(&view),
            DashboardAction::ClearAllFilters => self.filters.clear_all(),
            DashboardAction::SortBy(field) => self.table.sort_by(field),
            DashboardAction::SetBreakdown(breakdown) => self.table.set_breakdown(breakdown),
            DashboardAction::SetDensity(density) => self.table.set_density(density),
            DashboardAction::Approve(employee_id) => {
                self.approvals.approve(&employee_id);
            }
            DashboardAction::ToggleApproval(employee_id) => {
                self.approvals.toggle(&employee_id);
            }
            DashboardAction::ApproveMany(employee_ids) => {
                self.approvals.approve_many(employee_ids);
            }
        }
    }

    /// Return a new state with `action` applied
    pub fn reduced(mut self, action: DashboardAction) -> Self {
        self.reduce(action);
        self
    }

    pub fn to_criteria(&self) -> FilterCriteria {
        self.filters.to_criteria()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::{BasicFilterSettings, FilterCondition, PayElement, SortDirection};

    #[test]
    fn test_card_select_is_an_explicit_transition() {
        let state = DashboardState::new()
            .reduced(DashboardAction::SetSearch("sar".to_string()))
            .reduced(DashboardAction::SetDepartment("Sales".to_string()))
            .reduced(DashboardAction::SetChangesOnly(true))
            .reduced(DashboardAction::SelectCard("pension-enrolled".to_string()));

        let criteria = state.to_criteria();
        assert_eq!(criteria.search_text, "");
        assert_eq!(criteria.department, "all");
        assert!(!criteria.show_changes_only);
        assert_eq!(criteria.named_filters, vec!["pension-enrolled"]);
    }

    #[test]
    fn test_basic_filters_deselect_card() {
        let state = DashboardState::new()
            .reduced(DashboardAction::SelectCard("leavers".to_string()))
            .reduced(DashboardAction::SetDepartment("Finance".to_string()));
        assert_eq!(state.filters.active_card, None);

        let state = state
            .reduced(DashboardAction::SelectCard("leavers".to_string()))
            .reduced(DashboardAction::SetChangesOnly(true));
        assert_eq!(state.filters.active_card, None);
        assert!(state.filters.basic.show_changes_only);
    }

    #[test]
    fn test_applying_saved_view_clears_card_and_chips() {
        let view = SavedFilterView {
            id: "view::1".to_string(),
            name: "Sales changes".to_string(),
            advanced_filters: Vec::new(),
            basic_filters: BasicFilterSettings {
                show_changes_only: true,
                department: "Sales".to_string(),
                employment_type: "all".to_string(),
            },
            created_at: Utc::now(),
        };
        let state = DashboardState::new()
            .reduced(DashboardAction::SelectCard("leavers".to_string()))
            .reduced(DashboardAction::ToggleChip("bonus".to_string()))
            .reduced(DashboardAction::SelectCard("new-joiners".to_string()))
            .reduced(DashboardAction::ApplySavedView(view));

        let criteria = state.to_criteria();
        assert!(criteria.named_filters.is_empty());
        assert_eq!(criteria.department, "Sales");
        assert!(criteria.show_changes_only);
    }

    #[test]
    fn test_advanced_filter_actions() {
        let filter = AdvancedFilter::new(PayElement::Bonus, FilterCondition::Greater, 0.0);
        let mut state = DashboardState::new()
            .reduced(DashboardAction::AddAdvancedFilter(filter.clone()))
            .reduced(DashboardAction::AddAdvancedFilter(AdvancedFilter::new(
                PayElement::Ni,
                FilterCondition::Less,
                50.0,
            )));
        assert_eq!(state.to_criteria().advanced_filters.len(), 2);

        state.reduce(DashboardAction::RemoveAdvancedFilter(filter.id.clone()));
        assert_eq!(state.filters.advanced_filters.len(), 1);

        state.reduce(DashboardAction::ClearAdvancedFilters);
        assert!(state.filters.advanced_filters.is_empty());
    }

    #[test]
    fn test_table_and_approval_actions() {
        let state = DashboardState::new()
            .reduced(DashboardAction::SortBy(SortField::Name))
            .reduced(DashboardAction::SetBreakdown(BreakdownView::EmployerCost))
            .reduced(DashboardAction::Approve("emp-1".to_string()))
            .reduced(DashboardAction::ApproveMany(vec!["emp-2".to_string(), "emp-3".to_string()]))
            .reduced(DashboardAction::ToggleApproval("emp-3".to_string()));

        assert_eq!(state.table.sort.direction, SortDirection::Ascending);
        assert_eq!(state.table.breakdown, BreakdownView::EmployerCost);
        assert_eq!(state.approvals.count(), 2);
        assert!(!state.approvals.is_approved("emp-3"));
    }

    #[test]
    fn test_clear_all_filters_keeps_layout_and_approvals() {
        let state = DashboardState::new()
            .reduced(DashboardAction::ToggleChip("bonus".to_string()))
            .reduced(DashboardAction::SetDensity(DensityMode::Detailed))
            .reduced(DashboardAction::Approve("emp-1".to_string()))
            .reduced(DashboardAction::ClearAllFilters);

        assert_eq!(state.filters, FilterState::default());
        assert_eq!(state.table.density, DensityMode::Detailed);
        assert!(state.approvals.is_approved("emp-1"));
    }
}
