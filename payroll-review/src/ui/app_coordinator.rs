//! # App Coordinator Module
//!
//! The dashboard controller: owns the backend and the UI state, turns user
//! intents into state transitions and service calls, and derives the view
//! that a presentation layer renders.
//!
//! ## Application Flow:
//! 1. Load the roster from the record store
//! 2. Filter it with the criteria built from the current state
//! 3. Sort the filtered rows
//! 4. Format rows for the active breakdown and density
//! 5. Summarise the whole roster
//!
//! Failed edits and other rejected operations are logged and kept as the
//! last diagnostic instead of being dropped.

use anyhow::Result;
use log::{info, warn};
use shared::{
    CustomView, Employee, FormattedPayRow, PayElement, PayrollPeriod, PayrollSummary, SavedFilterView, ViewColumn,
};
use std::sync::Arc;

use crate::backend::domain::commands::roster::{ConfirmPeriodCommand, EditEmployeeCommand};
use crate::backend::domain::commands::views::{
    CreateCustomViewCommand, SaveFilterViewCommand, UpdateCustomViewCommand,
};
use crate::backend::domain::models::Roster;
use crate::backend::domain::sort_roster;
use crate::backend::Backend;
use crate::ui::state::{DashboardAction, DashboardState};

/// Everything the presentation layer needs for one render pass
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Filtered and sorted employees
    pub rows: Roster,
    pub table_rows: Vec<FormattedPayRow>,
    /// Totals over the whole roster, not just the visible rows
    pub summary: PayrollSummary,
    pub filtered_count: usize,
    pub total_count: usize,
    pub approved_count: usize,
    pub period: PayrollPeriod,
    /// Named filter ids that match no known filter
    pub unknown_filters: Vec<String>,
    pub last_diagnostic: Option<String>,
}

pub struct DashboardController {
    backend: Backend,
    state: DashboardState,
    last_diagnostic: Option<String>,
}

impl DashboardController {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            state: DashboardState::new(),
            last_diagnostic: None,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn last_diagnostic(&self) -> Option<&str> {
        self.last_diagnostic.as_deref()
    }

    pub fn dispatch(&mut self, action: DashboardAction) {
        self.state.reduce(action);
    }

    /// Inline edit from the pay table. `raw_input` is the text typed by the user.
    pub fn edit_employee(&mut self, employee_id: &str, element: PayElement, raw_input: &str) -> Result<Arc<Employee>> {
        let value = match self.backend.pay_table_service.parse_edit_input(raw_input) {
            Ok(value) => value,
            Err(err) => {
                let err = anyhow::Error::from(err);
                self.record_failure(&format!("Edit of {} for {}", element, employee_id), &err);
                return Err(err);
            }
        };

        let command = EditEmployeeCommand {
            employee_id: employee_id.to_string(),
            element,
            value,
            expected_version: None,
        };
        match self.backend.roster_service.update_employee(command) {
            Ok(result) => {
                self.last_diagnostic = None;
                Ok(result.employee)
            }
            Err(err) => {
                self.record_failure(&format!("Edit of {} for {}", element, employee_id), &err);
                Err(err)
            }
        }
    }

    /// Save the active filters under `name`
    pub fn save_current_view(&mut self, name: &str) -> Result<SavedFilterView> {
        let command = SaveFilterViewCommand {
            name: name.to_string(),
            advanced_filters: self.state.filters.advanced_filters.clone(),
            basic_filters: self.state.filters.snapshot_basic(),
        };
        self.backend.saved_view_service.save_filter_view(command)
    }

    /// Replace the active filters with a saved view
    pub fn load_view(&mut self, view_id: &str) -> Result<()> {
        let view = self.backend.saved_view_service.get_filter_view(view_id)?;
        info!("Applying saved view '{}'", view.name);
        self.dispatch(DashboardAction::ApplySavedView(view));
        Ok(())
    }

    pub fn delete_view(&mut self, view_id: &str) -> Result<()> {
        self.backend.saved_view_service.delete_filter_view(view_id)
    }

    pub fn saved_views(&self) -> Result<Vec<SavedFilterView>> {
        self.backend.saved_view_service.list_filter_views()
    }

    pub fn create_custom_view(&mut self, name: &str, fields: Vec<ViewColumn>) -> Result<CustomView> {
        self.backend.saved_view_service.create_custom_view(CreateCustomViewCommand {
            name: name.to_string(),
            fields,
        })
    }

    pub fn update_custom_view(
        &mut self,
        view_id: &str,
        name: Option<String>,
        fields: Option<Vec<ViewColumn>>,
    ) -> Result<CustomView> {
        self.backend.saved_view_service.update_custom_view(UpdateCustomViewCommand {
            view_id: view_id.to_string(),
            name,
            fields,
        })
    }

    pub fn delete_custom_view(&mut self, view_id: &str) -> Result<()> {
        self.backend.saved_view_service.delete_custom_view(view_id)
    }

    pub fn custom_views(&self) -> Result<Vec<CustomView>> {
        self.backend.saved_view_service.list_custom_views()
    }

    /// Approve every employee that passes the current filters.
    /// Returns how many were newly approved.
    pub fn approve_all_visible(&mut self) -> Result<usize> {
        let visible: Vec<String> = self.visible_rows()?.iter().map(|e| e.id.clone()).collect();
        let before = self.state.approvals.count();
        self.dispatch(DashboardAction::ApproveMany(visible));
        Ok(self.state.approvals.count() - before)
    }

    pub fn confirm_period(&mut self) -> Result<PayrollPeriod> {
        let command = ConfirmPeriodCommand {
            approved_ids: self.state.approvals.to_sorted_ids(),
        };
        self.backend.roster_service.confirm_period(command).inspect_err(|err| {
            warn!("Period confirmation rejected: {}", err);
        })
    }

    /// Filtered then sorted roster
    pub fn visible_rows(&self) -> Result<Roster> {
        let roster = self.backend.roster_service.roster()?;
        let filtered = self
            .backend
            .filter_service
            .filter_roster(&roster, &self.state.to_criteria());
        Ok(sort_roster(&filtered, &self.state.table.sort))
    }

    pub fn view(&self) -> Result<DashboardView> {
        let roster = self.backend.roster_service.roster()?;
        let period = self.backend.roster_service.period()?;
        let criteria = self.state.to_criteria();

        let filtered = self.backend.filter_service.filter_roster(&roster, &criteria);
        let rows = sort_roster(&filtered, &self.state.table.sort);
        let table_rows = self.backend.pay_table_service.format_rows(
            &rows,
            self.state.table.breakdown,
            self.state.table.density,
            self.state.approvals.approved_ids(),
        );

        Ok(DashboardView {
            filtered_count: rows.len(),
            total_count: roster.len(),
            approved_count: self.state.approvals.count(),
            summary: self.backend.summary_service.summarize(&roster, &period),
            unknown_filters: self.backend.filter_service.unknown_filter_ids(&criteria.named_filters),
            last_diagnostic: self.last_diagnostic.clone(),
            rows,
            table_rows,
            period,
        })
    }

    fn record_failure(&mut self, context: &str, err: &anyhow::Error) {
        warn!("{} failed: {}", context, err);
        self.last_diagnostic = Some(format!("{} failed: {}", context, err));
    }
}
