//! Record store orchestration and the recompute-on-edit rule.
//!
//! All roster mutation goes through [`RosterService::update_employee`], which
//! applies the edit, recomputes the affected aggregates, re-derives the
//! employee's tags and swaps the new roster into storage in one atomic step. Only the edited
//! record is replaced; every other record stays pointer-equal.
//!
//! ## Recompute rules
//!
//! - **Income element**: total income, take-home pay and employer cost
//! - **Deduction element**: deductions and take-home pay
//! - **Employer element**: employer cost
//! - **Aggregates**: not editable

use anyhow::{anyhow, Result};
use log::{info, warn};
use shared::{Employee, EmployeeStatus, PayElement, PayElementGroup, PayFigures, PayrollPeriod, PeriodStatus};
use std::sync::Arc;

use crate::backend::domain::commands::roster::{ConfirmPeriodCommand, EditEmployeeCommand, EditEmployeeResult};
use crate::backend::domain::models::{Roster, RosterError};
use crate::backend::domain::TagService;
use crate::backend::storage::RosterStorage;

/// Apply one edit to a roster, returning a new roster.
///
/// The targeted record is cloned, updated and recomputed; every other entry
/// is shared with the input.
pub fn apply_edit(
    roster: &[Arc<Employee>],
    employee_id: &str,
    element: PayElement,
    value: f64,
) -> Result<Roster, RosterError> {
    if element.is_aggregate() {
        return Err(RosterError::DerivedField(element));
    }
    if !value.is_finite() {
        return Err(RosterError::InvalidAmount { element, value });
    }

    let position = roster
        .iter()
        .position(|e| e.id == employee_id)
        .ok_or_else(|| RosterError::EmployeeNotFound(employee_id.to_string()))?;

    let mut updated = Employee::clone(&roster[position]);
    updated.pay.set_figure(element, value);
    match element.group() {
        PayElementGroup::Income => updated.pay.recompute_income(),
        PayElementGroup::Deduction => updated.pay.recompute_deductions(),
        PayElementGroup::Employer => updated.pay.recompute_employer_cost(),
        PayElementGroup::Aggregate => {}
    }
    updated.version += 1;

    let mut next = roster.to_vec();
    next[position] = Arc::new(updated);
    Ok(next)
}

/// Service owning the roster record store
#[derive(Clone)]
pub struct RosterService<S: RosterStorage> {
    storage: S,
    tag_service: TagService,
}

impl<S: RosterStorage> RosterService<S> {
    pub fn new(storage: S, tag_service: TagService) -> Self {
        Self { storage, tag_service }
    }

    pub fn roster(&self) -> Result<Roster> {
        self.storage.load_roster()
    }

    pub fn period(&self) -> Result<PayrollPeriod> {
        self.storage.get_period()
    }

    /// The single entry point for roster mutation.
    ///
    /// The period lock, the version check and the write happen under one
    /// store write, so a concurrent edit cannot slip in between.
    pub fn update_employee(&self, command: EditEmployeeCommand) -> Result<EditEmployeeResult> {
        info!(
            "Editing {} for employee {} to {:.2}",
            command.element, command.employee_id, command.value
        );

        let mut outcome = None;
        self.storage.modify_roster(&mut |period, roster| {
            let (updated, result) = self.edit_roster(period, roster, &command)?;
            outcome = Some(result);
            Ok(updated)
        })?;
        outcome.ok_or_else(|| anyhow!("Edit of employee {} produced no result", command.employee_id))
    }

    fn edit_roster(
        &self,
        period: &PayrollPeriod,
        roster: &[Arc<Employee>],
        command: &EditEmployeeCommand,
    ) -> Result<(Roster, EditEmployeeResult)> {
        if period.is_confirmed() {
            return Err(RosterError::PeriodLocked(period.id.clone()).into());
        }

        let current = roster
            .iter()
            .find(|e| e.id == command.employee_id)
            .ok_or_else(|| RosterError::EmployeeNotFound(command.employee_id.clone()))?;

        if let Some(expected) = command.expected_version {
            if current.version != expected {
                warn!("Version conflict editing employee {}", command.employee_id);
                return Err(RosterError::VersionConflict {
                    id: command.employee_id.clone(),
                    expected,
                    actual: current.version,
                }
                .into());
            }
        }
        let previous_value = current.figure(command.element);

        let mut updated = apply_edit(roster, &command.employee_id, command.element, command.value)?;
        let slot = updated
            .iter_mut()
            .find(|e| e.id == command.employee_id)
            .ok_or_else(|| RosterError::EmployeeNotFound(command.employee_id.clone()))?;
        self.tag_service.tag_employee(Arc::make_mut(slot));
        let employee = Arc::clone(slot);

        Ok((
            updated,
            EditEmployeeResult {
                employee,
                previous_value,
            },
        ))
    }

    /// Move the period to Confirmed once every current employee is approved
    pub fn confirm_period(&self, command: ConfirmPeriodCommand) -> Result<PayrollPeriod> {
        let mut period = self.storage.get_period()?;
        if period.is_confirmed() {
            return Ok(period);
        }

        let unapproved = self
            .storage
            .load_roster()?
            .iter()
            .filter(|e| e.status == EmployeeStatus::Current && !command.approved_ids.contains(&e.id))
            .count();
        if unapproved > 0 {
            return Err(RosterError::UnapprovedEmployees(unapproved).into());
        }

        period.status = PeriodStatus::Confirmed;
        self.storage.update_period(&period)?;
        info!("Confirmed payroll period {}", period.id);
        Ok(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::test_utils::*;
    use crate::backend::storage::InMemoryRosterRepository;
    use chrono::NaiveDate;
    use shared::TagKind;
    use std::sync::Mutex;

    /// Store that lands another operator's edit just before the next write
    struct InterleavingStorage {
        inner: InMemoryRosterRepository,
        competing_edit: Mutex<Option<EditEmployeeCommand>>,
    }

    impl RosterStorage for InterleavingStorage {
        fn load_roster(&self) -> Result<Roster> {
            self.inner.load_roster()
        }

        fn modify_roster(
            &self,
            edit: &mut dyn FnMut(&PayrollPeriod, &[Arc<Employee>]) -> Result<Roster>,
        ) -> Result<()> {
            let competing = self.competing_edit.lock().unwrap().take();
            if let Some(command) = competing {
                RosterService::new(self.inner.clone(), TagService::new()).update_employee(command)?;
            }
            self.inner.modify_roster(edit)
        }

        fn get_period(&self) -> Result<PayrollPeriod> {
            self.inner.get_period()
        }

        fn update_period(&self, period: &PayrollPeriod) -> Result<()> {
            self.inner.update_period(period)
        }
    }

    fn test_period() -> PayrollPeriod {
        PayrollPeriod::for_month(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()).unwrap()
    }

    fn create_test_service(employees: Vec<Employee>) -> RosterService<InMemoryRosterRepository> {
        RosterService::new(InMemoryRosterRepository::new(employees, test_period()), TagService::new())
    }

    fn edit(employee_id: &str, element: PayElement, value: f64) -> EditEmployeeCommand {
        EditEmployeeCommand {
            employee_id: employee_id.to_string(),
            element,
            value,
            expected_version: None,
        }
    }

    fn assert_aggregates_consistent(employee: &Employee) {
        let pay = &employee.pay;
        assert!((pay.total_income - pay.income_sum()).abs() < 1e-9);
        assert!((pay.deductions - pay.deduction_sum()).abs() < 1e-9);
        assert!((pay.take_home_pay - (pay.total_income - pay.deductions)).abs() < 1e-9);
        assert!((pay.employer_cost - (pay.total_income + pay.employer_ni + pay.employer_pension)).abs() < 1e-9);
    }

    #[test]
    fn test_apply_edit_recomputes_income_and_take_home() {
        let mut employee = create_test_employee("emp-1", "Sarah Chen", 2000.0);
        employee.pay.bonus = 100.0;
        employee.pay.paye = 300.0;
        employee.pay.recompute_all();
        let roster = create_test_roster(vec![employee]);

        let updated = apply_edit(&roster, "emp-1", PayElement::BasePay, 2500.0).unwrap();

        assert_eq!(updated[0].pay.base_pay, 2500.0);
        assert_eq!(updated[0].pay.total_income, 2600.0);
        assert_eq!(updated[0].pay.take_home_pay, 2300.0);
        assert_eq!(updated[0].version, 1);
        // Input roster untouched
        assert_eq!(roster[0].pay.base_pay, 2000.0);
    }

    #[test]
    fn test_apply_edit_replaces_only_target() {
        let roster = create_test_roster(vec![
            create_test_employee("emp-1", "A", 1000.0),
            create_test_employee("emp-2", "B", 2000.0),
            create_test_employee("emp-3", "C", 3000.0),
        ]);

        let updated = apply_edit(&roster, "emp-2", PayElement::Overtime, 50.0).unwrap();

        assert!(Arc::ptr_eq(&updated[0], &roster[0]));
        assert!(!Arc::ptr_eq(&updated[1], &roster[1]));
        assert!(Arc::ptr_eq(&updated[2], &roster[2]));
        assert_eq!(updated[1].pay.total_income, 2050.0);
    }

    #[test]
    fn test_apply_edit_keeps_aggregates_consistent_for_every_element() {
        let roster = create_test_roster(vec![create_test_employee("emp-1", "A", 2000.0)]);
        let editable: Vec<PayElement> = PayElement::ALL.into_iter().filter(|e| !e.is_aggregate()).collect();

        let mut current = roster;
        for (i, element) in editable.into_iter().enumerate() {
            current = apply_edit(&current, "emp-1", element, 10.0 * (i as f64 + 1.0)).unwrap();
            assert_aggregates_consistent(&current[0]);
        }
    }

    #[test]
    fn test_apply_edit_deduction_and_employer_elements() {
        let roster = create_test_roster(vec![create_test_employee("emp-1", "A", 2000.0)]);

        let updated = apply_edit(&roster, "emp-1", PayElement::Paye, 400.0).unwrap();
        assert_eq!(updated[0].pay.deductions, 400.0);
        assert_eq!(updated[0].pay.take_home_pay, 1600.0);

        let updated = apply_edit(&updated, "emp-1", PayElement::EmployerNi, 200.0).unwrap();
        assert_eq!(updated[0].pay.employer_cost, 2200.0);
        assert_eq!(updated[0].pay.take_home_pay, 1600.0);
    }

    #[test]
    fn test_apply_edit_errors() {
        let roster = create_test_roster(vec![create_test_employee("emp-1", "A", 2000.0)]);

        assert_eq!(
            apply_edit(&roster, "emp-9", PayElement::Bonus, 1.0).unwrap_err(),
            RosterError::EmployeeNotFound("emp-9".to_string())
        );
        assert_eq!(
            apply_edit(&roster, "emp-1", PayElement::TotalIncome, 1.0).unwrap_err(),
            RosterError::DerivedField(PayElement::TotalIncome)
        );
        assert!(matches!(
            apply_edit(&roster, "emp-1", PayElement::Bonus, f64::NAN).unwrap_err(),
            RosterError::InvalidAmount { .. }
        ));
    }

    #[test]
    fn test_update_employee_persists_and_retags() {
        let employee = with_unchanged_baseline(create_test_employee("emp-1", "Sarah Chen", 2000.0));
        let service = create_test_service(vec![employee, create_test_employee("emp-2", "Mark Lee", 1000.0)]);
        let before = service.roster().unwrap();

        let result = service.update_employee(edit("emp-1", PayElement::Bonus, 500.0)).unwrap();

        assert_eq!(result.previous_value, 0.0);
        assert!(result.employee.has_tag(TagKind::Bonus));
        let after = service.roster().unwrap();
        assert_eq!(after[0].pay.bonus, 500.0);
        assert!(after[0].has_tag(TagKind::Bonus));
        assert!(Arc::ptr_eq(&before[1], &after[1]));
    }

    #[test]
    fn test_update_employee_not_found_leaves_roster_untouched() {
        let service = create_test_service(vec![create_test_employee("emp-1", "A", 2000.0)]);

        let err = service.update_employee(edit("ghost", PayElement::Bonus, 10.0)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RosterError>(),
            Some(&RosterError::EmployeeNotFound("ghost".to_string()))
        );
        assert_eq!(service.roster().unwrap()[0].pay.bonus, 0.0);
    }

    #[test]
    fn test_update_employee_version_conflict() {
        let service = create_test_service(vec![create_test_employee("emp-1", "A", 2000.0)]);
        service.update_employee(edit("emp-1", PayElement::Bonus, 10.0)).unwrap();

        let mut stale = edit("emp-1", PayElement::Bonus, 20.0);
        stale.expected_version = Some(0);
        let err = service.update_employee(stale).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RosterError>(),
            Some(RosterError::VersionConflict { expected: 0, actual: 1, .. })
        ));

        let mut fresh = edit("emp-1", PayElement::Bonus, 20.0);
        fresh.expected_version = Some(1);
        assert_eq!(service.update_employee(fresh).unwrap().employee.version, 2);
    }

    #[test]
    fn test_concurrent_edit_is_not_overwritten() {
        let inner = InMemoryRosterRepository::new(vec![create_test_employee("emp-1", "A", 2000.0)], test_period());
        let mut other_operator = edit("emp-1", PayElement::Overtime, 999.0);
        other_operator.expected_version = Some(0);
        let service = RosterService::new(
            InterleavingStorage {
                inner: inner.clone(),
                competing_edit: Mutex::new(Some(other_operator)),
            },
            TagService::new(),
        );

        let mut stale = edit("emp-1", PayElement::Bonus, 10.0);
        stale.expected_version = Some(0);
        let err = service.update_employee(stale).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RosterError>(),
            Some(RosterError::VersionConflict { expected: 0, actual: 1, .. })
        ));
        let stored = &inner.load_roster().unwrap()[0];
        assert_eq!(stored.pay.overtime, 999.0);
        assert_eq!(stored.pay.bonus, 0.0);
        assert_eq!(stored.version, 1);
    }

    #[test]
    fn test_confirm_period_requires_current_employees_approved() {
        let mut leaver = create_test_employee("emp-2", "B", 1000.0);
        leaver.status = EmployeeStatus::Terminated;
        let service = create_test_service(vec![create_test_employee("emp-1", "A", 2000.0), leaver]);

        let err = service.confirm_period(ConfirmPeriodCommand::default()).unwrap_err();
        assert_eq!(err.downcast_ref::<RosterError>(), Some(&RosterError::UnapprovedEmployees(1)));

        let command = ConfirmPeriodCommand {
            approved_ids: ["emp-1".to_string()].into_iter().collect(),
        };
        let period = service.confirm_period(command).unwrap();
        assert_eq!(period.status, PeriodStatus::Confirmed);

        let err = service.update_employee(edit("emp-1", PayElement::Bonus, 1.0)).unwrap_err();
        assert!(matches!(err.downcast_ref::<RosterError>(), Some(RosterError::PeriodLocked(_))));
    }
}
