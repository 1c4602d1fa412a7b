//! Roster-wide payroll summary.
//!
//! Totals are recomputed from the roster on every call so they can never
//! drift from the records after an edit.

use shared::{Employee, PayElement, PayFigures, PayrollPeriod, PayrollSummary};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Summarise every employee on the roster for the given period
    pub fn summarize(&self, roster: &[Arc<Employee>], period: &PayrollPeriod) -> PayrollSummary {
        let mut summary = PayrollSummary {
            period_id: period.id.clone(),
            employee_count: roster.len(),
            ..Default::default()
        };

        for employee in roster {
            let pay = &employee.pay;
            summary.total_gross += pay.total_income;
            summary.total_deductions += pay.deductions;
            summary.total_take_home += pay.take_home_pay;
            summary.total_employer_ni += pay.employer_ni;
            summary.total_employer_pension += pay.employer_pension;
            summary.total_employer_cost += pay.employer_cost;

            if let Some(previous) = &employee.previous_month {
                summary.previous_total_gross += previous.total_income;
                summary.previous_total_deductions += previous.deductions;
                summary.previous_total_take_home += previous.take_home_pay;
                summary.previous_total_employer_cost += previous.employer_cost;
            }

            if employee.is_new_joiner {
                summary.new_joiner_count += 1;
            }
            if employee.is_leaver {
                summary.leaver_count += 1;
            }
            if employee.has_changes() {
                summary.changed_count += 1;
            }
            if employee.pension_enrolled {
                summary.pension_enrolled_count += 1;
            }
        }

        summary
    }

    /// Sum of one pay element over a set of employees
    pub fn total_for(&self, employees: &[Arc<Employee>], element: PayElement) -> f64 {
        employees.iter().map(|e| e.figure(element)).sum()
    }
}
