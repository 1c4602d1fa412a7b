//! Tag derivation for the payroll review dashboard.
//!
//! Tags explain why an employee's figures moved between the previous and the
//! current pay period. Every rule is evaluated independently, so one employee
//! can carry several tags. Employees without a previous-period baseline get
//! no tags at all.
//!
//! ## Rules
//!
//! - **New Joiner / Leaver**: read from the ingestion-time event flags
//! - **Bonus / Overtime / Commission**: the element increased
//! - **Salary Change**: base pay moved by more than the configured threshold
//! - **Net Difference**: take-home pay moved by more than the configured percentage
//! - **Pension Enrolment / Student Loan**: a statutory deduction started this period
//!
//! Tags are not kept in sync automatically. Callers re-derive them whenever
//! a compared field changes.

use log::debug;
use serde::{Deserialize, Serialize};
use shared::{Employee, Tag, TagKind};

/// Thresholds used by the tag rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagRules {
    /// Absolute base pay movement, in currency units, that counts as a salary change
    pub salary_change_threshold: f64,
    /// Take-home movement, in percent, that counts as a net difference
    pub net_difference_percent: f64,
}

impl Default for TagRules {
    fn default() -> Self {
        Self {
            salary_change_threshold: 100.0,
            net_difference_percent: 5.0,
        }
    }
}

/// Service that derives change tags for employees
#[derive(Debug, Clone, Default)]
pub struct TagService {
    rules: TagRules,
}

impl TagService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: TagRules) -> Self {
        Self { rules }
    }

    /// Derive the ordered tag list for one employee
    pub fn derive_tags(&self, employee: &Employee) -> Vec<Tag> {
        let Some(previous) = employee.previous_month.as_ref() else {
            return Vec::new();
        };
        let current = &employee.pay;
        let mut kinds = Vec::new();

        if employee.is_new_joiner {
            kinds.push(TagKind::NewJoiner);
        }
        if employee.is_leaver {
            kinds.push(TagKind::Leaver);
        }
        if current.bonus - previous.bonus > 0.0 {
            kinds.push(TagKind::Bonus);
        }
        if current.overtime - previous.overtime > 0.0 {
            kinds.push(TagKind::Overtime);
        }
        if (current.base_pay - previous.base_pay).abs() > self.rules.salary_change_threshold {
            kinds.push(TagKind::SalaryChange);
        }
        if current.commission - previous.commission > 0.0 {
            kinds.push(TagKind::Commission);
        }
        if previous.take_home_pay > 0.0 {
            let percent = ((current.take_home_pay - previous.take_home_pay) / previous.take_home_pay).abs() * 100.0;
            if percent > self.rules.net_difference_percent {
                kinds.push(TagKind::NetDifference);
            }
        }
        if current.pension > 0.0 && previous.pension == 0.0 {
            kinds.push(TagKind::PensionEnrolment);
        }
        if current.student_loan > 0.0 && previous.student_loan == 0.0 {
            kinds.push(TagKind::StudentLoan);
        }

        debug!("Derived {} tag(s) for employee {}", kinds.len(), employee.id);
        kinds.into_iter().map(Tag::new).collect()
    }

    /// Replace an employee's tags with freshly derived ones
    pub fn tag_employee(&self, employee: &mut Employee) {
        employee.tags = self.derive_tags(employee);
    }

    pub fn tag_all(&self, employees: &mut [Employee]) {
        for employee in employees.iter_mut() {
            self.tag_employee(employee);
        }
    }
}
