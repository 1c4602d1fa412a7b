//! Filter and derivation engine for the payroll review dashboard.
//!
//! Takes the roster plus a [`FilterCriteria`] and produces the order-preserving
//! subsequence of employees that satisfy every active predicate. The roster is
//! never mutated and the full roster is re-scanned on every call.
//!
//! ## Predicates (combined with AND)
//!
//! - **Search**: case-insensitive substring of the employee name
//! - **Changes only**: employee carries at least one derived tag
//! - **Department / employment type**: exact match, or the `all` sentinel
//! - **Named filters**: card and chip identifiers, see [`RosterFilter`].
//!   Unknown identifiers do not restrict the result.
//! - **Advanced filters**: numeric comparisons over a pay element, optionally
//!   against the previous period

use log::debug;
use serde::{Deserialize, Serialize};
use shared::{AdvancedFilter, Employee, FilterCondition, PayFigures, ALL_SENTINEL};
use std::sync::Arc;

use crate::backend::domain::models::{FilterCriteria, Roster, RosterFilter};

/// Numeric tolerances used by advanced filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRules {
    /// Maximum difference for an `equal` condition to hold
    pub equality_tolerance: f64,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            equality_tolerance: 0.01,
        }
    }
}

/// Service that derives filtered views of the roster
#[derive(Debug, Clone, Default)]
pub struct FilterService {
    rules: FilterRules,
}

impl FilterService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: FilterRules) -> Self {
        Self { rules }
    }

    /// Filter the roster, keeping input order
    pub fn filter_roster(&self, roster: &[Arc<Employee>], criteria: &FilterCriteria) -> Roster {
        let needle = criteria.search_text.to_lowercase();
        let named = self.resolve_named_filters(&criteria.named_filters);

        let filtered: Roster = roster
            .iter()
            .filter(|employee| self.matches(employee, criteria, &needle, &named))
            .cloned()
            .collect();

        debug!("Filtered roster from {} to {} employee(s)", roster.len(), filtered.len());
        filtered
    }

    /// Identifiers that no named filter recognises
    pub fn unknown_filter_ids(&self, ids: &[String]) -> Vec<String> {
        ids.iter()
            .filter(|id| RosterFilter::from_id(id).is_none())
            .cloned()
            .collect()
    }

    /// Evaluate one advanced filter against one employee
    pub fn evaluate_advanced_filter(&self, employee: &Employee, filter: &AdvancedFilter) -> bool {
        let test_value = self.test_value(employee, filter);
        let filter_value = self.filter_value(employee, filter);

        match filter.condition {
            FilterCondition::Greater => test_value > filter_value,
            FilterCondition::Less => test_value < filter_value,
            FilterCondition::Equal => (test_value - filter_value).abs() <= self.rules.equality_tolerance,
        }
    }

    /// The figure compared against the threshold.
    ///
    /// With `compare_to_last_month` and a baseline this is the change (or the
    /// percentage change) against the previous period; otherwise the raw figure.
    pub fn test_value(&self, employee: &Employee, filter: &AdvancedFilter) -> f64 {
        let current = employee.figure(filter.pay_element);

        let value = match (filter.compare_to_last_month, employee.previous_figure(filter.pay_element)) {
            (true, Some(previous)) if filter.is_percentage => {
                if previous == 0.0 {
                    0.0
                } else {
                    (current - previous) / previous * 100.0
                }
            }
            (true, Some(previous)) => current - previous,
            _ => current,
        };
        finite_or_zero(value)
    }

    /// The threshold the test value is compared with.
    ///
    /// A percentage filter that does not compare to last month is a share of
    /// the filter's base element (total income unless set).
    pub fn filter_value(&self, employee: &Employee, filter: &AdvancedFilter) -> f64 {
        if filter.is_percentage && !filter.compare_to_last_month {
            let base = employee.figure(filter.percentage_base());
            finite_or_zero(filter.value / 100.0 * base)
        } else {
            filter.value
        }
    }

    fn matches(
        &self,
        employee: &Employee,
        criteria: &FilterCriteria,
        needle: &str,
        named: &[RosterFilter],
    ) -> bool {
        (needle.is_empty() || employee.name.to_lowercase().contains(needle))
            && (!criteria.show_changes_only || employee.has_changes())
            && matches_department(employee, &criteria.department)
            && employee.employment_type.matches_filter(&criteria.employment_type)
            && named.iter().all(|filter| filter.matches(employee))
            && criteria
                .advanced_filters
                .iter()
                .all(|filter| self.evaluate_advanced_filter(employee, filter))
    }

    fn resolve_named_filters(&self, ids: &[String]) -> Vec<RosterFilter> {
        ids.iter()
            .filter_map(|id| {
                let resolved = RosterFilter::from_id(id);
                if resolved.is_none() {
                    debug!("Ignoring unknown filter identifier: {}", id);
                }
                resolved
            })
            .collect()
    }
}

/// An empty value means `all`, the same as for employment type
fn matches_department(employee: &Employee, department: &str) -> bool {
    let department = department.trim();
    department.is_empty() || department.eq_ignore_ascii_case(ALL_SENTINEL) || employee.department == department
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
