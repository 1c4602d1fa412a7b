//! Downstream sort stage applied after filtering.

use shared::{Employee, PayFigures, SortDirection, SortField, SortSpec};
use std::cmp::Ordering;
use std::sync::Arc;

use crate::backend::domain::models::Roster;

/// Return the roster ordered by `sort`. Stable; `None` keeps input order.
pub fn sort_roster(roster: &[Arc<Employee>], sort: &SortSpec) -> Roster {
    let mut sorted = roster.to_vec();
    let Some(field) = sort.field else {
        return sorted;
    };

    match sort.direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| compare_by(field, a, b)),
        SortDirection::Descending => sorted.sort_by(|a, b| compare_by(field, b, a)),
        SortDirection::None => {}
    }
    sorted
}

fn compare_by(field: SortField, a: &Employee, b: &Employee) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Department => a.department.cmp(&b.department),
        SortField::EmploymentType => a.employment_type.label().cmp(b.employment_type.label()),
        SortField::Status => a.status.label().cmp(b.status.label()),
        SortField::Pay(element) => a.figure(element).total_cmp(&b.figure(element)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::test_utils::*;
    use shared::PayElement;

    fn names(roster: &Roster) -> Vec<&str> {
        roster.iter().map(|e| e.name.as_str()).collect()
    }

    fn create_sort_roster() -> Roster {
        create_test_roster(vec![
            create_test_employee("emp-1", "mark Lee", 2000.0),
            create_test_employee("emp-2", "Sarah Chen", 1000.0),
            create_test_employee("emp-3", "Anna Bell", 2000.0),
        ])
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let ordering = SortSpec {
            field: Some(SortField::Name),
            direction: SortDirection::Ascending,
        };
        assert_eq!(names(&sort_roster(&create_sort_roster(), &ordering)), vec!["Anna Bell", "mark Lee", "Sarah Chen"]);
    }

    #[test]
    fn test_sort_by_pay_is_stable_in_both_directions() {
        let roster = create_sort_roster();
        let ascending = SortSpec {
            field: Some(SortField::Pay(PayElement::BasePay)),
            direction: SortDirection::Ascending,
        };
        assert_eq!(names(&sort_roster(&roster, &ascending)), vec!["Sarah Chen", "mark Lee", "Anna Bell"]);

        let descending = SortSpec {
            direction: SortDirection::Descending,
            ..ascending
        };
        assert_eq!(names(&sort_roster(&roster, &descending)), vec!["mark Lee", "Anna Bell", "Sarah Chen"]);
    }

    #[test]
    fn test_no_direction_keeps_roster_order() {
        let roster = create_sort_roster();
        let ordering = SortSpec {
            field: Some(SortField::Name),
            direction: SortDirection::None,
        };
        assert_eq!(names(&sort_roster(&roster, &ordering)), names(&roster));
        assert_eq!(names(&sort_roster(&roster, &SortSpec::default())), names(&roster));
    }
}
