//! Fixture builders shared by the domain tests.

use chrono::NaiveDate;
use shared::{Employee, EmployeeStatus, EmploymentType, PayBreakdown};
use std::sync::Arc;

use super::models::Roster;

/// Employee with only base pay set and every aggregate consistent
pub fn create_test_employee(id: &str, name: &str, base_pay: f64) -> Employee {
    let mut pay = PayBreakdown {
        base_pay,
        ..Default::default()
    };
    pay.recompute_all();

    Employee {
        id: id.to_string(),
        name: name.to_string(),
        initials: Employee::initials_for(name),
        avatar: None,
        pay,
        department: "Engineering".to_string(),
        employment_type: EmploymentType::FullTime,
        status: EmployeeStatus::Current,
        start_date: NaiveDate::from_ymd_opt(2021, 4, 1).unwrap(),
        leave_date: None,
        is_new_joiner: false,
        is_leaver: false,
        pension_enrolled: false,
        previous_month: None,
        tags: Vec::new(),
        version: 0,
    }
}

/// Give an employee a previous-period baseline equal to its current figures
pub fn with_unchanged_baseline(mut employee: Employee) -> Employee {
    employee.previous_month = Some(employee.pay.clone());
    employee
}

/// Apply `change` to a copy of the current figures and store it as the baseline
pub fn with_baseline(mut employee: Employee, change: impl FnOnce(&mut PayBreakdown)) -> Employee {
    let mut previous = employee.pay.clone();
    change(&mut previous);
    previous.recompute_all();
    employee.previous_month = Some(previous);
    employee
}

pub fn create_test_roster(employees: Vec<Employee>) -> Roster {
    employees.into_iter().map(Arc::new).collect()
}
