//! Seeded synthetic roster used in place of a real payroll data feed.
//!
//! Salaries come from per-department bands and deductions use flat,
//! illustrative rates. None of this is real tax computation. Event flags
//! (new joiner, leaver, pension enrolled) are computed here, once, relative
//! to the pay period the roster is generated for.

use anyhow::{anyhow, Result};
use chrono::{Duration, NaiveDate};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use shared::{Employee, EmployeeStatus, EmploymentType, PayBreakdown, PayrollPeriod};

use crate::backend::domain::TagService;

/// Roster generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub size: usize,
    pub seed: u64,
    /// Any day in the pay period; the period is the whole calendar month
    pub period_start: NaiveDate,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            size: 100,
            seed: 42,
            period_start: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default(),
        }
    }
}

struct DepartmentBand {
    name: &'static str,
    annual_min: f64,
    annual_max: f64,
    commission: bool,
    overtime: bool,
    on_call: bool,
}

const DEPARTMENTS: [DepartmentBand; 6] = [
    DepartmentBand { name: "Engineering", annual_min: 45_000.0, annual_max: 95_000.0, commission: false, overtime: true, on_call: true },
    DepartmentBand { name: "Sales", annual_min: 28_000.0, annual_max: 60_000.0, commission: true, overtime: false, on_call: false },
    DepartmentBand { name: "Marketing", annual_min: 30_000.0, annual_max: 65_000.0, commission: false, overtime: false, on_call: false },
    DepartmentBand { name: "Finance", annual_min: 35_000.0, annual_max: 80_000.0, commission: false, overtime: true, on_call: false },
    DepartmentBand { name: "Operations", annual_min: 25_000.0, annual_max: 50_000.0, commission: false, overtime: true, on_call: true },
    DepartmentBand { name: "HR", annual_min: 28_000.0, annual_max: 55_000.0, commission: false, overtime: false, on_call: false },
];

const FIRST_NAMES: [&str; 16] = [
    "Sarah", "James", "Priya", "Tom", "Aisha", "Daniel", "Chloe", "Mohammed",
    "Emily", "Oliver", "Grace", "Liam", "Sofia", "Ethan", "Hannah", "Ravi",
];

const LAST_NAMES: [&str; 16] = [
    "Chen", "Smith", "Patel", "Jones", "Khan", "Williams", "Brown", "Taylor",
    "Davies", "Evans", "Wilson", "Thomas", "Roberts", "Walker", "Wright", "Green",
];

/// Which statutory deductions apply to a pay breakdown
#[derive(Debug, Clone, Copy)]
struct DeductionProfile {
    pension: bool,
    student_loan: bool,
    postgrad_loan: bool,
}

/// Deterministic roster generator
#[derive(Debug, Clone, Default)]
pub struct SyntheticRosterGenerator {
    config: RosterConfig,
}

impl SyntheticRosterGenerator {
    pub fn new(config: RosterConfig) -> Self {
        Self { config }
    }

    /// The monthly pay period containing `period_start`
    pub fn period(&self) -> Result<PayrollPeriod> {
        PayrollPeriod::for_month(self.config.period_start)
            .ok_or_else(|| anyhow!("No pay period can be built for {}", self.config.period_start))
    }

    /// Generate `size` employees with derived flags, baselines and tags
    pub fn generate(&self, period: &PayrollPeriod, tag_service: &TagService) -> Vec<Employee> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let employees: Vec<Employee> = (0..self.config.size)
            .map(|index| {
                let mut employee = generate_employee(&mut rng, index, period);
                tag_service.tag_employee(&mut employee);
                employee
            })
            .collect();

        info!(
            "Generated {} synthetic employees for {} (seed {})",
            employees.len(),
            period.name,
            self.config.seed
        );
        employees
    }
}

fn generate_employee(rng: &mut StdRng, index: usize, period: &PayrollPeriod) -> Employee {
    let band = &DEPARTMENTS[rng.random_range(0..DEPARTMENTS.len())];
    let name = format!(
        "{} {}",
        FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())],
        LAST_NAMES[rng.random_range(0..LAST_NAMES.len())]
    );

    let employment_type = match rng.random_range(0..100) {
        0..=74 => EmploymentType::FullTime,
        75..=89 => EmploymentType::PartTime,
        _ => EmploymentType::Contractor,
    };
    let status = match rng.random_range(0..100) {
        0..=89 => EmployeeStatus::Current,
        90..=95 => EmployeeStatus::OnLeave,
        _ => EmployeeStatus::Terminated,
    };

    let period_days = days_between(period.start_date, period.end_date);
    let start_date = if status != EmployeeStatus::Terminated && rng.random_bool(0.08) {
        period.start_date + Duration::days(rng.random_range(0..period_days))
    } else {
        period.start_date - Duration::days(rng.random_range(60..3650))
    };
    let leave_date = if status == EmployeeStatus::Terminated || rng.random_bool(0.03) {
        let earliest = start_date.max(period.start_date);
        Some(earliest + Duration::days(rng.random_range(0..days_between(earliest, period.end_date))))
    } else {
        None
    };

    let is_new_joiner = period.contains(start_date);
    let is_leaver = leave_date.is_some_and(|date| period.contains(date));

    let mut annual = rng.random_range(band.annual_min..band.annual_max);
    if employment_type == EmploymentType::PartTime {
        annual *= 0.6;
    }
    let full_month_base = round_pence(annual / 12.0);

    let worked_from = start_date.max(period.start_date);
    let worked_to = leave_date.map_or(period.end_date, |date| date.min(period.end_date));
    let worked_share = days_between(worked_from, worked_to) as f64 / period_days as f64;

    let profile = DeductionProfile {
        pension: employment_type != EmploymentType::Contractor && rng.random_bool(0.85),
        student_loan: rng.random_bool(0.2),
        postgrad_loan: rng.random_bool(0.05),
    };

    let mut pay = PayBreakdown {
        base_pay: round_pence(full_month_base * worked_share),
        ..Default::default()
    };
    if rng.random_bool(0.15) {
        pay.bonus = round_pence(rng.random_range(250.0..2500.0));
    }
    if band.commission && rng.random_bool(0.6) {
        pay.commission = round_pence(rng.random_range(100.0..1500.0));
    }
    if band.overtime && rng.random_bool(0.25) {
        pay.overtime = round_pence(rng.random_range(50.0..600.0));
    }
    if rng.random_bool(0.2) {
        pay.gif_flex = round_pence(rng.random_range(20.0..150.0));
    }
    if band.on_call && rng.random_bool(0.15) {
        pay.on_call = round_pence(rng.random_range(100.0..300.0));
    }
    apply_deductions(&mut pay, profile);

    let previous_month = if is_new_joiner {
        PayBreakdown::default()
    } else {
        generate_previous(rng, &pay, full_month_base, profile)
    };

    Employee {
        id: format!("emp-{:03}", index + 1),
        initials: Employee::initials_for(&name),
        name,
        avatar: None,
        pay,
        department: band.name.to_string(),
        employment_type,
        status,
        start_date,
        leave_date,
        is_new_joiner,
        is_leaver,
        pension_enrolled: profile.pension,
        previous_month: Some(previous_month),
        tags: Vec::new(),
        version: 0,
    }
}

/// Last period's figures: a full month of base pay with some variation
fn generate_previous(rng: &mut StdRng, current: &PayBreakdown, full_month_base: f64, profile: DeductionProfile) -> PayBreakdown {
    let mut previous = PayBreakdown {
        base_pay: full_month_base,
        gif_flex: current.gif_flex,
        on_call: current.on_call,
        ..Default::default()
    };
    if rng.random_bool(0.1) {
        previous.base_pay = round_pence(full_month_base - rng.random_range(100.0..400.0)).max(0.0);
    }
    if current.commission > 0.0 {
        previous.commission = round_pence(current.commission * rng.random_range(0.6..1.2));
    }
    if current.overtime > 0.0 && rng.random_bool(0.5) {
        previous.overtime = current.overtime;
    }

    let mut previous_profile = profile;
    if profile.pension && rng.random_bool(0.05) {
        previous_profile.pension = false;
    }
    if profile.student_loan && rng.random_bool(0.1) {
        previous_profile.student_loan = false;
    }
    apply_deductions(&mut previous, previous_profile);
    previous
}

/// Flat illustrative rates over monthly thresholds, then recompute aggregates
fn apply_deductions(pay: &mut PayBreakdown, profile: DeductionProfile) {
    let income = pay.income_sum();
    let above = |threshold: f64, rate: f64| round_pence((income - threshold).max(0.0) * rate);

    pay.paye = above(1_047.5, 0.2);
    pay.ni = above(1_048.0, 0.08);
    pay.pension = if profile.pension { round_pence(pay.base_pay * 0.05) } else { 0.0 };
    pay.student_loan = if profile.student_loan { above(2_274.0, 0.09) } else { 0.0 };
    pay.postgrad_loan = if profile.postgrad_loan { above(1_750.0, 0.06) } else { 0.0 };
    pay.employer_ni = above(417.0, 0.15);
    pay.employer_pension = if profile.pension { round_pence(pay.base_pay * 0.03) } else { 0.0 };
    pay.recompute_all();
}

/// Inclusive day count
fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    ((to - from).num_days() + 1).max(1)
}

fn round_pence(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
