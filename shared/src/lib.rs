use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sentinel used by basic filters to mean "no restriction"
pub const ALL_SENTINEL: &str = "all";

/// Error raised when a pay element or column name is not recognised
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayElementError {
    #[error("Unknown pay element: {0}")]
    UnknownField(String),
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

/// Every numeric field carried by an employee record.
///
/// Income elements feed `TotalIncome`, deduction elements feed `Deductions`,
/// employer elements feed `EmployerCost`. The aggregates themselves are
/// derived and never edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PayElement {
    BasePay,
    Bonus,
    Commission,
    Overtime,
    GifFlex,
    OnCall,
    TotalIncome,
    Paye,
    Ni,
    Pension,
    StudentLoan,
    PostgradLoan,
    Deductions,
    #[serde(rename = "employerNI")]
    EmployerNi,
    EmployerPension,
    EmployerCost,
    TakeHomePay,
}

/// Which aggregate a pay element belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayElementGroup {
    Income,
    Deduction,
    Employer,
    Aggregate,
}

impl PayElement {
    pub const ALL: [PayElement; 17] = [
        PayElement::BasePay,
        PayElement::Bonus,
        PayElement::Commission,
        PayElement::Overtime,
        PayElement::GifFlex,
        PayElement::OnCall,
        PayElement::TotalIncome,
        PayElement::Paye,
        PayElement::Ni,
        PayElement::Pension,
        PayElement::StudentLoan,
        PayElement::PostgradLoan,
        PayElement::Deductions,
        PayElement::EmployerNi,
        PayElement::EmployerPension,
        PayElement::EmployerCost,
        PayElement::TakeHomePay,
    ];

    pub const INCOME: [PayElement; 6] = [
        PayElement::BasePay,
        PayElement::Bonus,
        PayElement::Commission,
        PayElement::Overtime,
        PayElement::GifFlex,
        PayElement::OnCall,
    ];

    pub const DEDUCTIONS: [PayElement; 5] = [
        PayElement::Paye,
        PayElement::Ni,
        PayElement::Pension,
        PayElement::StudentLoan,
        PayElement::PostgradLoan,
    ];

    pub const EMPLOYER: [PayElement; 2] = [PayElement::EmployerNi, PayElement::EmployerPension];

    /// Field identifier as used by filters and saved views
    pub fn key(&self) -> &'static str {
        match self {
            PayElement::BasePay => "basePay",
            PayElement::Bonus => "bonus",
            PayElement::Commission => "commission",
            PayElement::Overtime => "overtime",
            PayElement::GifFlex => "gifFlex",
            PayElement::OnCall => "onCall",
            PayElement::TotalIncome => "totalIncome",
            PayElement::Paye => "paye",
            PayElement::Ni => "ni",
            PayElement::Pension => "pension",
            PayElement::StudentLoan => "studentLoan",
            PayElement::PostgradLoan => "postgradLoan",
            PayElement::Deductions => "deductions",
            PayElement::EmployerNi => "employerNI",
            PayElement::EmployerPension => "employerPension",
            PayElement::EmployerCost => "employerCost",
            PayElement::TakeHomePay => "takeHomePay",
        }
    }

    /// Human-readable column heading
    pub fn label(&self) -> &'static str {
        match self {
            PayElement::BasePay => "Base Pay",
            PayElement::Bonus => "Bonus",
            PayElement::Commission => "Commission",
            PayElement::Overtime => "Overtime",
            PayElement::GifFlex => "GIF Flex",
            PayElement::OnCall => "On Call",
            PayElement::TotalIncome => "Total Income",
            PayElement::Paye => "PAYE",
            PayElement::Ni => "NI",
            PayElement::Pension => "Pension",
            PayElement::StudentLoan => "Student Loan",
            PayElement::PostgradLoan => "Postgrad Loan",
            PayElement::Deductions => "Deductions",
            PayElement::EmployerNi => "Employer NI",
            PayElement::EmployerPension => "Employer Pension",
            PayElement::EmployerCost => "Employer Cost",
            PayElement::TakeHomePay => "Take Home Pay",
        }
    }

    pub fn group(&self) -> PayElementGroup {
        if Self::INCOME.contains(self) {
            PayElementGroup::Income
        } else if Self::DEDUCTIONS.contains(self) {
            PayElementGroup::Deduction
        } else if Self::EMPLOYER.contains(self) {
            PayElementGroup::Employer
        } else {
            PayElementGroup::Aggregate
        }
    }

    pub fn is_aggregate(&self) -> bool {
        self.group() == PayElementGroup::Aggregate
    }
}

impl fmt::Display for PayElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PayElement {
    type Err = PayElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PayElement::ALL
            .iter()
            .copied()
            .find(|element| element.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PayElementError::UnknownField(s.to_string()))
    }
}

/// Read access to pay figures by element
pub trait PayFigures {
    fn figure(&self, element: PayElement) -> f64;
}

/// The full set of pay figures for one employee in one period.
///
/// Used both for the current period (flattened into `Employee`) and for
/// the immutable previous-period snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayBreakdown {
    pub base_pay: f64,
    pub bonus: f64,
    pub commission: f64,
    pub overtime: f64,
    pub gif_flex: f64,
    pub on_call: f64,
    /// Sum of the six income elements
    pub total_income: f64,
    pub paye: f64,
    pub ni: f64,
    pub pension: f64,
    pub student_loan: f64,
    pub postgrad_loan: f64,
    /// Sum of the five deduction elements
    pub deductions: f64,
    #[serde(rename = "employerNI")]
    pub employer_ni: f64,
    pub employer_pension: f64,
    /// Total income plus employer NI and employer pension
    pub employer_cost: f64,
    /// Total income minus deductions
    pub take_home_pay: f64,
}

impl PayBreakdown {
    /// Overwrite a single element without touching aggregates
    pub fn set_figure(&mut self, element: PayElement, value: f64) {
        let slot = match element {
            PayElement::BasePay => &mut self.base_pay,
            PayElement::Bonus => &mut self.bonus,
            PayElement::Commission => &mut self.commission,
            PayElement::Overtime => &mut self.overtime,
            PayElement::GifFlex => &mut self.gif_flex,
            PayElement::OnCall => &mut self.on_call,
            PayElement::TotalIncome => &mut self.total_income,
            PayElement::Paye => &mut self.paye,
            PayElement::Ni => &mut self.ni,
            PayElement::Pension => &mut self.pension,
            PayElement::StudentLoan => &mut self.student_loan,
            PayElement::PostgradLoan => &mut self.postgrad_loan,
            PayElement::Deductions => &mut self.deductions,
            PayElement::EmployerNi => &mut self.employer_ni,
            PayElement::EmployerPension => &mut self.employer_pension,
            PayElement::EmployerCost => &mut self.employer_cost,
            PayElement::TakeHomePay => &mut self.take_home_pay,
        };
        *slot = value;
    }

    pub fn income_sum(&self) -> f64 {
        PayElement::INCOME.iter().map(|e| self.figure(*e)).sum()
    }

    pub fn deduction_sum(&self) -> f64 {
        PayElement::DEDUCTIONS.iter().map(|e| self.figure(*e)).sum()
    }

    pub fn recompute_income(&mut self) {
        self.total_income = self.income_sum();
        self.take_home_pay = self.total_income - self.deductions;
        self.recompute_employer_cost();
    }

    pub fn recompute_deductions(&mut self) {
        self.deductions = self.deduction_sum();
        self.take_home_pay = self.total_income - self.deductions;
    }

    pub fn recompute_employer_cost(&mut self) {
        self.employer_cost = self.total_income + self.employer_ni + self.employer_pension;
    }

    /// Recompute every aggregate from its elements
    pub fn recompute_all(&mut self) {
        self.deductions = self.deduction_sum();
        self.recompute_income();
    }
}

impl PayFigures for PayBreakdown {
    fn figure(&self, element: PayElement) -> f64 {
        match element {
            PayElement::BasePay => self.base_pay,
            PayElement::Bonus => self.bonus,
            PayElement::Commission => self.commission,
            PayElement::Overtime => self.overtime,
            PayElement::GifFlex => self.gif_flex,
            PayElement::OnCall => self.on_call,
            PayElement::TotalIncome => self.total_income,
            PayElement::Paye => self.paye,
            PayElement::Ni => self.ni,
            PayElement::Pension => self.pension,
            PayElement::StudentLoan => self.student_loan,
            PayElement::PostgradLoan => self.postgrad_loan,
            PayElement::Deductions => self.deductions,
            PayElement::EmployerNi => self.employer_ni,
            PayElement::EmployerPension => self.employer_pension,
            PayElement::EmployerCost => self.employer_cost,
            PayElement::TakeHomePay => self.take_home_pay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contractor,
}

impl EmploymentType {
    pub fn key(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
            EmploymentType::Contractor => "contractor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contractor => "Contractor",
        }
    }

    /// True when a basic filter value selects this employment type.
    /// An empty value means `all`.
    pub fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.trim();
        filter.is_empty()
            || filter.eq_ignore_ascii_case(ALL_SENTINEL)
            || filter.eq_ignore_ascii_case(self.key())
            || filter.eq_ignore_ascii_case(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Current,
    Terminated,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl EmployeeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Current => "Current",
            EmployeeStatus::Terminated => "Terminated",
            EmployeeStatus::OnLeave => "On Leave",
        }
    }
}

/// Category a tag is grouped under in the tag legend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Employment,
    Compensation,
    Statutory,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagKind {
    NewJoiner,
    Leaver,
    Bonus,
    Overtime,
    SalaryChange,
    Commission,
    NetDifference,
    PensionEnrolment,
    StudentLoan,
}

impl TagKind {
    pub const ALL: [TagKind; 9] = [
        TagKind::NewJoiner,
        TagKind::Leaver,
        TagKind::Bonus,
        TagKind::Overtime,
        TagKind::SalaryChange,
        TagKind::Commission,
        TagKind::NetDifference,
        TagKind::PensionEnrolment,
        TagKind::StudentLoan,
    ];

    /// Identifier used when a tag is selected as a filter chip
    pub fn key(&self) -> &'static str {
        match self {
            TagKind::NewJoiner => "new-joiner",
            TagKind::Leaver => "leaver",
            TagKind::Bonus => "bonus",
            TagKind::Overtime => "overtime",
            TagKind::SalaryChange => "salary-change",
            TagKind::Commission => "commission",
            TagKind::NetDifference => "net-difference",
            TagKind::PensionEnrolment => "pension-enrolment",
            TagKind::StudentLoan => "student-loan",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TagKind::NewJoiner => "New Joiner",
            TagKind::Leaver => "Leaver",
            TagKind::Bonus => "Bonus",
            TagKind::Overtime => "Overtime",
            TagKind::SalaryChange => "Salary Change",
            TagKind::Commission => "Commission",
            TagKind::NetDifference => "Net Difference",
            TagKind::PensionEnrolment => "Pension Enrolment",
            TagKind::StudentLoan => "Student Loan",
        }
    }

    pub fn category(&self) -> TagCategory {
        match self {
            TagKind::NewJoiner | TagKind::Leaver => TagCategory::Employment,
            TagKind::Bonus | TagKind::Overtime | TagKind::SalaryChange | TagKind::Commission => {
                TagCategory::Compensation
            }
            TagKind::PensionEnrolment | TagKind::StudentLoan => TagCategory::Statutory,
            TagKind::NetDifference => TagCategory::Other,
        }
    }

    pub fn from_key(key: &str) -> Option<TagKind> {
        TagKind::ALL.iter().copied().find(|kind| kind.key() == key)
    }
}

/// Derived annotation explaining why an employee's figures changed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub kind: TagKind,
    pub label: String,
    pub category: TagCategory,
}

impl Tag {
    pub fn new(kind: TagKind) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            category: kind.category(),
        }
    }
}

/// One worker for one pay period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub pay: PayBreakdown,
    pub department: String,
    pub employment_type: EmploymentType,
    pub status: EmployeeStatus,
    pub start_date: NaiveDate,
    pub leave_date: Option<NaiveDate>,
    /// Started within the current pay period (set at ingestion)
    pub is_new_joiner: bool,
    /// Leaves within the current pay period (set at ingestion)
    pub is_leaver: bool,
    pub pension_enrolled: bool,
    /// Prior-period snapshot; never modified once set
    pub previous_month: Option<PayBreakdown>,
    pub tags: Vec<Tag>,
    /// Bumped on every edit for optimistic concurrency checks
    pub version: u64,
}

impl Employee {
    /// Build initials from the first letter of each name part
    pub fn initials_for(name: &str) -> String {
        name.split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    pub fn previous_figure(&self, element: PayElement) -> Option<f64> {
        self.previous_month.as_ref().map(|prev| prev.figure(element))
    }

    /// Period-over-period change for one element, if a baseline exists
    pub fn delta(&self, element: PayElement) -> Option<PayDelta> {
        self.previous_figure(element)
            .map(|previous| PayDelta::between(self.figure(element), previous))
    }

    pub fn has_changes(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn has_tag(&self, kind: TagKind) -> bool {
        self.tags.iter().any(|tag| tag.kind == kind)
    }
}

impl PayFigures for Employee {
    fn figure(&self, element: PayElement) -> f64 {
        self.pay.figure(element)
    }
}

/// Change between a current figure and its baseline.
///
/// `percent_change` is 0 when the baseline is 0, so it is always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayDelta {
    pub current: f64,
    pub previous: f64,
    pub change: f64,
    pub percent_change: f64,
}

impl PayDelta {
    pub fn between(current: f64, previous: f64) -> Self {
        let change = current - previous;
        let percent_change = if previous == 0.0 || !previous.is_finite() {
            0.0
        } else {
            change / previous * 100.0
        };
        Self {
            current,
            previous,
            change,
            percent_change: if percent_change.is_finite() { percent_change } else { 0.0 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCondition {
    Greater,
    Less,
    Equal,
}

/// User-defined numeric comparison over a pay element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedFilter {
    pub id: String,
    pub pay_element: PayElement,
    pub condition: FilterCondition,
    pub value: f64,
    /// Interpret `value` as a percentage
    pub is_percentage: bool,
    /// Test the change against the previous period instead of the raw figure
    pub compare_to_last_month: bool,
    /// Base for percentage filters that do not compare to last month.
    /// Defaults to total income.
    #[serde(default)]
    pub percentage_of: Option<PayElement>,
}

impl AdvancedFilter {
    pub fn new(pay_element: PayElement, condition: FilterCondition, value: f64) -> Self {
        Self {
            id: format!("filter::{}", uuid::Uuid::new_v4()),
            pay_element,
            condition,
            value,
            is_percentage: false,
            compare_to_last_month: false,
            percentage_of: None,
        }
    }

    pub fn as_percentage(mut self) -> Self {
        self.is_percentage = true;
        self
    }

    pub fn compared_to_last_month(mut self) -> Self {
        self.compare_to_last_month = true;
        self
    }

    pub fn percentage_of(mut self, base: PayElement) -> Self {
        self.is_percentage = true;
        self.percentage_of = Some(base);
        self
    }

    pub fn percentage_base(&self) -> PayElement {
        self.percentage_of.unwrap_or(PayElement::TotalIncome)
    }
}

/// Basic filter settings captured by saved views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicFilterSettings {
    pub show_changes_only: bool,
    /// Department name or `all`
    pub department: String,
    /// Employment type key or `all`
    pub employment_type: String,
}

impl Default for BasicFilterSettings {
    fn default() -> Self {
        Self {
            show_changes_only: false,
            department: ALL_SENTINEL.to_string(),
            employment_type: ALL_SENTINEL.to_string(),
        }
    }
}

impl BasicFilterSettings {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Named snapshot of filter settings. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFilterView {
    pub id: String,
    pub name: String,
    pub advanced_filters: Vec<AdvancedFilter>,
    pub basic_filters: BasicFilterSettings,
    pub created_at: DateTime<Utc>,
}

impl SavedFilterView {
    pub fn generate_id(now_millis: i64) -> String {
        format!("view::{}::{}", now_millis, uuid::Uuid::new_v4().simple())
    }
}

/// A column that can be selected into a custom view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ViewColumn {
    Name,
    Department,
    EmploymentType,
    Status,
    Pay(PayElement),
}

impl fmt::Display for ViewColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewColumn::Name => f.write_str("name"),
            ViewColumn::Department => f.write_str("department"),
            ViewColumn::EmploymentType => f.write_str("employmentType"),
            ViewColumn::Status => f.write_str("status"),
            ViewColumn::Pay(element) => f.write_str(element.key()),
        }
    }
}

impl FromStr for ViewColumn {
    type Err = PayElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(ViewColumn::Name),
            "department" => Ok(ViewColumn::Department),
            "employmentType" => Ok(ViewColumn::EmploymentType),
            "status" => Ok(ViewColumn::Status),
            other => other
                .parse::<PayElement>()
                .map(ViewColumn::Pay)
                .map_err(|_| PayElementError::UnknownColumn(s.to_string())),
        }
    }
}

impl TryFrom<String> for ViewColumn {
    type Error = PayElementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ViewColumn> for String {
    fn from(column: ViewColumn) -> Self {
        column.to_string()
    }
}

/// User-defined column projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomView {
    pub id: String,
    pub name: String,
    pub fields: Vec<ViewColumn>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodStatus {
    Draft,
    Confirmed,
}

/// Pay period boundaries and lifecycle status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollPeriod {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub pay_date: NaiveDate,
    pub status: PeriodStatus,
}

impl PayrollPeriod {
    /// Monthly period containing `date`, paid on its last day
    pub fn for_month(date: NaiveDate) -> Option<Self> {
        let start_date = date.with_day(1)?;
        let end_date = start_date.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(Self {
            id: format!("period::{}", start_date.format("%Y-%m")),
            name: start_date.format("%B %Y").to_string(),
            start_date,
            end_date,
            pay_date: end_date,
            status: PeriodStatus::Draft,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == PeriodStatus::Confirmed
    }
}

/// Roster-wide totals, always derived from the current roster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    pub period_id: String,
    pub employee_count: usize,
    pub total_gross: f64,
    pub total_deductions: f64,
    pub total_take_home: f64,
    pub total_employer_ni: f64,
    pub total_employer_pension: f64,
    pub total_employer_cost: f64,
    pub previous_total_gross: f64,
    pub previous_total_deductions: f64,
    pub previous_total_take_home: f64,
    pub previous_total_employer_cost: f64,
    pub new_joiner_count: usize,
    pub leaver_count: usize,
    pub changed_count: usize,
    pub pension_enrolled_count: usize,
}

impl PayrollSummary {
    pub fn gross_delta(&self) -> PayDelta {
        PayDelta::between(self.total_gross, self.previous_total_gross)
    }

    pub fn deductions_delta(&self) -> PayDelta {
        PayDelta::between(self.total_deductions, self.previous_total_deductions)
    }

    pub fn take_home_delta(&self) -> PayDelta {
        PayDelta::between(self.total_take_home, self.previous_total_take_home)
    }

    pub fn employer_cost_delta(&self) -> PayDelta {
        PayDelta::between(self.total_employer_cost, self.previous_total_employer_cost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Department,
    EmploymentType,
    Status,
    Pay(PayElement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

/// Which family of pay elements the table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreakdownView {
    #[default]
    GrossPay,
    Deductions,
    EmployerCost,
}

impl BreakdownView {
    /// Columns shown in detailed density
    pub fn detailed_columns(&self) -> Vec<PayElement> {
        match self {
            BreakdownView::GrossPay => {
                let mut columns = PayElement::INCOME.to_vec();
                columns.push(PayElement::TotalIncome);
                columns
            }
            BreakdownView::Deductions => {
                let mut columns = PayElement::DEDUCTIONS.to_vec();
                columns.push(PayElement::Deductions);
                columns.push(PayElement::TakeHomePay);
                columns
            }
            BreakdownView::EmployerCost => vec![
                PayElement::TotalIncome,
                PayElement::EmployerNi,
                PayElement::EmployerPension,
                PayElement::EmployerCost,
            ],
        }
    }

    /// Columns shown in compact density
    pub fn compact_columns(&self) -> Vec<PayElement> {
        match self {
            BreakdownView::GrossPay => vec![PayElement::TotalIncome, PayElement::TakeHomePay],
            BreakdownView::Deductions => vec![PayElement::Deductions, PayElement::TakeHomePay],
            BreakdownView::EmployerCost => vec![PayElement::EmployerCost],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityMode {
    #[default]
    Compact,
    Detailed,
}

/// A formatted pay figure for table display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedPayCell {
    pub element: PayElement,
    pub formatted_amount: String,
    pub raw_amount: f64,
    /// Signed change against the previous period, when a baseline exists
    pub formatted_delta: Option<String>,
    pub amount_type: AmountType,
}

/// Type of a delta for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountType {
    Positive,
    Negative,
    Zero,
}

/// One employee row ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedPayRow {
    pub employee_id: String,
    pub name: String,
    pub initials: String,
    pub department: String,
    pub employment_type: String,
    pub status: String,
    pub tags: Vec<String>,
    pub approved: bool,
    pub cells: Vec<FormattedPayCell>,
}
