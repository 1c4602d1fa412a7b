//! Pay table domain logic for the payroll review dashboard.
//!
//! Turns roster rows into formatted, display-ready table rows and validates
//! inline edit input before it reaches the roster service.
//!
//! ## Key Responsibilities
//!
//! - **Currency Formatting**: thousands separators and the currency's minor units
//! - **Delta Formatting**: signed change against the previous period
//! - **Column Selection**: breakdown and density decide which pay elements show
//! - **Input Parsing**: cleaning and validating typed amounts

use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};
use shared::{
    AmountType, BreakdownView, DensityMode, Employee, FormattedPayCell, FormattedPayRow, PayElement, PayFigures,
};
use std::collections::HashSet;
use std::sync::Arc;

/// Configuration for pay table display
#[derive(Debug, Clone, PartialEq)]
pub struct PayTableConfig {
    pub currency: Currency,
    /// Show the change against the previous period under each figure
    pub show_deltas: bool,
}

impl Default for PayTableConfig {
    fn default() -> Self {
        Self {
            currency: Currency::GBP,
            show_deltas: true,
        }
    }
}

/// Errors for typed inline edit input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditInputError {
    #[error("Amount cannot be empty")]
    Empty,
    #[error("'{0}' is not a valid amount")]
    NotANumber(String),
    #[error("Amount must be a finite number")]
    NotFinite,
}

/// Pay table service that handles all table-related formatting
#[derive(Debug, Clone, Default)]
pub struct PayTableService {
    config: PayTableConfig,
}

impl PayTableService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PayTableConfig) -> Self {
        Self { config }
    }

    /// Format rows for the active breakdown and density
    pub fn format_rows(
        &self,
        rows: &[Arc<Employee>],
        breakdown: BreakdownView,
        density: DensityMode,
        approved: &HashSet<String>,
    ) -> Vec<FormattedPayRow> {
        let columns = match density {
            DensityMode::Compact => breakdown.compact_columns(),
            DensityMode::Detailed => breakdown.detailed_columns(),
        };
        rows.iter()
            .map(|employee| self.format_row(employee, &columns, approved.contains(&employee.id)))
            .collect()
    }

    pub fn format_row(&self, employee: &Employee, columns: &[PayElement], approved: bool) -> FormattedPayRow {
        FormattedPayRow {
            employee_id: employee.id.clone(),
            name: employee.name.clone(),
            initials: employee.initials.clone(),
            department: employee.department.clone(),
            employment_type: employee.employment_type.label().to_string(),
            status: employee.status.label().to_string(),
            tags: employee.tags.iter().map(|tag| tag.label.clone()).collect(),
            approved,
            cells: columns.iter().map(|element| self.format_cell(employee, *element)).collect(),
        }
    }

    /// Format one figure. The amount type classifies the change when a
    /// baseline exists, otherwise the amount itself.
    pub fn format_cell(&self, employee: &Employee, element: PayElement) -> FormattedPayCell {
        let amount = employee.figure(element);
        let delta = employee.delta(element);

        FormattedPayCell {
            element,
            formatted_amount: self.format_currency(amount),
            raw_amount: amount,
            formatted_delta: delta
                .filter(|_| self.config.show_deltas)
                .map(|d| self.format_delta(d.change)),
            amount_type: self.classify_amount(delta.map_or(amount, |d| d.change)),
        }
    }

    /// Format an amount as currency, e.g. `£1,234.56` or `-£40.00`
    pub fn format_currency(&self, amount: f64) -> String {
        let (negative, units, fraction) = self.split_minor_units(amount);
        format!("{}{}", if negative { "-" } else { "" }, self.unsigned(units, fraction))
    }

    /// Format a change with an explicit sign; zero carries no sign
    pub fn format_delta(&self, change: f64) -> String {
        let (_, units, fraction) = self.split_minor_units(change);
        let sign = match self.classify_amount(change) {
            AmountType::Positive => "+",
            AmountType::Negative => "-",
            AmountType::Zero => "",
        };
        format!("{}{}", sign, self.unsigned(units, fraction))
    }

    /// Classify after rounding to minor units so `0.001` counts as zero
    pub fn classify_amount(&self, amount: f64) -> AmountType {
        let minor = self.to_minor_units(amount);
        if minor > 0 {
            AmountType::Positive
        } else if minor < 0 {
            AmountType::Negative
        } else {
            AmountType::Zero
        }
    }

    /// Parse a typed amount. Strips the currency symbol, commas and spaces.
    pub fn parse_edit_input(&self, input: &str) -> Result<f64, EditInputError> {
        let symbol = self.config.currency.symbol().to_string();
        let cleaned: String = input
            .replace(symbol.as_str(), "")
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect();

        if cleaned.is_empty() {
            return Err(EditInputError::Empty);
        }
        let value: f64 = cleaned
            .parse()
            .map_err(|_| EditInputError::NotANumber(input.trim().to_string()))?;
        if !value.is_finite() {
            return Err(EditInputError::NotFinite);
        }
        Ok(value)
    }

    fn decimal_places(&self) -> u32 {
        self.config.currency.exponent().unwrap_or(0) as u32
    }

    fn to_minor_units(&self, amount: f64) -> i64 {
        if !amount.is_finite() {
            return 0;
        }
        (amount * 10f64.powi(self.decimal_places() as i32)).round() as i64
    }

    /// Sign, whole units and minor units of the rounded amount
    fn split_minor_units(&self, amount: f64) -> (bool, u64, u64) {
        let minor = self.to_minor_units(amount);
        let scale = 10u64.pow(self.decimal_places());
        let magnitude = minor.unsigned_abs();
        (minor < 0, magnitude / scale, magnitude % scale)
    }

    fn unsigned(&self, units: u64, fraction: u64) -> String {
        let places = self.decimal_places() as usize;
        let symbol = self.config.currency.symbol();
        if places == 0 {
            format!("{}{}", symbol, units.to_formatted_string(&Locale::en))
        } else {
            format!(
                "{}{}.{:0places$}",
                symbol,
                units.to_formatted_string(&Locale::en),
                fraction,
                places = places
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::test_utils::*;

    #[test]
    fn test_format_currency() {
        let service = PayTableService::new();
        assert_eq!(service.format_currency(1234.56), "£1,234.56");
        assert_eq!(service.format_currency(0.0), "£0.00");
        assert_eq!(service.format_currency(-40.0), "-£40.00");
        assert_eq!(service.format_currency(1_000_000.0), "£1,000,000.00");
        assert_eq!(service.format_currency(0.999), "£1.00");
    }

    #[test]
    fn test_format_currency_zero_decimal_currency() {
        let service = PayTableService::with_config(PayTableConfig {
            currency: Currency::JPY,
            show_deltas: true,
        });
        assert_eq!(service.format_currency(1234.6), format!("{}1,235", Currency::JPY.symbol()));
    }

    #[test]
    fn test_format_delta_and_classification() {
        let service = PayTableService::new();
        assert_eq!(service.format_delta(150.0), "+£150.00");
        assert_eq!(service.format_delta(-2.5), "-£2.50");
        assert_eq!(service.format_delta(0.001), "£0.00");

        assert_eq!(service.classify_amount(10.0), AmountType::Positive);
        assert_eq!(service.classify_amount(-0.01), AmountType::Negative);
        assert_eq!(service.classify_amount(-0.001), AmountType::Zero);
    }

    #[test]
    fn test_parse_edit_input() {
        let service = PayTableService::new();
        assert_eq!(service.parse_edit_input("£1,250.50"), Ok(1250.5));
        assert_eq!(service.parse_edit_input(" 2 000 "), Ok(2000.0));
        assert_eq!(service.parse_edit_input("-12"), Ok(-12.0));
        assert_eq!(service.parse_edit_input("  "), Err(EditInputError::Empty));
        assert_eq!(
            service.parse_edit_input("abc"),
            Err(EditInputError::NotANumber("abc".to_string()))
        );
        assert_eq!(service.parse_edit_input("inf"), Err(EditInputError::NotFinite));
        assert_eq!(service.parse_edit_input("NaN"), Err(EditInputError::NotFinite));
    }

    #[test]
    fn test_parse_edit_input_strips_configured_symbol_only() {
        let service = PayTableService::with_config(PayTableConfig {
            currency: Currency::EUR,
            show_deltas: true,
        });
        let typed = format!("{}1,250", Currency::EUR.symbol());
        assert_eq!(service.parse_edit_input(&typed), Ok(1250.0));
        assert_eq!(
            service.parse_edit_input("£10"),
            Err(EditInputError::NotANumber("£10".to_string()))
        );
    }

    #[test]
    fn test_format_rows_uses_breakdown_columns() {
        let service = PayTableService::new();
        let mut employee = create_test_employee("emp-1", "Sarah Chen", 2000.0);
        employee.pay.bonus = 500.0;
        employee.pay.recompute_all();
        let employee = with_baseline(employee, |prev| prev.bonus = 0.0);
        let rows = create_test_roster(vec![employee, create_test_employee("emp-2", "Mark Lee", 1500.0)]);
        let approved: HashSet<String> = ["emp-2".to_string()].into_iter().collect();

        let compact = service.format_rows(&rows, BreakdownView::GrossPay, DensityMode::Compact, &approved);
        assert_eq!(compact.len(), 2);
        assert_eq!(compact[0].cells.len(), 2);
        assert_eq!(compact[0].cells[0].element, PayElement::TotalIncome);
        assert_eq!(compact[0].cells[0].formatted_amount, "£2,500.00");
        assert_eq!(compact[0].cells[0].formatted_delta.as_deref(), Some("+£500.00"));
        assert_eq!(compact[0].cells[0].amount_type, AmountType::Positive);
        assert!(!compact[0].approved);
        assert!(compact[1].approved);
        assert_eq!(compact[1].cells[0].formatted_delta, None);

        let detailed = service.format_rows(&rows, BreakdownView::EmployerCost, DensityMode::Detailed, &approved);
        let elements: Vec<PayElement> = detailed[0].cells.iter().map(|c| c.element).collect();
        assert_eq!(
            elements,
            vec![
                PayElement::TotalIncome,
                PayElement::EmployerNi,
                PayElement::EmployerPension,
                PayElement::EmployerCost,
            ]
        );
    }
}
