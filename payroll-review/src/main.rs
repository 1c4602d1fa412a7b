use anyhow::Result;
use log::{error, info};

use payroll_review::backend::Backend;
use payroll_review::config::DashboardConfig;
use payroll_review::ui::{DashboardAction, DashboardController};
use shared::{AdvancedFilter, BreakdownView, DensityMode, FilterCondition, PayElement, SortField};

fn main() -> Result<()> {
    env_logger::init();
    info!("Starting payroll review");

    let config = DashboardConfig::from_env()?;
    let backend = Backend::new(&config)?;
    let mut controller = DashboardController::new(backend);

    let view = controller.view()?;
    info!(
        "{}: {} employees, {} with changes",
        view.period.name, view.total_count, view.summary.changed_count
    );
    println!("{}", serde_json::to_string_pretty(&view.summary)?);

    // Employees whose bonus went up, highest gross first, detailed gross pay columns
    controller.dispatch(DashboardAction::AddAdvancedFilter(
        AdvancedFilter::new(PayElement::Bonus, FilterCondition::Greater, 0.0).compared_to_last_month(),
    ));
    controller.dispatch(DashboardAction::SortBy(SortField::Pay(PayElement::TotalIncome)));
    controller.dispatch(DashboardAction::SortBy(SortField::Pay(PayElement::TotalIncome)));
    controller.dispatch(DashboardAction::SetBreakdown(BreakdownView::GrossPay));
    controller.dispatch(DashboardAction::SetDensity(DensityMode::Detailed));

    let saved = controller.save_current_view("Bonus increases")?;
    let view = controller.view()?;
    info!("Saved view '{}' shows {} employees", saved.name, view.filtered_count);
    println!("{}", serde_json::to_string_pretty(&view.table_rows)?);

    if let Some(first) = view.rows.first() {
        let raw_input = format!("{:.2}", first.pay.bonus + 100.0);
        match controller.edit_employee(&first.id, PayElement::Bonus, &raw_input) {
            Ok(employee) => info!("{} now takes home {:.2}", employee.name, employee.pay.take_home_pay),
            Err(err) => error!("Edit failed: {}", err),
        }
    }

    controller.dispatch(DashboardAction::ClearAllFilters);
    let approved = controller.approve_all_visible()?;
    let period = controller.confirm_period()?;
    info!("Approved {} employees and confirmed {}", approved, period.name);

    Ok(())
}
