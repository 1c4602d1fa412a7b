//! # Backend Module
//!
//! Direct, synchronous access to the domain services and the in-memory record
//! stores. There is no IO or REST layer; the dashboard coordinator calls the
//! services in-process.

use anyhow::Result;
use log::info;
use shared::{Employee, PayrollPeriod};

pub mod domain;
pub mod storage;

use crate::config::DashboardConfig;
use domain::{
    FilterService, PayTableConfig, PayTableService, RosterService, SavedViewService, SummaryService,
    SyntheticRosterGenerator, TagService,
};
use storage::{InMemoryRosterRepository, InMemoryViewRepository};

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub roster_service: RosterService<InMemoryRosterRepository>,
    pub filter_service: FilterService,
    pub summary_service: SummaryService,
    pub saved_view_service: SavedViewService<InMemoryViewRepository>,
    pub pay_table_service: PayTableService,
}

impl Backend {
    /// Create a backend over a freshly generated synthetic roster
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        config.validate()?;
        let generator = SyntheticRosterGenerator::new(config.roster.clone());
        let period = generator.period()?;
        let tag_service = TagService::with_rules(config.tag_rules.clone());
        let employees = generator.generate(&period, &tag_service);
        Self::with_roster(config, employees, period)
    }

    /// Create a backend over a roster supplied by another data feed
    pub fn with_roster(config: &DashboardConfig, employees: Vec<Employee>, period: PayrollPeriod) -> Result<Self> {
        let pay_table_service = PayTableService::with_config(PayTableConfig {
            currency: config.currency()?,
            ..Default::default()
        });
        info!("Initializing backend for {} with {} employees", period.name, employees.len());

        Ok(Backend {
            roster_service: RosterService::new(
                InMemoryRosterRepository::new(employees, period),
                TagService::with_rules(config.tag_rules.clone()),
            ),
            filter_service: FilterService::with_rules(config.filter_rules.clone()),
            summary_service: SummaryService,
            saved_view_service: SavedViewService::new(InMemoryViewRepository::new()),
            pay_table_service,
        })
    }
}
