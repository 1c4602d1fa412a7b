//! # In-Memory Roster Repository
//!
//! Holds the roster and its pay period behind a shared lock. Clones share the
//! same underlying store.

use anyhow::{anyhow, Result};
use log::{debug, info};
use shared::{Employee, PayrollPeriod};
use std::sync::{Arc, RwLock};

use crate::backend::domain::models::Roster;
use crate::backend::storage::RosterStorage;

#[derive(Debug)]
struct RosterRecords {
    roster: Roster,
    period: PayrollPeriod,
}

/// Roster store backed by process memory
#[derive(Debug, Clone)]
pub struct InMemoryRosterRepository {
    records: Arc<RwLock<RosterRecords>>,
}

impl InMemoryRosterRepository {
    pub fn new(employees: Vec<Employee>, period: PayrollPeriod) -> Self {
        info!("Loaded {} employee(s) for {}", employees.len(), period.name);
        Self {
            records: Arc::new(RwLock::new(RosterRecords {
                roster: employees.into_iter().map(Arc::new).collect(),
                period,
            })),
        }
    }
}

impl RosterStorage for InMemoryRosterRepository {
    fn load_roster(&self) -> Result<Roster> {
        let records = self.records.read().map_err(|_| anyhow!("Roster store lock poisoned"))?;
        Ok(records.roster.clone())
    }

    fn modify_roster(
        &self,
        edit: &mut dyn FnMut(&PayrollPeriod, &[Arc<Employee>]) -> Result<Roster>,
    ) -> Result<()> {
        let mut records = self.records.write().map_err(|_| anyhow!("Roster store lock poisoned"))?;
        let updated = edit(&records.period, &records.roster)?;
        debug!("Replacing roster of {} employee(s)", updated.len());
        records.roster = updated;
        Ok(())
    }

    fn get_period(&self) -> Result<PayrollPeriod> {
        let records = self.records.read().map_err(|_| anyhow!("Roster store lock poisoned"))?;
        Ok(records.period.clone())
    }

    fn update_period(&self, period: &PayrollPeriod) -> Result<()> {
        let mut records = self.records.write().map_err(|_| anyhow!("Roster store lock poisoned"))?;
        if records.period.id != period.id {
            return Err(anyhow!("Period {} does not match the loaded period {}", period.id, records.period.id));
        }
        records.period = period.clone();
        Ok(())
    }
}
