//! # Table State Module
//!
//! This module contains all state related to how the pay table is laid out.
//!
//! ## Responsibilities:
//! - Sort field and direction
//! - Breakdown view (gross pay, deductions, employer cost)
//! - Density mode (compact or detailed)
//!
//! ## Purpose:
//! Layout state changes what is rendered, never the roster itself.

use shared::{BreakdownView, DensityMode, SortDirection, SortField, SortSpec};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TableState {
    pub sort: SortSpec,
    pub breakdown: BreakdownView,
    pub density: DensityMode,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header click. The same field cycles Ascending, Descending, None;
    /// a different field starts at Ascending.
    pub fn sort_by(&mut self, field: SortField) {
        let direction = if self.sort.field == Some(field) {
            match self.sort.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::None,
                SortDirection::None => SortDirection::Ascending,
            }
        } else {
            SortDirection::Ascending
        };

        self.sort = SortSpec {
            field: (direction != SortDirection::None).then_some(field),
            direction,
        };
    }

    pub fn set_breakdown(&mut self, breakdown: BreakdownView) {
        self.breakdown = breakdown;
    }

    pub fn set_density(&mut self, density: DensityMode) {
        self.density = density;
    }
}
