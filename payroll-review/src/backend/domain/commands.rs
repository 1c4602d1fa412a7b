//! Domain-level command and result types.
//! These structs are used by services inside the domain layer; the
//! coordinator maps user intents onto them.

pub mod roster {
    use shared::{Employee, PayElement};
    use std::collections::BTreeSet;
    use std::sync::Arc;

    /// Inline edit of one pay element on one employee.
    #[derive(Debug, Clone)]
    pub struct EditEmployeeCommand {
        pub employee_id: String,
        pub element: PayElement,
        pub value: f64,
        /// When set, the edit fails if the stored version differs
        pub expected_version: Option<u64>,
    }

    /// Result of an inline edit.
    #[derive(Debug, Clone)]
    pub struct EditEmployeeResult {
        pub employee: Arc<Employee>,
        pub previous_value: f64,
    }

    /// Confirm the pay period once approvals are complete.
    #[derive(Debug, Clone, Default)]
    pub struct ConfirmPeriodCommand {
        pub approved_ids: BTreeSet<String>,
    }
}

pub mod views {
    use shared::{AdvancedFilter, BasicFilterSettings, ViewColumn};

    /// Snapshot the active filters under a name.
    #[derive(Debug, Clone)]
    pub struct SaveFilterViewCommand {
        pub name: String,
        pub advanced_filters: Vec<AdvancedFilter>,
        pub basic_filters: BasicFilterSettings,
    }

    #[derive(Debug, Clone)]
    pub struct CreateCustomViewCommand {
        pub name: String,
        pub fields: Vec<ViewColumn>,
    }

    /// Rename and/or reselect the columns of a custom view.
    #[derive(Debug, Clone)]
    pub struct UpdateCustomViewCommand {
        pub view_id: String,
        pub name: Option<String>,
        pub fields: Option<Vec<ViewColumn>>,
    }
}
