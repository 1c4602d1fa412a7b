//! Filter criteria and the named predicates behind card tiles and filter chips.
use shared::{AdvancedFilter, BasicFilterSettings, Employee, EmployeeStatus, TagKind, ALL_SENTINEL};

/// Everything the filter engine needs to derive a view of the roster
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the employee name
    pub search_text: String,
    pub show_changes_only: bool,
    /// Department name or `all`
    pub department: String,
    /// Employment type key or `all`
    pub employment_type: String,
    /// Active card filter plus active toggle filters
    pub named_filters: Vec<String>,
    /// All must pass
    pub advanced_filters: Vec<AdvancedFilter>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            show_changes_only: false,
            department: ALL_SENTINEL.to_string(),
            employment_type: ALL_SENTINEL.to_string(),
            named_filters: Vec::new(),
            advanced_filters: Vec::new(),
        }
    }
}

impl FilterCriteria {
    pub fn with_basic(mut self, basic: &BasicFilterSettings) -> Self {
        self.show_changes_only = basic.show_changes_only;
        self.department = basic.department.clone();
        self.employment_type = basic.employment_type.clone();
        self
    }

    pub fn with_search(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    pub fn with_named_filter(mut self, id: impl Into<String>) -> Self {
        self.named_filters.push(id.into());
        self
    }

    pub fn with_advanced_filter(mut self, filter: AdvancedFilter) -> Self {
        self.advanced_filters.push(filter);
        self
    }
}

/// Named membership tests selectable from cards and chips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFilter {
    AllEmployees,
    NewJoiners,
    Leavers,
    PensionEnrolled,
    SalaryChanges,
    OnLeave,
    Terminated,
    Tagged(TagKind),
}

impl RosterFilter {
    pub const NAMED: [RosterFilter; 7] = [
        RosterFilter::AllEmployees,
        RosterFilter::NewJoiners,
        RosterFilter::Leavers,
        RosterFilter::PensionEnrolled,
        RosterFilter::SalaryChanges,
        RosterFilter::OnLeave,
        RosterFilter::Terminated,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            RosterFilter::AllEmployees => "all-employees",
            RosterFilter::NewJoiners => "new-joiners",
            RosterFilter::Leavers => "leavers",
            RosterFilter::PensionEnrolled => "pension-enrolled",
            RosterFilter::SalaryChanges => "salary-changes",
            RosterFilter::OnLeave => "on-leave",
            RosterFilter::Terminated => "terminated",
            RosterFilter::Tagged(kind) => kind.key(),
        }
    }

    /// Resolve a card or chip identifier; tag keys select by tag
    pub fn from_id(id: &str) -> Option<RosterFilter> {
        RosterFilter::NAMED
            .iter()
            .copied()
            .find(|filter| filter.id() == id)
            .or_else(|| TagKind::from_key(id).map(RosterFilter::Tagged))
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        match self {
            RosterFilter::AllEmployees => true,
            RosterFilter::NewJoiners => employee.is_new_joiner,
            RosterFilter::Leavers => employee.is_leaver,
            RosterFilter::PensionEnrolled => employee.pension_enrolled,
            RosterFilter::SalaryChanges => employee.has_tag(TagKind::SalaryChange),
            RosterFilter::OnLeave => employee.status == EmployeeStatus::OnLeave,
            RosterFilter::Terminated => employee.status == EmployeeStatus::Terminated,
            RosterFilter::Tagged(kind) => employee.has_tag(*kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_resolves_named_and_tag_filters() {
        assert_eq!(RosterFilter::from_id("new-joiners"), Some(RosterFilter::NewJoiners));
        assert_eq!(RosterFilter::from_id("salary-changes"), Some(RosterFilter::SalaryChanges));
        assert_eq!(RosterFilter::from_id("bonus"), Some(RosterFilter::Tagged(TagKind::Bonus)));
        assert_eq!(RosterFilter::from_id("mystery"), None);
    }

    #[test]
    fn test_ids_round_trip() {
        for filter in RosterFilter::NAMED {
            assert_eq!(RosterFilter::from_id(filter.id()), Some(filter));
        }
        for kind in TagKind::ALL {
            let filter = RosterFilter::Tagged(kind);
            assert_eq!(RosterFilter::from_id(filter.id()), Some(filter));
        }
    }

    #[test]
    fn test_with_basic_copies_settings() {
        let basic = BasicFilterSettings {
            show_changes_only: true,
            department: "Sales".to_string(),
            employment_type: "part-time".to_string(),
        };
        let criteria = FilterCriteria::default().with_basic(&basic);
        assert!(criteria.show_changes_only);
        assert_eq!(criteria.department, "Sales");
        assert_eq!(criteria.employment_type, "part-time");
    }
}
