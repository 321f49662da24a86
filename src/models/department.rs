/// Filter value of the department selector on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentFilter {
    All,
    Only(String),
}

/// Sentinel option value meaning "no filter".
pub const ALL_DEPARTMENTS: &str = "all";

impl DepartmentFilter {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_DEPARTMENTS {
            DepartmentFilter::All
        } else {
            DepartmentFilter::Only(value.to_string())
        }
    }

    /// Whether a row tagged with `department` stays visible.
    /// Rows without a department only survive the `all` filter.
    pub fn matches(&self, department: Option<&str>) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Only(wanted) => department == Some(wanted.as_str()),
        }
    }
}
