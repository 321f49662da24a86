use std::fmt;

/// Value of the registration form's role selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Other(String),
}

impl Role {
    pub fn from_value(value: &str) -> Self {
        if value == "admin" {
            Role::Admin
        } else {
            Role::Other(value.to_string())
        }
    }

    /// Only non-admin accounts belong to a department.
    pub fn needs_department(&self) -> bool {
        !matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Other(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_value() {
        assert_eq!(Role::from_value("admin"), Role::Admin);
        assert_eq!(Role::from_value("student"), Role::Other("student".into()));
        // Exact match only
        assert_eq!(Role::from_value("Admin"), Role::Other("Admin".into()));
        assert!(!Role::Admin.needs_department());
        assert!(Role::from_value("").needs_department());
    }
}
