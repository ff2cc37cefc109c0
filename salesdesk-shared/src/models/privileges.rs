use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Authorization roles derived from an employee's privilege codes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SalesAdmin,
    SalesTeam,
}

impl Role {
    /// Return the canonical string representation expected by the apps.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SalesAdmin => "SALES_ADMIN",
            Self::SalesTeam => "SALES_TEAM",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "SALES_ADMIN" => Ok(Self::SalesAdmin),
            "SALES_TEAM" => Ok(Self::SalesTeam),
            _ => Err("unknown role"),
        }
    }
}

/// Privilege-code-to-role rules, applied in declaration order.
///
/// Derived role lists follow this order, not the order privilege codes
/// arrive in. New roles are added as new rows; the traversal in
/// [`derive_roles`] never changes.
pub const PRIVILEGE_ROLE_RULES: &[(u32, Role)] = &[
    (762, Role::SalesAdmin),
    (987, Role::SalesTeam),
];

/// Map a raw privilege list to the distinct roles it grants.
///
/// Input order and duplicates are irrelevant; the output carries one entry
/// per matching rule of [`PRIVILEGE_ROLE_RULES`], in table order. An empty
/// result means the privilege list grants nothing; callers decide what to
/// do about that.
#[must_use]
pub fn derive_roles(privileges: &[u32]) -> Vec<Role> {
    PRIVILEGE_ROLE_RULES
        .iter()
        .filter(|(code, _)| privileges.contains(code))
        .map(|&(_, role)| role)
        .collect()
}

/// Response body of the privileges endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrivilegesResponse {
    /// Raw privilege codes granted to the signed-in employee.
    pub privileges: Vec<u32>,
}
