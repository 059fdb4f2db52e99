//! Roles and ownership-scoped access predicates
//!
//! Authorization lives in one place: the managers call these pure
//! predicates before returning or mutating another user's data, instead of
//! comparing role strings at every call site.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::identifiers::UserId;

/// The closed set of account roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Agent,
    Adjuster,
    Admin,
}

impl Role {
    /// Returns the canonical wire name for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
            Role::Agent => "AGENT",
            Role::Adjuster => "ADJUSTER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CUSTOMER" => Ok(Role::Customer),
            "AGENT" => Ok(Role::Agent),
            "ADJUSTER" => Ok(Role::Adjuster),
            "ADMIN" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Returns true if the requester may read or act on a claim
///
/// Admins and adjusters can access all claims; customers only their own.
pub fn can_access_claim(claim_owner: UserId, requester: UserId, role: Role) -> bool {
    matches!(role, Role::Admin | Role::Adjuster) || claim_owner == requester
}

/// Returns true if the requester may read or act on a policy
///
/// Admins and agents can access all policies; customers only their own.
pub fn can_access_policy(policy_owner: UserId, requester: UserId, role: Role) -> bool {
    matches!(role, Role::Admin | Role::Agent) || policy_owner == requester
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Customer, Role::Agent, Role::Adjuster, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("adjuster".parse::<Role>().unwrap(), Role::Adjuster);
        assert!("SUPERVISOR".parse::<Role>().is_err());
    }

    #[test]
    fn test_claim_access() {
        let owner = UserId::new();
        let stranger = UserId::new();

        assert!(can_access_claim(owner, owner, Role::Customer));
        assert!(!can_access_claim(owner, stranger, Role::Customer));
        assert!(!can_access_claim(owner, stranger, Role::Agent));
        assert!(can_access_claim(owner, stranger, Role::Adjuster));
        assert!(can_access_claim(owner, stranger, Role::Admin));
    }

    #[test]
    fn test_policy_access() {
        let owner = UserId::new();
        let stranger = UserId::new();

        assert!(can_access_policy(owner, owner, Role::Customer));
        assert!(!can_access_policy(owner, stranger, Role::Customer));
        assert!(can_access_policy(owner, stranger, Role::Agent));
        assert!(!can_access_policy(owner, stranger, Role::Adjuster));
        assert!(can_access_policy(owner, stranger, Role::Admin));
    }
}
