//! Policy entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{Money, PolicyId, UserId};

/// Lines of business a policy can cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyType {
    Auto,
    Home,
    Health,
    Life,
    Business,
}

impl PolicyType {
    /// Canonical wire name, also embedded in policy numbers
    pub fn code(&self) -> &'static str {
        match self {
            PolicyType::Auto => "AUTO",
            PolicyType::Home => "HOME",
            PolicyType::Health => "HEALTH",
            PolicyType::Life => "LIFE",
            PolicyType::Business => "BUSINESS",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PolicyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AUTO" => Ok(PolicyType::Auto),
            "HOME" => Ok(PolicyType::Home),
            "HEALTH" => Ok(PolicyType::Health),
            "LIFE" => Ok(PolicyType::Life),
            "BUSINESS" => Ok(PolicyType::Business),
            other => Err(format!("invalid policy type: {other}")),
        }
    }
}

/// A coverage contract owned by exactly one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Unique identifier
    pub id: PolicyId,
    /// Unique human-readable policy number (`POL-<TYPE>-XXXXXX`)
    pub policy_number: String,
    /// Owning user
    pub owner_id: UserId,
    /// Line of business
    pub policy_type: PolicyType,
    /// Maximum covered amount
    pub coverage_amount: Money,
    /// Deductible, copied onto claims at creation time
    pub deductible: Money,
    /// Premium amount
    pub premium_amount: Money,
    /// First day of the validity window
    pub start_date: NaiveDate,
    /// Last day of the validity window, strictly after `start_date`
    pub end_date: NaiveDate,
    /// Whether claims may be filed against this policy
    pub is_active: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Policy {
    /// Marks the policy inactive
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_type_round_trip() {
        for ty in [
            PolicyType::Auto,
            PolicyType::Home,
            PolicyType::Health,
            PolicyType::Life,
            PolicyType::Business,
        ] {
            assert_eq!(ty.code().parse::<PolicyType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_policy_type_parse_rejects_unknown() {
        assert!("PET".parse::<PolicyType>().is_err());
        assert_eq!("auto".parse::<PolicyType>().unwrap(), PolicyType::Auto);
    }

    #[test]
    fn test_policy_type_serde_names() {
        let json = serde_json::to_string(&PolicyType::Business).unwrap();
        assert_eq!(json, "\"BUSINESS\"");
    }
}
