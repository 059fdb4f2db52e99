//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Role, UserId};

/// A user account
///
/// Accounts are never hard-deleted by the domain core; removal is an
/// infrastructure concern that cascades through the store. Deactivation is
/// the supported way to retire an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Unique email address
    pub email: String,
    /// Credential hash, opaque to the domain core
    pub password_hash: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Phone number
    pub phone: Option<String>,
    /// Account role
    pub role: Role,
    /// Whether the account may log in
    pub is_active: bool,
    /// Last successful login
    pub last_login: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active account with the CUSTOMER role
    pub fn register(
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        phone: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new_v7(),
            email,
            password_hash,
            first_name,
            last_name,
            phone,
            role: Role::Customer,
            is_active: true,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full display name for response views
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Stamps a successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login = Some(now);
        self.updated_at = now;
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}
