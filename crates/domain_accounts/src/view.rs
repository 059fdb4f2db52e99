//! Response view mapping
//!
//! Plain mapping functions from the domain record to the response value.
//! The credential hash never leaves the domain.

use chrono::{DateTime, Utc};
use serde::Serialize;

use core_kernel::{Role, UserId};

use crate::account::User;

/// Account response view
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserView {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            role: user.role,
            is_active: user.is_active,
            last_login: user.last_login,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_omits_credential_hash() {
        let user = User::register(
            "jane@example.com".into(),
            "secret-hash".into(),
            "Jane".into(),
            "Doe".into(),
            None,
        );
        let json = serde_json::to_string(&UserView::from_user(&user)).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("\"role\":\"CUSTOMER\""));
    }
}
