//! Account application service

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use core_kernel::{CoreError, Role, UserId};

use crate::account::User;
use crate::ports::{CredentialHasher, UserStore};
use crate::view::UserView;

/// Registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Service handling account operations
///
/// Token issuance is the transport layer's job; this service only resolves
/// credentials to an account and maintains the login timestamp.
pub struct AccountService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn CredentialHasher>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    /// Registers a new customer account
    ///
    /// Fails with `Conflict` when the email is already registered.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> Result<UserView, CoreError> {
        request.validate()?;

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(CoreError::conflict("email already registered"));
        }

        let user = User::register(
            request.email,
            self.hasher.hash(&request.password),
            request.first_name,
            request.last_name,
            request.phone,
        );
        self.users.insert_user(&user).await?;

        info!(user_id = %user.id, "account registered");
        Ok(UserView::from_user(&user))
    }

    /// Authenticates an account and stamps the login timestamp
    ///
    /// Unknown emails and bad credentials fail identically so the response
    /// does not leak which emails exist.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> Result<UserView, CoreError> {
        request.validate()?;

        let mut user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| CoreError::invalid_input("invalid email or password"))?;

        if !user.is_active {
            return Err(CoreError::invalid_state("account is disabled"));
        }

        if !self.hasher.verify(&request.password, &user.password_hash) {
            return Err(CoreError::invalid_input("invalid email or password"));
        }

        user.record_login();
        self.users.update_user(&user).await?;

        info!(user_id = %user.id, "login recorded");
        Ok(UserView::from_user(&user))
    }

    /// Retrieves an account by id
    pub async fn get_user(&self, id: UserId) -> Result<UserView, CoreError> {
        let user = self.users.get_user(id).await?;
        Ok(UserView::from_user(&user))
    }

    /// Deactivates an account (admin only)
    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: UserId, requester_role: Role) -> Result<UserView, CoreError> {
        if requester_role != Role::Admin {
            return Err(CoreError::forbidden("only admins may deactivate accounts"));
        }

        let mut user = self.users.get_user(id).await?;
        user.deactivate();
        self.users.update_user(&user).await?;

        info!(user_id = %user.id, "account deactivated");
        Ok(UserView::from_user(&user))
    }
}
