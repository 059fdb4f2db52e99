//! Account Domain
//!
//! User accounts for the claims back office: registration, login,
//! role assignment, and admin deactivation. Token issuance and password
//! hashing mechanics are external collaborators behind the
//! [`CredentialHasher`] port.

pub mod account;
pub mod ports;
pub mod service;
pub mod view;

pub use account::User;
pub use ports::{CredentialHasher, UserStore};
pub use service::{AccountService, LoginRequest, RegisterRequest};
pub use view::UserView;
