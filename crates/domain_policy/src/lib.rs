//! Policy Domain
//!
//! Coverage contracts between the insurer and a user: creation with date
//! and monetary validation, ownership-scoped queries, deactivation, and
//! deletion. A policy is the anchor a claim is filed against.

pub mod policy;
pub mod ports;
pub mod service;
pub mod view;

pub use policy::{Policy, PolicyType};
pub use ports::PolicyStore;
pub use service::{CreatePolicyRequest, PolicyService};
pub use view::PolicyView;
