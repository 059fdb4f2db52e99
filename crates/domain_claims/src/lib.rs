//! Claims Domain
//!
//! The claim lifecycle from submission through review to a decision, plus
//! the surrounding records: audit events, document references, and fraud
//! alerts.
//!
//! # Claim Lifecycle
//!
//! ```text
//! SUBMITTED -> UNDER_REVIEW -> INVESTIGATING -> APPROVED/DENIED -> CLOSED
//! ```
//!
//! The transition policy is deliberately permissive: only CLOSED and DENIED
//! are terminal (claims cannot be reopened from them); every other move,
//! including backwards ones, is allowed.

pub mod claim;
pub mod document;
pub mod event;
pub mod fraud;
pub mod ports;
pub mod risk;
pub mod service;
pub mod view;

pub use claim::{Claim, ClaimStatus, RiskLevel};
pub use document::{AttachDocumentRequest, ClaimDocument, StorageLocator};
pub use event::{ClaimEvent, ClaimEventType};
pub use fraud::{AlertSeverity, FraudAlert, RaiseFraudAlertRequest};
pub use ports::{ClaimEventStore, ClaimStore, DocumentStore, FraudAlertStore};
pub use risk::{RiskAssessment, RiskInput, RiskScorer};
pub use service::{ClaimService, CreateClaimRequest, UpdateClaimStatusRequest};
pub use view::ClaimView;
