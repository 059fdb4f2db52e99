//! Claim document references
//!
//! The core stores only a locator for externally held files (bucket and
//! key); it never reads or writes file bytes. Documents are append-only
//! from the domain's perspective.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{ClaimId, DocumentId, UserId};

/// Where the external document store keeps the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageLocator {
    pub bucket: String,
    pub key: String,
}

/// A reference to an externally stored claim document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimDocument {
    /// Unique identifier
    pub id: DocumentId,
    /// The claim the document belongs to
    pub claim_id: ClaimId,
    /// Who uploaded it
    pub uploaded_by: UserId,
    /// Free-form document type (e.g. "POLICE_REPORT", "INVOICE")
    pub document_type: String,
    /// Original file name
    pub file_name: String,
    /// File size in bytes, strictly positive
    pub file_size: u64,
    /// MIME type
    pub mime_type: String,
    /// Locator in the external store
    pub storage: StorageLocator,
    /// Upload timestamp
    pub uploaded_at: DateTime<Utc>,
}

/// Request to attach a document reference to a claim
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AttachDocumentRequest {
    #[validate(length(min = 1, max = 100))]
    pub document_type: String,
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
    #[validate(range(min = 1, message = "file size must be greater than zero"))]
    pub file_size: u64,
    #[validate(length(min = 1, max = 100))]
    pub mime_type: String,
    #[validate(length(min = 1, max = 255))]
    pub bucket: String,
    #[validate(length(min = 1, max = 1024))]
    pub key: String,
}

impl ClaimDocument {
    /// Builds the document record from a validated request
    pub fn from_request(
        claim_id: ClaimId,
        uploaded_by: UserId,
        request: AttachDocumentRequest,
    ) -> Self {
        Self {
            id: DocumentId::new_v7(),
            claim_id,
            uploaded_by,
            document_type: request.document_type,
            file_name: request.file_name,
            file_size: request.file_size,
            mime_type: request.mime_type,
            storage: StorageLocator {
                bucket: request.bucket,
                key: request.key,
            },
            uploaded_at: Utc::now(),
        }
    }
}
