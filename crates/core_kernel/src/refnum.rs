//! Human-readable reference numbers
//!
//! Claims and policies carry short random reference numbers alongside their
//! UUIDs. Generation is random, so the managers retry against the store's
//! uniqueness constraint on collision; the retry loop is capped and fails
//! with `CoreError::Exhausted` past the cap.

use uuid::Uuid;

/// Maximum attempts when generating a reference number against the store's
/// uniqueness constraint. With 6-8 random hex characters a collision is
/// already unlikely; the cap keeps the loop bounded.
pub const MAX_GENERATION_ATTEMPTS: u32 = 16;

/// Generates a candidate claim number, format `CLM-XXXXXXXX`
pub fn claim_number() -> String {
    format!("CLM-{}", random_suffix(8))
}

/// Generates a candidate policy number, format `POL-<TYPE>-XXXXXX`
pub fn policy_number(type_code: &str) -> String {
    format!("POL-{}-{}", type_code, random_suffix(6))
}

fn random_suffix(len: usize) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..len].to_uppercase()
}
