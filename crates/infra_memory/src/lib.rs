//! In-Memory Persistence Adapter
//!
//! Implements every domain store port over `HashMap`s behind a single
//! `tokio::sync::RwLock`, mirroring the behaviors the domain expects from
//! the durable store: uniqueness of email, policy number, and claim
//! number; policy->claim RESTRICT on delete; and the user-removal cascade
//! (owned policies and claims go with the user, adjuster references are
//! nulled out).
//!
//! Every mutation runs entirely under the write lock, so a partially
//! applied state is never observable — the same atomicity a transactional
//! store provides.

mod store;

pub use store::MemoryStore;
