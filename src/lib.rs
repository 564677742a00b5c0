//! Concurrent duplicate detection over a fixed integer id domain.
//!
//! A [`MembershipTracker`] answers one question for a stream of
//! non-negative integer identifiers arriving from any number of
//! threads: is this the first time we have seen this id?
//!
//! Guarantees:
//! - A duplicate is never reported as first time (no false negatives).
//! - For any id, exactly one `observe` call across the process lifetime
//!   returns first time, under any interleaving of concurrent callers.
//! - `observe` never blocks, never allocates, and touches exactly one
//!   storage unit per call.
//!
//! The presence store is an exact bitset sized to the configured
//! domain, one bit per id, packed eight per `AtomicU8`. Out of scope:
//! persistence, eviction, negative ids (rejected as invalid input),
//! cross-process sharing.

mod bitmap;
mod tracker;

// Authority surface — ONLY this is public
pub use tracker::{InvalidConfiguration, InvalidId, MembershipTracker};
