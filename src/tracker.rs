//! Membership tracker — input validation + the observe() contract.
//!
//! Responsibilities:
//! - Domain sizing and the one-time store allocation
//! - Rejecting out-of-range ids before any mutation attempt
//! - Mapping the atomic test-and-set result onto first-time/seen-before
//!
//! The concurrent bit manipulation itself lives in `bitmap`.

use crate::bitmap::AtomicBitmap;

// ===============================
// Errors
// ===============================

/// Construction rejected: the tracker needs at least one addressable id.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("domain size must be non-zero")]
pub struct InvalidConfiguration;

/// The submitted id is outside the configured domain. Caller-input
/// error; the presence store is untouched.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("id {id} outside valid range 0..{domain_size}")]
pub struct InvalidId {
    pub id: i64,
    pub domain_size: usize,
}

// ===============================
// Tracker
// ===============================

/// Thread-safe first-time/seen-before tracking over `0..domain_size`.
///
/// Owns the presence store exclusively for its lifetime. Share it
/// across threads behind an `Arc` (or a plain borrow with scoped
/// threads); `observe` takes `&self` and needs no external locking.
#[derive(Debug)]
pub struct MembershipTracker {
    bits: AtomicBitmap,
}

impl MembershipTracker {
    /// Allocates a zeroed bit-packed store covering `0..domain_size`,
    /// one bit per id (`ceil(domain_size / 8)` bytes).
    ///
    /// Covering the full positive `i32` range takes `1 << 31` bits,
    /// about 256 MiB; callers with a narrower id range should size
    /// down and let out-of-range ids be rejected.
    pub fn new(domain_size: usize) -> Result<Self, InvalidConfiguration> {
        if domain_size == 0 {
            return Err(InvalidConfiguration);
        }
        let bits = AtomicBitmap::zeroed(domain_size);
        tracing::debug!(
            domain_size,
            store_bytes = domain_size.div_ceil(8),
            "allocated presence store"
        );
        Ok(Self { bits })
    }

    /// Number of ids the store can represent; valid ids are
    /// `0..domain_size`.
    #[inline]
    pub fn domain_size(&self) -> usize {
        self.bits.len_bits()
    }

    /// Checks the given id and returns whether this is the first time
    /// it has been seen.
    ///
    /// Among all concurrent calls for the same id, exactly one returns
    /// `Ok(true)`; every other call, then and forever after, returns
    /// `Ok(false)`. Negative or out-of-domain ids fail with
    /// [`InvalidId`] without touching the store.
    ///
    /// Never blocks and never allocates: one atomic fetch_or on the
    /// storage unit holding the id's bit.
    pub fn observe(&self, id: i64) -> Result<bool, InvalidId> {
        let domain_size = self.bits.len_bits();
        if id < 0 || id as u64 >= domain_size as u64 {
            return Err(InvalidId { id, domain_size });
        }
        Ok(!self.bits.test_and_set(id as usize))
    }

    #[cfg(test)]
    pub(crate) fn bit_is_set(&self, index: usize) -> bool {
        self.bits.test(index)
    }
}
