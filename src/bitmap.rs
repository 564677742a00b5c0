//! Bit-packed concurrent presence store.
//!
//! Variables:
//!   units    : Box<[AtomicU8]>  — storage units, 8 presence bits each
//!   len_bits : usize            — number of addressable bits
//!
//! Equations:
//!   unit(i) = i / 8
//!   mask(i) = 1 << (i % 8)
//!   test_and_set(i): prev = units[unit(i)].fetch_or(mask(i)); prev & mask(i)
//!
//! Bits only transition 0 → 1; nothing ever clears them. The fetch_or
//! is the entire critical section. Calls addressing different storage
//! units never contend; calls within one unit resolve in the atomic
//! read-modify-write with no retry loop.

use std::sync::atomic::{AtomicU8, Ordering};

const BITS_PER_UNIT: usize = 8;

/// Fixed-size atomic bitmap. Allocated zeroed once, never resized.
#[derive(Debug)]
pub(crate) struct AtomicBitmap {
    units: Box<[AtomicU8]>,
    len_bits: usize,
}

impl AtomicBitmap {
    pub(crate) fn zeroed(len_bits: usize) -> Self {
        let unit_count = len_bits.div_ceil(BITS_PER_UNIT);
        let mut units = Vec::with_capacity(unit_count);
        units.resize_with(unit_count, || AtomicU8::new(0));
        Self {
            units: units.into_boxed_slice(),
            len_bits,
        }
    }

    #[inline]
    pub(crate) fn len_bits(&self) -> usize {
        self.len_bits
    }

    /// Atomically sets the bit at `index` and reports whether it was
    /// already set. Exactly one concurrent caller per bit sees `false`.
    ///
    /// AcqRel so a caller observing an already-set bit happens-after
    /// the call that set it.
    #[inline]
    pub(crate) fn test_and_set(&self, index: usize) -> bool {
        debug_assert!(index < self.len_bits);
        let mask = 1u8 << (index % BITS_PER_UNIT);
        let prev = self.units[index / BITS_PER_UNIT].fetch_or(mask, Ordering::AcqRel);
        prev & mask != 0
    }

    /// Read-only probe. Not part of the observe path; lets tests verify
    /// that rejected calls left the store untouched.
    #[inline]
    pub(crate) fn test(&self, index: usize) -> bool {
        let mask = 1u8 << (index % BITS_PER_UNIT);
        self.units[index / BITS_PER_UNIT].load(Ordering::Acquire) & mask != 0
    }
}
