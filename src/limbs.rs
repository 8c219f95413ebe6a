// ============================================================================
// Limb Storage
// Base-10000 limb constants and fixed-capacity limb arrays
// ============================================================================

use arrayvec::ArrayVec;

/// A single base-10000 digit. Always in `[0, 9999]`.
pub type Limb = u32;

/// The limb radix.
pub const LIMB_BASE: u32 = 10_000;

/// Decimal digits held by one limb.
pub const LIMB_DIGITS: usize = 4;

/// Maximum limbs per part (512 decimal digits each for the integer and
/// fractional parts).
pub const MAX_LIMBS: usize = 128;

/// Fixed-capacity limb array. Length is the logical digit count; pushing past
/// `MAX_LIMBS` is a capacity error surfaced by the callers.
pub type LimbVec = ArrayVec<Limb, MAX_LIMBS>;

/// Drops zero limbs from the tail of `limbs`.
///
/// For integer parts (least-significant first) this removes high-order zeros;
/// for fraction parts (most-significant first) it removes least-significant
/// zeros. A fully-zero part trims to length 0.
pub(crate) fn trim_tail_zeros(limbs: &mut LimbVec) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

/// Limb at `index`, with positions past the logical length reading as zero.
#[inline]
pub(crate) fn limb_at(limbs: &LimbVec, index: usize) -> Limb {
    limbs.get(index).copied().unwrap_or(0)
}
