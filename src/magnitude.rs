// ============================================================================
// Magnitude Engine
// Unsigned carry/borrow arithmetic and convolution multiplication over
// base-10000 limb arrays
// ============================================================================

use crate::errors::{NumericError, NumericResult};
use crate::limbs::{limb_at, trim_tail_zeros, Limb, LimbVec, LIMB_BASE, MAX_LIMBS};
use std::cmp::Ordering;

/// Unsigned value split at the decimal point.
///
/// `int` holds the integer limbs least-significant first, `frac` holds the
/// fraction limbs most-significant first (limb 0 is the first four decimal
/// digits after the point). Both arrays are kept trimmed: no zero limbs at
/// the tail, so a zero part is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct Magnitude {
    pub(crate) int: LimbVec,
    pub(crate) frac: LimbVec,
}

impl Magnitude {
    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        self.int.is_empty() && self.frac.is_empty()
    }

    /// Compares two magnitudes.
    ///
    /// A longer integer part wins outright; otherwise integer limbs are
    /// compared most-significant first, then fraction limbs in storage order
    /// over the longer fractional length with missing limbs reading as zero.
    pub(crate) fn cmp(&self, other: &Self) -> Ordering {
        match self.int.len().cmp(&other.int.len()) {
            Ordering::Equal => {},
            unequal => return unequal,
        }
        for i in (0..self.int.len()).rev() {
            match self.int[i].cmp(&other.int[i]) {
                Ordering::Equal => {},
                unequal => return unequal,
            }
        }
        let frac_len = self.frac.len().max(other.frac.len());
        for j in 0..frac_len {
            match limb_at(&self.frac, j).cmp(&limb_at(&other.frac, j)) {
                Ordering::Equal => {},
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }

    /// Adds two magnitudes.
    ///
    /// Fraction limbs are summed from the least-significant tail toward limb
    /// 0 with the carry rippling the same way; a carry out of fraction limb 0
    /// lands in integer limb 0, then the integer limbs are summed upward.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if a final carry would need a 129th
    /// integer limb.
    pub(crate) fn add(&self, other: &Self) -> NumericResult<Self> {
        let frac_len = self.frac.len().max(other.frac.len());
        let mut frac = LimbVec::new();
        frac.extend(std::iter::repeat(0).take(frac_len));

        let mut carry: Limb = 0;
        for j in (0..frac_len).rev() {
            let sum = limb_at(&self.frac, j) + limb_at(&other.frac, j) + carry;
            frac[j] = sum % LIMB_BASE;
            carry = sum / LIMB_BASE;
        }

        let int_len = self.int.len().max(other.int.len());
        let mut int = LimbVec::new();
        for i in 0..int_len {
            let sum = limb_at(&self.int, i) + limb_at(&other.int, i) + carry;
            int.push(sum % LIMB_BASE);
            carry = sum / LIMB_BASE;
        }
        if carry > 0 {
            int.try_push(carry)
                .map_err(|_| NumericError::CapacityExceeded)?;
        }

        trim_tail_zeros(&mut frac);
        Ok(Magnitude { int, frac })
    }

    /// Subtracts `other` from `self`.
    ///
    /// Borrows propagate from the least-significant fraction limb toward limb
    /// 0, cross the point into integer limb 0, then ripple up the integer
    /// limbs. Both parts are re-trimmed afterwards.
    ///
    /// # Errors
    /// Returns `InvalidOperand` when `self < other`.
    pub(crate) fn sub(&self, other: &Self) -> NumericResult<Self> {
        if self.cmp(other) == Ordering::Less {
            return Err(NumericError::InvalidOperand);
        }

        let frac_len = self.frac.len().max(other.frac.len());
        let mut frac = LimbVec::new();
        frac.extend(std::iter::repeat(0).take(frac_len));

        let mut borrow: i64 = 0;
        for j in (0..frac_len).rev() {
            let mut diff = limb_at(&self.frac, j) as i64 - limb_at(&other.frac, j) as i64 - borrow;
            if diff < 0 {
                diff += LIMB_BASE as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            frac[j] = diff as Limb;
        }

        let mut int = LimbVec::new();
        for i in 0..self.int.len() {
            let mut diff = self.int[i] as i64 - limb_at(&other.int, i) as i64 - borrow;
            if diff < 0 {
                diff += LIMB_BASE as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            int.push(diff as Limb);
        }
        debug_assert_eq!(borrow, 0, "borrow must resolve when self >= other");

        trim_tail_zeros(&mut frac);
        trim_tail_zeros(&mut int);
        Ok(Magnitude { int, frac })
    }

    /// Multiplies two magnitudes with a schoolbook convolution.
    ///
    /// Four passes accumulate raw limb products into wide accumulators:
    /// fraction x fraction lands in fraction positions by index sum, the two
    /// cross passes land on whichever side of the point the combined index
    /// falls, and integer x integer lands in integer positions by index sum.
    /// A single carry sweep then normalizes from the least-significant
    /// fraction position up through the integer limbs, crossing the point.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if either part still needs more than 128
    /// limbs after trimming.
    pub(crate) fn mul(&self, other: &Self) -> NumericResult<Self> {
        if self.is_zero() || other.is_zero() {
            return Ok(Magnitude::default());
        }

        let mut frac_acc = [0u64; 2 * MAX_LIMBS];
        let mut int_acc = [0u64; 2 * MAX_LIMBS];

        // fraction x fraction
        for i in 0..self.frac.len() {
            for j in 0..other.frac.len() {
                frac_acc[i + j + 1] += self.frac[i] as u64 * other.frac[j] as u64;
            }
        }
        // fraction(self) x integer(other)
        for i in 0..self.frac.len() {
            for j in 0..other.int.len() {
                let product = self.frac[i] as u64 * other.int[j] as u64;
                if j > i {
                    int_acc[j - i - 1] += product;
                } else {
                    frac_acc[i - j] += product;
                }
            }
        }
        // fraction(other) x integer(self)
        for i in 0..other.frac.len() {
            for j in 0..self.int.len() {
                let product = other.frac[i] as u64 * self.int[j] as u64;
                if j > i {
                    int_acc[j - i - 1] += product;
                } else {
                    frac_acc[i - j] += product;
                }
            }
        }
        // integer x integer
        for i in 0..self.int.len() {
            for j in 0..other.int.len() {
                int_acc[i + j] += self.int[i] as u64 * other.int[j] as u64;
            }
        }

        // Carry sweep: least-significant fraction position upward, then
        // across the point through the integer positions.
        let frac_positions = self.frac.len() + other.frac.len();
        let mut carry: u64 = 0;
        for j in (0..frac_positions).rev() {
            let value = frac_acc[j] + carry;
            frac_acc[j] = value % LIMB_BASE as u64;
            carry = value / LIMB_BASE as u64;
        }
        let int_positions = self.int.len() + other.int.len();
        for i in 0..int_positions {
            let value = int_acc[i] + carry;
            int_acc[i] = value % LIMB_BASE as u64;
            carry = value / LIMB_BASE as u64;
        }
        debug_assert_eq!(carry, 0, "product magnitude fits in the summed limb counts");

        let mut int_len = int_positions;
        while int_len > 0 && int_acc[int_len - 1] == 0 {
            int_len -= 1;
        }
        let mut frac_len = frac_positions;
        while frac_len > 0 && frac_acc[frac_len - 1] == 0 {
            frac_len -= 1;
        }
        if int_len > MAX_LIMBS || frac_len > MAX_LIMBS {
            return Err(NumericError::CapacityExceeded);
        }

        let mut int = LimbVec::new();
        int.extend(int_acc[..int_len].iter().map(|&v| v as Limb));
        let mut frac = LimbVec::new();
        frac.extend(frac_acc[..frac_len].iter().map(|&v| v as Limb));
        Ok(Magnitude { int, frac })
    }
}
