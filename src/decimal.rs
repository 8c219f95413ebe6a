// ============================================================================
// Wide Decimal
// Signed fixed-capacity decimal value built on the magnitude engine
// ============================================================================

use crate::errors::{NumericError, NumericResult};
use crate::limbs::{trim_tail_zeros, Limb, LIMB_BASE, LIMB_DIGITS, MAX_LIMBS};
use crate::magnitude::Magnitude;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Signed exact decimal with up to 512 integer and 512 fractional digits.
///
/// The integer and fractional parts are each stored as base-10000 limb
/// arrays. All arithmetic is exact; operations that would need more than the
/// fixed capacity report [`NumericError::CapacityExceeded`] instead of
/// truncating. Operations are pure: they build a fresh result and never
/// mutate their operands, so aliasing a receiver with an operand is safe by
/// construction.
///
/// Zero is always stored non-negative; there is no signed zero.
///
/// # Example
/// ```rust
/// use wide_decimal::WideDecimal;
/// use std::str::FromStr;
///
/// let x = WideDecimal::from_str("0.1").unwrap();
/// let y = WideDecimal::from_str("0.2").unwrap();
/// let sum = x.checked_add(&y).unwrap();
/// assert_eq!(sum.to_string(), "0.3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WideDecimal {
    negative: bool,
    magnitude: Magnitude,
}

/// Report from [`WideDecimal::format_into`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOutcome {
    /// Bytes the untruncated rendering needs.
    pub required: usize,
    /// Whether the buffer was too small to hold the full rendering.
    pub truncated: bool,
}

/// Largest `from_parts` fraction: ten decimal digits.
const MAX_FRACTION: u64 = 10_000_000_000;

const POW10: [u64; LIMB_DIGITS] = [1, 10, 100, 1_000];

/// Leading ASCII-digit run of `s`.
fn digit_prefix(s: &str) -> &str {
    let end = s
        .as_bytes()
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    &s[..end]
}

impl WideDecimal {
    /// Decimal digits each part can hold.
    pub const MAX_DIGITS: usize = MAX_LIMBS * LIMB_DIGITS;

    // ========================================================================
    // Construction
    // ========================================================================

    /// The zero value.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// The value 1.
    pub fn one() -> Self {
        let mut magnitude = Magnitude::default();
        magnitude.int.push(1);
        Self {
            negative: false,
            magnitude,
        }
    }

    /// Create from an integer value.
    pub fn from_integer(value: i64) -> Self {
        let mut rest = value.unsigned_abs();
        let mut magnitude = Magnitude::default();
        while rest > 0 {
            magnitude.int.push((rest % LIMB_BASE as u64) as Limb);
            rest /= LIMB_BASE as u64;
        }
        Self {
            negative: value < 0 && !magnitude.is_zero(),
            magnitude,
        }
    }

    /// Create from integer and fractional parts.
    ///
    /// `fraction` is read as the decimal digits immediately after the point,
    /// written without leading zeros: `from_parts(1, 5)` is 1.5 and
    /// `from_parts(1, 5000)` is 1.5000 (the same value). Up to ten fraction
    /// digits are supported. The sign comes from `integer`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `fraction` has more than ten digits.
    pub fn from_parts(integer: i64, fraction: u64) -> NumericResult<Self> {
        if fraction >= MAX_FRACTION {
            return Err(NumericError::InvalidInput);
        }
        let mut value = Self::from_integer(integer);
        if fraction == 0 {
            return Ok(value);
        }

        let mut digits = 0usize;
        let mut probe = fraction;
        while probe > 0 {
            digits += 1;
            probe /= 10;
        }
        // Right-pad to a whole number of limbs, then split most-significant
        // limb first.
        let pad = (LIMB_DIGITS - digits % LIMB_DIGITS) % LIMB_DIGITS;
        let mut scaled = fraction * POW10[pad];
        let limb_count = (digits + pad) / LIMB_DIGITS;
        let mut limbs: [Limb; 3] = [0; 3];
        for slot in limbs[..limb_count].iter_mut().rev() {
            *slot = (scaled % LIMB_BASE as u64) as Limb;
            scaled /= LIMB_BASE as u64;
        }
        value.magnitude.frac.extend(limbs[..limb_count].iter().copied());
        trim_tail_zeros(&mut value.magnitude.frac);
        Ok(value)
    }

    /// Create from separate integer and fraction digit strings.
    ///
    /// Each input is read up to its first non-digit character; the rest is
    /// ignored. Integer digits are grouped in fours from the
    /// least-significant end. Fraction digits are grouped in fours from the
    /// most-significant end, with a final partial group left-aligned and
    /// zero-padded on the right, so `"5"` becomes limb 5000 (0.5). A parsed
    /// zero drops a requested negative sign.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if either digit run is longer than
    /// [`Self::MAX_DIGITS`].
    pub fn from_digit_strings(
        int_digits: &str,
        frac_digits: &str,
        negative: bool,
    ) -> NumericResult<Self> {
        let int_run = digit_prefix(int_digits).as_bytes();
        let frac_run = digit_prefix(frac_digits).as_bytes();
        if int_run.len() > Self::MAX_DIGITS || frac_run.len() > Self::MAX_DIGITS {
            return Err(NumericError::CapacityExceeded);
        }

        let mut magnitude = Magnitude::default();
        let mut i = int_run.len();
        while i > 0 {
            let start = i.saturating_sub(LIMB_DIGITS);
            let mut limb: Limb = 0;
            for &byte in &int_run[start..i] {
                limb = limb * 10 + (byte - b'0') as Limb;
            }
            magnitude.int.push(limb);
            i = start;
        }
        trim_tail_zeros(&mut magnitude.int);

        let mut j = 0;
        while j < frac_run.len() {
            let end = (j + LIMB_DIGITS).min(frac_run.len());
            let mut limb: Limb = 0;
            for &byte in &frac_run[j..end] {
                limb = limb * 10 + (byte - b'0') as Limb;
            }
            for _ in end..j + LIMB_DIGITS {
                limb *= 10;
            }
            magnitude.frac.push(limb);
            j = end;
        }
        trim_tail_zeros(&mut magnitude.frac);

        Ok(Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Reset to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn negated(&self) -> Self {
        Self {
            negative: !self.negative && !self.is_zero(),
            magnitude: self.magnitude.clone(),
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare absolute values, ignoring signs.
    #[inline]
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.magnitude.cmp(&other.magnitude)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// Same-sign operands add their magnitudes and keep the shared sign.
    /// Opposite-sign operands subtract the smaller magnitude from the larger
    /// and take the larger operand's sign; a magnitude tie yields
    /// non-negative zero.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the result does not fit.
    pub fn checked_add(&self, rhs: &Self) -> NumericResult<Self> {
        if self.negative == rhs.negative {
            let magnitude = self.magnitude.add(&rhs.magnitude)?;
            let negative = self.negative && !magnitude.is_zero();
            return Ok(Self {
                negative,
                magnitude,
            });
        }
        match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Equal => Ok(Self::zero()),
            Ordering::Greater => Ok(Self {
                negative: self.negative,
                magnitude: self.magnitude.sub(&rhs.magnitude)?,
            }),
            Ordering::Less => Ok(Self {
                negative: rhs.negative,
                magnitude: rhs.magnitude.sub(&self.magnitude)?,
            }),
        }
    }

    /// Checked subtraction: addition of the negated right-hand side.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the result does not fit.
    pub fn checked_sub(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_add(&rhs.negated())
    }

    /// Checked multiplication.
    ///
    /// The result is negative exactly when the operand signs differ; a zero
    /// product normalizes to non-negative.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if either part of the product does not fit.
    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        let magnitude = self.magnitude.mul(&rhs.magnitude)?;
        let negative = self.negative != rhs.negative && !magnitude.is_zero();
        Ok(Self {
            negative,
            magnitude,
        })
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Formats into a caller-supplied buffer.
    ///
    /// Writes as many bytes of the canonical rendering as fit and reports
    /// the full required length alongside whether truncation occurred.
    pub fn format_into(&self, buf: &mut [u8]) -> FormatOutcome {
        let rendered = self.to_string();
        let bytes = rendered.as_bytes();
        let n = bytes.len().min(buf.len());
        buf[..n].copy_from_slice(&bytes[..n]);
        FormatOutcome {
            required: bytes.len(),
            truncated: n < bytes.len(),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for WideDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WideDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl Neg for WideDecimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

// Infallible operators for ergonomics (panic on capacity overflow - use
// checked_* in production)
impl Add for WideDecimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs)
            .expect("wide-decimal addition exceeded capacity")
    }
}

impl Sub for WideDecimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs)
            .expect("wide-decimal subtraction exceeded capacity")
    }
}

impl Mul for WideDecimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(&rhs)
            .expect("wide-decimal multiplication exceeded capacity")
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for WideDecimal {
    /// Canonical rendering: optional `-`, the most significant integer limb
    /// unpadded and each lower limb zero-padded to four digits, then `.` and
    /// the fraction limbs in storage order when any exist. The right-padding
    /// zeros of the final fraction limb are storage artifacts and are
    /// trimmed, so 0.3 renders as `"0.3"` rather than `"0.3000"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let int = &self.magnitude.int;
        match int.last() {
            None => f.write_str("0")?,
            Some(&top) => {
                write!(f, "{}", top)?;
                for i in (0..int.len() - 1).rev() {
                    write!(f, "{:04}", int[i])?;
                }
            },
        }
        let frac = &self.magnitude.frac;
        if let Some(&last) = frac.last() {
            f.write_str(".")?;
            for &limb in &frac[..frac.len() - 1] {
                write!(f, "{:04}", limb)?;
            }
            let mut tail = [0u8; LIMB_DIGITS];
            let mut len = LIMB_DIGITS;
            let mut value = last;
            for slot in tail.iter_mut().rev() {
                *slot = b'0' + (value % 10) as u8;
                value /= 10;
            }
            while len > 1 && tail[len - 1] == b'0' {
                len -= 1;
            }
            // tail is ASCII by construction
            f.write_str(std::str::from_utf8(&tail[..len]).expect("ascii digits"))?;
        }
        Ok(())
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for WideDecimal {
    type Err = NumericError;

    /// Best-effort prefix parse: an optional `+`/`-`, a run of digits, then
    /// optionally `.` and another run of digits. Scanning stops at the first
    /// character that does not fit the grammar and the remainder is ignored
    /// without error, matching permissive calculator-style input. An empty
    /// or all-junk input parses to zero; `"-0"` parses to non-negative zero.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` only when a digit run is longer than the
    /// fixed capacity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let int_run = digit_prefix(rest);
        let after_int = &rest[int_run.len()..];
        let (frac_run, dot) = match after_int.strip_prefix('.') {
            Some(tail) => (digit_prefix(tail), 1),
            None => ("", 0),
        };

        let consumed = (s.len() - rest.len()) + int_run.len() + dot + frac_run.len();
        if consumed < s.len() {
            tracing::debug!(
                input = s,
                ignored = &s[consumed..],
                "ignoring trailing non-numeric input"
            );
        }

        Self::from_digit_strings(int_run, frac_run, negative)
    }
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

impl WideDecimal {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// Intended for API boundaries. A `Decimal` carries at most 29 digits,
    /// so the conversion always fits and is exact.
    ///
    /// # Errors
    /// Infallible in practice; kept as a `NumericResult` for a uniform
    /// conversion surface.
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        d.to_string().parse()
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Intended for display and interop only.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` when the value carries more digits than a
    /// `Decimal` can represent exactly.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from_str(&self.to_string())
            .map_err(|_| NumericError::PrecisionLoss)
    }
}

// ============================================================================
// Serde (string-codec, optional)
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for WideDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for WideDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> WideDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_integer() {
        assert_eq!(WideDecimal::from_integer(0).to_string(), "0");
        assert_eq!(WideDecimal::from_integer(7).to_string(), "7");
        assert_eq!(WideDecimal::from_integer(1234567890).to_string(), "1234567890");
        assert_eq!(WideDecimal::from_integer(-5).to_string(), "-5");
        assert_eq!(
            WideDecimal::from_integer(i64::MIN).to_string(),
            "-9223372036854775808"
        );
    }

    #[test]
    fn test_from_parts_scaling() {
        // One fraction digit means one tenth, not one ten-thousandth.
        assert_eq!(WideDecimal::from_parts(0, 5).unwrap().to_string(), "0.5");
        assert_eq!(WideDecimal::from_parts(1, 25).unwrap().to_string(), "1.25");
        assert_eq!(
            WideDecimal::from_parts(0, 123_456).unwrap().to_string(),
            "0.123456"
        );
        assert_eq!(
            WideDecimal::from_parts(12, 1_234_567_890).unwrap().to_string(),
            "12.123456789"
        );
        // Trailing zeros of the fraction collapse to the same value.
        assert_eq!(WideDecimal::from_parts(0, 10).unwrap(), dec("0.1"));
    }

    #[test]
    fn test_from_parts_sign_and_errors() {
        let neg = WideDecimal::from_parts(-3, 5).unwrap();
        assert_eq!(neg.to_string(), "-3.5");
        assert_eq!(
            WideDecimal::from_parts(1, 10_000_000_000),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(WideDecimal::from_parts(0, 0).unwrap(), WideDecimal::zero());
    }

    #[test]
    fn test_from_digit_strings_grouping() {
        let v = WideDecimal::from_digit_strings("1234567890", "", false).unwrap();
        assert_eq!(v.to_string(), "1234567890");

        // Solitary fraction digit is left-aligned into its limb.
        let v = WideDecimal::from_digit_strings("0", "5", false).unwrap();
        assert_eq!(v.to_string(), "0.5");

        let v = WideDecimal::from_digit_strings("", "00005", true).unwrap();
        assert_eq!(v.to_string(), "-0.00005");
    }

    #[test]
    fn test_from_digit_strings_zero_drops_sign() {
        let v = WideDecimal::from_digit_strings("000", "000", true).unwrap();
        assert!(v.is_zero());
        assert!(!v.is_negative());
    }

    #[test]
    fn test_from_digit_strings_capacity() {
        let long = "9".repeat(WideDecimal::MAX_DIGITS);
        assert!(WideDecimal::from_digit_strings(&long, "", false).is_ok());
        let too_long = "9".repeat(WideDecimal::MAX_DIGITS + 1);
        assert_eq!(
            WideDecimal::from_digit_strings(&too_long, "", false),
            Err(NumericError::CapacityExceeded)
        );
    }

    #[test]
    fn test_parse_permissive() {
        assert_eq!(dec("12345.1234a12"), dec("12345.1234"));
        assert_eq!(dec("+42"), WideDecimal::from_integer(42));
        assert_eq!(dec("42abc"), WideDecimal::from_integer(42));
        assert_eq!(dec("abc"), WideDecimal::zero());
        assert_eq!(dec(""), WideDecimal::zero());
        assert_eq!(dec("12."), WideDecimal::from_integer(12));
        assert_eq!(dec(".5"), WideDecimal::from_parts(0, 5).unwrap());
        assert_eq!(dec("1.2.3"), dec("1.2"));
    }

    #[test]
    fn test_parse_negative_zero_normalizes() {
        let v = dec("-0");
        assert!(v.is_zero());
        assert!(!v.is_negative());
        assert_eq!(v, dec("0.000"));
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(dec("10000").to_string(), "10000");
        assert_eq!(dec("100000001").to_string(), "100000001");
        assert_eq!(dec("0.0001").to_string(), "0.0001");
        assert_eq!(dec("0.10").to_string(), "0.1");
        assert_eq!(dec("-0.5").to_string(), "-0.5");
        assert_eq!(dec("12345678.87654321").to_string(), "12345678.87654321");
    }

    #[test]
    fn test_format_into() {
        let v = dec("-123.45");
        let mut buf = [0u8; 32];
        let outcome = v.format_into(&mut buf);
        assert_eq!(outcome, FormatOutcome { required: 7, truncated: false });
        assert_eq!(&buf[..7], b"-123.45");

        let mut small = [0u8; 4];
        let outcome = v.format_into(&mut small);
        assert_eq!(outcome, FormatOutcome { required: 7, truncated: true });
        assert_eq!(&small, b"-123");
    }

    #[test]
    fn test_signed_addition() {
        assert_eq!(dec("1.5") + dec("2.7"), dec("4.2"));
        assert_eq!(dec("-1.5") + dec("-2.5"), dec("-4"));
        assert_eq!(dec("5") + dec("-3"), dec("2"));
        assert_eq!(dec("3") + dec("-5"), dec("-2"));
        assert_eq!(dec("-5") + dec("3"), dec("-2"));
        assert_eq!(dec("-3") + dec("5"), dec("2"));
    }

    #[test]
    fn test_addition_tie_is_nonnegative_zero() {
        let sum = dec("-2.5").checked_add(&dec("2.5")).unwrap();
        assert!(sum.is_zero());
        assert!(!sum.is_negative());
    }

    #[test]
    fn test_signed_subtraction() {
        assert_eq!(dec("5") - dec("3"), dec("2"));
        assert_eq!(dec("3") - dec("5"), dec("-2"));
        assert_eq!(dec("-3") - dec("5"), dec("-8"));
        assert_eq!(dec("-3") - dec("-5"), dec("2"));
        assert_eq!(dec("0.3") - dec("0.1"), dec("0.2"));
    }

    #[test]
    fn test_multiplication_sign_rules() {
        assert_eq!(dec("2.5") * dec("4"), dec("10"));
        assert_eq!(dec("-2") * dec("3"), dec("-6"));
        assert_eq!(dec("2") * dec("-3"), dec("-6"));
        assert_eq!(dec("-2") * dec("-3"), dec("6"));
        let product = dec("-7").checked_mul(&WideDecimal::zero()).unwrap();
        assert!(product.is_zero());
        assert!(!product.is_negative());
    }

    #[test]
    fn test_self_aliasing_is_safe() {
        let x = dec("123.456");
        assert_eq!(x.checked_add(&x).unwrap(), dec("246.912"));
        assert_eq!(x.checked_sub(&x).unwrap(), WideDecimal::zero());
        assert_eq!(x.checked_mul(&x).unwrap(), dec("15241.383936"));
    }

    #[test]
    fn test_ordering() {
        assert!(dec("1234.5678") < dec("1234.56781"));
        assert!(dec("-5") < dec("5"));
        assert!(dec("-5") < dec("0"));
        // For negatives the magnitude order reverses.
        assert!(dec("-10") < dec("-2"));
        assert!(dec("10000") > dec("9999.9999"));
        assert_eq!(dec("1.50").cmp(&dec("1.5")), Ordering::Equal);
    }

    #[test]
    fn test_cmp_magnitude_ignores_sign() {
        assert_eq!(dec("-10").cmp_magnitude(&dec("2")), Ordering::Greater);
        assert_eq!(dec("-3").cmp_magnitude(&dec("3")), Ordering::Equal);
    }

    #[test]
    fn test_neg_and_abs() {
        assert_eq!(-dec("1.5"), dec("-1.5"));
        assert_eq!(-dec("-1.5"), dec("1.5"));
        let negated_zero = -WideDecimal::zero();
        assert!(!negated_zero.is_negative());
        assert_eq!(dec("-7.25").abs(), dec("7.25"));
    }

    #[test]
    fn test_clear() {
        let mut v = dec("-99.99");
        v.clear();
        assert_eq!(v, WideDecimal::zero());
    }

    #[test]
    fn test_capacity_exceeded_leaves_operands_usable() {
        let big: WideDecimal = "9".repeat(WideDecimal::MAX_DIGITS).parse().unwrap();
        let one = WideDecimal::one();
        assert_eq!(big.checked_add(&one), Err(NumericError::CapacityExceeded));
        // Pure operations: the failed call changed nothing.
        assert_eq!(big.checked_sub(&one).unwrap() + one.clone(), big);
    }

    #[test]
    fn test_decimal_interop() {
        let d = rust_decimal::Decimal::new(12345, 2); // 123.45
        let v = WideDecimal::from_decimal(d).unwrap();
        assert_eq!(v, dec("123.45"));
        assert_eq!(v.to_decimal().unwrap(), d);

        let neg = WideDecimal::from_decimal(rust_decimal::Decimal::new(-5, 1)).unwrap();
        assert_eq!(neg, dec("-0.5"));

        let wide: WideDecimal = "1".repeat(40).parse().unwrap();
        assert_eq!(wide.to_decimal(), Err(NumericError::PrecisionLoss));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_string_codec() {
        let v = dec("-11.111111");
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"-11.111111\"");
        let back: WideDecimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}

// ============================================================================
// Property Tests
// ============================================================================
