// ============================================================================
// Wide Decimal Library
// Fixed-capacity exact decimal arithmetic on base-10000 limb arrays
// ============================================================================

//! # Wide Decimal
//!
//! A fixed-capacity, arbitrary-precision signed decimal type with exact
//! arithmetic.
//!
//! ## Features
//!
//! - **Exact base-10000 limb arithmetic** with no floating point anywhere
//! - **512 integer and 512 fractional digits** of fixed capacity per value
//! - **Pure operations**: results are fresh values, operands are never
//!   mutated, self-aliasing is safe by construction
//! - **Checked capacity**: overflow reports an error instead of truncating
//! - **Permissive parsing** of calculator-style input
//!
//! ## Example
//!
//! ```rust
//! use wide_decimal::prelude::*;
//! use std::str::FromStr;
//!
//! let x = WideDecimal::from_str("-11111.111").unwrap();
//! let y = WideDecimal::from_str("-11.111111").unwrap();
//! let product = x.checked_mul(&y).unwrap();
//! assert_eq!(product.to_string(), "123456.787654321");
//!
//! let a = WideDecimal::from_str("0.1").unwrap();
//! let b = WideDecimal::from_str("0.2").unwrap();
//! assert_eq!((a + b).to_string(), "0.3");
//! ```

pub mod decimal;
pub mod errors;
pub mod limbs;
mod magnitude;

pub use decimal::{FormatOutcome, WideDecimal};
pub use errors::{NumericError, NumericResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::decimal::{FormatOutcome, WideDecimal};
    pub use crate::errors::{NumericError, NumericResult};
}
