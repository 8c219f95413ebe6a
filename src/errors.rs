// ============================================================================
// Numeric Errors
// Error types for wide-decimal arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during wide-decimal operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// A result would need more limbs than the fixed capacity allows
    CapacityExceeded,
    /// Magnitude subtraction called with a minuend smaller than the subtrahend
    InvalidOperand,
    /// Input value is outside the supported range
    InvalidInput,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::CapacityExceeded => {
                write!(f, "capacity exceeded: result needs more than 512 digits")
            },
            NumericError::InvalidOperand => {
                write!(f, "invalid operand: minuend smaller than subtrahend")
            },
            NumericError::InvalidInput => write!(f, "invalid input: value out of supported range"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
