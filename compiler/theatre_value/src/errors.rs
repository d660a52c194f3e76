//! Errors raised by value operations.

use crate::operators::BinaryOp;
use crate::value::Value;

/// Result of a value operation.
pub type OpResult = Result<Value, OperationError>;

/// A failed value operation.
///
/// `TypeMismatch` and `InvalidOperands` are both type mismatches: the first
/// comes from extracting the wrong variant, the second from applying an
/// operator to an incompatible pairing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("operator `{op}` cannot be applied to `{left}` and `{right}`")]
    InvalidOperands {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
}

impl OperationError {
    /// Whether this error stems from an incompatible variant.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. } | Self::InvalidOperands { .. })
    }
}
