//! VM error types.

use theatre_value::OperationError;

use crate::hook::Arity;

/// Result of a VM operation.
pub type VmResult<T> = Result<T, VmError>;

/// A failed execution step or hook call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum VmError {
    #[error("stack underflow: expected {expected} items but got {found}")]
    StackUnderflow { expected: usize, found: usize },

    #[error("stack overflow: depth limit of {limit} reached")]
    StackOverflow { limit: usize },

    #[error("no external hook found with name: {name}")]
    UnknownHook { name: String },

    #[error("function {name} expects {expected} args but {got} were given")]
    ArityMismatch {
        name: String,
        expected: Arity,
        got: usize,
    },

    /// Raised by the `throw` hook.
    #[error("{message}")]
    Thrown { message: String },

    #[error(transparent)]
    Operation(#[from] OperationError),
}
