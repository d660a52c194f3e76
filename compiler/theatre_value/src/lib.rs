//! Theatre Value - dynamically-typed runtime values.
//!
//! Every cell on the VM stack, every hook argument and every literal token
//! resolves to a [`Value`]. The type set is closed, so arithmetic is plain
//! exhaustive matching (see [`evaluate_binary`]) rather than trait objects.
//!
//! # Coercion
//!
//! Binary operators follow a fixed precedence:
//! 1. `string + string` concatenates, and `mono + string` yields the string
//! 2. if either operand is a float, both are promoted to float
//! 3. otherwise both are treated as int (`mono` counts as `0`)

mod errors;
mod operators;
mod value;

pub use errors::{OpResult, OperationError};
pub use operators::{evaluate_binary, BinaryOp};
pub use value::{FromValue, Value, ValueKind};
