//! Stack virtual machine for Theatre Script.
//!
//! A [`VirtualMachine`] executes [`Command`]s against an operand stack.
//! Each step is pure: [`VirtualMachine::execute`] returns a new snapshot and
//! leaves the receiver untouched, so a failed step is never half-applied.
//!
//! `CALL` dispatches into a [`HookTable`] of host-registered native
//! functions. The standard set (`print`, `println`, `throw`) is installed by
//! [`VirtualMachine::init`]; output goes through the injected
//! [`Output`] sink.
//!
//! Step-level events are emitted with `tracing` at `debug` level.

mod builtins;
mod config;
mod error;
mod hook;
mod opcode;
mod output;
mod vm;

pub use builtins::{format_template, register_builtins};
pub use config::VmConfig;
pub use error::{VmError, VmResult};
pub use hook::{Arity, Hook, HookContext, HookFn, HookTable};
pub use opcode::{Command, Opcode};
pub use output::{Output, SharedOutput};
pub use vm::{History, HistoryIter, VirtualMachine};
