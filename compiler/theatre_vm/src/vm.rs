//! The stack machine.
//!
//! Execution is a pure step function: [`VirtualMachine::execute`] never
//! touches `self` and returns the next snapshot instead. Snapshots share
//! their hook table, output sink and history tail, so keeping an old
//! snapshot around is cheap and it never observes later steps.

use std::fmt;
use std::sync::Arc;

use theatre_value::{evaluate_binary, BinaryOp, OperationError, Value};

use crate::builtins::register_builtins;
use crate::config::VmConfig;
use crate::error::{VmError, VmResult};
use crate::hook::{Arity, HookContext, HookTable};
use crate::opcode::{Command, Opcode};
use crate::output::{Output, SharedOutput};

/// Executed commands, most recent first.
///
/// A persistent list: prepending shares the existing tail, so every VM
/// snapshot holds its own history without copying earlier entries.
#[derive(Clone, Default)]
pub struct History {
    head: Option<Arc<HistoryNode>>,
    len: usize,
}

struct HistoryNode {
    command: Command,
    next: Option<Arc<HistoryNode>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commands executed so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The most recently executed command.
    pub fn latest(&self) -> Option<&Command> {
        self.head.as_deref().map(|node| &node.command)
    }

    /// A new history with `command` in front. `self` is unchanged.
    #[must_use]
    pub fn prepend(&self, command: Command) -> History {
        History {
            head: Some(Arc::new(HistoryNode {
                command,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Commands from most recent to oldest.
    pub fn iter(&self) -> HistoryIter<'_> {
        HistoryIter {
            next: self.head.as_deref(),
        }
    }
}

// Long scripts build long chains; unlink them one node at a time so
// dropping the last owner cannot overflow the native stack.
impl Drop for History {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Command;
    type IntoIter = HistoryIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`History`], most recent first.
pub struct HistoryIter<'a> {
    next: Option<&'a HistoryNode>,
}

impl<'a> Iterator for HistoryIter<'a> {
    type Item = &'a Command;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.command
        })
    }
}

/// A VM snapshot: operand stack, history, hooks and output sink.
#[derive(Clone)]
pub struct VirtualMachine {
    name: String,
    stack: Vec<Value>,
    history: History,
    hooks: Arc<HookTable>,
    out: SharedOutput,
    config: VmConfig,
}

impl VirtualMachine {
    /// An empty machine with no hooks registered.
    pub fn new(name: impl Into<String>, out: SharedOutput) -> Self {
        VirtualMachine {
            name: name.into(),
            stack: Vec::new(),
            history: History::new(),
            hooks: Arc::new(HookTable::new()),
            out,
            config: VmConfig::default(),
        }
    }

    #[must_use]
    /// Replace the resource limits.
    pub fn with_config(mut self, config: VmConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder form of [`VirtualMachine::init`].
    #[must_use]
    pub fn with_builtins(mut self) -> Self {
        self.init();
        self
    }

    /// Register the standard hooks (`print`, `println`, `throw`).
    pub fn init(&mut self) {
        register_builtins(Arc::make_mut(&mut self.hooks));
    }

    /// Register a native hook. Replaces any hook with the same name.
    ///
    /// Snapshots taken before the call keep the table they were built with.
    pub fn register<F>(&mut self, name: impl Into<String>, arity: Arity, func: F)
    where
        F: Fn(HookContext<'_>) -> VmResult<Value> + Send + Sync + 'static,
    {
        Arc::make_mut(&mut self.hooks).register(name, arity, func);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &VmConfig {
        &self.config
    }

    pub fn hooks(&self) -> &HookTable {
        &self.hooks
    }

    /// Output sink used by hooks.
    pub fn out(&self) -> &Output {
        &self.out
    }

    pub fn out_handle(&self) -> SharedOutput {
        Arc::clone(&self.out)
    }

    /// Operand stack, bottom first.
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    /// Executed commands, newest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The value on top of the stack, if any.
    pub fn top(&self) -> Option<&Value> {
        self.stack.last()
    }

    pub fn is_stack_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Execute one command, returning the next snapshot.
    ///
    /// On failure `self` is untouched and no partial step is visible.
    pub fn execute(&self, command: &Command) -> VmResult<VirtualMachine> {
        let mut next = self.clone();
        match command.opcode {
            Opcode::Push => next.push(command.operand.clone())?,
            Opcode::Add => next.apply_binary(BinaryOp::Add)?,
            Opcode::Sub => next.apply_binary(BinaryOp::Sub)?,
            Opcode::Mul => next.apply_binary(BinaryOp::Mul)?,
            Opcode::Div => next.apply_binary(BinaryOp::Div)?,
            Opcode::Call => next.call_hook(&command.operand)?,
        }
        tracing::debug!(
            vm = %self.name,
            command = %command,
            depth = next.stack.len(),
            "executed"
        );
        next.history = next.history.prepend(command.clone());
        Ok(next)
    }

    /// Execute `commands` in order, stopping at the first failure.
    pub fn run<'c, I>(self, commands: I) -> VmResult<VirtualMachine>
    where
        I: IntoIterator<Item = &'c Command>,
    {
        commands
            .into_iter()
            .try_fold(self, |vm, command| vm.execute(command))
    }

    fn push(&mut self, value: Value) -> VmResult<()> {
        let limit = self.config.max_stack_depth;
        if self.stack.len() >= limit {
            return Err(VmError::StackOverflow { limit });
        }
        self.stack.push(value);
        Ok(())
    }

    /// Pops the top as the left operand and the one beneath as the right.
    fn apply_binary(&mut self, op: BinaryOp) -> VmResult<()> {
        let found = self.stack.len();
        let (Some(left), Some(right)) = (self.stack.pop(), self.stack.pop()) else {
            return Err(VmError::StackUnderflow { expected: 2, found });
        };
        let result = evaluate_binary(&left, &right, op)?;
        self.stack.push(result);
        Ok(())
    }

    /// Drains the whole stack into the hook's arguments, top first.
    fn call_hook(&mut self, operand: &Value) -> VmResult<()> {
        let name = operand.as_str().ok_or_else(|| OperationError::TypeMismatch {
            expected: "string",
            found: operand.type_name(),
        })?;
        let hooks = Arc::clone(&self.hooks);
        let hook = hooks.get(name)?;
        let args: Vec<Value> = self.stack.drain(..).rev().collect();
        let result = hook.call(self, &args)?;
        if !result.is_mono() {
            self.push(result)?;
        }
        Ok(())
    }
}

impl fmt::Debug for VirtualMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualMachine")
            .field("name", &self.name)
            .field("stack", &self.stack)
            .field("history", &self.history)
            .field("hooks", &self.hooks)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for VirtualMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Virtual machine")?;
        if !self.name.is_empty() {
            write!(f, " - {}", self.name)?;
        }
        f.write_str("\nStack:\n")?;
        if self.stack.is_empty() {
            f.write_str("(empty)\n")?;
        }
        for value in &self.stack {
            writeln!(f, "- {value}")?;
        }
        f.write_str("\nHistory:\n")?;
        if self.history.is_empty() {
            f.write_str("(empty)\n")?;
        }
        for command in &self.history {
            writeln!(f, "- {command}")?;
        }
        Ok(())
    }
}
