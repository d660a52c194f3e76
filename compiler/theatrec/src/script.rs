//! Line-oriented script parsing and execution.
//!
//! A script is one command per line: `MNEMONIC[ OPERAND]`. The mnemonic is
//! matched case-insensitively; the operand is everything after the first
//! space, read with [`Value::parse`]. Blank lines are skipped.

use theatre_value::Value;
use theatre_vm::{Command, Opcode, Output, SharedOutput, VirtualMachine, VmError};

/// Characters trimmed from both ends of a line.
const LINE_TRIM: &[char] = &[' ', '\t', '\n', '\r', '\x0C', '\x0B'];

/// Name of the VM built by [`run_script`].
pub const SCRIPT_VM_NAME: &str = "default";

/// A line that does not form a command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{}no opcode with value: {token}", line_prefix(.line))]
    UnknownOpcode { token: String, line: Option<usize> },
}

fn line_prefix(line: &Option<usize>) -> String {
    line.map(|n| format!("line {n}: ")).unwrap_or_default()
}

/// Failure of a whole script run.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ScriptError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Vm(#[from] VmError),
}

/// Parse a single line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim_matches(LINE_TRIM);
    if line.is_empty() {
        return Ok(None);
    }
    let (mnemonic, operand) = line.split_once(' ').unwrap_or((line, ""));
    let opcode = Opcode::from_mnemonic(mnemonic).ok_or_else(|| ParseError::UnknownOpcode {
        token: mnemonic.to_owned(),
        line: None,
    })?;
    Ok(Some(Command::new(opcode, Value::parse(operand))))
}

/// Parse every line of `text`. Errors carry the 1-based line number.
pub fn parse_script(text: &str) -> Result<Vec<Command>, ParseError> {
    let mut commands = Vec::new();
    for (index, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(command)) => commands.push(command),
            Ok(None) => {}
            Err(ParseError::UnknownOpcode { token, .. }) => {
                return Err(ParseError::UnknownOpcode {
                    token,
                    line: Some(index + 1),
                });
            }
        }
    }
    Ok(commands)
}

/// Run `text` with output going to stdout.
pub fn run_script(text: &str) -> Result<Value, ScriptError> {
    run_script_with(text, Output::stdout())
}

/// Run `text` on a fresh VM with the built-in hooks, writing to `out`.
///
/// Returns the value left on top of the stack, or `Value::Empty` when the
/// stack ends empty. Nothing executes if any line fails to parse.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn run_script_with(text: &str, out: SharedOutput) -> Result<Value, ScriptError> {
    let commands = parse_script(text)?;
    tracing::debug!(count = commands.len(), "parsed script");
    let vm = VirtualMachine::new(SCRIPT_VM_NAME, out)
        .with_builtins()
        .run(&commands)?;
    Ok(vm.top().cloned().unwrap_or_default())
}
