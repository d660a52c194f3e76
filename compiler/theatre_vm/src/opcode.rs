//! Opcodes and commands.

use std::fmt;

use theatre_value::{BinaryOp, Value};

/// VM instruction set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    Push,
    Add,
    Sub,
    Mul,
    Div,
    Call,
}

impl Opcode {
    pub const ALL: [Opcode; 6] = [
        Opcode::Push,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::Call,
    ];

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Push => "PUSH",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Call => "CALL",
        }
    }

    /// Case-insensitive mnemonic lookup.
    pub fn from_mnemonic(text: &str) -> Option<Opcode> {
        Opcode::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(text))
    }

    /// The arithmetic operator behind this opcode, if any.
    pub const fn binary_op(self) -> Option<BinaryOp> {
        match self {
            Opcode::Add => Some(BinaryOp::Add),
            Opcode::Sub => Some(BinaryOp::Sub),
            Opcode::Mul => Some(BinaryOp::Mul),
            Opcode::Div => Some(BinaryOp::Div),
            Opcode::Push | Opcode::Call => None,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// One instruction: an opcode plus its operand.
///
/// The operand is the literal for `PUSH`, the hook name for `CALL`, and
/// ignored otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    pub opcode: Opcode,
    pub operand: Value,
}

impl Command {
    pub fn new(opcode: Opcode, operand: Value) -> Self {
        Command { opcode, operand }
    }

    pub fn push(value: impl Into<Value>) -> Self {
        Command::new(Opcode::Push, value.into())
    }

    pub fn call(hook: impl Into<String>) -> Self {
        Command::new(Opcode::Call, Value::Str(hook.into()))
    }
}

impl From<Opcode> for Command {
    fn from(opcode: Opcode) -> Self {
        Command::new(opcode, Value::Empty)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operand.is_mono() {
            write!(f, "{}", self.opcode)
        } else {
            write!(f, "{} {}", self.opcode, self.operand.repr())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonics_match_case_insensitively() {
        assert_eq!(Opcode::from_mnemonic("push"), Some(Opcode::Push));
        assert_eq!(Opcode::from_mnemonic("Call"), Some(Opcode::Call));
        assert_eq!(Opcode::from_mnemonic("DIV"), Some(Opcode::Div));
        assert_eq!(Opcode::from_mnemonic("JMP"), None);
        assert_eq!(Opcode::from_mnemonic(""), None);
    }

    #[test]
    fn every_opcode_round_trips_through_mnemonic() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::from_mnemonic(op.mnemonic()), Some(op));
        }
    }

    #[test]
    fn command_display() {
        assert_eq!(Command::push(5).to_string(), "PUSH 5");
        assert_eq!(Command::call("print").to_string(), "CALL \"print\"");
        assert_eq!(Command::from(Opcode::Add).to_string(), "ADD");
    }
}
