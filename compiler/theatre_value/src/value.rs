//! The runtime value type.

use std::fmt;

use crate::errors::OperationError;

/// Runtime value.
///
/// Exactly one variant is active. `Empty` stands for "no value": void hook
/// returns and uninitialized cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absence of a value (`mono`).
    #[default]
    Empty,
    /// 32-bit signed integer.
    Int(i32),
    /// 32-bit float.
    Float(f32),
    /// Boolean.
    Bool(bool),
    /// Text.
    Str(String),
}

/// Discriminant of a [`Value`], named after the script type keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Empty,
    Int,
    Float,
    Bool,
    Str,
}

impl ValueKind {
    /// The type keyword naming this kind.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Empty => "mono",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::Str => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Classify raw text into a value.
    ///
    /// The checks run in a fixed order: empty, all digits, contains `.`,
    /// `true`/`false`, and finally text. A digit run too large for `i32`
    /// becomes a float; a dotted string that is not a number stays text.
    pub fn parse(text: &str) -> Value {
        if text.is_empty() {
            return Value::Empty;
        }
        if text.bytes().all(|b| b.is_ascii_digit()) {
            return text
                .parse::<i32>()
                .map(Value::Int)
                .or_else(|_| text.parse::<f32>().map(Value::Float))
                .unwrap_or_else(|_| Value::string(text));
        }
        if text.contains('.') {
            return text
                .parse::<f32>()
                .map_or_else(|_| Value::string(text), Value::Float);
        }
        match text {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::string(text),
        }
    }

    /// Create a text value.
    pub fn string(text: impl Into<String>) -> Value {
        Value::Str(text.into())
    }

    /// Tag of the active variant.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Empty => ValueKind::Empty,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::Str(_) => ValueKind::Str,
        }
    }

    /// Type keyword for the active variant (`mono`, `int`, ...).
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// True for [`Value::Empty`], the `mono` value.
    pub fn is_mono(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Extract the payload as `T`, failing if another variant is active.
    pub fn extract<T: FromValue>(&self) -> Result<T, OperationError> {
        T::from_value(self).ok_or(OperationError::TypeMismatch {
            expected: T::TYPE_NAME,
            found: self.type_name(),
        })
    }

    /// Borrow the text payload without cloning.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Diagnostic rendering: like `Display`, but text is quoted.
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => format!("{s:?}"),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => write!(f, "(mono)"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// Payload types that can be pulled out of a [`Value`].
pub trait FromValue: Sized {
    /// Type keyword reported on mismatch.
    const TYPE_NAME: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for i32 {
    const TYPE_NAME: &'static str = "int";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromValue for f32 {
    const TYPE_NAME: &'static str = "float";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}
