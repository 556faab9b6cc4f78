//! Validator contract: the uniform raw-input-to-typed-value shape used by both surfaces.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::parameter::Arity;

/// A validated parameter value as handed to the callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Truthiness as used for boolean-flag polarity: `None`, `false`, `0`,
    /// empty strings and empty lists are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            ParamValue::None => false,
            ParamValue::Bool(b) => *b,
            ParamValue::Int(n) => *n != 0,
            ParamValue::Float(f) => *f != 0.0,
            ParamValue::Str(s) => !s.is_empty(),
            ParamValue::List(items) => !items.is_empty(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::None => Ok(()),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Str(s) => write!(f, "{}", s),
            ParamValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

/// Target type for a bare-type validator.
///
/// On the form surface this is a parse check over the raw text; on the CLI
/// surface the same check runs inside the argument parser, which already
/// enforces the representation during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Str,
    Int,
    Float,
    Bool,
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Str => "str",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Bool => "bool",
        }
    }

    fn check(self, raw: &str) -> Result<ParamValue, String> {
        match self {
            ValueType::Str => Ok(ParamValue::Str(raw.to_string())),
            ValueType::Int => raw
                .trim()
                .parse::<i64>()
                .map(ParamValue::Int)
                .map_err(|_| format!("{} is not of type int", raw)),
            ValueType::Float => raw
                .trim()
                .parse::<f64>()
                .map(ParamValue::Float)
                .map_err(|_| format!("{} is not of type float", raw)),
            ValueType::Bool => match raw.trim() {
                "true" | "True" | "1" => Ok(ParamValue::Bool(true)),
                "false" | "False" | "0" => Ok(ParamValue::Bool(false)),
                _ => Err(format!("{} is not of type bool", raw)),
            },
        }
    }
}

/// Tagged validator: either an exact-type check or a custom function mapping
/// raw input to a validated value. Resolved once at construction; both
/// surfaces pattern-match on the tag instead of inspecting a callable.
#[derive(Clone)]
pub enum Validator {
    TypeCheck(ValueType),
    Function(Arc<dyn Fn(&str) -> Result<String, String> + Send + Sync>),
}

impl Validator {
    /// Wrap a single-argument validation function. The function either returns
    /// the validated value or fails with a human-readable message.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<String, String> + Send + Sync + 'static,
    {
        Validator::Function(Arc::new(f))
    }

    /// The identity validator: accepts any input unchanged.
    pub fn accept_any() -> Self {
        Validator::function(|raw| Ok(raw.to_string()))
    }

    /// Validate one raw token.
    pub fn run_scalar(&self, raw: &str) -> Result<ParamValue, String> {
        match self {
            Validator::TypeCheck(value_type) => value_type.check(raw),
            Validator::Function(f) => f(raw).map(ParamValue::Str),
        }
    }

    /// Validate raw form text for the given arity. Multi-value arities split
    /// on commas, trim each piece, and validate per piece, producing an
    /// ordered list; all other arities validate the text as one token.
    pub fn run_for_arity(&self, arity: Arity, raw: &str) -> Result<ParamValue, String> {
        if !arity.is_multi() {
            return self.run_scalar(raw);
        }
        let mut items = Vec::new();
        for piece in raw.split(',') {
            items.push(self.run_scalar(piece.trim())?);
        }
        Ok(ParamValue::List(items))
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validator::TypeCheck(value_type) => {
                f.debug_tuple("TypeCheck").field(value_type).finish()
            }
            Validator::Function(_) => f.debug_tuple("Function").field(&"..").finish(),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Validator::accept_any()
    }
}
