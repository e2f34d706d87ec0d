// src/models.rs

use indexmap::IndexMap;
use std::collections::HashMap;

/// Opaque key-value context shared by the host program with every command
/// in the tree. Propagated unchanged to subgroups during traversal.
pub type Env = HashMap<String, String>;

/// The value recorded for a named option.
///
/// The parser has no schema: a flag mentioned bare becomes `Bool(true)`, a
/// `no-`-negated one `Bool(false)`, a flag with one value `Text`, and a
/// repeated flag is promoted to `List` preserving encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptValue {
    Bool(bool),
    Text(String),
    List(Vec<String>),
}

impl OptValue {
    /// The textual value, if this option carries exactly one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    /// True only for an explicit boolean `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }
}

/// How a parameter behaves when the caller does not supply it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamDefault {
    /// Must be provided, positionally or as `--name value`.
    Required,
    /// Boolean switch; rendered as `[--name]` in signatures.
    Flag(bool),
    /// Optional with a textual default; rendered as `[--name=value]`.
    Value(String),
}

/// A declared parameter of a command: name plus default behavior.
///
/// Descriptors are built once at registration time and drive both call-time
/// binding and signature rendering. There is no value typing beyond
/// presence/absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    name: String,
    default: ParamDefault,
}

impl ParamSpec {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: ParamDefault::Required,
        }
    }

    pub fn flag(name: impl Into<String>, default: bool) -> Self {
        Self {
            name: name.into(),
            default: ParamDefault::Flag(default),
        }
    }

    pub fn with_default(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: ParamDefault::Value(value.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default(&self) -> &ParamDefault {
        &self.default
    }
}

/// Arguments bound to a command's declared parameters, as handed to its
/// handler. Every declared parameter is present: either a caller-supplied
/// value or the declared default.
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    values: IndexMap<String, OptValue>,
}

impl CallArgs {
    pub(crate) fn new(values: IndexMap<String, OptValue>) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&OptValue> {
        self.values.get(name)
    }

    /// The textual value of `name`, if it was bound to one.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(OptValue::as_text)
    }

    /// True iff `name` was bound to an explicit boolean `true`.
    pub fn flag(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(OptValue::is_true)
    }

    /// All textual values of `name`: a scalar yields one entry, a repeated
    /// flag yields them all in encounter order.
    pub fn list(&self, name: &str) -> Vec<&str> {
        match self.values.get(name) {
            Some(OptValue::Text(value)) => vec![value.as_str()],
            Some(OptValue::List(values)) => values.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}
