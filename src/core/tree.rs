// src/core/tree.rs

use anyhow::Result;
use indexmap::IndexMap;
use std::collections::HashSet;
use thiserror::Error;

use crate::constants::PRIVATE_PREFIX;
use crate::models::{CallArgs, Env, OptValue, ParamDefault, ParamSpec};

/// Raised when an invocation does not fit the command's declared parameters.
/// Never recovered: it propagates to the process boundary unmodified.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("too many arguments: expected at most {expected}, got {given}")]
    TooManyArguments { expected: usize, given: usize },
    #[error("unknown option '--{0}'")]
    UnknownOption(String),
    #[error("option '--{0}' was already given positionally")]
    DuplicateBinding(String),
    #[error("missing required argument '{0}'")]
    MissingArgument(String),
}

/// Raised while declaring a group, before any dispatch happens.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate member name '{0}' in group")]
    DuplicateName(String),
}

type Handler = Box<dyn Fn(&CallArgs, &Env) -> Result<()>>;

/// A leaf of the command tree: a handler, its documentation string, and the
/// typed parameter descriptors used for binding and signature rendering.
pub struct Command {
    doc: String,
    params: Vec<ParamSpec>,
    handler: Handler,
}

impl Command {
    pub fn new<F>(doc: impl Into<String>, params: Vec<ParamSpec>, handler: F) -> Self
    where
        F: Fn(&CallArgs, &Env) -> Result<()> + 'static,
    {
        Self {
            doc: doc.into(),
            params,
            handler: Box::new(handler),
        }
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Binds positional and named arguments against the declared parameters.
    ///
    /// Positionals fill parameters in declaration order; options bind by
    /// exact name. There is no value validation beyond presence: surplus
    /// positionals, unknown names, a name already filled positionally, and a
    /// missing required parameter are the only failures.
    pub(crate) fn bind(
        &self,
        positionals: &[String],
        options: &IndexMap<String, OptValue>,
    ) -> Result<CallArgs, ArgumentError> {
        if positionals.len() > self.params.len() {
            return Err(ArgumentError::TooManyArguments {
                expected: self.params.len(),
                given: positionals.len(),
            });
        }

        let mut values: IndexMap<String, OptValue> = IndexMap::new();
        for (spec, value) in self.params.iter().zip(positionals) {
            values.insert(spec.name().to_string(), OptValue::Text(value.clone()));
        }

        for (name, value) in options {
            if !self.params.iter().any(|p| p.name() == name) {
                return Err(ArgumentError::UnknownOption(name.clone()));
            }
            if values.contains_key(name) {
                return Err(ArgumentError::DuplicateBinding(name.clone()));
            }
            values.insert(name.clone(), value.clone());
        }

        for spec in &self.params {
            if values.contains_key(spec.name()) {
                continue;
            }
            let value = match spec.default() {
                ParamDefault::Required => {
                    return Err(ArgumentError::MissingArgument(spec.name().to_string()));
                }
                ParamDefault::Flag(default) => OptValue::Bool(*default),
                ParamDefault::Value(default) => OptValue::Text(default.clone()),
            };
            values.insert(spec.name().to_string(), value);
        }

        Ok(CallArgs::new(values))
    }

    pub(crate) fn invoke(&self, args: &CallArgs, env: &Env) -> Result<()> {
        (self.handler)(args, env)
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("doc", &self.doc)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// A member of a group: a directly invocable command or a nested subgroup.
#[derive(Debug)]
pub enum Node {
    Command(Command),
    Group(GroupSpec),
}

/// A declared command group: a documentation string plus its members in
/// declaration order. Structurally immutable once built; dispatch and help
/// rendering only read it.
#[derive(Debug, Default)]
pub struct GroupSpec {
    doc: String,
    children: Vec<(String, Node)>,
}

impl GroupSpec {
    pub fn builder(doc: impl Into<String>) -> GroupBuilder {
        GroupBuilder {
            doc: doc.into(),
            children: Vec::new(),
        }
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Exact, case-sensitive member lookup. No prefix or fuzzy matching.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    /// Directly declared commands, in declaration order.
    pub fn commands(&self) -> impl Iterator<Item = (&str, &Command)> {
        self.children.iter().filter_map(|(name, node)| match node {
            Node::Command(cmd) => Some((name.as_str(), cmd)),
            Node::Group(_) => None,
        })
    }

    /// Directly declared subgroups, in declaration order.
    pub fn subgroups(&self) -> impl Iterator<Item = (&str, &GroupSpec)> {
        self.children.iter().filter_map(|(name, node)| match node {
            Node::Group(spec) => Some((name.as_str(), spec)),
            Node::Command(_) => None,
        })
    }
}

/// Builds a [`GroupSpec`], rejecting duplicate member names at `build()`.
#[derive(Debug)]
pub struct GroupBuilder {
    doc: String,
    children: Vec<(String, Node)>,
}

impl GroupBuilder {
    pub fn command(mut self, name: impl Into<String>, command: Command) -> Self {
        self.children.push((name.into(), Node::Command(command)));
        self
    }

    pub fn group(mut self, name: impl Into<String>, spec: GroupSpec) -> Self {
        self.children.push((name.into(), Node::Group(spec)));
        self
    }

    pub fn build(self) -> Result<GroupSpec, RegistryError> {
        let mut seen = HashSet::new();
        for (name, _) in &self.children {
            if !seen.insert(name.as_str()) {
                return Err(RegistryError::DuplicateName(name.clone()));
            }
        }
        Ok(GroupSpec {
            doc: self.doc,
            children: self.children,
        })
    }
}

/// A group materialized during traversal: the declared spec plus its display
/// path (program name first), nesting depth, shared environment, and the
/// signature-rendering toggle. Created lazily, on first traversal.
#[derive(Debug, Clone)]
pub struct GroupView<'a> {
    pub spec: &'a GroupSpec,
    pub path: Vec<String>,
    pub depth: usize,
    pub env: &'a Env,
    pub show_params: bool,
}

impl<'a> GroupView<'a> {
    pub fn root(spec: &'a GroupSpec, program: &str, env: &'a Env, show_params: bool) -> Self {
        Self {
            spec,
            path: vec![program.to_string()],
            depth: 0,
            env,
            show_params,
        }
    }

    /// Enters a subgroup for dispatch: path extended, depth incremented,
    /// environment propagated unchanged.
    pub fn enter(&self, name: &str, child: &'a GroupSpec) -> Self {
        let mut path = self.path.clone();
        path.push(name.to_string());
        Self {
            spec: child,
            path,
            depth: self.depth + 1,
            env: self.env,
            show_params: self.show_params,
        }
    }

    /// Enters a subgroup for a help listing: path extended but depth kept,
    /// so transitive commands line up with the parent's own.
    pub(crate) fn listed(&self, name: &str, child: &'a GroupSpec) -> Self {
        let mut view = self.enter(name, child);
        view.depth = self.depth;
        view
    }
}

/// Whether a member name is hidden from help listings.
pub(crate) fn is_private(name: &str) -> bool {
    name.starts_with(PRIVATE_PREFIX)
}
