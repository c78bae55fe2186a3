//! Explicit parameter lists and call binding
//!
//! A [`Signature`] is declared once when a function is wrapped. Calls arrive
//! as [`Args`] and are bound against the signature into [`BoundArgs`] using
//! the usual rules: positionals fill positional parameters in order, keywords
//! fill named parameters, leftovers go to the catch-all collectors.

use crate::error::{Error, Result};
use crate::value::Value;
use std::collections::BTreeMap;

/// Keyword arguments by name.
pub type Kwargs = BTreeMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    PositionalOrKeyword,
    KeywordOnly,
    /// Collects surplus positional arguments.
    VarPositional,
    /// Collects keyword arguments that match no named parameter.
    VarKeyword,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub kind: ParamKind,
    pub default: Option<Value>,
}

impl Param {
    pub fn is_named(&self) -> bool {
        matches!(self.kind, ParamKind::PositionalOrKeyword | ParamKind::KeywordOnly)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
    params: Vec<Param>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required positional-or-keyword parameter.
    pub fn param(self, name: impl Into<String>) -> Self {
        self.push(name, ParamKind::PositionalOrKeyword, None)
    }

    pub fn param_default(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.push(name, ParamKind::PositionalOrKeyword, Some(default.into()))
    }

    pub fn keyword_only(self, name: impl Into<String>, default: Option<Value>) -> Self {
        self.push(name, ParamKind::KeywordOnly, default)
    }

    pub fn var_args(self, name: impl Into<String>) -> Self {
        self.push(name, ParamKind::VarPositional, None)
    }

    pub fn var_kwargs(self, name: impl Into<String>) -> Self {
        self.push(name, ParamKind::VarKeyword, None)
    }

    fn push(mut self, name: impl Into<String>, kind: ParamKind, default: Option<Value>) -> Self {
        self.params.push(Param { name: name.into(), kind, default });
        self
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Named (non-collector) parameter by name.
    pub fn named(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.is_named() && p.name == name)
    }

    pub fn has_var_args(&self) -> bool {
        self.params.iter().any(|p| p.kind == ParamKind::VarPositional)
    }

    pub fn has_var_kwargs(&self) -> bool {
        self.params.iter().any(|p| p.kind == ParamKind::VarKeyword)
    }

    /// Parameters that can be filled positionally, in declaration order.
    pub fn positional(&self) -> impl Iterator<Item = &Param> {
        self.params.iter().filter(|p| p.kind == ParamKind::PositionalOrKeyword)
    }

    /// Declared defaults by parameter name.
    pub fn defaults(&self) -> Kwargs {
        self.params
            .iter()
            .filter_map(|p| p.default.clone().map(|d| (p.name.clone(), d)))
            .collect()
    }

    pub fn bind(&self, args: Args) -> Result<BoundArgs> {
        let mut bound = BoundArgs::default();
        let positional: Vec<&Param> = self.positional().collect();
        let given = args.positional.len();

        let mut surplus = Vec::new();
        for (i, value) in args.positional.into_iter().enumerate() {
            match positional.get(i) {
                Some(param) => {
                    bound.values.insert(param.name.clone(), value);
                }
                None => surplus.push(value),
            }
        }
        if !surplus.is_empty() {
            if !self.has_var_args() {
                return Err(Error::TooManyPositional { expected: positional.len(), given });
            }
            bound.var_args = surplus;
        }

        for (name, value) in args.keywords {
            if self.named(&name).is_some() {
                if bound.values.contains_key(&name) {
                    return Err(Error::DuplicateArgument(name));
                }
                bound.values.insert(name, value);
            } else if self.has_var_kwargs() {
                bound.var_kwargs.insert(name, value);
            } else {
                return Err(Error::UnexpectedKeyword(name));
            }
        }

        for param in self.params.iter().filter(|p| p.is_named()) {
            if bound.values.contains_key(&param.name) {
                continue;
            }
            match &param.default {
                Some(default) => {
                    bound.values.insert(param.name.clone(), default.clone());
                }
                None => return Err(Error::MissingArgument(param.name.clone())),
            }
        }

        Ok(bound)
    }
}

/// Arguments as given at a call site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub positional: Vec<Value>,
    pub keywords: Kwargs,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.insert(name.into(), value.into());
        self
    }
}

/// Arguments after binding, owned by the function body for one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArgs {
    values: Kwargs,
    var_args: Vec<Value>,
    var_kwargs: Kwargs,
}

impl BoundArgs {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Named parameter value; binding guarantees every declared name is present.
    pub fn require(&self, name: &str) -> Result<&Value> {
        self.values.get(name).ok_or_else(|| Error::MissingArgument(name.to_string()))
    }

    pub fn values(&self) -> &Kwargs {
        &self.values
    }

    pub fn var_args(&self) -> &[Value] {
        &self.var_args
    }

    pub fn var_kwargs(&self) -> &Kwargs {
        &self.var_kwargs
    }

    pub fn var_kwargs_mut(&mut self) -> &mut Kwargs {
        &mut self.var_kwargs
    }

    pub fn into_var_kwargs(self) -> Kwargs {
        self.var_kwargs
    }
}
