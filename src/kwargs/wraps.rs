//! Keyword injection
//!
//! [`wraps_kwargs`] pre-fills a call's keyword arguments from a mapping. The
//! caller always wins: names given as keywords, or already bound by
//! position, are never overridden.

use super::function::Callable;
use super::signature::{Args, Kwargs, ParamKind, Signature};
use crate::error::Result;

pub struct WrapsKwargs<C> {
    mapping: Kwargs,
    signature: Signature,
    inner: C,
}

/// Wrap `inner` so that every entry of `mapping` is passed as a keyword
/// argument unless the caller supplies it.
///
/// Entries with no matching named parameter are merged into the catch-all
/// keyword parameter when the target declares one, and dropped otherwise.
pub fn wraps_kwargs<C: Callable>(mapping: Kwargs, inner: C) -> WrapsKwargs<C> {
    let signature = expose_signature(inner.signature(), &mapping);
    WrapsKwargs { mapping, signature, inner }
}

/// The target's signature with mapping values as defaults, plus a
/// keyword-only parameter for each mapping key the target does not declare.
fn expose_signature(target: &Signature, mapping: &Kwargs) -> Signature {
    let mut exposed = Signature::new();
    for param in target.params() {
        let default = match mapping.get(&param.name) {
            Some(value) if param.is_named() => Some(value.clone()),
            _ => param.default.clone(),
        };
        exposed = match param.kind {
            ParamKind::PositionalOrKeyword => match default {
                Some(d) => exposed.param_default(param.name.clone(), d),
                None => exposed.param(param.name.clone()),
            },
            ParamKind::KeywordOnly => exposed.keyword_only(param.name.clone(), default),
            ParamKind::VarPositional => exposed.var_args(param.name.clone()),
            ParamKind::VarKeyword => exposed.var_kwargs(param.name.clone()),
        };
    }
    for (name, value) in mapping {
        if target.named(name).is_none() {
            exposed = exposed.keyword_only(name.clone(), Some(value.clone()));
        }
    }
    exposed
}

impl<C> WrapsKwargs<C> {
    /// The mapping captured at wrap time.
    pub fn mapping(&self) -> &Kwargs {
        &self.mapping
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Callable> Callable for WrapsKwargs<C> {
    type Output = C::Output;

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, mut args: Args) -> Result<C::Output> {
        let target = self.inner.signature();
        let by_position: Vec<&str> =
            target.positional().take(args.positional.len()).map(|p| p.name.as_str()).collect();

        if !target.has_var_kwargs() {
            // Mapping keys are accepted by the wrapper but the target cannot take them.
            args.keywords
                .retain(|name, _| target.named(name).is_some() || !self.mapping.contains_key(name));
        }

        for (name, value) in &self.mapping {
            if args.keywords.contains_key(name) || by_position.contains(&name.as_str()) {
                continue;
            }
            if target.named(name).is_some() || target.has_var_kwargs() {
                tracing::trace!("injecting keyword '{}'", name);
                args.keywords.insert(name.clone(), value.clone());
            }
        }

        self.inner.call(args)
    }
}
