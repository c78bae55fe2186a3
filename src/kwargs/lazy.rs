//! Lazy string coercion
//!
//! [`lazy_string_cast`] coerces string arguments to the type of a reference
//! value before the wrapped callable sees them. Non-string arguments and
//! arguments without a reference are left alone.

use super::cast::cast_str;
use super::function::Callable;
use super::signature::{Args, Kwargs, Signature};
use crate::error::Result;
use crate::value::Value;

pub struct LazyStringCast<C> {
    reference: Kwargs,
    inner: C,
}

/// Coerce against `mapping`, falling back to the target's own defaults for
/// names the mapping does not cover.
pub fn lazy_string_cast<C: Callable>(mapping: Kwargs, inner: C) -> LazyStringCast<C> {
    let mut reference = inner.signature().defaults();
    reference.extend(mapping);
    LazyStringCast { reference, inner }
}

impl<C: Callable> LazyStringCast<C> {
    /// Bare form: the target's declared defaults are the only reference.
    pub fn from_defaults(inner: C) -> Self {
        let reference = inner.signature().defaults();
        Self { reference, inner }
    }

    pub fn reference(&self) -> &Kwargs {
        &self.reference
    }

    fn coerce(&self, name: &str, value: &mut Value) -> Result<()> {
        let Value::Str(text) = value else {
            return Ok(());
        };
        let Some(reference) = self.reference.get(name) else {
            return Ok(());
        };
        let coerced = cast_str(name, reference, text)?;
        *value = coerced;
        Ok(())
    }
}

impl<C: Callable> Callable for LazyStringCast<C> {
    type Output = C::Output;

    fn signature(&self) -> &Signature {
        self.inner.signature()
    }

    fn call(&self, mut args: Args) -> Result<C::Output> {
        let names: Vec<String> =
            self.inner.signature().positional().map(|p| p.name.clone()).collect();
        for (value, name) in args.positional.iter_mut().zip(&names) {
            self.coerce(name, value)?;
        }
        for (name, value) in args.keywords.iter_mut() {
            self.coerce(name, value)?;
        }
        self.inner.call(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kwargs::Function;

    #[test]
    fn mapping_overrides_defaults_as_reference() {
        let target = Function::new(Signature::new().param_default("n", 6).var_kwargs("k"), |b| b);
        let mut mapping = Kwargs::new();
        mapping.insert("n".to_string(), Value::Float(1.0));
        let wrapped = lazy_string_cast(mapping, target);
        assert_eq!(wrapped.reference().get("n"), Some(&Value::Float(1.0)));
        let bound = wrapped.call(Args::new().arg("2.5")).expect("call");
        assert_eq!(bound.get("n"), Some(&Value::Float(2.5)));
    }

    #[test]
    fn failed_cast_stops_the_call() {
        let target = Function::new(Signature::new().param_default("n", 6), |_| {
            panic!("body must not run")
        });
        let wrapped = LazyStringCast::from_defaults(target);
        let err = wrapped.call(Args::new().kwarg("n", "six")).expect_err("cast error");
        assert!(err.is_value_error());
    }
}
