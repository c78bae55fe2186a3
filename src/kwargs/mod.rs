//! Keyword injection and lazy string coercion for callables
//!
//! Functions declare their parameter list up front as a [`Signature`]; the
//! wrappers use it to decide which keywords to inject or coerce.

pub mod cast;
pub mod function;
pub mod lazy;
pub mod signature;
pub mod wraps;

pub use cast::cast_str;
pub use function::{Callable, Function};
pub use lazy::{lazy_string_cast, LazyStringCast};
pub use signature::{Args, BoundArgs, Kwargs, Param, ParamKind, Signature};
pub use wraps::{wraps_kwargs, WrapsKwargs};
