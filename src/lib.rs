//! funconf: YAML-backed configuration sections for function defaults
//!
//! A [`Config`] loads `section: {field: value}` documents into typed fields
//! with per-field dirty tracking. The [`kwargs`] module wraps callables with
//! a declared [`Signature`] so that configuration values are injected as
//! keyword arguments ([`wraps_kwargs`]) and string overrides are coerced to
//! the type of their reference value ([`lazy_string_cast`]).

pub mod config;
pub mod error;
pub mod kwargs;
pub mod value;

pub use config::{Config, ConfigSection, Field};
pub use error::{Error, Result};
pub use kwargs::{
    lazy_string_cast, wraps_kwargs, Args, BoundArgs, Callable, Function, Kwargs, LazyStringCast,
    Signature, WrapsKwargs,
};
pub use value::Value;
