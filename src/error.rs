//! Error types shared by the config object model and the keyword wrappers

use thiserror::Error;

/// Errors raised by [`Config`](crate::Config), its sections and the
/// keyword-injection wrappers.
#[derive(Debug, Error)]
pub enum Error {
    /// A section or field that does not exist was read.
    #[error("{name} not defined in {owner}")]
    UnknownAttribute { owner: String, name: String },

    /// Plain assignment may only update names that already exist.
    #[error("can not set new attribute '{name}' in {owner}")]
    CannotCreate { owner: String, name: String },

    /// A bare section name was given where `section.field` is needed.
    #[error("'{0}' is a section; expected a section.field path")]
    NotAFieldPath(String),

    #[error("{operation} is not implemented")]
    NotImplemented { operation: &'static str },

    #[error("invalid name '{0}': names must be non-empty, section names contain no '.'")]
    InvalidName(String),

    #[error("failed to parse YAML from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("expected a mapping of sections in {origin}, found {found}")]
    NotAMapping { origin: String, found: &'static str },

    #[error("IO error when reading {origin}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render YAML")]
    Render(#[source] serde_yaml::Error),

    /// A string could not be coerced to the type of its reference value.
    #[error("invalid {expected} value for '{name}': {input:?}")]
    Cast { name: String, input: String, expected: &'static str },

    #[error("missing required argument '{0}'")]
    MissingArgument(String),

    #[error("got an unexpected keyword argument '{0}'")]
    UnexpectedKeyword(String),

    #[error("got multiple values for argument '{0}'")]
    DuplicateArgument(String),

    #[error("takes {expected} positional arguments but {given} were given")]
    TooManyPositional { expected: usize, given: usize },
}

impl Error {
    /// True for the dedicated unknown-attribute kind.
    pub fn is_unknown_attribute(&self) -> bool {
        matches!(self, Error::UnknownAttribute { .. })
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Error::NotImplemented { .. })
    }

    /// True when a string failed to coerce against its reference type.
    pub fn is_value_error(&self) -> bool {
        matches!(self, Error::Cast { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
