//! Configuration object model
//!
//! A [`Config`] holds named [`ConfigSection`]s, each an ordered set of typed
//! fields. Sources are YAML documents whose top-level keys are section names.
//! Several sources merge into one view; later writes win.
//!
//! Lookups never invent names: reading something that does not exist is an
//! [`Error::UnknownAttribute`], plain assignment only updates existing fields,
//! and nothing can be deleted.

pub mod loader;
pub mod render;
pub mod section;

pub use section::{ConfigSection, Field};

use crate::error::{Error, Result};
use crate::kwargs::{cast_str, wraps_kwargs, Callable, Kwargs, WrapsKwargs};
use crate::value::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const OWNER: &str = "config";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    sections: BTreeMap<String, ConfigSection>,
    /// `section_field` keys of the flattened keyword view.
    lookup: BTreeMap<String, (String, String)>,
}

impl Config {
    /// An empty config with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from a list of candidate files. See [`Config::read`].
    pub fn from_paths<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut config = Self::new();
        config.read(paths)?;
        Ok(config)
    }

    /// Read and merge each file in order.
    ///
    /// Files that cannot be opened are skipped, so a list of potential
    /// locations (project, user, system) can be given and every existing one
    /// is loaded. Returns the files that were read.
    pub fn read<I, P>(&mut self, paths: I) -> Result<Vec<PathBuf>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut read_ok = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let Some(content) = loader::read_source(path) else {
                continue;
            };
            self.load_str(&content, &path.display().to_string())?;
            read_ok.push(path.to_path_buf());
        }
        Ok(read_ok)
    }

    /// Parse one document from `reader` into this config.
    pub fn load<R: Read>(&mut self, mut reader: R, origin: &str) -> Result<()> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|source| Error::Io { origin: origin.to_string(), source })?;
        self.load_str(&content, origin)
    }

    /// Parse one document into this config. `origin` labels errors.
    pub fn load_str(&mut self, content: &str, origin: &str) -> Result<()> {
        let parsed = loader::parse_document(content, origin)?;
        // Reject the whole document before merging any of it.
        for (section, fields) in &parsed {
            validate_section_name(section)?;
            for (field, _) in fields {
                validate_field_name(field)?;
            }
        }
        tracing::debug!("Loaded {} sections from {}", parsed.len(), origin);
        for (section, fields) in parsed {
            self.ensure_section(&section);
            for (field, value) in fields {
                self.set(&section, &field, value)?;
            }
        }
        Ok(())
    }

    /// Create or overwrite `section.field`, creating the section if needed.
    pub fn set(&mut self, section: &str, field: &str, value: impl Into<Value>) -> Result<()> {
        validate_section_name(section)?;
        validate_field_name(field)?;
        self.lookup
            .insert(format!("{section}_{field}"), (section.to_string(), field.to_string()));
        self.ensure_section(section).upsert(field.to_string(), value.into());
        Ok(())
    }

    fn ensure_section(&mut self, name: &str) -> &mut ConfigSection {
        self.sections
            .entry(name.to_string())
            .or_insert_with(|| ConfigSection::new(name.to_string()))
    }

    pub fn section(&self, name: &str) -> Result<&ConfigSection> {
        self.sections.get(name).ok_or_else(|| unknown(name))
    }

    pub fn section_mut(&mut self, name: &str) -> Result<&mut ConfigSection> {
        self.sections.get_mut(name).ok_or_else(|| unknown(name))
    }

    pub fn has(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    pub fn sections(&self) -> impl Iterator<Item = &ConfigSection> {
        self.sections.values()
    }

    /// Value at a dotted `section.field` path. The path splits at the first
    /// dot, so field names may contain dots. Use [`Config::section`] for a
    /// whole section.
    pub fn get(&self, path: &str) -> Result<&Value> {
        match path.split_once('.') {
            Some((section, field)) => self.section(section)?.get(field),
            None if self.has(path) => Err(Error::NotAFieldPath(path.to_string())),
            None => Err(unknown(path)),
        }
    }

    /// Update the existing field at `section.field`.
    ///
    /// A name without a dot addresses a section; sections are never created
    /// or replaced by assignment.
    pub fn assign(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        match path.split_once('.') {
            Some((section, field)) => self.section_mut(section)?.assign(field, value),
            None if self.has(path) => {
                Err(Error::NotImplemented { operation: "replacing a config section" })
            }
            None => Err(Error::CannotCreate { owner: OWNER.to_string(), name: path.to_string() }),
        }
    }

    /// Like [`Config::assign`] with `text` coerced to the field's current type.
    pub fn assign_str(&mut self, path: &str, text: &str) -> Result<()> {
        match path.split_once('.') {
            Some((section, field)) => self.section_mut(section)?.assign_str(field, text),
            None => self.assign(path, text),
        }
    }

    pub fn remove(&mut self, section: &str) -> Result<()> {
        tracing::debug!("refusing to delete section {}", section);
        Err(Error::NotImplemented { operation: "deleting a config section" })
    }

    /// Value by flattened `section_field` key.
    pub fn get_flat(&self, key: &str) -> Result<&Value> {
        let (section, field) = self.lookup.get(key).ok_or_else(|| unknown(key))?;
        self.section(section)?.get(field)
    }

    pub fn assign_flat(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        let (section, field) = self.lookup.get(key).cloned().ok_or_else(|| unknown(key))?;
        self.section_mut(&section)?.assign(&field, value)
    }

    /// Every field keyed `section_field`, ready to inject as keyword
    /// arguments.
    pub fn kwargs(&self) -> Kwargs {
        self.lookup
            .iter()
            .filter_map(|(key, (section, field))| {
                self.sections
                    .get(section)
                    .and_then(|s| s.get(field).ok())
                    .map(|value| (key.clone(), value.clone()))
            })
            .collect()
    }

    pub fn wraps<C: Callable>(&self, inner: C) -> WrapsKwargs<C> {
        wraps_kwargs(self.kwargs(), inner)
    }

    /// Total number of fields across all sections.
    pub fn len(&self) -> usize {
        self.sections.values().map(ConfigSection::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn to_yaml(&self) -> Result<String> {
        render::render_config(self)
    }

    /// Coerce `text` against the current value at `section.field` without
    /// storing it.
    pub fn coerce(&self, path: &str, text: &str) -> Result<Value> {
        cast_str(path, self.get(path)?, text)
    }
}

fn unknown(name: &str) -> Error {
    Error::UnknownAttribute { owner: OWNER.to_string(), name: name.to_string() }
}

/// Section names end at the first dot of a `section.field` path.
fn validate_section_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('.') {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

fn validate_field_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(content: &str) -> Result<Self> {
        let mut config = Self::new();
        config.load_str(content, "<string>")?;
        Ok(config)
    }
}

/// Rendering our own `Value` tree does not fail in practice; prefer
/// [`Config::to_yaml`] where the error matters.
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_yaml().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
