//! Config sections and their fields

use super::render;
use crate::error::{Error, Result};
use crate::kwargs::{cast_str, wraps_kwargs, Callable, Kwargs, WrapsKwargs};
use crate::value::Value;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;

/// A single named value with an edge-triggered dirty flag.
#[derive(Debug, Clone)]
pub struct Field {
    value: Value,
    dirty: Cell<bool>,
}

impl Field {
    fn new(value: Value) -> Self {
        Self { value, dirty: Cell::new(true) }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// True once after each write; reading clears the flag.
    pub fn dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    fn set(&mut self, value: Value) {
        self.value = value;
        self.dirty.set(true);
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// One named group of fields. Fields are created by [`Config::set`] or while
/// parsing, and never removed.
///
/// [`Config::set`]: super::Config::set
#[derive(Debug, Clone)]
pub struct ConfigSection {
    name: String,
    fields: BTreeMap<String, Field>,
    dirty: Cell<bool>,
}

impl ConfigSection {
    pub(crate) fn new(name: String) -> Self {
        Self { name, fields: BTreeMap::new(), dirty: Cell::new(true) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, field: &str) -> Result<&Value> {
        self.field(field).map(Field::value)
    }

    pub fn field(&self, field: &str) -> Result<&Field> {
        self.fields.get(field).ok_or_else(|| Error::UnknownAttribute {
            owner: self.name.clone(),
            name: field.to_string(),
        })
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Update an existing field. New fields can only be added through
    /// [`Config::set`](super::Config::set).
    pub fn assign(&mut self, field: &str, value: impl Into<Value>) -> Result<()> {
        let Some(slot) = self.fields.get_mut(field) else {
            return Err(Error::CannotCreate { owner: self.name.clone(), name: field.to_string() });
        };
        slot.set(value.into());
        self.dirty.set(true);
        Ok(())
    }

    /// Update an existing field from text, coerced to the field's current type.
    pub fn assign_str(&mut self, field: &str, text: &str) -> Result<()> {
        let current = match self.fields.get(field) {
            Some(slot) => slot.value(),
            None => {
                return Err(Error::CannotCreate {
                    owner: self.name.clone(),
                    name: field.to_string(),
                })
            }
        };
        let value = cast_str(field, current, text)?;
        self.assign(field, value)
    }

    pub(crate) fn upsert(&mut self, field: String, value: Value) {
        match self.fields.get_mut(&field) {
            Some(slot) => slot.set(value),
            None => {
                self.fields.insert(field, Field::new(value));
            }
        }
        self.dirty.set(true);
    }

    pub fn remove(&mut self, field: &str) -> Result<()> {
        tracing::debug!("refusing to delete {}.{}", self.name, field);
        Err(Error::NotImplemented { operation: "deleting a config field" })
    }

    /// Section-wide flag: true once after any write to the section.
    pub fn dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Read-and-clear the dirty flag of one field.
    pub fn is_dirty(&self, field: &str) -> Result<bool> {
        self.field(field).map(Field::dirty)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field.value()))
    }

    /// Field values keyed by field name.
    pub fn kwargs(&self) -> Kwargs {
        self.iter().map(|(name, value)| (name.to_string(), value.clone())).collect()
    }

    pub fn wraps<C: Callable>(&self, inner: C) -> WrapsKwargs<C> {
        wraps_kwargs(self.kwargs(), inner)
    }

    pub fn to_yaml(&self) -> Result<String> {
        render::render_section(self)
    }
}

impl PartialEq for ConfigSection {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.fields == other.fields
    }
}

/// See the `Display` impl on [`Config`](super::Config); use `to_yaml` where
/// the error matters.
impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_yaml().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> ConfigSection {
        let mut s = ConfigSection::new("foo".to_string());
        s.upsert("bar".to_string(), Value::Bool(false));
        s
    }

    #[test]
    fn field_dirty_is_edge_triggered() {
        let mut s = section();
        assert!(s.is_dirty("bar").expect("field"));
        assert!(!s.is_dirty("bar").expect("field"));
        s.assign("bar", true).expect("assign");
        assert!(s.is_dirty("bar").expect("field"));
        assert!(!s.is_dirty("bar").expect("field"));
    }

    #[test]
    fn assign_to_unknown_field_fails() {
        let mut s = section();
        assert!(matches!(s.assign("blah", 4), Err(Error::CannotCreate { .. })));
        assert!(!s.has("blah"));
    }

    #[test]
    fn assign_str_uses_current_type() {
        let mut s = section();
        s.assign_str("bar", "yes").expect("assign");
        assert_eq!(s.get("bar").expect("bar"), &Value::Bool(true));
        assert!(s.assign_str("bar", "maybe").expect_err("bad bool").is_value_error());
        assert_eq!(s.get("bar").expect("bar"), &Value::Bool(true));
    }

    #[test]
    fn remove_is_not_implemented() {
        let mut s = section();
        assert!(s.remove("bar").expect_err("remove").is_not_implemented());
        assert_eq!(s.len(), 1);
    }
}
