//! YAML rendering
//!
//! Keys come out sorted (sections and fields live in `BTreeMap`s), so the
//! output is stable and diffs cleanly against a known-good file.

use super::{Config, ConfigSection};
use crate::error::{Error, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// `{section: {field: value, ...}}`
struct SectionDoc<'a>(&'a ConfigSection);

struct FieldsDoc<'a>(&'a ConfigSection);

impl Serialize for SectionDoc<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0.name(), &FieldsDoc(self.0))?;
        map.end()
    }
}

impl Serialize for FieldsDoc<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

pub fn render_section(section: &ConfigSection) -> Result<String> {
    serde_yaml::to_string(&SectionDoc(section)).map_err(Error::Render)
}

/// Every section under a `# Name` banner, separated by two blank lines.
pub fn render_config(config: &Config) -> Result<String> {
    let mut out = String::new();
    for (i, section) in config.sections().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        out.push_str(&format!("#\n# {}\n#\n", banner_title(section.name())));
        out.push_str(&render_section(section)?);
    }
    Ok(out)
}

fn banner_title(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
