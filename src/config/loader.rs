//! Config source reading and document parsing

use crate::error::{Error, Result};
use crate::value::{yaml_key_to_string, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// A section as found in one document, fields in document order.
pub(crate) type ParsedSection = (String, Vec<(String, Value)>);

/// Read a source file. Missing or unreadable files yield `None` so callers can
/// list optional override locations.
pub(crate) fn read_source(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("Skipping missing config source {}", path.display());
            None
        }
        Err(e) => {
            tracing::warn!("Skipping unreadable config source {}: {}", path.display(), e);
            None
        }
    }
}

/// Parse a YAML document whose top-level keys are section names.
pub(crate) fn parse_document(content: &str, origin: &str) -> Result<Vec<ParsedSection>> {
    if is_blank(content) {
        return Ok(Vec::new());
    }

    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|source| Error::Parse { origin: origin.to_string(), source })?;

    let mapping = match raw {
        serde_yaml::Value::Null => return Ok(Vec::new()),
        serde_yaml::Value::Mapping(mapping) => mapping,
        other => {
            return Err(Error::NotAMapping { origin: origin.to_string(), found: kind_of(&other) })
        }
    };

    let mut sections = Vec::with_capacity(mapping.len());
    for (key, body) in mapping {
        let name = yaml_key_to_string(key);
        let fields = match body {
            serde_yaml::Value::Mapping(fields) => fields
                .into_iter()
                .map(|(k, v)| (yaml_key_to_string(k), Value::from(v)))
                .collect(),
            serde_yaml::Value::Null => Vec::new(),
            other => {
                // A bare scalar under a section name carries no fields.
                tracing::debug!(
                    "Section '{}' in {} holds a {} instead of fields; treating it as empty",
                    name,
                    origin,
                    kind_of(&other)
                );
                Vec::new()
            }
        };
        sections.push((name, fields));
    }
    Ok(sections)
}

/// Empty or comment-only input.
fn is_blank(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn kind_of(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_source_is_skipped() {
        let tmp = TempDir::new().expect("tmp");
        assert!(read_source(&tmp.path().join("blaoo.con")).is_none());
    }

    #[test]
    fn test_existing_source_is_read() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("my.conf");
        fs::write(&path, "foo:\n  bar: 4\n").expect("write");
        assert_eq!(read_source(&path).as_deref(), Some("foo:\n  bar: 4\n"));
    }

    #[test]
    fn test_comment_only_document_is_empty() {
        let parsed = parse_document("#\n# nothing here\n#\n\n", "inline").expect("parse");
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_fields_keep_document_order() {
        let parsed = parse_document("s:\n  z: 1\n  a: 2\n", "inline").expect("parse");
        let (name, fields) = &parsed[0];
        assert_eq!(name, "s");
        let names: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
    }

    #[test]
    fn test_bare_scalar_section_has_no_fields() {
        let parsed = parse_document("empty: 1", "inline").expect("parse");
        assert_eq!(parsed, vec![("empty".to_string(), Vec::new())]);
    }

    #[test]
    fn test_broken_yaml_is_a_parse_error() {
        let err = parse_document("`empty:a df asd Z X324!~ 1", "inline").expect_err("broken");
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_top_level_list_is_rejected() {
        let err = parse_document("- a\n- b\n", "inline").expect_err("list");
        assert!(matches!(err, Error::NotAMapping { found: "sequence", .. }));
    }
}
