//! Shared CLI utilities.

/// Parse a `name=value` override. Used as a clap value parser.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) =
        raw.split_once('=').ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_assignment;

    #[test]
    fn splits_on_first_equals() {
        assert_eq!(
            parse_assignment("aaa.list= 1 2=3").expect("parse"),
            ("aaa.list".to_string(), " 1 2=3".to_string())
        );
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=4").is_err());
    }
}
