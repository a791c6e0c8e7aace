use std::sync::OnceLock;

use regex::{Captures, Regex};
use thiserror::Error;

/// Failure while expanding `{{ env.VAR }}` placeholders
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    /// The variable is unset and the placeholder has no default
    #[error("environment variable not found: `{0}`")]
    MissingVar(String),

    /// The placeholder names something other than `env.<VAR>`
    #[error("only variables scoped with 'env.' are supported: `{0}`")]
    UnsupportedScope(String),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.VAR }}` or `{{ env.VAR | default("fallback") }}`
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    })
}

/// Resolve one placeholder match to its replacement text
fn resolve(captures: &Captures<'_>) -> Result<String, ExpandError> {
    let key = &captures[1];
    let fallback = captures.get(2).map(|m| m.as_str());

    let Some(var_name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        return Err(ExpandError::UnsupportedScope(key.to_owned()));
    };

    match (std::env::var(var_name), fallback) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.to_owned()),
        (Err(_), None) => Err(ExpandError::MissingVar(var_name.to_owned())),
    }
}

/// Expand a single non-comment line
fn expand_line(line: &str) -> Result<String, ExpandError> {
    let mut expanded = String::with_capacity(line.len());
    let mut cursor = 0;

    for captures in placeholder().captures_iter(line) {
        let Some(whole) = captures.get(0) else { continue };
        expanded.push_str(&line[cursor..whole.start()]);
        expanded.push_str(&resolve(&captures)?);
        cursor = whole.end();
    }

    expanded.push_str(&line[cursor..]);
    Ok(expanded)
}

/// Expand `{{ env.VAR }}` placeholders in raw TOML text
///
/// Runs before deserialization so config structs hold plain `String` and
/// `SecretString` values. Comment lines are copied through untouched, which
/// lets a sample config mention variables that are not set.
pub fn expand_env(input: &str) -> Result<String, ExpandError> {
    let lines = input
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                Ok(line.to_owned())
            } else {
                expand_line(line)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut output = lines.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
