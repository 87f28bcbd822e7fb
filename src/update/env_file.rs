//! Key-based upsert into a `KEY=VALUE` env file.

use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::info;

use super::newline::{lines_with_ends, LineEnding};
use crate::lib::fs::{read_text_or_empty, write_text};

/// Prefix of the env key that stores a profile's token address.
pub const TOKEN_ADDRESS_KEY_PREFIX: &str = "TOKEN_ADDRESS_";

/// Env key for `profile`, used verbatim.
pub fn token_address_key(profile: &str) -> String {
    format!("{TOKEN_ADDRESS_KEY_PREFIX}{profile}")
}

/// Replace every `key=` line with `key=value`, or append one when none exists.
///
/// Untouched lines keep their original terminators. Rewritten and appended
/// lines use the newline style detected from `existing`. Only a trailing `\n`
/// counts as a terminated last line when appending.
pub fn upsert_env(existing: &str, key: &str, value: &str) -> String {
    let newline = LineEnding::detect(existing).as_str();
    let key_re = key_line_re(key);
    let assignment = format!("{key}={value}{newline}");

    let mut out = String::with_capacity(existing.len() + assignment.len() + newline.len());
    let mut replaced = false;
    for (content, terminator) in lines_with_ends(existing) {
        if key_re.is_match(content) {
            out.push_str(&assignment);
            replaced = true;
        } else {
            out.push_str(content);
            out.push_str(terminator);
        }
    }

    if !replaced {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push_str(newline);
        }
        out.push_str(&assignment);
    }
    out
}

fn key_line_re(key: &str) -> Regex {
    // An escaped literal followed by fixed syntax always compiles.
    Regex::new(&format!(r"^\s*{}\s*=", regex::escape(key))).expect("escaped key pattern is valid")
}

/// Read `path` (missing reads as empty), upsert `key`, and write the result back.
pub fn upsert_env_file(path: &Path, key: &str, value: &str) -> Result<()> {
    let existing = read_text_or_empty(path)
        .with_context(|| format!("failed to load env file {}", path.display()))?;
    let updated = upsert_env(&existing, key, value);
    write_text(path, &updated)
        .with_context(|| format!("failed to update env file {}", path.display()))?;

    info!(
        target: "forge_env_sync::env",
        path = %path.display(),
        key,
        created = existing.is_empty(),
        "Upserted env key"
    );
    Ok(())
}
