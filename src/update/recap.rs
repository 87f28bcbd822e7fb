//! Tab-separated deployment history keyed by `(chain, profile)`.
//!
//! Row layout: `timestamp \t chain \t profile \t address`.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use super::newline::{split_lines, LineEnding};
use crate::lib::fs::{ensure_parent_dir, read_text_or_empty, write_text};

/// Chain value recorded when neither a label nor a parsed chain id is available.
pub const UNKNOWN_CHAIN: &str = "unknown";

/// Whether an upsert overwrote an existing row or added a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecapStatus {
    Replaced,
    Appended,
}

impl RecapStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RecapStatus::Replaced => "replaced",
            RecapStatus::Appended => "appended",
        }
    }
}

/// One history row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecapRow<'a> {
    pub timestamp: &'a str,
    pub chain: &'a str,
    pub profile: &'a str,
    pub address: &'a str,
}

impl RecapRow<'_> {
    fn render(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.timestamp, self.chain, self.profile, self.address
        )
    }

    fn match_prefix(&self) -> String {
        format!("\t{}\t{}\t", self.chain, self.profile)
    }

    /// A stored row belongs to this `(chain, profile)` pair when it starts with
    /// `prefix` (see [`Self::match_prefix`]) or its second and third fields equal them.
    fn matches(&self, line: &str, prefix: &str) -> bool {
        if line.starts_with(prefix) {
            return true;
        }
        let mut fields = line.split('\t').skip(1);
        fields.next() == Some(self.chain) && fields.next() == Some(self.profile)
    }
}

/// UTC timestamp with second precision and an explicit `+00:00` offset.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Timestamp for the current moment.
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Rewrite recap text with `row` upserted.
///
/// Blank lines are dropped. Only the first matching row is replaced; later
/// rows for the same pair are left in place.
pub fn upsert_recap_text(existing: &str, row: &RecapRow<'_>) -> (String, RecapStatus) {
    let newline = LineEnding::detect(existing).as_str();
    let rendered = row.render();
    let prefix = row.match_prefix();

    let mut status = RecapStatus::Appended;
    let mut lines: Vec<&str> = Vec::new();
    for line in split_lines(existing).filter(|l| !l.trim().is_empty()) {
        if status == RecapStatus::Appended && row.matches(line, &prefix) {
            lines.push(&rendered);
            status = RecapStatus::Replaced;
        } else {
            lines.push(line);
        }
    }
    if status == RecapStatus::Appended {
        lines.push(&rendered);
    }

    let mut out = lines.join(newline);
    out.push_str(newline);
    (out, status)
}

/// Upsert a row into the recap file at `path`, creating its directory if needed.
pub fn upsert_recap(
    path: &Path,
    chain: &str,
    profile: &str,
    address: &str,
    timestamp: &str,
) -> Result<RecapStatus> {
    ensure_parent_dir(path)
        .with_context(|| format!("failed to prepare recap directory for {}", path.display()))?;
    let existing = read_text_or_empty(path)
        .with_context(|| format!("failed to load recap file {}", path.display()))?;

    let row = RecapRow {
        timestamp,
        chain,
        profile,
        address,
    };
    let (updated, status) = upsert_recap_text(&existing, &row);
    write_text(path, &updated)
        .with_context(|| format!("failed to update recap file {}", path.display()))?;

    info!(
        target: "forge_env_sync::recap",
        path = %path.display(),
        chain,
        profile,
        status = status.as_str(),
        "Upserted recap row"
    );
    Ok(status)
}
