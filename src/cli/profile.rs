//! `Invocation` and the resolution of raw positional values.
use std::path::{Path, PathBuf};

use crate::lib::errors::UsageError;
use crate::update::{token_address_key, UNKNOWN_CHAIN};

/// Fully resolved inputs for one update run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub env_file: PathBuf,
    pub profile: String,
    pub forge_output: PathBuf,
    pub recap_file: Option<PathBuf>,
    pub chain_label: String,
}

impl Invocation {
    /// Env key holding this profile's token address.
    pub fn env_key(&self) -> String {
        token_address_key(&self.profile)
    }

    /// Chain recorded in the recap: explicit label, then parsed id, then `unknown`.
    pub fn effective_chain(&self, parsed_chain_id: Option<&str>) -> String {
        resolve_chain(&self.chain_label, parsed_chain_id)
    }
}

/// Trim the profile and reject it when nothing is left.
pub fn resolve_profile(raw: &str) -> Result<String, UsageError> {
    let profile = raw.trim();
    if profile.is_empty() {
        return Err(UsageError::EmptyProfile);
    }
    Ok(profile.to_string())
}

/// A blank recap argument counts as absent. The path itself is used untrimmed.
pub fn resolve_recap_path(raw: Option<String>) -> Option<PathBuf> {
    raw.filter(|value| !value.trim().is_empty()).map(PathBuf::from)
}

pub fn resolve_chain_label(raw: Option<String>) -> String {
    raw.map(|value| value.trim().to_string()).unwrap_or_default()
}

pub fn resolve_chain(label: &str, parsed_chain_id: Option<&str>) -> String {
    if !label.is_empty() {
        return label.to_string();
    }
    parsed_chain_id.unwrap_or(UNKNOWN_CHAIN).to_string()
}

/// The forge output file must exist before anything else is read.
pub fn ensure_forge_output_exists(path: &Path) -> Result<(), UsageError> {
    if path.exists() {
        return Ok(());
    }
    Err(UsageError::ForgeOutputNotFound {
        path: path.to_path_buf(),
    })
}
