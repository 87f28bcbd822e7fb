//! Extraction of the deployed token address and chain id from forge output.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::newline::split_lines;

const TOKEN_ADDRESS_PATTERN: &str = r"^\s*Token Address:\s*(0x[a-fA-F0-9]{40})\s*$";
const CHAIN_ID_PATTERN: &str = r"^\s*Chain\s+(\d+)\s*$";

/// Values captured from one forge run. Later lines win for each field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgeOutput {
    pub token_address: Option<String>,
    pub chain_id: Option<String>,
}

fn token_address_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TOKEN_ADDRESS_PATTERN).expect("token address pattern is valid"))
}

fn chain_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CHAIN_ID_PATTERN).expect("chain id pattern is valid"))
}

/// Scan every line of `text`. Both patterns are tried on each line independently.
pub fn parse_forge_output(text: &str) -> ForgeOutput {
    let mut parsed = ForgeOutput::default();
    for line in split_lines(text) {
        if let Some(address) = capture_first(token_address_re(), line) {
            parsed.token_address = Some(address);
        }
        if let Some(chain) = capture_first(chain_id_re(), line) {
            parsed.chain_id = Some(chain);
        }
    }

    debug!(
        target: "forge_env_sync::parse",
        token_address = parsed.token_address.as_deref().unwrap_or(""),
        chain_id = parsed.chain_id.as_deref().unwrap_or(""),
        "Scanned forge output"
    );
    parsed
}

fn capture_first(re: &Regex, line: &str) -> Option<String> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
