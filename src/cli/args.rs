//! Positional argument definitions and `Invocation` construction.
use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

use super::{
    ensure_forge_output_exists, resolve_chain_label, resolve_profile, resolve_recap_path,
    Invocation,
};
use crate::lib::errors::{UsageError, USAGE};

/// Command-line arguments.
///
/// Every slot takes its value verbatim: values starting with `-` (including
/// `--help`) are positional values, not flags.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "update-env-token-address",
    about = "Record the token address from a forge run into an env file and a recap log",
    override_usage = "update-env-token-address <env_file> <profile> <forge_output_file> [recap_file] [chain_label]",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct UpdateArgs {
    /// Env file receiving `TOKEN_ADDRESS_<profile>=<address>`.
    #[arg(value_name = "ENV_FILE", allow_hyphen_values = true)]
    pub env_file: OsString,
    /// Deployment profile; trimmed and appended to the key verbatim.
    #[arg(value_name = "PROFILE", allow_hyphen_values = true)]
    pub profile: String,
    /// Captured forge output to scan.
    #[arg(value_name = "FORGE_OUTPUT_FILE", allow_hyphen_values = true)]
    pub forge_output: OsString,
    /// Optional tab-separated recap file (blank means none).
    #[arg(value_name = "RECAP_FILE", allow_hyphen_values = true)]
    pub recap_file: Option<String>,
    /// Optional chain label overriding the parsed chain id.
    #[arg(value_name = "CHAIN_LABEL", allow_hyphen_values = true)]
    pub chain_label: Option<String>,
}

impl UpdateArgs {
    /// Validate into an `Invocation`: profile first, then the forge output file.
    pub fn into_invocation(self) -> Result<Invocation, UsageError> {
        let profile = resolve_profile(&self.profile)?;
        let forge_output = PathBuf::from(self.forge_output);
        ensure_forge_output_exists(&forge_output)?;

        Ok(Invocation {
            env_file: PathBuf::from(self.env_file),
            profile,
            forge_output,
            recap_file: resolve_recap_path(self.recap_file),
            chain_label: resolve_chain_label(self.chain_label),
        })
    }
}

/// Parse the full argv (program name included) into an `Invocation`.
///
/// Any clap failure collapses to the usage error.
pub fn parse_command<I, T>(argv: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match UpdateArgs::try_parse_from(argv) {
        Ok(args) => args.into_invocation(),
        Err(err) => {
            tracing::debug!(
                target: "forge_env_sync::cli",
                kind = ?err.kind(),
                usage = USAGE,
                "Rejected command line"
            );
            Err(UsageError::InvalidArity)
        }
    }
}
