//! CLI entrypoint module structure and the update pipeline.
use std::process::ExitCode;

use anyhow::{Context, Error, Result};
use tracing::info;

use crate::lib::{
    errors::UsageError,
    fs::read_text_lossy,
    telemetry::{emit_update, UpdateTelemetry},
};
use crate::update::{
    now_timestamp, parse_forge_output, upsert_env_file, upsert_recap, RecapStatus,
};

pub mod args;
pub mod profile;

pub use args::{parse_command, UpdateArgs};
pub use profile::{
    ensure_forge_output_exists, resolve_chain, resolve_chain_label, resolve_profile,
    resolve_recap_path, Invocation,
};

/// What a run did to the managed files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The forge output carried no token address; nothing was written.
    NoTokenAddress,
    Updated {
        key: String,
        address: String,
        chain: String,
        recap: Option<RecapStatus>,
    },
}

/// Run the parse → env upsert → recap upsert pipeline for one invocation.
pub fn run(invocation: &Invocation) -> Result<UpdateOutcome> {
    let text = read_text_lossy(&invocation.forge_output).with_context(|| {
        format!(
            "failed to read forge output {}",
            invocation.forge_output.display()
        )
    })?;
    let parsed = parse_forge_output(&text);

    let Some(address) = parsed.token_address else {
        info!(
            target: "forge_env_sync::cli",
            forge_output = %invocation.forge_output.display(),
            "No token address in forge output; nothing to update"
        );
        return Ok(UpdateOutcome::NoTokenAddress);
    };

    let key = invocation.env_key();
    upsert_env_file(&invocation.env_file, &key, &address)?;

    let chain = invocation.effective_chain(parsed.chain_id.as_deref());
    let recap = match &invocation.recap_file {
        Some(path) => Some(upsert_recap(
            path,
            &chain,
            &invocation.profile,
            &address,
            &now_timestamp(),
        )?),
        None => None,
    };

    emit_update(&UpdateTelemetry {
        env_file: &invocation.env_file,
        key: &key,
        address: &address,
        chain: &chain,
        recap_file: invocation.recap_file.as_deref(),
        recap_status: recap.map(|status| status.as_str()),
    });

    Ok(UpdateOutcome::Updated {
        key,
        address,
        chain,
        recap,
    })
}

/// Terminal failure carrying the message for stderr and the exit status.
#[derive(Debug)]
pub struct CliExit {
    message: String,
    exit_code: ExitCode,
}

impl CliExit {
    pub fn from_usage(err: UsageError) -> Self {
        Self {
            message: err.to_string(),
            exit_code: err.exit_code(),
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }
}
