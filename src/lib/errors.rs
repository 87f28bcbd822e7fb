use std::{io, path::PathBuf, process::ExitCode};

use thiserror::Error;

/// Exit status used for every usage failure.
pub const USAGE_EXIT_CODE: u8 = 2;

/// Usage line printed when the command line does not parse.
pub const USAGE: &str = "Usage: update-env-token-address <env_file> <profile> <forge_output_file> [recap_file] [chain_label]";

/// Caller mistakes detected before any file is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// The command line did not parse. With every slot positional this means
    /// fewer than three or more than five values.
    #[error("{}", USAGE)]
    InvalidArity,
    /// The profile argument is blank after trimming.
    #[error("Profile is empty.")]
    EmptyProfile,
    /// The forge output file does not exist.
    #[error("Forge output file not found: {}", path.display())]
    ForgeOutputNotFound { path: PathBuf },
}

impl UsageError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(USAGE_EXIT_CODE)
    }
}

/// Errors raised while reading or rewriting the managed text files.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
