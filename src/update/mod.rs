//! Parsing forge output and upserting the env and recap files.
pub mod env_file;
pub mod forge_output;
pub mod newline;
pub mod recap;

pub use env_file::{token_address_key, upsert_env, upsert_env_file, TOKEN_ADDRESS_KEY_PREFIX};
pub use forge_output::{parse_forge_output, ForgeOutput};
pub use newline::LineEnding;
pub use recap::{
    format_timestamp, now_timestamp, upsert_recap, upsert_recap_text, RecapRow, RecapStatus,
    UNKNOWN_CHAIN,
};
