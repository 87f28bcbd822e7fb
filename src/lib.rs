//! Library crate root re-exporting the CLI pipeline, update operations, and shared helpers.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod update;
