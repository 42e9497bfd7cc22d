//! Command modules for the bqlt CLI.
//!
//! Each subcommand is implemented in its own file on top of the shared
//! [`traits::Command`] trait.

pub mod common;
pub mod traits;

pub mod check;
pub mod tokens;

pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
