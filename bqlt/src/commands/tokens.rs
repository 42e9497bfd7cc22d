//! Tokens command implementation.
//!
//! Lexes one source file and prints its token stream.

use std::io::Write;
use std::path::PathBuf;

use bql_lex::{tokenize_with, LexOptions};
use tracing::debug;

use crate::commands::common::{read_source, text_row, OutputFormat, TokenRecord};
use crate::commands::traits::Command;
use crate::error::{BqltError, Result};

/// Arguments for the tokens command, after merging flags with config.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source file to lex.
    pub path: PathBuf,
    /// Listing format.
    pub format: OutputFormat,
    /// Lexer options.
    pub options: LexOptions,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    /// Number of tokens listed.
    type Output = usize;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute<W: Write>(&self, out: &mut W) -> Result<Self::Output> {
        let path = &self.args.path;
        let source = read_source(path)?;
        let tokens = tokenize_with(&source, self.args.options).map_err(|err| BqltError::Lex {
            path: path.clone(),
            source: err,
        })?;

        match self.args.format {
            OutputFormat::Text => {
                for token in &tokens {
                    writeln!(out, "{}", text_row(token))?;
                }
            },
            OutputFormat::Json => {
                let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from).collect();
                serde_json::to_writer_pretty(&mut *out, &records)?;
                writeln!(out)?;
            },
        }

        debug!(
            command = Self::name(),
            path = %path.display(),
            tokens = tokens.len(),
            "listed tokens"
        );
        Ok(tokens.len())
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command against stdout.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let command = TokensCommand::new(args);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    command.execute(&mut out)?;
    Ok(())
}
