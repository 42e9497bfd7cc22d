//! Common types and utilities for bqlt commands.
//!
//! Settings shared between the command line and `bqlt.toml`, source file
//! loading, and the token and diagnostic renderings both commands print.

use std::path::Path;

use bql_lex::{LexError, LexOptions, LineTerminator, Token};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{BqltError, Result};

// ============================================================================
// Settings
// ============================================================================

/// How token listings are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `line kind lexeme` row per token.
    #[default]
    Text,
    /// A JSON array of token records.
    Json,
}

/// Line terminator used to split source files into lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TerminatorSetting {
    /// `\n`
    Lf,
    /// `\r\n`
    Crlf,
    /// Whatever the host platform uses.
    #[default]
    Platform,
}

impl TerminatorSetting {
    /// Resolves the setting to a concrete terminator.
    pub fn resolve(self) -> LineTerminator {
        match self {
            Self::Lf => LineTerminator::Lf,
            Self::Crlf => LineTerminator::CrLf,
            Self::Platform => LineTerminator::platform(),
        }
    }
}

/// Builds lexer options from resolved settings.
pub fn lex_options(terminator: TerminatorSetting, skip_trivia: bool) -> LexOptions {
    LexOptions::new()
        .line_terminator(terminator.resolve())
        .skip_trivia(skip_trivia)
}

// ============================================================================
// Sources
// ============================================================================

/// Reads a query source file.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(BqltError::FileOperation(format!(
            "{}: not a readable file",
            path.display()
        )));
    }
    std::fs::read_to_string(path)
        .map_err(|e| BqltError::FileOperation(format!("{}: {}", path.display(), e)))
}

// ============================================================================
// Rendering
// ============================================================================

/// Serializable view of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Kind name, e.g. `"GreaterOrEqual"`.
    pub kind: &'static str,
    /// Matched text; empty for trivia and operators.
    pub lexeme: String,
    /// Line (1-based).
    pub line: u32,
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind().name(),
            lexeme: token.lexeme().to_string(),
            line: token.line(),
        }
    }
}

/// Renders a token as a `line kind lexeme` row.
pub fn text_row(token: &Token) -> String {
    if token.lexeme().is_empty() {
        format!("{} {}", token.line(), token.kind().name())
    } else {
        format!("{} {} {}", token.line(), token.kind().name(), token.lexeme())
    }
}

/// Renders a lexical error as a `path:line:column: message` diagnostic.
pub fn diagnostic(path: &Path, error: &LexError) -> String {
    match error {
        LexError::UnexpectedChar { line, column, ch } => format!(
            "{}:{}:{}: unexpected character '{}'",
            path.display(),
            line,
            column,
            ch
        ),
        other => format!("{}:{}: {}", path.display(), other.line(), other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bql_lex::{tokenize_with, TokenKind};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn lex(source: &str) -> Vec<Token> {
        tokenize_with(source, lex_options(TerminatorSetting::Lf, true)).unwrap()
    }

    #[test]
    fn test_terminator_resolution() {
        assert_eq!(TerminatorSetting::Lf.resolve(), LineTerminator::Lf);
        assert_eq!(TerminatorSetting::Crlf.resolve(), LineTerminator::CrLf);
        assert_eq!(TerminatorSetting::Platform.resolve(), LineTerminator::platform());
    }

    #[test]
    fn test_lex_options_applied() {
        let options = lex_options(TerminatorSetting::Crlf, true);
        assert_eq!(options, LexOptions::new().line_terminator(LineTerminator::CrLf).skip_trivia(true));
    }

    #[test]
    fn test_text_rows() {
        let tokens = lex("where x >= 10");
        let rows: Vec<_> = tokens.iter().map(text_row).collect();
        assert_eq!(
            rows,
            ["1 Where where", "1 Identifier x", "1 GreaterOrEqual", "1 IntegerLiteral 10"]
        );
    }

    #[test]
    fn test_token_record_json() {
        let tokens = lex("VAR n");
        let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from).collect();
        assert_eq!(records[0].kind, TokenKind::Var.name());
        let json = serde_json::to_string(&records).unwrap();
        assert_eq!(
            json,
            r#"[{"kind":"Var","lexeme":"VAR","line":1},{"kind":"Identifier","lexeme":"n","line":1}]"#
        );
    }

    #[test]
    fn test_diagnostic_unexpected_char() {
        let err = LexError::UnexpectedChar {
            line: 3,
            column: 9,
            ch: '|',
        };
        assert_eq!(
            diagnostic(&PathBuf::from("q.bql"), &err),
            "q.bql:3:9: unexpected character '|'"
        );
    }

    #[test]
    fn test_read_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("q.bql");
        std::fs::write(&path, "SELECT a").unwrap();
        assert_eq!(read_source(&path).unwrap(), "SELECT a");
    }

    #[test]
    fn test_read_source_missing() {
        let dir = TempDir::new().unwrap();
        let result = read_source(&dir.path().join("absent.bql"));
        assert!(matches!(result, Err(BqltError::FileOperation(_))));
    }

    #[test]
    fn test_settings_deserialize_lowercase() {
        #[derive(Deserialize)]
        struct Probe {
            format: OutputFormat,
            terminator: TerminatorSetting,
        }
        let probe: Probe = toml::from_str("format = \"json\"\nterminator = \"crlf\"").unwrap();
        assert_eq!(probe.format, OutputFormat::Json);
        assert_eq!(probe.terminator, TerminatorSetting::Crlf);
    }
}
