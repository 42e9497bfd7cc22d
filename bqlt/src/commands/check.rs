//! Check command implementation.
//!
//! Lexes each file and reports the first lexical error in each one.

use std::io::Write;
use std::path::PathBuf;

use bql_lex::{tokenize_with, LexOptions};
use tracing::{debug, info};

use crate::commands::common::{diagnostic, read_source};
use crate::commands::traits::Command;
use crate::error::{BqltError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to check.
    pub paths: Vec<PathBuf>,
    /// Lexer options.
    pub options: LexOptions,
}

/// Outcome of a check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Files examined.
    pub checked: usize,
    /// Files that could not be read or failed to lex.
    pub failed: usize,
}

impl CheckReport {
    /// True if every file lexed cleanly.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckReport;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute<W: Write>(&self, out: &mut W) -> Result<Self::Output> {
        let mut report = CheckReport::default();

        for path in &self.args.paths {
            report.checked += 1;

            let source = match read_source(path) {
                Ok(source) => source,
                Err(err) => {
                    writeln!(out, "{}", err)?;
                    report.failed += 1;
                    continue;
                },
            };

            match tokenize_with(&source, self.args.options) {
                Ok(tokens) => {
                    debug!(path = %path.display(), tokens = tokens.len(), "lexed cleanly");
                },
                Err(err) => {
                    writeln!(out, "{}", diagnostic(path, &err))?;
                    report.failed += 1;
                },
            }
        }

        info!(
            command = Self::name(),
            checked = report.checked,
            failed = report.failed,
            "check finished"
        );
        Ok(report)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command, printing diagnostics to stdout.
///
/// Fails if any file failed.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let command = CheckCommand::new(args);
    let stdout = std::io::stdout();
    let report = command.execute(&mut stdout.lock())?;

    if report.is_clean() {
        Ok(())
    } else {
        Err(BqltError::Validation(format!(
            "{} of {} file(s) failed lexical check",
            report.failed, report.checked
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bql_lex::LineTerminator;
    use tempfile::TempDir;

    fn check(paths: Vec<PathBuf>) -> (CheckReport, String) {
        let args = CheckArgs {
            paths,
            options: LexOptions::new().line_terminator(LineTerminator::Lf),
        };
        let mut out = Vec::new();
        let report = CheckCommand::new(args).execute(&mut out).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_clean_files() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.bql");
        let b = dir.path().join("b.bql");
        std::fs::write(&a, "SELECT name WHERE age >= 18").unwrap();
        std::fs::write(&b, "VAR limit = 10\nFIRST limit").unwrap();

        let (report, out) = check(vec![a, b]);
        assert_eq!(report, CheckReport { checked: 2, failed: 0 });
        assert!(report.is_clean());
        assert!(out.is_empty());
    }

    #[test]
    fn test_reports_first_error_per_file() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.bql");
        std::fs::write(&bad, "WHERE a\nAND b | c & d").unwrap();

        let (report, out) = check(vec![bad.clone()]);
        assert_eq!(report.failed, 1);
        assert_eq!(
            out,
            format!("{}:2:7: unexpected character '|'\n", bad.display())
        );
    }

    #[test]
    fn test_continues_after_failure() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.bql");
        let good = dir.path().join("good.bql");
        std::fs::write(&good, "MATCH x").unwrap();

        let (report, out) = check(vec![missing, good]);
        assert_eq!(report, CheckReport { checked: 2, failed: 1 });
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("missing.bql"));
    }

    #[test]
    fn test_check_command_name() {
        assert_eq!(CheckCommand::name(), "check");
    }
}
