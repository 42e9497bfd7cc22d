//! Command trait for the bqlt CLI.

use std::io::Write;

use crate::error::Result;

/// Standard command trait that all bqlt commands implement.
///
/// Commands write their listing to a caller-supplied writer so they can be
/// run against stdout or an in-memory buffer alike.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command, writing its report to `out`.
    fn execute<W: Write>(&self, out: &mut W) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
