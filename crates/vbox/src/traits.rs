use futures_util::future::BoxFuture;

use crate::error::Result;
use crate::types::Captured;

/// Runs the external virtualization tool.
///
/// Implementations block the caller until the tool exits. Neither method
/// interprets a non-zero exit code; that is left to the caller.
pub trait Manage: Send + Sync {
    /// Run the tool with inherited stdio and return its exit code.
    fn run<'a>(&'a self, args: &'a [String]) -> BoxFuture<'a, Result<i32>>;

    /// Run the tool capturing stdout. Stderr still reaches the terminal.
    fn capture<'a>(&'a self, args: &'a [String]) -> BoxFuture<'a, Result<Captured>>;
}
