//! Renders a `SolError` to stderr.
//!
//! This is the engine's entire notion of logging: there is no long-running
//! process to instrument, only a single fatal report on the way out. No
//! source-line/caret rendering — the AST consumed here comes from an
//! already-parsed XML document, and no source text survives past the front
//! end for a caret to point into.

use crate::error::SolError;

/// Prints `error[<CATEGORY>]: <message>` to stderr.
pub fn report(error: &SolError) {
    eprintln!("error[{}]: {}", error.category(), error.message());
}
