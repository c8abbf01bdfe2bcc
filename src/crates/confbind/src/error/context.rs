//! Error chain helpers
//!
//! Used when a binding failure is swallowed (non-strict mode) and only logged,
//! so the log line still carries every cause.

use std::error::Error as StdError;

/// Format an error chain as a multi-line string
///
/// Walks the chain via `source()` and puts each cause on its own indented line.
///
/// # Example
///
/// ```rust
/// use confbind::error::{format_error_chain, ConfigError};
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
/// let err = ConfigError::from(io);
/// assert_eq!(format_error_chain(&err), "Error: I/O error: missing\n  Caused by: missing");
/// ```
pub fn format_error_chain(error: &dyn StdError) -> String {
    let mut result = format!("Error: {}", error);
    let mut current = error.source();
    let mut level = 1;

    while let Some(source) = current {
        result.push_str(&format!("\n{:indent$}Caused by: {}", "", source, indent = level * 2));
        current = source.source();
        level += 1;
    }

    result
}
