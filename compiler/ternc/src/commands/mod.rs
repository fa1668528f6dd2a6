//! Command handlers for the `tern` binary.
//!
//! Handlers that print and exit take a path; the pieces they are built from
//! (`run_source`, `render_error`, `dump_tokens`, `dump_ast`) return values so
//! they can be checked directly.

mod debug;
mod run;

pub use debug::{dump_ast, dump_tokens, lex_file, parse_file};
pub use run::{run_file, run_source};

use tern_eval::RunError;

/// Read a script, or print a readable message and exit.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' is not valid UTF-8")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Format a failure as `path:line:col: message`.
///
/// Errors without a location (host command failures raised outside any
/// node) are reported against the file alone.
pub fn render_error(path: &str, source: &str, err: &RunError) -> String {
    match err.span() {
        Some(span) => {
            let (line, col) = span.line_col(source);
            format!("{path}:{line}:{col}: {err}")
        }
        None => format!("{path}: {err}"),
    }
}
