use super::{read_file, render_error};
use crate::RunOptions;
use tern_eval::{RunError, Value};

/// Execute `source` with the interpreter described by `options`.
pub fn run_source(source: &str, options: &RunOptions) -> Result<Value, RunError> {
    let interp = options.builder().build();
    interp.run(source, options.input_value())
}

/// Run a script file, printing a non-null result and exiting with status 1
/// on any error.
pub fn run_file(path: &str, options: &RunOptions) {
    let source = read_file(path);
    match run_source(&source, options) {
        Ok(Value::Null) => tracing::debug!(path, "script finished"),
        Ok(value) => {
            tracing::debug!(path, result = %value, "script finished");
            println!("{value}");
        }
        Err(err) => {
            eprintln!("{}", render_error(path, &source, &err));
            std::process::exit(1);
        }
    }
}
