//! Destination for `print` output.
//!
//! - `Stdout`: the default for the command-line tool
//! - `Buffer`: captures lines for embedding hosts and tests
//! - `Silent`: discards everything
//!
//! Enum dispatch keeps the hot `print` path free of vtable calls.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

pub enum PrintHandler {
    Stdout,
    Buffer(Mutex<String>),
    Silent,
}

impl PrintHandler {
    /// Emit one line of output followed by a newline.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => {
                // A closed stdout (e.g. piped into `head`) must not abort the script.
                let _ = writeln!(std::io::stdout().lock(), "{line}");
            }
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(line);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything captured so far. Empty for non-capturing handlers.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.output().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}
