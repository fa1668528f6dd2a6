//! Executor for the Tern scripting language.
//!
//! [`Interpreter::run`] lexes, parses, and walks a script, returning the
//! value of its last statement. Hosts extend the language by registering
//! [`ExternalCommand`]s and passing [`HostObject`]s through `input()` or
//! command results.
//!
//! ```text
//! let interp = Interpreter::builder().print_handler(buffer_handler()).build();
//! interp.run("print(join([1, 2, 3], '-'))", None)?;
//! ```

mod builtins;
mod clock;
mod environment;
mod errors;
mod exec;
mod external;
mod interpreter;
mod members;
mod operators;
mod print_handler;
mod value;

pub use builtins::{Builtin, DigestAlgorithm};
pub use clock::{Clock, FixedClock, SystemClock};
pub use environment::{Closure, Frame};
pub use errors::*;
pub use exec::{to_loop_action, Flow, LoopAction};
pub use external::{ExternalCommand, ExternalRegistry, HostObject};
pub use interpreter::{Interpreter, InterpreterBuilder, RunError, DEFAULT_MAX_CALL_DEPTH};
pub use members::member;
pub use operators::{evaluate_arith, evaluate_compare};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use value::{HashMap, Shared, Value};

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
