use super::Interpreter;
use crate::builtins::DigestAlgorithm;
use crate::clock::{Clock, SystemClock};
use crate::external::{ExternalCommand, ExternalRegistry};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use std::cell::RefCell;
use std::rc::Rc;

/// Nested script calls allowed before a run fails with a stack overflow.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 5_000;

/// Builder for [`Interpreter`].
///
/// Defaults: output to stdout, wall-clock time, an unseeded random source,
/// SHA-512 for `hash`, and [`DEFAULT_MAX_CALL_DEPTH`].
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    clock: Option<Rc<dyn Clock>>,
    seed: Option<u64>,
    digest: DigestAlgorithm,
    max_call_depth: usize,
    externals: ExternalRegistry,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            print_handler: None,
            clock: None,
            seed: None,
            digest: DigestAlgorithm::default(),
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            externals: ExternalRegistry::new(),
        }
    }

    /// Where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Time source for `now()`.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Rc::new(clock));
        self
    }

    /// Seed for `random` and `uuid`. Each run restarts from this seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Algorithm behind the `hash` builtin.
    #[must_use]
    pub fn digest(mut self, digest: DigestAlgorithm) -> Self {
        self.digest = digest;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub fn external(mut self, name: impl Into<String>, command: impl ExternalCommand + 'static) -> Self {
        self.externals.register(name, command);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            externals: self.externals,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            clock: self.clock.unwrap_or_else(|| Rc::new(SystemClock)),
            seed: self.seed,
            digest: self.digest,
            max_call_depth: self.max_call_depth,
            patterns: RefCell::default(),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
