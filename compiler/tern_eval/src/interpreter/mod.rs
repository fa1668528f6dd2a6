//! The public entry point: configure once, run many scripts.

mod builder;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use crate::builtins::DigestAlgorithm;
use crate::clock::Clock;
use crate::environment::Frame;
use crate::errors::{control_flow_escape, EvalError, EvalResult};
use crate::exec::{Executor, Flow};
use crate::external::{ExternalCommand, ExternalRegistry};
use crate::print_handler::SharedPrintHandler;
use crate::value::Value;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use tern_ir::{Block, Span};
use tern_lexer::LexError;
use tern_parse::ParseError;

/// Any failure from [`Interpreter::run`].
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("runtime error: {0}")]
    Eval(#[from] EvalError),
}

impl RunError {
    /// Source location of the failure, when known.
    pub fn span(&self) -> Option<Span> {
        match self {
            RunError::Lex(e) => Some(e.span()),
            RunError::Parse(e) => Some(e.span),
            RunError::Eval(e) => e.span,
        }
    }
}

/// Most compiled `match` patterns kept at once; a full cache is emptied
/// before the next pattern is compiled.
pub(crate) const PATTERN_CACHE_LIMIT: usize = 64;

/// Script interpreter.
///
/// Holds configuration and registered external commands. Each call to
/// [`run`](Self::run) starts from an empty top-level frame; no variables
/// survive between runs.
pub struct Interpreter {
    pub(crate) externals: ExternalRegistry,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) clock: Rc<dyn Clock>,
    pub(crate) seed: Option<u64>,
    pub(crate) digest: DigestAlgorithm,
    pub(crate) max_call_depth: usize,
    /// Compiled `match` patterns, reused across runs. Bounded by
    /// [`PATTERN_CACHE_LIMIT`].
    pub(crate) patterns: RefCell<FxHashMap<String, Regex>>,
}

impl Interpreter {
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Register an external command callable from scripts as `name(...)`.
    pub fn register(&mut self, name: impl Into<String>, command: impl ExternalCommand + 'static) {
        self.externals.register(name, command);
    }

    pub fn externals(&self) -> &ExternalRegistry {
        &self.externals
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Lex, parse, and execute `script`.
    ///
    /// `input` is what the script's `input()` returns (null when `None`).
    /// The result is the value of the last top-level statement, or the value
    /// of a top-level `return`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = script.len()))]
    pub fn run(&self, script: &str, input: Option<Value>) -> Result<Value, RunError> {
        let tokens = tern_lexer::lex(script)?;
        let program = tern_parse::parse(&tokens)?;
        tracing::debug!(tokens = tokens.len(), statements = program.len(), "parsed");
        Ok(self.execute(&program, input)?)
    }

    /// Execute an already-parsed program.
    pub fn execute(&self, program: &Block, input: Option<Value>) -> EvalResult {
        let executor = Executor::new(self, input.unwrap_or(Value::Null));
        let mut frame = Frame::new();
        let result = match executor.exec_block(program, &mut frame) {
            Ok(Flow::Normal(value) | Flow::Return(value)) => Ok(value),
            Ok(Flow::Break) => Err(control_flow_escape("break")),
            Ok(Flow::Next) => Err(control_flow_escape("next")),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            tracing::debug!(error = %e, "run failed");
        }
        result
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
