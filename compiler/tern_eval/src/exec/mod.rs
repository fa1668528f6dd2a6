//! Tree-walking execution.
//!
//! An [`Executor`] lives for a single run. It owns the per-run state (script
//! input, call depth, random source) and borrows configuration and host
//! commands from the [`Interpreter`] that created it.
//!
//! Statements produce a [`Flow`]; expressions produce a [`Value`]. A block's
//! value is the value of its last statement, which is how functions without
//! an explicit `return` produce a result.

mod assign;
mod control;
mod reference;

pub use control::{to_loop_action, Flow, LoopAction};

use crate::environment::{Closure, Frame};
use crate::errors::{unsupported_node, EvalError, EvalResult};
use crate::interpreter::Interpreter;
use crate::operators::{evaluate_arith, evaluate_compare};
use crate::value::{HashMap, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use tern_ir::{Node, NodeKind};
use tern_stack::{ensure_sufficient_stack, DepthCounter};

pub(crate) struct Executor<'i> {
    pub(crate) interp: &'i Interpreter,
    pub(crate) input: Value,
    pub(crate) rng: RefCell<StdRng>,
    depth: DepthCounter,
}

impl<'i> Executor<'i> {
    pub(crate) fn new(interp: &'i Interpreter, input: Value) -> Self {
        let rng = match interp.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Executor {
            interp,
            input,
            rng: RefCell::new(rng),
            depth: DepthCounter::new(interp.max_call_depth),
        }
    }

    /// Run statements in order, stopping at the first non-normal flow.
    pub(crate) fn exec_block(&self, block: &[Node], frame: &mut Frame) -> Result<Flow, EvalError> {
        let mut last = Value::Null;
        for node in block {
            match self.exec(node, frame)? {
                Flow::Normal(value) => last = value,
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Normal(last))
    }

    /// Execute one statement, or evaluate an expression in statement position.
    pub(crate) fn exec(&self, node: &Node, frame: &mut Frame) -> Result<Flow, EvalError> {
        ensure_sufficient_stack(|| match &node.kind {
            NodeKind::Assign { target, value } => self
                .assign(target, value, frame)
                .map(Flow::Normal)
                .map_err(|e| e.or_span(node.span)),
            NodeKind::ForEach {
                var,
                collection,
                body,
            } => self.exec_for(var, collection, body, frame),
            NodeKind::While { condition, body } => self.exec_while(condition, body, frame),
            NodeKind::Loop { body } => self.exec_loop(body, frame),
            NodeKind::If {
                branches,
                else_block,
            } => self.exec_if(branches, else_block.as_ref(), frame),
            NodeKind::Break => Ok(Flow::Break),
            NodeKind::Next => Ok(Flow::Next),
            NodeKind::Return(value) => Ok(Flow::Return(self.eval(value, frame)?)),
            _ => self.eval(node, frame).map(Flow::Normal),
        })
    }

    /// Evaluate an expression.
    pub(crate) fn eval(&self, node: &Node, frame: &Frame) -> EvalResult {
        ensure_sufficient_stack(|| match &node.kind {
            NodeKind::Int(n) => Ok(Value::Int(*n)),
            NodeKind::Str(s) | NodeKind::Symbol(s) => Ok(Value::from(s.as_str())),
            NodeKind::Bool(b) => Ok(Value::Bool(*b)),
            NodeKind::Null => Ok(Value::Null),
            NodeKind::Array(items) => {
                let items = items
                    .iter()
                    .map(|item| self.eval(item, frame))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::array(items))
            }
            NodeKind::Hash(entries) => {
                let mut map = HashMap::with_capacity(entries.len());
                for (key, value) in entries {
                    map.insert(key.clone(), self.eval(value, frame)?);
                }
                Ok(Value::hash(map))
            }
            NodeKind::Function(def) => Ok(Value::Closure(Closure::new(def.clone(), frame.snapshot()))),
            NodeKind::Arith { op, left, right } => {
                let left = self.eval(left, frame)?;
                let right = self.eval(right, frame)?;
                evaluate_arith(*op, &left, &right).map_err(|e| e.or_span(node.span))
            }
            NodeKind::Compare { op, left, right } => {
                let left = self.eval(left, frame)?;
                let right = self.eval(right, frame)?;
                evaluate_compare(*op, &left, &right).map_err(|e| e.or_span(node.span))
            }
            NodeKind::Or { left, right } => {
                let left = self.eval(left, frame)?;
                if left.is_truthy() {
                    Ok(left)
                } else {
                    self.eval(right, frame)
                }
            }
            NodeKind::Reference(reference) => self
                .eval_reference(reference, frame)
                .map_err(|e| e.or_span(node.span)),
            NodeKind::Grouping(inner) => self.eval(inner, frame),
            kind => Err(unsupported_node(kind.label()).with_span(node.span)),
        })
    }

    pub(crate) fn eval_args(&self, args: &[Node], frame: &Frame) -> Result<Vec<Value>, EvalError> {
        args.iter().map(|arg| self.eval(arg, frame)).collect()
    }
}
