//! Loops and conditionals.
//!
//! Loop bodies run in the enclosing frame, so the loop variable and anything
//! assigned inside stay visible after the loop ends.

use super::Executor;
use crate::environment::Frame;
use crate::errors::{type_mismatch, EvalError};
use crate::value::Value;
use tern_ir::{Block, Node};

/// Outcome of running a statement or block.
///
/// `Break`, `Next`, and `Return` unwind to the nearest loop or call boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    Normal(Value),
    Break,
    Next,
    Return(Value),
}

/// What a loop does with the flow its body produced.
#[derive(Debug)]
pub enum LoopAction {
    Continue,
    Break,
    /// Leave the loop and hand the flow to the enclosing block.
    Propagate(Flow),
}

#[inline]
pub fn to_loop_action(flow: Flow) -> LoopAction {
    match flow {
        Flow::Normal(_) | Flow::Next => LoopAction::Continue,
        Flow::Break => LoopAction::Break,
        flow @ Flow::Return(_) => LoopAction::Propagate(flow),
    }
}

impl Executor<'_> {
    /// `for var in collection { body }`.
    ///
    /// The collection is evaluated once and iterated as it was at that moment;
    /// arrays yield elements, hashes yield keys.
    pub(crate) fn exec_for(
        &self,
        var: &str,
        collection: &Node,
        body: &Block,
        frame: &mut Frame,
    ) -> Result<Flow, EvalError> {
        let items: Vec<Value> = match self.eval(collection, frame)? {
            Value::Array(items) => items.borrow().clone(),
            Value::Hash(entries) => entries.borrow().keys().map(|k| Value::from(k.as_str())).collect(),
            other => {
                return Err(type_mismatch("array or hash", other.type_name()).with_span(collection.span))
            }
        };
        for item in items {
            frame.set(var, item);
            match to_loop_action(self.exec_block(body, frame)?) {
                LoopAction::Continue => {}
                LoopAction::Break => break,
                LoopAction::Propagate(flow) => return Ok(flow),
            }
        }
        Ok(Flow::Normal(Value::Null))
    }

    pub(crate) fn exec_while(
        &self,
        condition: &Node,
        body: &Block,
        frame: &mut Frame,
    ) -> Result<Flow, EvalError> {
        while self.eval(condition, frame)?.is_truthy() {
            match to_loop_action(self.exec_block(body, frame)?) {
                LoopAction::Continue => {}
                LoopAction::Break => break,
                LoopAction::Propagate(flow) => return Ok(flow),
            }
        }
        Ok(Flow::Normal(Value::Null))
    }

    /// `loop { body }`: runs until `break` or `return`.
    pub(crate) fn exec_loop(&self, body: &Block, frame: &mut Frame) -> Result<Flow, EvalError> {
        loop {
            match to_loop_action(self.exec_block(body, frame)?) {
                LoopAction::Continue => {}
                LoopAction::Break => return Ok(Flow::Normal(Value::Null)),
                LoopAction::Propagate(flow) => return Ok(flow),
            }
        }
    }

    /// First branch whose condition is truthy runs; otherwise the else block.
    pub(crate) fn exec_if(
        &self,
        branches: &[(Node, Block)],
        else_block: Option<&Block>,
        frame: &mut Frame,
    ) -> Result<Flow, EvalError> {
        for (condition, body) in branches {
            if self.eval(condition, frame)?.is_truthy() {
                return self.exec_block(body, frame);
            }
        }
        match else_block {
            Some(body) => self.exec_block(body, frame),
            None => Ok(Flow::Normal(Value::Null)),
        }
    }
}
