//! Variable frames and closures.
//!
//! A frame is a flat name-to-value map. There is no parent chain: each call
//! gets a fresh frame seeded from the closure's snapshot, and blocks inside a
//! function share the function's frame.

use crate::value::Value;
use rustc_hash::FxHashMap;
use std::rc::Rc;
use tern_ir::FunctionDef;

#[derive(Clone, Debug, Default)]
pub struct Frame {
    bindings: FxHashMap<String, Value>,
}

impl Frame {
    pub fn new() -> Self {
        Frame::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Bind or rebind `name`.
    #[inline]
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Copy of the bindings as they are right now.
    ///
    /// Container values are shared with the original (same handles); later
    /// rebinding in either frame is not visible to the other.
    pub fn snapshot(&self) -> Rc<Frame> {
        Rc::new(self.clone())
    }
}

/// A function literal together with the frame it was evaluated in.
#[derive(Clone, Debug)]
pub struct Closure {
    def: Rc<FunctionDef>,
    captured: Rc<Frame>,
}

impl Closure {
    pub fn new(def: Rc<FunctionDef>, captured: Rc<Frame>) -> Self {
        Closure { def, captured }
    }

    pub fn def(&self) -> &FunctionDef {
        &self.def
    }

    pub fn params(&self) -> &[String] {
        &self.def.params
    }

    /// Fresh call frame: the captured bindings with `args` bound over them.
    pub(crate) fn call_frame(&self, args: Vec<Value>) -> Frame {
        let mut frame = Frame::clone(&self.captured);
        for (param, arg) in self.def.params.iter().zip(args) {
            frame.set(param.as_str(), arg);
        }
        frame
    }

    /// Identity: same literal evaluated against the same snapshot.
    pub fn ptr_eq(&self, other: &Closure) -> bool {
        Rc::ptr_eq(&self.def, &other.def) && Rc::ptr_eq(&self.captured, &other.captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tern_ir::Span;

    fn closure(params: &[&str], captured: &Frame) -> Closure {
        let def = FunctionDef {
            params: params.iter().map(ToString::to_string).collect(),
            body: Vec::new(),
            span: Span::DUMMY,
        };
        Closure::new(Rc::new(def), captured.snapshot())
    }

    #[test]
    fn snapshot_is_isolated_from_later_rebinding() {
        let mut frame = Frame::new();
        frame.set("x", Value::Int(1));
        let snap = frame.snapshot();
        frame.set("x", Value::Int(2));
        frame.set("y", Value::Int(3));
        assert_eq!(snap.get("x"), Some(&Value::Int(1)));
        assert!(!snap.contains("y"));
    }

    #[test]
    fn snapshot_shares_containers() {
        let mut frame = Frame::new();
        let items = Value::array(vec![]);
        frame.set("items", items.clone());
        let snap = frame.snapshot();
        if let Value::Array(a) = &items {
            a.borrow_mut().push(Value::Int(1));
        }
        assert_eq!(snap.get("items"), Some(&Value::array(vec![Value::Int(1)])));
    }

    #[test]
    fn call_frame_binds_params_over_captures() {
        let mut frame = Frame::new();
        frame.set("a", Value::Int(1));
        frame.set("b", Value::Int(2));
        let c = closure(&["a"], &frame);
        let call = c.call_frame(vec![Value::Int(10)]);
        assert_eq!(call.get("a"), Some(&Value::Int(10)));
        assert_eq!(call.get("b"), Some(&Value::Int(2)));
        assert_eq!(call.len(), 2);
    }

    #[test]
    fn closure_identity() {
        let frame = Frame::new();
        let a = closure(&[], &frame);
        let b = closure(&[], &frame);
        assert!(a.ptr_eq(&a.clone()));
        assert!(!a.ptr_eq(&b));
    }
}
