//! Host extension points.
//!
//! Embedders add commands that scripts call by name, and may hand scripts
//! opaque objects whose members the host resolves.

use crate::errors::EvalResult;
use crate::value::Value;
use rustc_hash::FxHashMap;
use std::fmt;
use std::rc::Rc;

/// A host-provided command.
///
/// Receives already-evaluated arguments. Errors propagate to the caller of
/// [`Interpreter::run`](crate::Interpreter::run) unchanged.
pub trait ExternalCommand {
    fn call(&self, args: &[Value]) -> EvalResult;
}

impl<F> ExternalCommand for F
where
    F: Fn(&[Value]) -> EvalResult,
{
    fn call(&self, args: &[Value]) -> EvalResult {
        self(args)
    }
}

/// A host value exposed to scripts.
pub trait HostObject: fmt::Debug {
    /// Name reported in type errors and by `type_name`.
    fn type_name(&self) -> &str;

    /// Value of `object.name`, or `None` if the object has no such member.
    fn member(&self, name: &str) -> Option<Value>;

    /// Text used when the object is printed.
    fn describe(&self) -> String {
        format!("<{}>", self.type_name())
    }
}

/// Named external commands, consulted after builtins and before variables.
#[derive(Default, Clone)]
pub struct ExternalRegistry {
    commands: FxHashMap<String, Rc<dyn ExternalCommand>>,
}

impl ExternalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `command` under `name`, replacing any earlier registration.
    pub fn register(&mut self, name: impl Into<String>, command: impl ExternalCommand + 'static) {
        let name = name.into();
        if crate::builtins::Builtin::from_name(&name).is_some() {
            tracing::warn!(command = %name, "external command is shadowed by a builtin of the same name");
        }
        self.commands.insert(name, Rc::new(command));
    }

    pub fn get(&self, name: &str) -> Option<&Rc<dyn ExternalCommand>> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Debug for ExternalRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.commands.keys().collect();
        names.sort();
        f.debug_struct("ExternalRegistry").field("commands", &names).finish()
    }
}
