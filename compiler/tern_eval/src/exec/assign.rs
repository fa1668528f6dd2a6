use super::reference::{index_value, resolve_index};
use super::Executor;
use crate::environment::Frame;
use crate::errors::{
    name_not_found, type_mismatch, unsupported_assignment_target, EvalError, EvalResult,
};
use crate::value::Value;
use tern_ir::{Chain, Node, Reference};

impl Executor<'_> {
    /// `target = value`.
    ///
    /// A bare name binds in the current frame. With chains, every chain must
    /// be an index: all but the last navigate into nested containers, and the
    /// last one stores into the container reached. Containers are shared, so
    /// the store is visible through every alias.
    pub(crate) fn assign(&self, target: &Reference, value: &Node, frame: &mut Frame) -> EvalResult {
        let value = self.eval(value, frame)?;

        let Some((last, path)) = target.chains.split_last() else {
            frame.set(target.name.as_str(), value.clone());
            return Ok(value);
        };

        let mut container = frame
            .get(&target.name)
            .cloned()
            .ok_or_else(|| name_not_found(&target.name))?;
        for chain in path {
            let key = self.eval(index_node(chain)?, frame)?;
            container = index_value(&container, &key)?;
        }
        let key = self.eval(index_node(last)?, frame)?;
        store_index(&container, key, value.clone())?;
        Ok(value)
    }
}

fn index_node(chain: &Chain) -> Result<&Node, EvalError> {
    match chain {
        Chain::Index(node) => Ok(node),
        other => Err(unsupported_assignment_target(format!(
            "cannot assign through a {}",
            other.label()
        ))),
    }
}

/// Write `container[key] = value`.
///
/// Array slots must already exist; hash keys are inserted or replaced.
fn store_index(container: &Value, key: Value, value: Value) -> Result<(), EvalError> {
    match (container, key) {
        (Value::Array(items), Value::Int(index)) => {
            let mut items = items.borrow_mut();
            let slot = resolve_index(index, items.len())?;
            items[slot] = value;
            Ok(())
        }
        (Value::Hash(entries), Value::Str(key)) => {
            entries.borrow_mut().insert(key.to_string(), value);
            Ok(())
        }
        (Value::Array(_), other) => Err(type_mismatch("int index", other.type_name())),
        (Value::Hash(_), other) => Err(type_mismatch("str key", other.type_name())),
        (other, _) => Err(unsupported_assignment_target(format!(
            "cannot index-assign into {}",
            other.type_name()
        ))),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;

    #[test]
    fn store_replaces_existing_slot() {
        let array = Value::array(vec![Value::Int(1), Value::Int(2)]);
        store_index(&array, Value::Int(-1), Value::Int(9)).unwrap();
        assert_eq!(array, Value::array(vec![Value::Int(1), Value::Int(9)]));
    }

    #[test]
    fn store_past_end_is_out_of_range() {
        let array = Value::array(vec![]);
        let err = store_index(&array, Value::Int(0), Value::Null).unwrap_err();
        assert!(matches!(
            err.kind,
            EvalErrorKind::IndexOutOfRange { index: 0, len: 0 }
        ));
    }

    #[test]
    fn store_into_string_is_unsupported() {
        let err = store_index(&Value::from("abc"), Value::Int(0), Value::Null).unwrap_err();
        assert!(matches!(
            err.kind,
            EvalErrorKind::UnsupportedAssignmentTarget { .. }
        ));
    }
}
