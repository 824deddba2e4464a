// Expression evaluation over a decoded message tree

use super::operators::{self, Arity};
use crate::core::Message;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Operator {operator} at bit {offset} takes {expected} operands, got {actual}")]
    Arity {
        operator: &'static str,
        offset: usize,
        expected: Arity,
        actual: usize,
    },

    #[error("Unknown operator type id {type_id} at bit {offset}")]
    UnknownOperator { type_id: u8, offset: usize },

    #[error("Operator {operator} at bit {offset} overflows 64-bit arithmetic")]
    Overflow {
        operator: &'static str,
        offset: usize,
    },
}

pub type Result<T> = std::result::Result<T, EvalError>;

/// Reduce a message tree to a single value.
///
/// Children are evaluated in list order, post-order. Arity is checked
/// before any child is evaluated, so a malformed comparison never silently
/// uses just its first two operands.
pub fn evaluate(message: &Message) -> Result<u64> {
    match message {
        Message::Literal { value, .. } => Ok(*value),
        Message::Operator {
            type_id,
            offset,
            children,
            ..
        } => {
            let spec = operators::lookup(*type_id).ok_or(EvalError::UnknownOperator {
                type_id: *type_id,
                offset: *offset,
            })?;

            if !spec.arity.accepts(children.len()) {
                return Err(EvalError::Arity {
                    operator: spec.name(),
                    offset: *offset,
                    expected: spec.arity,
                    actual: children.len(),
                });
            }

            let operands = children
                .iter()
                .map(evaluate)
                .collect::<Result<Vec<u64>>>()?;

            spec.apply(&operands).ok_or(EvalError::Overflow {
                operator: spec.name(),
                offset: *offset,
            })
        }
    }
}
