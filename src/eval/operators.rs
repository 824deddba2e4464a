// Operator dispatch table: type id -> arity policy and reduction

use crate::core::PacketType;
use std::collections::HashMap;
use std::fmt;

/// Number of operands an operator accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Any,
    AtLeast(usize),
    Exactly(usize),
}

impl Arity {
    pub fn accepts(&self, operands: usize) -> bool {
        match self {
            Arity::Any => true,
            Arity::AtLeast(min) => operands >= *min,
            Arity::Exactly(n) => operands == *n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Any => write!(f, "any number of"),
            Arity::AtLeast(min) => write!(f, "at least {}", min),
            Arity::Exactly(n) => write!(f, "exactly {}", n),
        }
    }
}

/// Reduces operand values; None means the result overflowed u64
pub type Reducer = fn(&[u64]) -> Option<u64>;

/// How one operator type id is evaluated
#[derive(Debug, Clone, Copy)]
pub struct OperatorSpec {
    pub kind: PacketType,
    pub arity: Arity,
    reduce: Reducer,
}

impl OperatorSpec {
    fn new(kind: PacketType, arity: Arity, reduce: Reducer) -> Self {
        Self {
            kind,
            arity,
            reduce,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Apply the reduction to operands that already satisfy `arity`
    pub fn apply(&self, operands: &[u64]) -> Option<u64> {
        (self.reduce)(operands)
    }
}

fn sum(operands: &[u64]) -> Option<u64> {
    operands.iter().try_fold(0u64, |acc, &v| acc.checked_add(v))
}

fn product(operands: &[u64]) -> Option<u64> {
    operands.iter().try_fold(1u64, |acc, &v| acc.checked_mul(v))
}

fn minimum(operands: &[u64]) -> Option<u64> {
    operands.iter().copied().min()
}

fn maximum(operands: &[u64]) -> Option<u64> {
    operands.iter().copied().max()
}

fn greater_than(operands: &[u64]) -> Option<u64> {
    Some((operands[0] > operands[1]) as u64)
}

fn less_than(operands: &[u64]) -> Option<u64> {
    Some((operands[0] < operands[1]) as u64)
}

fn equal_to(operands: &[u64]) -> Option<u64> {
    Some((operands[0] == operands[1]) as u64)
}

lazy_static::lazy_static! {
    static ref OPERATORS: HashMap<u8, OperatorSpec> = [
        OperatorSpec::new(PacketType::Sum, Arity::Any, sum),
        OperatorSpec::new(PacketType::Product, Arity::Any, product),
        OperatorSpec::new(PacketType::Minimum, Arity::AtLeast(1), minimum),
        OperatorSpec::new(PacketType::Maximum, Arity::AtLeast(1), maximum),
        OperatorSpec::new(PacketType::GreaterThan, Arity::Exactly(2), greater_than),
        OperatorSpec::new(PacketType::LessThan, Arity::Exactly(2), less_than),
        OperatorSpec::new(PacketType::EqualTo, Arity::Exactly(2), equal_to),
    ]
    .into_iter()
    .map(|spec| (spec.kind.type_id(), spec))
    .collect();
}

/// Look up the operator for a type id; None for literals and unknown ids
pub fn lookup(type_id: u8) -> Option<&'static OperatorSpec> {
    OPERATORS.get(&type_id)
}

/// All operators, ordered by type id
pub fn operators() -> Vec<&'static OperatorSpec> {
    let mut specs: Vec<_> = OPERATORS.values().collect();
    specs.sort_by_key(|spec| spec.kind.type_id());
    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_operator() {
        let ids: Vec<u8> = operators().iter().map(|s| s.kind.type_id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 5, 6, 7]);
        assert!(lookup(4).is_none());
        assert!(lookup(8).is_none());
    }

    #[test]
    fn test_arity() {
        assert!(Arity::Any.accepts(0));
        assert!(!Arity::AtLeast(1).accepts(0));
        assert!(Arity::AtLeast(1).accepts(5));
        assert!(Arity::Exactly(2).accepts(2));
        assert!(!Arity::Exactly(2).accepts(3));
        assert_eq!(Arity::Exactly(2).to_string(), "exactly 2");
    }

    #[test]
    fn test_reductions() {
        assert_eq!(lookup(0).unwrap().apply(&[]), Some(0));
        assert_eq!(lookup(0).unwrap().apply(&[1, 2, 3]), Some(6));
        assert_eq!(lookup(1).unwrap().apply(&[]), Some(1));
        assert_eq!(lookup(1).unwrap().apply(&[2, 3, 4]), Some(24));
        assert_eq!(lookup(2).unwrap().apply(&[7, 3, 9]), Some(3));
        assert_eq!(lookup(3).unwrap().apply(&[7, 3, 9]), Some(9));
        assert_eq!(lookup(5).unwrap().apply(&[5, 15]), Some(0));
        assert_eq!(lookup(6).unwrap().apply(&[5, 15]), Some(1));
        assert_eq!(lookup(7).unwrap().apply(&[15, 15]), Some(1));
    }

    #[test]
    fn test_overflow_is_none() {
        assert_eq!(lookup(0).unwrap().apply(&[u64::MAX, 1]), None);
        assert_eq!(lookup(1).unwrap().apply(&[u64::MAX, 2]), None);
        assert_eq!(lookup(1).unwrap().apply(&[u64::MAX, 0]), Some(0));
    }
}
