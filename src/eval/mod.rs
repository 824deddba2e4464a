// Evaluation and version accounting over decoded message trees

pub mod evaluator;
pub mod operators;
pub mod versions;

pub use evaluator::{evaluate, EvalError};
pub use operators::{lookup, Arity, OperatorSpec};
pub use versions::version_sum;
