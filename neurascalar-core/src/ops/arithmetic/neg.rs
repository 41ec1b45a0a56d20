use crate::autograd::{ComputationGraph, NodeId};
use crate::error::NeuraScalarError;
use crate::ops::arithmetic::mul_op;
use crate::ops::Operand;
use crate::value::Value;
use std::ops::Neg;

/// Appends `-a`, defined as `a * -1`. The gradient comes from `mul`.
pub fn neg_op(graph: &mut ComputationGraph, a: impl Into<Operand>) -> Result<NodeId, NeuraScalarError> {
    mul_op(graph, a, -1.0)
}

impl Neg for Value {
    type Output = Value;

    /// # Panics
    /// Panics if the handle was invalidated by [`Value::rewind`].
    fn neg(self) -> Value {
        Value::record("neg", |graph| neg_op(graph, self))
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
