use crate::autograd::{ComputationGraph, NodeId};
use crate::error::NeuraScalarError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::Operand;

/// Appends `a - b`, defined as `a + (-b)`.
///
/// Works for `number - node` as well: the number becomes the left leaf and the node is
/// negated, so the gradient of `b` is `-1` regardless of operand order.
pub fn sub_op(
    graph: &mut ComputationGraph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, NeuraScalarError> {
    let (a, b): (Operand, Operand) = (a.into(), b.into());
    graph.check_operand(b)?;
    let lhs = graph.resolve(a)?;
    let negated = neg_op(graph, b)?;
    add_op(graph, lhs, negated)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
