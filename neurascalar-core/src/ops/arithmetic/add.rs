use crate::autograd::{BackwardOp, ComputationGraph, NodeId};
use crate::error::NeuraScalarError;
use crate::ops::Operand;

// --- Forward Operation ---

/// Appends `a + b` to the graph.
///
/// Either side may be an existing node or a bare number, which is promoted to a new leaf.
/// `a` and `b` may be the same node.
pub fn add_op(
    graph: &mut ComputationGraph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, NeuraScalarError> {
    let (a, b): (Operand, Operand) = (a.into(), b.into());
    graph.check_operand(a)?;
    graph.check_operand(b)?;
    let lhs = graph.resolve(a)?;
    let rhs = graph.resolve(b)?;
    let data = graph.data(lhs)? + graph.data(rhs)?;
    Ok(graph.push(data, BackwardOp::Add { lhs, rhs }))
}

// --- Backward Operation ---

/// d(a + b)/da = d(a + b)/db = 1.
pub(crate) fn add_backward(graph: &mut ComputationGraph, out_grad: f64, lhs: NodeId, rhs: NodeId) {
    graph.accumulate_grad(lhs, out_grad);
    graph.accumulate_grad(rhs, out_grad);
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
