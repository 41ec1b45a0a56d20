use crate::autograd::{BackwardOp, ComputationGraph, NodeId};
use crate::error::NeuraScalarError;
use crate::ops::Operand;

// --- Forward Operation ---

/// Appends `a * b` to the graph. Bare numbers are promoted to leaves.
pub fn mul_op(
    graph: &mut ComputationGraph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, NeuraScalarError> {
    let (a, b): (Operand, Operand) = (a.into(), b.into());
    graph.check_operand(a)?;
    graph.check_operand(b)?;
    let lhs = graph.resolve(a)?;
    let rhs = graph.resolve(b)?;
    let data = graph.data(lhs)? * graph.data(rhs)?;
    Ok(graph.push(data, BackwardOp::Mul { lhs, rhs }))
}

// --- Backward Operation ---

/// grad_a += b * grad_out, grad_b += a * grad_out
pub(crate) fn mul_backward(graph: &mut ComputationGraph, out_grad: f64, lhs: NodeId, rhs: NodeId) {
    let lhs_data = graph.value_of(lhs);
    let rhs_data = graph.value_of(rhs);
    graph.accumulate_grad(lhs, rhs_data * out_grad);
    graph.accumulate_grad(rhs, lhs_data * out_grad);
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
