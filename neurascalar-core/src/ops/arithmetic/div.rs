use crate::autograd::{ComputationGraph, NodeId};
use crate::error::NeuraScalarError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::ops::Operand;

/// Appends `a / b`, defined as `a * b^-1`.
///
/// Division by a node holding exactly zero is not detected: the result follows `f64`
/// semantics (`±inf` or `NaN`) and flows through the graph unchanged.
pub fn div_op(
    graph: &mut ComputationGraph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, NeuraScalarError> {
    let (a, b): (Operand, Operand) = (a.into(), b.into());
    graph.check_operand(b)?;
    let lhs = graph.resolve(a)?;
    let reciprocal = pow_op(graph, b, -1.0)?;
    mul_op(graph, lhs, reciprocal)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
