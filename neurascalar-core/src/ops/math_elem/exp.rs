use crate::autograd::{BackwardOp, ComputationGraph, NodeId};
use crate::error::NeuraScalarError;
use crate::ops::Operand;
use crate::value::Value;

/// Appends `e^a`. Overflow yields `+inf` as produced by `f64::exp`.
pub fn exp_op(graph: &mut ComputationGraph, a: impl Into<Operand>) -> Result<NodeId, NeuraScalarError> {
    let input = graph.resolve(a.into())?;
    let data = graph.data(input)?.exp();
    Ok(graph.push(data, BackwardOp::Exp { input }))
}

/// d(e^a)/da = e^a, which is the node's own forward value.
pub(crate) fn exp_backward(graph: &mut ComputationGraph, out_data: f64, out_grad: f64, input: NodeId) {
    graph.accumulate_grad(input, out_data * out_grad);
}

impl Value {
    /// Exponential with gradient tracking.
    ///
    /// # Panics
    /// Panics if the handle was invalidated by [`Value::rewind`].
    pub fn exp(self) -> Value {
        Value::record("exp", |graph| exp_op(graph, self))
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
