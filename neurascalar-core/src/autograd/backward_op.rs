use crate::autograd::graph::{ComputationGraph, NodeId};
use crate::ops::activation::tanh::tanh_backward;
use crate::ops::arithmetic::add::add_backward;
use crate::ops::arithmetic::mul::mul_backward;
use crate::ops::arithmetic::pow::pow_backward;
use crate::ops::math_elem::exp::exp_backward;

/// The local derivative rule of a node, tagged by the operation that produced it.
///
/// Every derived node in a [`ComputationGraph`] stores one of these variants together with
/// the ids of its operands. During the backward pass the graph calls [`BackwardOp::apply`]
/// exactly once per node, after the node's own gradient is final, and the variant adds the
/// chain-rule contribution into each operand's gradient.
///
/// Contributions are always **added** to the operand gradients, never assigned. This is what
/// makes `x + x` and diamond-shaped graphs produce the correct total derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// A node built directly from a number. No operands, no-op rule.
    Leaf,
    /// `out = lhs + rhs`
    Add { lhs: NodeId, rhs: NodeId },
    /// `out = lhs * rhs`
    Mul { lhs: NodeId, rhs: NodeId },
    /// `out = base ^ exponent`, with a constant real exponent.
    Pow { base: NodeId, exponent: f64 },
    /// `out = tanh(input)`
    Tanh { input: NodeId },
    /// `out = e ^ input`
    Exp { input: NodeId },
}

impl BackwardOp {
    /// Returns the ids of the nodes this operation consumed, in forward order.
    ///
    /// A node used for both operands (`x * x`) appears twice.
    pub fn inputs(&self) -> Vec<NodeId> {
        match *self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Tanh { input } | BackwardOp::Exp { input } => vec![input],
        }
    }

    /// Diagnostic tag naming the operation (`""` for leaves).
    pub fn label(&self) -> String {
        match self {
            BackwardOp::Leaf => String::new(),
            BackwardOp::Add { .. } => "+".to_string(),
            BackwardOp::Mul { .. } => "*".to_string(),
            BackwardOp::Pow { exponent, .. } => format!("**{}", exponent),
            BackwardOp::Tanh { .. } => "tanh".to_string(),
            BackwardOp::Exp { .. } => "exp".to_string(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BackwardOp::Leaf)
    }

    /// Distributes `out_grad` (dRoot/dOut) to the operands of the node.
    ///
    /// `out_data` is the forward value of the node owning this rule; `tanh` and `exp`
    /// reuse it instead of recomputing the function.
    pub(crate) fn apply(&self, graph: &mut ComputationGraph, out_data: f64, out_grad: f64) {
        match *self {
            BackwardOp::Leaf => {}
            BackwardOp::Add { lhs, rhs } => add_backward(graph, out_grad, lhs, rhs),
            BackwardOp::Mul { lhs, rhs } => mul_backward(graph, out_grad, lhs, rhs),
            BackwardOp::Pow { base, exponent } => pow_backward(graph, out_grad, base, exponent),
            BackwardOp::Tanh { input } => tanh_backward(graph, out_data, out_grad, input),
            BackwardOp::Exp { input } => exp_backward(graph, out_data, out_grad, input),
        }
    }
}
