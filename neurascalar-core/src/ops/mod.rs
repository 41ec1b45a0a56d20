//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation lives in its own file and provides:
//!
//! - an `xxx_op` forward function working on a [`ComputationGraph`](crate::autograd::ComputationGraph):
//!   it resolves its operands, computes the forward value and appends exactly one node
//!   tagged with the matching [`BackwardOp`](crate::autograd::BackwardOp) variant;
//! - an `xxx_backward` kernel holding the local chain rule, dispatched by `BackwardOp::apply`;
//! - the `std::ops` overloads (or inherent methods) exposing the operation on [`Value`].
//!
//! Composite operations (`neg`, `sub`, `div`) are built from the primitives and have no
//! backward kernel of their own.
//!
//! ## Submodules
//!
//! - [`arithmetic`]: add, mul, pow, neg, sub, div.
//! - [`activation`]: tanh.
//! - [`math_elem`]: exp.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

use crate::autograd::NodeId;
use crate::value::Value;

/// Either an existing node or a bare number to be promoted to a fresh leaf.
///
/// Binary operations take `impl Into<Operand>` on both sides, so `add_op(graph, a, 2.0)`
/// and `add_op(graph, 2.0, a)` both work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Constant(f64),
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<f64> for Operand {
    fn from(data: f64) -> Self {
        Operand::Constant(data)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Node(value.id())
    }
}
