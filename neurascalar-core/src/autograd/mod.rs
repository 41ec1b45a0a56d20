//! # Autograd
//!
//! Reverse-mode differentiation over an arena of scalar nodes.
//!
//! - [`graph`]: the [`ComputationGraph`] arena, [`NodeId`] handles, topological sort and
//!   the `backward` traversal.
//! - [`backward_op`]: the [`BackwardOp`] tag stored on every node, which dispatches to the
//!   per-operation backward kernels in `crate::ops`.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::{ComputationGraph, Node, NodeId};
