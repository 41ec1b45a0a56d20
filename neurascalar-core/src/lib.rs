//! Scalar reverse-mode automatic differentiation.
//!
//! Every [`Value`] is a node of a thread-local computation graph. Arithmetic on values
//! records the operation, and [`Value::backward`] propagates gradients from an output back
//! to every value it was built from. The [`nn`] module composes values into neurons,
//! layers and multi-layer perceptrons.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod utils;
pub mod value;

pub use autograd::{ComputationGraph, NodeId};
pub use error::NeuraScalarError;
pub use value::{GraphCheckpoint, Value};
// Re-export traits required by public functions (`Value::pow`)
pub use num_traits;
