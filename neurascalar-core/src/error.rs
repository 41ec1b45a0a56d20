use thiserror::Error;

/// Custom error type for the NeuraScalar engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeuraScalarError {
    #[error("Invalid argument for operation {operation}: {reason}")]
    InvalidArgument { operation: String, reason: String },

    #[error("Node {id} not found in computation graph of {len} nodes (released or from another graph)")]
    NodeNotFound { id: usize, len: usize },

    #[error("Operation {operation} requires a leaf node, but node {id} was produced by an operation")]
    NotALeaf { id: usize, operation: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
