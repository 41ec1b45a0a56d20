// src/value/mod.rs

use crate::autograd::{ComputationGraph, NodeId};
use crate::error::NeuraScalarError;
use std::cell::RefCell;
use std::marker::PhantomData;

mod accessors;
mod autograd_methods;
mod traits;

thread_local! {
    /// Arena backing every `Value` created on this thread.
    static GRAPH: RefCell<ComputationGraph> = RefCell::new(ComputationGraph::new());
}

/// Runs `f` with mutable access to this thread's computation graph.
///
/// Must not be re-entered: calling `Value` operations from inside `f` panics on the
/// already borrowed graph.
pub fn with_graph<R>(f: impl FnOnce(&mut ComputationGraph) -> R) -> R {
    GRAPH.with(|graph| f(&mut graph.borrow_mut()))
}

/// A scalar in the computation graph, with a forward value and an accumulated gradient.
///
/// `Value` is a small `Copy` handle (a [`NodeId`]) into a thread-local
/// [`ComputationGraph`]. Every arithmetic operation appends exactly one node to that arena
/// and returns a handle to it, so a value can be reused freely (`x + x`, diamonds) without
/// reference counting. The handle is neither `Send` nor `Sync`: its id is only meaningful
/// on the thread that created it.
///
/// Equality and hashing are by identity (node id), not by numeric value.
///
/// ```
/// use neurascalar_core::Value;
///
/// let a = Value::new(3.0);
/// let b = Value::new(4.0);
/// let out = a * b + a;
/// out.backward().unwrap();
/// assert_eq!(out.data(), 15.0);
/// assert_eq!(a.grad(), 5.0);
/// assert_eq!(b.grad(), 3.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Value {
    id: NodeId,
    _not_send: PhantomData<*const ()>,
}

/// Arena length recorded by [`Value::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GraphCheckpoint(usize);

impl Value {
    /// Creates a leaf value (no operands, zero gradient).
    pub fn new(data: f64) -> Self {
        with_graph(|graph| Value::from_id(graph.leaf(data)))
    }

    /// Creates a leaf value carrying a diagnostic label.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        let label = label.into();
        with_graph(|graph| Value::from_id(graph.labelled_leaf(data, label)))
    }

    pub(crate) fn from_id(id: NodeId) -> Self {
        Value {
            id,
            _not_send: PhantomData,
        }
    }

    /// Arena id of this value in the thread-local graph.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Runs an arena-level operation and wraps the resulting node.
    pub(crate) fn try_record<F>(build: F) -> Result<Value, NeuraScalarError>
    where
        F: FnOnce(&mut ComputationGraph) -> Result<NodeId, NeuraScalarError>,
    {
        with_graph(build).map(Value::from_id)
    }

    /// Infallible flavour of [`Value::try_record`] used by the `std::ops` overloads.
    ///
    /// # Panics
    /// Panics if `build` fails, which only happens for handles invalidated by
    /// [`Value::rewind`].
    pub(crate) fn record<F>(operation: &str, build: F) -> Value
    where
        F: FnOnce(&mut ComputationGraph) -> Result<NodeId, NeuraScalarError>,
    {
        match Value::try_record(build) {
            Ok(value) => value,
            Err(err) => panic!("Value operation '{}' failed: {}", operation, err),
        }
    }

    /// Records the current size of this thread's graph.
    pub fn checkpoint() -> GraphCheckpoint {
        GraphCheckpoint(with_graph(|graph| graph.mark()))
    }

    /// Drops every node created after `checkpoint`.
    ///
    /// Values created before the checkpoint (parameters, inputs) stay valid with their
    /// gradients untouched. Handles created after it become invalid: their accessors and
    /// operators panic.
    pub fn rewind(checkpoint: GraphCheckpoint) {
        with_graph(|graph| graph.truncate(checkpoint.0));
    }

    /// Number of nodes currently held by this thread's graph.
    pub fn graph_len() -> usize {
        with_graph(|graph| graph.len())
    }
}
