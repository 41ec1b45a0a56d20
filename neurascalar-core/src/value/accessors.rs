// src/value/accessors.rs
use super::{Value, GRAPH};
use crate::autograd::{BackwardOp, Node};
use crate::error::NeuraScalarError;

impl Value {
    /// Reads the node behind this handle.
    ///
    /// # Panics
    /// Panics if the handle was invalidated by [`Value::rewind`].
    fn read<R>(&self, f: impl FnOnce(&Node) -> R) -> R {
        GRAPH.with(|graph| {
            let graph = graph.borrow();
            match graph.node(self.id) {
                Ok(node) => f(node),
                Err(err) => panic!("Invalid Value handle: {}", err),
            }
        })
    }

    /// Like `read`, but reports a released handle instead of panicking.
    pub(crate) fn try_read<R>(&self, f: impl FnOnce(&Node) -> R) -> Result<R, NeuraScalarError> {
        GRAPH.with(|graph| graph.borrow().node(self.id).map(f))
    }

    /// Forward value.
    pub fn data(&self) -> f64 {
        self.read(|node| node.data)
    }

    /// Accumulated gradient of the last backward root(s) with respect to this value.
    pub fn grad(&self) -> f64 {
        self.read(|node| node.grad)
    }

    /// Diagnostic label given at creation, if any.
    pub fn label(&self) -> Option<String> {
        self.read(|node| node.label.clone())
    }

    /// Tag of the producing operation: `""` for leaves, `"+"`, `"*"`, `"**n"`, `"tanh"`, `"exp"`.
    pub fn op_label(&self) -> String {
        self.read(|node| node.op.label())
    }

    pub fn op(&self) -> BackwardOp {
        self.read(|node| node.op)
    }

    pub fn is_leaf(&self) -> bool {
        self.read(|node| node.op.is_leaf())
    }

    /// Values this one was computed from, in forward order.
    pub fn operands(&self) -> Vec<Value> {
        self.read(|node| node.op.inputs())
            .into_iter()
            .map(Value::from_id)
            .collect()
    }

    /// Sets the diagnostic label.
    pub fn set_label(&self, label: impl Into<String>) -> Result<(), NeuraScalarError> {
        let label = label.into();
        super::with_graph(|graph| graph.set_label(self.id, label))
    }

    /// Replaces the value of a leaf (e.g. a parameter update by the caller).
    ///
    /// # Errors
    /// [`NeuraScalarError::NotALeaf`] on a derived value, whose forward result is immutable.
    pub fn set_data(&self, data: f64) -> Result<(), NeuraScalarError> {
        super::with_graph(|graph| graph.set_data(self.id, data))
    }
}
