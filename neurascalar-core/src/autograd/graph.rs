use crate::autograd::BackwardOp;
use crate::error::NeuraScalarError;
use crate::ops::Operand;
use std::collections::HashSet;
use std::fmt;

/// Handle to a node stored in a [`ComputationGraph`].
///
/// A `NodeId` is an arena index plus the generation the node was created in: cheap to
/// copy, hash and compare. Truncating the graph starts a new generation, so an id whose
/// node was dropped never resolves to a node later pushed at the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u64,
}

impl NodeId {
    pub(crate) fn new(index: usize, generation: u64) -> Self {
        NodeId { index, generation }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.index)
    }
}

/// A scalar node: forward value, accumulated gradient and the rule that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: BackwardOp,
    pub(crate) label: Option<String>,
    pub(crate) generation: u64,
}

impl Node {
    pub fn data(&self) -> f64 {
        self.data
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> &BackwardOp {
        &self.op
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Arena holding every scalar node of a computation.
///
/// Nodes are appended as operations execute and are addressed by [`NodeId`]. Operands are
/// always appended before the nodes that use them, so every operand index is strictly lower
/// than the index of its user. This is what makes [`ComputationGraph::truncate`] safe: the
/// surviving prefix never refers past its own end. Every truncation bumps the graph's
/// generation, and ids are checked against the generation stamped on their node.
#[derive(Debug, Default, Clone)]
pub struct ComputationGraph {
    nodes: Vec<Node>,
    generation: u64,
}

impl ComputationGraph {
    pub fn new() -> Self {
        ComputationGraph {
            nodes: Vec::new(),
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a leaf node (no operands, zero gradient).
    pub fn leaf(&mut self, data: f64) -> NodeId {
        self.push(data, BackwardOp::Leaf)
    }

    /// Creates a labelled leaf node.
    pub fn labelled_leaf(&mut self, data: f64, label: impl Into<String>) -> NodeId {
        let id = self.leaf(data);
        self.nodes[id.index].label = Some(label.into());
        id
    }

    /// Appends a node produced by `op`. Operand ids in `op` must already be valid.
    pub(crate) fn push(&mut self, data: f64, op: BackwardOp) -> NodeId {
        debug_assert!(op.inputs().iter().all(|&input| self.check(input).is_ok()));
        let id = NodeId::new(self.nodes.len(), self.generation);
        self.nodes.push(Node {
            data,
            grad: 0.0,
            op,
            label: None,
            generation: self.generation,
        });
        id
    }

    /// Turns an operand into a node id, promoting bare numbers to fresh leaves.
    pub fn resolve(&mut self, operand: Operand) -> Result<NodeId, NeuraScalarError> {
        match operand {
            Operand::Node(id) => {
                self.check(id)?;
                Ok(id)
            }
            Operand::Constant(data) => Ok(self.leaf(data)),
        }
    }

    /// Validates a node operand without touching the arena. Constants always pass.
    ///
    /// Operations check every operand before promoting any constant, so a failing call
    /// appends nothing.
    pub fn check_operand(&self, operand: Operand) -> Result<(), NeuraScalarError> {
        match operand {
            Operand::Node(id) => self.check(id),
            Operand::Constant(_) => Ok(()),
        }
    }

    /// Fails for ids past the end and for ids whose node was dropped by a truncation,
    /// even if a newer node now sits at the same index.
    fn check(&self, id: NodeId) -> Result<(), NeuraScalarError> {
        match self.nodes.get(id.index) {
            Some(node) if node.generation == id.generation => Ok(()),
            _ => Err(NeuraScalarError::NodeNotFound {
                id: id.index,
                len: self.nodes.len(),
            }),
        }
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, NeuraScalarError> {
        self.check(id)?;
        Ok(&self.nodes[id.index])
    }

    pub fn data(&self, id: NodeId) -> Result<f64, NeuraScalarError> {
        self.node(id).map(|node| node.data)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, NeuraScalarError> {
        self.node(id).map(|node| node.grad)
    }

    /// Ids of the operands `id` was derived from (empty for leaves).
    pub fn operands(&self, id: NodeId) -> Result<Vec<NodeId>, NeuraScalarError> {
        self.node(id).map(|node| node.op.inputs())
    }

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), NeuraScalarError> {
        self.check(id)?;
        self.nodes[id.index].label = Some(label.into());
        Ok(())
    }

    /// Overwrites the gradient of a single node.
    pub fn set_grad(&mut self, id: NodeId, grad: f64) -> Result<(), NeuraScalarError> {
        self.check(id)?;
        self.nodes[id.index].grad = grad;
        Ok(())
    }

    /// Resets the gradient of a single node to 0.
    pub fn zero_grad(&mut self, id: NodeId) -> Result<(), NeuraScalarError> {
        self.set_grad(id, 0.0)
    }

    /// Replaces the value of a leaf node.
    ///
    /// Derived nodes are immutable; only leaves (inputs and parameters) can be re-assigned,
    /// typically by a caller applying a gradient-descent update between passes. Nodes
    /// previously derived from the leaf keep their old forward value.
    pub fn set_data(&mut self, id: NodeId, data: f64) -> Result<(), NeuraScalarError> {
        self.check(id)?;
        let node = &mut self.nodes[id.index];
        if !node.op.is_leaf() {
            return Err(NeuraScalarError::NotALeaf {
                id: id.index,
                operation: "set_data".to_string(),
            });
        }
        node.data = data;
        Ok(())
    }

    // Unchecked accessors for backward kernels: ids come from a validated `BackwardOp`.
    pub(crate) fn value_of(&self, id: NodeId) -> f64 {
        self.nodes[id.index].data
    }

    pub(crate) fn accumulate_grad(&mut self, id: NodeId, delta: f64) {
        self.nodes[id.index].grad += delta;
    }

    /// Copies the gradient of every node, in arena order.
    pub fn grad_snapshot(&self) -> Vec<f64> {
        self.nodes.iter().map(|node| node.grad).collect()
    }

    /// Writes back gradients taken by [`ComputationGraph::grad_snapshot`]. Nodes past the
    /// end of either side are left alone.
    pub fn restore_grads(&mut self, grads: &[f64]) {
        for (node, &grad) in self.nodes.iter_mut().zip(grads) {
            node.grad = grad;
        }
    }

    /// Current arena length, to be passed to [`ComputationGraph::truncate`] later.
    pub fn mark(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every node created after `mark`. Ids at or past `mark` become invalid and stay
    /// invalid once new nodes reuse their indices.
    pub fn truncate(&mut self, mark: usize) {
        if mark < self.nodes.len() {
            log::trace!("Truncating computation graph from {} to {} nodes", self.nodes.len(), mark);
            self.nodes.truncate(mark);
            self.generation += 1;
        }
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Builds a post-order (operands before users) sequence of all nodes reachable from
    /// `root`, each node appearing once.
    ///
    /// Iterative depth-first search: each stack frame is a node plus the position of the
    /// next operand to visit, so deep operand chains cannot overflow the call stack.
    pub(crate) fn build_topo(&self, root: NodeId) -> Result<Vec<NodeId>, NeuraScalarError> {
        self.check(root)?;
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut sorted_list = Vec::new();
        let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
        visited.insert(root);

        while let Some((node_id, next_input)) = stack.pop() {
            let inputs = self.nodes[node_id.index].op.inputs();
            if let Some(&input) = inputs.get(next_input) {
                stack.push((node_id, next_input + 1));
                if visited.insert(input) {
                    log::trace!("[build_topo] {} -> visiting operand {}", node_id, input);
                    stack.push((input, 0));
                }
            } else {
                sorted_list.push(node_id);
            }
        }
        Ok(sorted_list)
    }

    /// Computes dRoot/dNode for every node reachable from `root`.
    ///
    /// Seeds the root gradient to 1.0 and applies each node's local rule in reverse
    /// post-order, so a node runs only after every node depending on it has contributed.
    /// Gradients are **not** reset first: calling this twice accumulates. Use
    /// [`ComputationGraph::zero_grad_all`] or reset the parameters yourself.
    pub fn backward(&mut self, root: NodeId) -> Result<(), NeuraScalarError> {
        let mut topo = self.build_topo(root)?;
        let root_data = self.nodes[root.index].data;
        if !root_data.is_finite() {
            log::warn!("backward() called from {} with non-finite value {}", root, root_data);
        }
        if self.nodes[root.index].op.is_leaf() {
            log::debug!("backward() called on leaf {}. Only the seed gradient is set.", root);
        }
        log::debug!("backward() from {}: {} reachable nodes", root, topo.len());

        self.nodes[root.index].grad = 1.0;
        while let Some(node_id) = topo.pop() {
            let node = &self.nodes[node_id.index];
            let (op, data, grad) = (node.op, node.data, node.grad);
            op.apply(self, data, grad);
        }
        Ok(())
    }

    /// Resets the gradient of every node reachable from `root` (root included) to 0.
    pub fn zero_grad_all(&mut self, root: NodeId) -> Result<(), NeuraScalarError> {
        let topo = self.build_topo(root)?;
        for node_id in topo {
            self.nodes[node_id.index].grad = 0.0;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
