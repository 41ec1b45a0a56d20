// src/value/traits.rs

use super::Value;
use std::fmt;
use std::iter::Sum;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_read(|node| (node.data, node.grad)) {
            Ok((data, grad)) => write!(f, "Value(data={}, grad={})", data, grad),
            Err(_) => write!(f, "Value(<released {}>)", self.id),
        }
    }
}

impl fmt::Debug for Value {
    /// Shows the arena id, the op tag and the label next to data and grad.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.try_read(|node| (node.data, node.grad, node.op.label(), node.label.clone()));
        match summary {
            Ok((data, grad, op, label)) => f
                .debug_struct("Value")
                .field("id", &self.id)
                .field("data", &data)
                .field("grad", &grad)
                .field("op", &op)
                .field("label", &label)
                .finish(),
            Err(_) => write!(f, "Value(<released {}>)", self.id),
        }
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl Sum for Value {
    /// Left fold with `+`. An empty iterator yields a new leaf `0.0`.
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.reduce(|acc, value| acc + value)
            .unwrap_or_else(|| Value::new(0.0))
    }
}
