use crate::value::Value;

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    /// No activation (linear unit).
    Identity,
}

impl Activation {
    pub fn apply(self, x: Value) -> Value {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Identity => x,
        }
    }
}
