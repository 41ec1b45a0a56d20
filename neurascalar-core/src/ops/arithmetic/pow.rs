use crate::autograd::{BackwardOp, ComputationGraph, NodeId};
use crate::error::NeuraScalarError;
use crate::ops::Operand;
use crate::value::Value;
use num_traits::ToPrimitive;

/// Converts an exponent to a finite `f64` or rejects it.
fn real_exponent<E: ToPrimitive>(exponent: E) -> Result<f64, NeuraScalarError> {
    match exponent.to_f64() {
        Some(value) if value.is_finite() => Ok(value),
        Some(value) => Err(NeuraScalarError::InvalidArgument {
            operation: "pow".to_string(),
            reason: format!("exponent must be a finite real number, got {}", value),
        }),
        None => Err(NeuraScalarError::InvalidArgument {
            operation: "pow".to_string(),
            reason: "exponent is not representable as a real number".to_string(),
        }),
    }
}

// --- Forward Operation ---

/// Appends `base ^ exponent` to the graph.
///
/// The exponent is a constant, never a node: raising to another node's power is not
/// supported. `NaN` and infinite exponents are rejected with
/// [`NeuraScalarError::InvalidArgument`]. A negative base with a fractional exponent
/// follows `f64::powf` and yields `NaN`.
pub fn pow_op<E: ToPrimitive>(
    graph: &mut ComputationGraph,
    base: impl Into<Operand>,
    exponent: E,
) -> Result<NodeId, NeuraScalarError> {
    let exponent = real_exponent(exponent)?;
    let base = graph.resolve(base.into())?;
    let data = graph.data(base)?.powf(exponent);
    Ok(graph.push(data, BackwardOp::Pow { base, exponent }))
}

// --- Backward Operation ---

/// grad_base += n * base^(n-1) * grad_out
///
/// `base^0` is constant, so `n == 0` contributes nothing (the literal formula would give
/// `0 * 0^-1 = NaN` at `base == 0`).
pub(crate) fn pow_backward(graph: &mut ComputationGraph, out_grad: f64, base: NodeId, exponent: f64) {
    if exponent == 0.0 {
        return;
    }
    let base_data = graph.value_of(base);
    graph.accumulate_grad(base, exponent * base_data.powf(exponent - 1.0) * out_grad);
}

impl Value {
    /// Returns `self ^ exponent` with gradient tracking.
    ///
    /// # Errors
    /// [`NeuraScalarError::InvalidArgument`] if the exponent is not a finite real number.
    pub fn pow<E: ToPrimitive>(self, exponent: E) -> Result<Value, NeuraScalarError> {
        Value::try_record(|graph| pow_op(graph, self, exponent))
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
