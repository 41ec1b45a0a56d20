use crate::error::NeuraScalarError;
use crate::value::{with_graph, Value};
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(NeuraScalarError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(NeuraScalarError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Scalar engine error during gradient check: {0}")]
    ScalarError(NeuraScalarError),
}

impl From<NeuraScalarError> for GradCheckError {
    fn from(err: NeuraScalarError) -> Self {
        GradCheckError::ScalarError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` is evaluated on fresh leaves built from `inputs`. Its output is differentiated
/// with `backward`, then each input is perturbed by `±epsilon` and
/// `(f(x + eps) - f(x - eps)) / (2 * eps)` is compared with the analytical gradient.
/// A gradient passes if it is within `tolerance` either absolutely or relatively.
///
/// Every node created here is released before returning (the thread-local graph is
/// rewound to its size on entry). The backward pass also reaches leaves captured by
/// `func`, such as network parameters; their gradients are restored on return.
pub fn check_grad<F>(func: F, inputs: &[f64], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, NeuraScalarError>,
{
    let saved_grads = with_graph(|graph| graph.grad_snapshot());
    let checkpoint = Value::checkpoint();
    let result = run_check(&func, inputs, epsilon, tolerance);
    Value::rewind(checkpoint);
    with_graph(|graph| graph.restore_grads(&saved_grads));
    result
}

fn run_check<F>(func: &F, inputs: &[f64], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, NeuraScalarError>,
{
    // --- 1. Analytical gradients ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();

    // --- 2. Numerical gradients, one input at a time ---
    for (input_index, &analytical_grad) in analytical_grads.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate_perturbed(func, inputs, input_index, epsilon)?;
        let loss_minus = evaluate_perturbed(func, inputs, input_index, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        log::trace!(
            "check_grad input {}: analytical={} numerical={} diff={}",
            input_index,
            analytical_grad,
            numerical_grad,
            difference
        );
        if !relative_eq!(analytical_grad, numerical_grad, epsilon = tolerance, max_relative = tolerance) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

/// Evaluates `func` with `inputs[index]` shifted by `delta`, on a throwaway set of leaves.
fn evaluate_perturbed<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, NeuraScalarError>,
{
    let checkpoint = Value::checkpoint();
    let leaves: Vec<Value> = inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| Value::new(if i == index { x + delta } else { x }))
        .collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError);
    let loss = output.map(|value| value.data());
    Value::rewind(checkpoint);
    loss
}
