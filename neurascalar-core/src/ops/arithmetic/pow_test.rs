#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::{check_grad, GradCheckError};
    use crate::autograd::ComputationGraph;
    use crate::error::NeuraScalarError;
    use crate::ops::arithmetic::pow_op;
    use crate::value::Value;
    use approx::assert_relative_eq;

    #[test]
    fn test_pow_forward() -> Result<(), NeuraScalarError> {
        let mut graph = ComputationGraph::new();
        let a = graph.leaf(3.0);
        let out = pow_op(&mut graph, a, 2)?;
        assert_eq!(graph.data(out)?, 9.0);
        assert_eq!(graph.node(out)?.op().label(), "**2");
        Ok(())
    }

    #[test]
    fn test_pow_backward() -> Result<(), NeuraScalarError> {
        let mut graph = ComputationGraph::new();
        let a = graph.leaf(2.0);
        let out = pow_op(&mut graph, a, 3.0)?;
        assert_relative_eq!(graph.data(out)?, 8.0, epsilon = 1e-12);
        graph.backward(out)?;
        // d/dx x^3 = 3x^2 = 12 at x=2
        assert_relative_eq!(graph.grad(a)?, 12.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_pow_negative_exponent() -> Result<(), NeuraScalarError> {
        let mut graph = ComputationGraph::new();
        let a = graph.leaf(4.0);
        let out = pow_op(&mut graph, a, -1.0)?;
        assert_relative_eq!(graph.data(out)?, 0.25);
        graph.backward(out)?;
        // d/dx x^-1 = -x^-2
        assert_relative_eq!(graph.grad(a)?, -1.0 / 16.0);
        Ok(())
    }

    #[test]
    fn test_pow_rejects_non_real_exponents() {
        let mut graph = ComputationGraph::new();
        let a = graph.leaf(2.0);
        for exponent in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = pow_op(&mut graph, a, exponent);
            assert!(
                matches!(result, Err(NeuraScalarError::InvalidArgument { ref operation, .. }) if operation == "pow"),
                "exponent {} should be rejected, got {:?}",
                exponent,
                result
            );
        }
        // Nothing was appended for the rejected calls.
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_pow_zero_exponent_has_zero_gradient() -> Result<(), NeuraScalarError> {
        let mut graph = ComputationGraph::new();
        let a = graph.leaf(0.0);
        let out = pow_op(&mut graph, a, 0)?;
        assert_eq!(graph.data(out)?, 1.0);
        graph.backward(out)?;
        assert_eq!(graph.grad(a)?, 0.0);

        let b = graph.leaf(3.0);
        let out = pow_op(&mut graph, b, 0.0)?;
        graph.backward(out)?;
        assert_eq!(graph.grad(b)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_pow_value_method() -> Result<(), NeuraScalarError> {
        let a = Value::new(3.0);
        let out = a.pow(2)?;
        assert_eq!(out.data(), 9.0);
        out.backward()?;
        assert_eq!(a.grad(), 6.0);
        assert!(a.pow(f64::NAN).is_err());
        Ok(())
    }

    #[test]
    fn test_pow_grad_check() -> Result<(), GradCheckError> {
        check_grad(|x| x[0].pow(2.5), &[1.3], 1e-6, 1e-5)?;
        check_grad(|x| x[0].pow(-2), &[0.8], 1e-6, 1e-5)
    }
}
