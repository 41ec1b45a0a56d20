#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::{check_grad, GradCheckError};
    use crate::autograd::ComputationGraph;
    use crate::error::NeuraScalarError;
    use crate::ops::activation::tanh_op;
    use crate::value::Value;
    use approx::assert_relative_eq;

    #[test]
    fn test_tanh_forward() -> Result<(), NeuraScalarError> {
        let mut graph = ComputationGraph::new();
        let x = graph.leaf(0.5);
        let out = tanh_op(&mut graph, x)?;
        let e2x = (2.0f64 * 0.5).exp();
        assert_relative_eq!(graph.data(out)?, (e2x - 1.0) / (e2x + 1.0), epsilon = 1e-12);
        assert_eq!(graph.node(out)?.op().label(), "tanh");
        Ok(())
    }

    #[test]
    fn test_tanh_backward() -> Result<(), NeuraScalarError> {
        let mut graph = ComputationGraph::new();
        let x = graph.leaf(0.8814);
        let out = tanh_op(&mut graph, x)?;
        graph.backward(out)?;
        let t = 0.8814f64.tanh();
        assert_relative_eq!(graph.grad(x)?, 1.0 - t * t, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_tanh_saturates_without_nan() -> Result<(), NeuraScalarError> {
        let mut graph = ComputationGraph::new();
        let big = graph.leaf(1000.0);
        let small = graph.leaf(-1000.0);
        let out_big = tanh_op(&mut graph, big)?;
        let out_small = tanh_op(&mut graph, small)?;
        assert_eq!(graph.data(out_big)?, 1.0);
        assert_eq!(graph.data(out_small)?, -1.0);
        graph.backward(out_big)?;
        assert_eq!(graph.grad(big)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_tanh_value_method() {
        let x = Value::new(0.0);
        let out = x.tanh();
        assert_eq!(out.data(), 0.0);
        out.backward().unwrap();
        assert_eq!(x.grad(), 1.0);
    }

    #[test]
    fn test_tanh_grad_check() -> Result<(), GradCheckError> {
        check_grad(|x| Ok((x[0] * x[1]).tanh()), &[0.3, -1.1], 1e-6, 1e-5)
    }
}
