mod common;

use common::{init_logger, small_mlp};
use neurascalar_core::autograd::grad_check::{check_grad, GradCheckError};
use neurascalar_core::nn::{Layer, Mlp, Module};
use neurascalar_core::utils::testing::leaves;
use neurascalar_core::{NeuraScalarError, Value};

#[test]
fn mlp_forward_backward_reaches_every_parameter() -> Result<(), NeuraScalarError> {
    init_logger();
    let mlp = small_mlp(1337)?;
    assert_eq!(mlp.num_parameters(), 4 * 3 + 5);

    let out = mlp.forward(&leaves(&[1.0, -1.0]))?;
    assert_eq!(out.len(), 1);
    let y = out[0];
    assert!(y.data() > -1.0 && y.data() < 1.0);

    y.backward()?;
    for (name, param) in mlp.named_parameters() {
        assert!(param.grad() != 0.0, "{} received no gradient", name);
        assert!(param.grad().is_finite(), "{} has a non-finite gradient", name);
    }

    mlp.zero_grad()?;
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn mlp_gradients_match_finite_differences() -> Result<(), GradCheckError> {
    init_logger();
    let mlp = small_mlp(5)?;
    check_grad(
        |x| {
            let out = mlp.forward(x)?;
            Ok(out[0])
        },
        &[0.3, -0.6],
        1e-6,
        1e-5,
    )
}

#[test]
fn mlp_parameter_gradients_match_finite_differences() -> Result<(), NeuraScalarError> {
    let mlp = small_mlp(9)?;
    let x = leaves(&[0.8, 0.1]);
    mlp.forward(&x)?[0].backward()?;

    let eps = 1e-6;
    for param in mlp.parameters() {
        let original = param.data();
        let checkpoint = Value::checkpoint();
        param.set_data(original + eps)?;
        let plus = mlp.forward(&x)?[0].data();
        param.set_data(original - eps)?;
        let minus = mlp.forward(&x)?[0].data();
        param.set_data(original)?;
        Value::rewind(checkpoint);

        let numerical = (plus - minus) / (2.0 * eps);
        assert!(
            (param.grad() - numerical).abs() < 1e-6,
            "analytical {} vs numerical {}",
            param.grad(),
            numerical
        );
    }
    Ok(())
}

#[test]
fn mlp_rejects_wrong_input_width() -> Result<(), NeuraScalarError> {
    let mlp = small_mlp(0)?;
    let result = mlp.forward(&leaves(&[1.0, 2.0, 3.0]));
    assert_eq!(
        result.unwrap_err(),
        NeuraScalarError::DimensionMismatch { expected: 2, actual: 3 }
    );
    Ok(())
}

#[test]
fn same_seed_builds_identical_networks() -> Result<(), NeuraScalarError> {
    let a = small_mlp(21)?;
    let b = small_mlp(21)?;
    let c = small_mlp(22)?;
    let data = |m: &Mlp| m.parameters().iter().map(|p| p.data()).collect::<Vec<f64>>();
    assert_eq!(data(&a), data(&b));
    assert_ne!(data(&a), data(&c));
    Ok(())
}

#[test]
fn gradient_descent_reduces_loss() -> Result<(), NeuraScalarError> {
    init_logger();
    let mlp = small_mlp(3)?;
    let xs = [[2.0, 3.0], [3.0, -1.0], [0.5, 1.0], [1.0, 1.0]];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut losses = Vec::new();
    for _ in 0..30 {
        let checkpoint = Value::checkpoint();
        let mut terms = Vec::new();
        for (x, &y) in xs.iter().zip(&ys) {
            let pred = mlp.forward(&leaves(x))?[0];
            terms.push((pred - y).pow(2)?);
        }
        let loss: Value = terms.into_iter().sum();
        losses.push(loss.data());

        mlp.zero_grad()?;
        loss.backward()?;
        for p in mlp.parameters() {
            p.set_data(p.data() - 0.05 * p.grad())?;
        }
        Value::rewind(checkpoint);
    }
    assert!(losses.last() < losses.first(), "loss did not decrease: {:?}", losses);
    Ok(())
}

#[test]
fn rewind_keeps_graph_bounded_across_steps() -> Result<(), NeuraScalarError> {
    let mlp = small_mlp(4)?;
    let base = Value::graph_len();
    for _ in 0..5 {
        let checkpoint = Value::checkpoint();
        mlp.forward(&leaves(&[0.1, 0.2]))?[0].backward()?;
        Value::rewind(checkpoint);
        assert_eq!(Value::graph_len(), base);
    }
    Ok(())
}

#[test]
fn layers_chain_into_network() -> Result<(), NeuraScalarError> {
    let mlp = small_mlp(8)?;
    let rebuilt = Mlp::from_layers(mlp.layers().to_vec())?;
    let x = leaves(&[0.4, -0.2]);
    assert_eq!(mlp.forward(&x)?[0].data(), rebuilt.forward(&x)?[0].data());
    let widths: Vec<(usize, usize)> = rebuilt.layers().iter().map(|l: &Layer| (l.nin(), l.nout())).collect();
    assert_eq!(widths, vec![(2, 4), (4, 1)]);
    Ok(())
}
