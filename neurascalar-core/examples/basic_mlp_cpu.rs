//! # Training a small MLP on CPU
//!
//! Fits a 3 -> 4 -> 4 -> 1 tanh network to four labelled points with plain gradient
//! descent. The engine only computes gradients; the loop below owns the loss, the
//! parameter updates and the graph housekeeping:
//!
//! 1. Forward pass on every sample and a mean squared error loss.
//! 2. `zero_grad` on the parameters, then `backward` from the loss.
//! 3. `p <- p - lr * grad` through `Value::set_data`.
//! 4. `Value::rewind` to drop the nodes built during the step.
//!
//! Run with `RUST_LOG=debug cargo run --example basic_mlp_cpu` to see engine logs.

use neurascalar_core::nn::{Mlp, MlpConfig, Module};
use neurascalar_core::{NeuraScalarError, Value};

fn main() -> Result<(), NeuraScalarError> {
    env_logger::init();

    let mlp = Mlp::new(&MlpConfig::new(3, vec![4, 4, 1]).with_seed(42))?;
    println!("MLP created with {} parameters", mlp.num_parameters());

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let learning_rate = 0.05;
    let num_epochs = 50;
    for epoch in 0..num_epochs {
        let checkpoint = Value::checkpoint();

        let mut predictions = Vec::with_capacity(xs.len());
        let mut squared_errors = Vec::with_capacity(xs.len());
        for (x, &y) in xs.iter().zip(&ys) {
            let pred = mlp.forward_f64(x)?[0];
            squared_errors.push((pred - y).pow(2)?);
            predictions.push(pred.data());
        }
        let total: Value = squared_errors.into_iter().sum();
        let loss = total / xs.len() as f64;

        mlp.zero_grad()?;
        loss.backward()?;
        for param in mlp.parameters() {
            param.set_data(param.data() - learning_rate * param.grad())?;
        }

        if epoch % 10 == 0 || epoch + 1 == num_epochs {
            println!(
                "Epoch [{}/{}], Loss: {:.6}, Predictions: {:?}",
                epoch + 1,
                num_epochs,
                loss.data(),
                predictions
            );
        }

        Value::rewind(checkpoint);
    }

    println!("\nTraining finished. Graph holds {} nodes.", Value::graph_len());
    Ok(())
}
