mod common;

use neurascalar_core::Value;
use proptest::prelude::*;

proptest! {
    #[test]
    fn tanh_derivative_is_bounded(
        x in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
    ) {
        let v = Value::new(x);
        let t = v.tanh();
        t.backward().unwrap();
        prop_assert!(v.grad() >= 0.0 && v.grad() <= 1.0);
        prop_assert!((v.grad() - (1.0 - t.data() * t.data())).abs() < 1e-12);
    }

    #[test]
    fn tanh_derivative_is_bounded_near_zero(x in -20.0f64..20.0) {
        let v = Value::new(x);
        v.tanh().backward().unwrap();
        prop_assert!(v.grad() >= 0.0 && v.grad() <= 1.0);
    }

    #[test]
    fn add_and_mul_gradients_are_symmetric(a in -100.0f64..100.0, b in -100.0f64..100.0) {
        let (x, y) = (Value::new(a), Value::new(b));
        (x + y).backward().unwrap();
        prop_assert_eq!(x.grad(), 1.0);
        prop_assert_eq!(y.grad(), 1.0);

        let (x, y) = (Value::new(a), Value::new(b));
        (x * y).backward().unwrap();
        prop_assert_eq!(x.grad(), b);
        prop_assert_eq!(y.grad(), a);
    }

    #[test]
    fn repeated_backward_repropagates_intermediate_gradients(a in -10.0f64..10.0, b in -10.0f64..10.0) {
        let (x, y) = (Value::new(a), Value::new(b));
        let out = x * y + x;
        out.backward().unwrap();
        prop_assert!((x.grad() - (b + 1.0)).abs() < 1e-9);
        prop_assert_eq!(y.grad(), a);

        // The `x * y` node keeps gradient 1 from the first pass and receives 1 more, so
        // its operands get twice the contribution this time.
        out.backward().unwrap();
        prop_assert_eq!(out.grad(), 1.0);
        prop_assert!((x.grad() - (3.0 * b + 2.0)).abs() < 1e-9);
        prop_assert!((y.grad() - 3.0 * a).abs() < 1e-9);

        // Resetting the whole subgraph restores single-pass gradients.
        out.zero_grad_all().unwrap();
        out.backward().unwrap();
        prop_assert!((x.grad() - (b + 1.0)).abs() < 1e-9);
        prop_assert_eq!(y.grad(), a);
    }

    #[test]
    fn single_level_backward_twice_doubles(a in -10.0f64..10.0, b in -10.0f64..10.0) {
        let (x, y) = (Value::new(a), Value::new(b));
        let out = x * y;
        out.backward().unwrap();
        out.backward().unwrap();
        prop_assert_eq!(x.grad(), 2.0 * b);
        prop_assert_eq!(y.grad(), 2.0 * a);
    }

    #[test]
    fn pow_matches_power_rule(a in 0.1f64..10.0, n in -3.0f64..3.0) {
        let x = Value::new(a);
        let y = x.pow(n).unwrap();
        y.backward().unwrap();
        let expected = n * a.powf(n - 1.0);
        prop_assert!((x.grad() - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }

    #[test]
    fn division_gradient(a in -10.0f64..10.0, b in 0.5f64..10.0) {
        let (x, y) = (Value::new(a), Value::new(b));
        let q = x / y;
        q.backward().unwrap();
        prop_assert!((q.data() - a / b).abs() < 1e-12);
        prop_assert!((x.grad() - 1.0 / b).abs() < 1e-12);
        prop_assert!((y.grad() + a / (b * b)).abs() < 1e-12);
    }
}

#[test]
fn tanh_saturates_without_nan_at_extremes() {
    for x in [1e300, -1e300, f64::MAX, f64::MIN, f64::MIN_POSITIVE, -0.0] {
        let v = Value::new(x);
        let t = v.tanh();
        t.backward().unwrap();
        assert!(t.data().is_finite(), "tanh({}) = {}", x, t.data());
        assert!(v.grad() >= 0.0 && v.grad() <= 1.0, "d tanh({}) = {}", x, v.grad());
    }
    let v = Value::new(1e300);
    v.tanh().backward().unwrap();
    assert_eq!(v.grad(), 0.0);
}
