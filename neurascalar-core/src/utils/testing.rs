use crate::value::Value;

/// Checks that the forward values of `actual` match `expected` within `tolerance`.
/// Panics on a length mismatch or on the first value outside the tolerance.
pub fn check_values_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Value count mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let a = a.data();
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Same as [`check_values_near`], on gradients.
pub fn check_grads_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Value count mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let g = a.grad();
        let diff = (g - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, g, e, diff, tolerance
            );
        }
    }
}

/// Creates one leaf per number.
pub fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}
