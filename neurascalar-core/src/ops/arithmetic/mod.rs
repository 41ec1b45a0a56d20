// Primitive operations (own a BackwardOp variant)
pub mod add;
pub mod mul;
pub mod pow;
// Composites
pub mod div;
pub mod neg;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;

/// Implements a `std::ops` binary operator for `Value ∘ Value`, `Value ∘ f64` and
/// `f64 ∘ Value` on top of an arena-level `xxx_op` function.
///
/// # Panics
/// The generated operators panic if a `Value` handle was invalidated by `Value::rewind`.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl std::ops::$trait<crate::value::Value> for crate::value::Value {
            type Output = crate::value::Value;

            fn $method(self, rhs: crate::value::Value) -> Self::Output {
                crate::value::Value::record(stringify!($method), |graph| $op_fn(graph, self, rhs))
            }
        }

        impl std::ops::$trait<f64> for crate::value::Value {
            type Output = crate::value::Value;

            fn $method(self, rhs: f64) -> Self::Output {
                crate::value::Value::record(stringify!($method), |graph| $op_fn(graph, self, rhs))
            }
        }

        impl std::ops::$trait<crate::value::Value> for f64 {
            type Output = crate::value::Value;

            fn $method(self, rhs: crate::value::Value) -> Self::Output {
                crate::value::Value::record(stringify!($method), |graph| $op_fn(graph, self, rhs))
            }
        }
    };
}

impl_binary_operator!(Add, add, add::add_op);
impl_binary_operator!(Sub, sub, sub::sub_op);
impl_binary_operator!(Mul, mul, mul::mul_op);
impl_binary_operator!(Div, div, div::div_op);
