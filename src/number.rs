use std::fmt::{Debug, Display};

use num_traits::Float;

/// Trait for the scalar type of edges, points and samples. Any floating-point type qualifies, so grids work
/// with both `f32` and `f64` values
pub trait Coordinate: Float + Debug + Display + 'static {
    /// `0.5` in this type
    fn half() -> Self {
        Self::one() / (Self::one() + Self::one())
    }
}

impl<F: Float + Debug + Display + 'static> Coordinate for F {}

/// Direction of a strictly monotonic sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monotonicity {
    Increasing,
    Decreasing,
}

/// Returns the direction of `values` if the sequence is strictly monotonic, `None` otherwise. Sequences with fewer
/// than two values are considered increasing. NaN values break monotonicity
pub fn monotonicity<T: Coordinate>(values: &[T]) -> Option<Monotonicity> {
    if values.len() < 2 {
        return Some(Monotonicity::Increasing);
    }
    if values.windows(2).all(|w| w[0] < w[1]) {
        Some(Monotonicity::Increasing)
    } else if values.windows(2).all(|w| w[0] > w[1]) {
        Some(Monotonicity::Decreasing)
    } else {
        None
    }
}
