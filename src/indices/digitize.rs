use crate::number::{Coordinate, Monotonicity};

/// Returns the index `k` of the bin `[edges[k], edges[k+1])` that contains `value`. Values below the first edge map to `-1`,
/// values at or above the last edge map to `edges.len() - 1`, i.e. the number of bins. For decreasing edges,
/// `edges[k] > value >= edges[k+1]` maps to `k`, so values at or above the first edge map to `-1`.
///
/// NaN is sorted behind every edge, so it maps to the number of bins for increasing edges and to `-1` for decreasing edges.
///
/// `edges` must be strictly monotonic in the direction given by `order`, this is not checked here.
#[inline]
pub fn digitize<T: Coordinate>(value: T, edges: &[T], order: Monotonicity) -> isize {
    let nbins = edges.len() as isize - 1;
    match order {
        Monotonicity::Increasing => {
            if value.is_nan() {
                return nbins;
            }
            edges.partition_point(|edge| *edge <= value) as isize - 1
        }
        Monotonicity::Decreasing => {
            if value.is_nan() {
                return -1;
            }
            edges.partition_point(|edge| *edge > value) as isize - 1
        }
    }
}
