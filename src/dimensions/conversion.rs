use crate::number::Coordinate;

/// Creates edges around the given `points`. Interior edges lie halfway between neighbouring points, the two outer edges
/// are placed so that the first and last bin have the same half-width as their inner neighbour:
/// ```text
///   points:     p0      p1          p2
///   edges:  e0      e1       e2          e3
/// ```
/// Requires at least two points, otherwise `Error::Undefined` is returned
pub fn edges_from_points<T: Coordinate>(points: &[T]) -> crate::Result<Vec<T>> {
    let n = points.len();
    if n < 2 {
        return Err(crate::Error::Undefined(format!(
            "edges from {} point(s), at least 2 are required",
            n
        )));
    }
    let two = T::one() + T::one();
    let half_diffs = points
        .windows(2)
        .map(|w| (w[1] - w[0]) / two)
        .collect::<Vec<_>>();

    let mut edges = Vec::with_capacity(n + 1);
    edges.push(points[0] - half_diffs[0]);
    edges.extend(points[..n - 1].iter().zip(&half_diffs).map(|(p, d)| *p + *d));
    edges.push(points[n - 1] + half_diffs[n - 2]);
    Ok(edges)
}

/// Creates points at the centers between neighbouring `edges`. Requires at least two edges, otherwise
/// `Error::InsufficientLength` is returned
pub fn points_from_edges<T: Coordinate>(edges: &[T]) -> crate::Result<Vec<T>> {
    if edges.len() < 2 {
        return Err(crate::Error::InsufficientLength { got: edges.len() });
    }
    Ok(edges
        .windows(2)
        .map(|w| T::half() * (w[0] + w[1]))
        .collect())
}
