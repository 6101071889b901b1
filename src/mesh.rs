use crate::number::Coordinate;

/// Axis order of a `MeshGrid`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indexing {
    /// Cartesian indexing: the first two axes are swapped, so for two dimensions `x` and `y` the mesh has the shape
    /// `(len(y), len(x))`. This matches the usual layout of images and plots
    #[default]
    Cartesian,
    /// Matrix indexing: axis `i` of the mesh corresponds to dimension `i`
    Matrix,
}

/// Coordinates of all nodes of an N-dimensional rectilinear mesh. For every dimension, the mesh stores one array with the
/// coordinate of each node along that dimension. All arrays share the same `shape` and are stored flattened in row-major
/// order
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGrid<T: Coordinate> {
    shape: Vec<usize>,
    coordinates: Vec<Vec<T>>,
}

impl<T: Coordinate> MeshGrid<T> {
    /// Creates the mesh spanned by the given `axes`, one coordinate array per axis
    pub fn new<A: AsRef<[T]>>(axes: &[A], indexing: Indexing) -> Self {
        let ndim = axes.len();
        let mut shape = axes.iter().map(|axis| axis.as_ref().len()).collect::<Vec<_>>();
        let swapped = indexing == Indexing::Cartesian && ndim >= 2;
        if swapped {
            shape.swap(0, 1);
        }
        let node_count = if ndim == 0 {
            0
        } else {
            shape.iter().product::<usize>()
        };

        let coordinates = axes
            .iter()
            .enumerate()
            .map(|(dim, axis)| {
                let axis = axis.as_ref();
                let mesh_axis = match (swapped, dim) {
                    (true, 0) => 1,
                    (true, 1) => 0,
                    _ => dim,
                };
                let stride = shape[mesh_axis + 1..].iter().product::<usize>();
                (0..node_count)
                    .map(|node| axis[(node / stride) % shape[mesh_axis]])
                    .collect()
            })
            .collect();

        Self { shape, coordinates }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.coordinates.len()
    }

    /// Number of nodes in the mesh
    pub fn node_count(&self) -> usize {
        self.coordinates.first().map(|c| c.len()).unwrap_or(0)
    }

    /// The flattened coordinates along `dimension` of all nodes
    ///
    /// # Panics
    ///
    /// If `dimension >= self.ndim()`
    pub fn coordinates(&self, dimension: usize) -> &[T] {
        &self.coordinates[dimension]
    }

    /// Coordinate along `dimension` of the node at the given multi-dimensional `index` into the mesh. Returns `None` if
    /// either is out of range
    pub fn get(&self, dimension: usize, index: &[usize]) -> Option<T> {
        if index.len() != self.shape.len() || index.iter().zip(&self.shape).any(|(i, len)| i >= len) {
            return None;
        }
        let flat = index
            .iter()
            .zip(&self.shape)
            .fold(0, |flat, (i, len)| flat * len + i);
        self.coordinates.get(dimension).map(|c| c[flat])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_indexing() {
        let mesh = MeshGrid::new(&[vec![1.0, 2.0], vec![10.0, 20.0, 30.0]], Indexing::Matrix);
        assert_eq!(&[2, 3], mesh.shape());
        assert_eq!(6, mesh.node_count());
        assert_eq!(&[1.0, 1.0, 1.0, 2.0, 2.0, 2.0], mesh.coordinates(0));
        assert_eq!(&[10.0, 20.0, 30.0, 10.0, 20.0, 30.0], mesh.coordinates(1));
        assert_eq!(Some(2.0), mesh.get(0, &[1, 2]));
        assert_eq!(Some(30.0), mesh.get(1, &[1, 2]));
        assert_eq!(None, mesh.get(1, &[2, 0]));
    }

    #[test]
    fn cartesian_indexing() {
        let mesh = MeshGrid::new(&[vec![1.0, 2.0], vec![10.0, 20.0, 30.0]], Indexing::Cartesian);
        assert_eq!(&[3, 2], mesh.shape());
        assert_eq!(&[1.0, 2.0, 1.0, 2.0, 1.0, 2.0], mesh.coordinates(0));
        assert_eq!(&[10.0, 10.0, 20.0, 20.0, 30.0, 30.0], mesh.coordinates(1));
    }

    #[test]
    fn three_dimensions() {
        let axes = [vec![0.0, 1.0], vec![0.0, 1.0, 2.0], vec![5.0, 6.0]];
        let mesh = MeshGrid::new(&axes, Indexing::Cartesian);
        assert_eq!(&[3, 2, 2], mesh.shape());
        assert_eq!(12, mesh.node_count());
        // index (y, x, z)
        assert_eq!(Some(1.0), mesh.get(0, &[2, 1, 0]));
        assert_eq!(Some(2.0), mesh.get(1, &[2, 1, 0]));
        assert_eq!(Some(6.0), mesh.get(2, &[2, 1, 1]));
    }

    #[test]
    fn single_and_no_axes() {
        let mesh = MeshGrid::new(&[vec![1.0f32, 2.0]], Indexing::Cartesian);
        assert_eq!(&[2], mesh.shape());
        assert_eq!(&[1.0f32, 2.0], mesh.coordinates(0));

        let empty = MeshGrid::<f64>::new::<Vec<f64>>(&[], Indexing::Matrix);
        assert_eq!(0, empty.ndim());
        assert_eq!(0, empty.node_count());
    }
}
