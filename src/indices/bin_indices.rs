use nalgebra::DMatrix;

/// Per-dimension bin indices for a set of samples, as computed by `RectilinearGrid::compute_indices`. Row `d` holds the bin
/// indices along dimension `d`, column `s` holds the multi-dimensional bin index of sample `s`:
/// ```text
///              sample 0  sample 1  sample 2
///   dim 0  [      0        -1         3     ]
///   dim 1  [      2         1         0     ]
/// ```
/// Indices are not clamped. A value of `-1` means the sample lies below the first edge of that dimension, a value equal to
/// the number of bins means it lies at or above the last edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinIndices {
    indices: DMatrix<isize>,
}

impl BinIndices {
    pub(crate) fn new(indices: DMatrix<isize>) -> Self {
        Self { indices }
    }

    /// Number of dimensions, i.e. rows
    pub fn ndim(&self) -> usize {
        self.indices.nrows()
    }

    /// Number of samples, i.e. columns
    pub fn sample_count(&self) -> usize {
        self.indices.ncols()
    }

    /// Bin index of `sample` along `dimension`
    ///
    /// # Panics
    ///
    /// If `dimension >= self.ndim()` or `sample >= self.sample_count()`
    pub fn get(&self, dimension: usize, sample: usize) -> isize {
        self.indices[(dimension, sample)]
    }

    /// All bin indices along `dimension`
    pub fn dimension(&self, dimension: usize) -> Vec<isize> {
        self.indices.row(dimension).iter().copied().collect()
    }

    /// The multi-dimensional bin index of `sample`
    pub fn sample(&self, sample: usize) -> Vec<isize> {
        self.indices.column(sample).iter().copied().collect()
    }

    pub fn as_matrix(&self) -> &DMatrix<isize> {
        &self.indices
    }

    pub fn into_matrix(self) -> DMatrix<isize> {
        self.indices
    }
}
