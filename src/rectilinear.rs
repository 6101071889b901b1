use std::borrow::Cow;

use nalgebra::DMatrix;

use crate::dimensions::Dimension;
use crate::number::{monotonicity, Coordinate};
use crate::{digitize, BinIndices, Indexing, MeshGrid};

/// Trait for any ordered collection of named dimensions that forms a rectilinear grid. This contains the read-only
/// functionality that is shared between an owned `Grid` and a `GridView` borrowing from one:
/// - Querying the dimensions, their names, edges and points
/// - Querying the shape and size of the grid
/// - Computing the bin indices of samples
/// - Building mesh grids from the edges or points
pub trait RectilinearGrid {
    type Coord: Coordinate;

    /// Number of grid dimensions
    fn ndim(&self) -> usize;
    /// Returns the dimension at the given `position`, or `None` if `position >= self.ndim()`
    fn dimension_at(&self, position: usize) -> Option<&Dimension<Self::Coord>>;

    /// Iterate over all dimensions in order
    fn dimensions(&self) -> DimensionIter<'_, Self> {
        DimensionIter {
            grid: self,
            index: 0,
        }
    }

    /// True if the grid has at least one dimension and the edges of every dimension are known, either because they were set
    /// or because they can be derived from the points
    fn initialized(&self) -> bool {
        self.ndim() > 0 && self.dimensions().all(|dim| dim.edges().is_some())
    }

    /// Names of all dimensions in order
    fn vars(&self) -> Vec<&str> {
        self.dimensions()
            .map(|dim| dim.name().unwrap_or_default())
            .collect()
    }

    /// Edges of all dimensions in order, see `Dimension::edges`
    fn edges(&self) -> Vec<Option<Cow<'_, [Self::Coord]>>> {
        self.dimensions().map(|dim| dim.edges()).collect()
    }

    /// Points of all dimensions in order, see `Dimension::points`
    fn points(&self) -> Vec<Option<Cow<'_, [Self::Coord]>>> {
        self.dimensions().map(|dim| dim.points()).collect()
    }

    /// Number of bins of each dimension in order. Dimensions without edges or points have no length
    fn shape(&self) -> Vec<Option<usize>> {
        self.dimensions().map(|dim| dim.len()).collect()
    }

    /// Total number of bins in the grid, i.e. the product of all dimension lengths. Fails with
    /// `Error::UninitializedDimension` if any dimension has no length, and with `Error::SizeOverflow` if the product does
    /// not fit into a `usize`
    fn size(&self) -> crate::Result<usize> {
        self.dimensions().try_fold(1usize, |size, dim| {
            let len = dim.len().ok_or_else(|| uninitialized(dim))?;
            size.checked_mul(len).ok_or(crate::Error::SizeOverflow)
        })
    }

    /// Computes the bin index of every sample along every dimension. `sample` holds one sequence of values per dimension,
    /// all of the same length. The result has one row per dimension and one column per sample value, see `BinIndices` for
    /// the meaning of out-of-range indices.
    ///
    /// Fails with `Error::DimensionMismatch` if the number of sequences in `sample` does not match `self.ndim()`, and with
    /// `Error::UninitializedDimension` if the edges of a dimension are unknown
    fn compute_indices<S: AsRef<[Self::Coord]>>(&self, sample: &[S]) -> crate::Result<BinIndices>
    where
        Self: Sized,
    {
        let ndim = self.ndim();
        if sample.len() != ndim {
            return Err(crate::Error::DimensionMismatch {
                expected: ndim,
                got: sample.len(),
            });
        }
        let sample_count = match sample.first() {
            Some(values) => values.as_ref().len(),
            None => return Err(crate::Error::EmptyGrid),
        };
        log::trace!(
            "Computing bin indices for {} samples in {} dimensions",
            sample_count,
            ndim
        );

        let mut indices = DMatrix::<isize>::zeros(ndim, sample_count);
        for (dim_index, (dim, values)) in self.dimensions().zip(sample).enumerate() {
            let values = values.as_ref();
            if values.len() != sample_count {
                return Err(crate::Error::SampleLengthMismatch {
                    dimension: dim_index,
                    expected: sample_count,
                    got: values.len(),
                });
            }
            let edges = dim.edges().ok_or_else(|| uninitialized(dim))?;
            // Edges derived from unordered points are not monotonic
            let order = monotonicity(&edges).ok_or(crate::Error::NotMonotonic)?;
            for (sample_index, value) in values.iter().enumerate() {
                indices[(dim_index, sample_index)] = digitize(*value, &edges, order);
            }
        }
        Ok(BinIndices::new(indices))
    }

    /// Mesh grid of the points of all dimensions with `Indexing::Cartesian`
    fn point_meshgrid(&self) -> crate::Result<MeshGrid<Self::Coord>> {
        mesh(self, Dimension::<Self::Coord>::points, Indexing::Cartesian)
    }

    /// Mesh grid of the points of all dimensions with `Indexing::Matrix`
    fn point_mgrid(&self) -> crate::Result<MeshGrid<Self::Coord>> {
        mesh(self, Dimension::<Self::Coord>::points, Indexing::Matrix)
    }

    /// Mesh grid of the edges of all dimensions with `Indexing::Cartesian`
    fn edge_meshgrid(&self) -> crate::Result<MeshGrid<Self::Coord>> {
        mesh(self, Dimension::<Self::Coord>::edges, Indexing::Cartesian)
    }

    /// Mesh grid of the edges of all dimensions with `Indexing::Matrix`
    fn edge_mgrid(&self) -> crate::Result<MeshGrid<Self::Coord>> {
        mesh(self, Dimension::<Self::Coord>::edges, Indexing::Matrix)
    }
}

fn uninitialized<T: Coordinate>(dim: &Dimension<T>) -> crate::Error {
    crate::Error::UninitializedDimension {
        name: dim.name().unwrap_or_default().to_owned(),
    }
}

fn mesh<'a, G, F>(grid: &'a G, axis: F, indexing: Indexing) -> crate::Result<MeshGrid<G::Coord>>
where
    G: RectilinearGrid + ?Sized,
    F: Fn(&'a Dimension<G::Coord>) -> Option<Cow<'a, [G::Coord]>>,
{
    let axes = grid
        .dimensions()
        .map(|dim| axis(dim).ok_or_else(|| uninitialized(dim)))
        .collect::<crate::Result<Vec<_>>>()?;
    Ok(MeshGrid::new(&axes, indexing))
}

/// Iterator over the dimensions of a `RectilinearGrid`
pub struct DimensionIter<'a, G: RectilinearGrid + ?Sized> {
    grid: &'a G,
    index: usize,
}

impl<'a, G: RectilinearGrid + ?Sized> Iterator for DimensionIter<'a, G> {
    type Item = &'a Dimension<G::Coord>;

    fn next(&mut self) -> Option<Self::Item> {
        let dim = self.grid.dimension_at(self.index)?;
        self.index += 1;
        Some(dim)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.ndim().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}
