use std::ops::Deref;

use crate::dimensions::Dimension;
use crate::number::Coordinate;

/// Mutable access to a dimension that is part of a `Grid`. Reads go through `Deref`, writes are limited to the edges,
/// points and pending bin count, so the name of the dimension and its place in the grid stay fixed:
/// ```compile_fail
/// # use rectigrid::{Dimension, Grid};
/// let mut grid: Grid = Grid::new();
/// *grid.dim("x") = Dimension::named("y");
/// ```
#[derive(Debug)]
pub struct DimensionMut<'a, T: Coordinate> {
    dim: &'a mut Dimension<T>,
}

impl<'a, T: Coordinate> DimensionMut<'a, T> {
    pub(crate) fn new(dim: &'a mut Dimension<T>) -> Self {
        Self { dim }
    }

    /// See `Dimension::set_edges`
    pub fn set_edges(&mut self, edges: Vec<T>) -> crate::Result<()> {
        self.dim.set_edges(edges)
    }

    /// See `Dimension::set_points`
    pub fn set_points(&mut self, points: Vec<T>) -> crate::Result<()> {
        self.dim.set_points(points)
    }

    /// See `Dimension::set_nbins`
    pub fn set_nbins(&mut self, nbins: usize) -> crate::Result<()> {
        self.dim.set_nbins(nbins)
    }
}

impl<'a, T: Coordinate> Deref for DimensionMut<'a, T> {
    type Target = Dimension<T>;

    fn deref(&self) -> &Self::Target {
        self.dim
    }
}
