use std::fmt::Display;

use crate::dimensions::Dimension;
use crate::number::Coordinate;
use crate::{Grid, GridView, RectilinearGrid};

/// Helper struct that wraps around an optional slice of coordinates and makes it displayable as `[0.5, 1.5, 2.5]`, or as
/// `None` if there is no slice. Used to print edges and points, which are absent until a dimension is defined
pub struct DisplayableValues<'a, T: Coordinate> {
    values: Option<&'a [T]>,
}

impl<'a, T: Coordinate> std::fmt::Debug for DisplayableValues<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl<'a, T: Coordinate> Display for DisplayableValues<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = match self.values {
            Some(values) => values,
            None => return write!(f, "None"),
        };
        write!(f, "[")?;
        for (idx, value) in values.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx < values.len() - 1 {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

/// Wraps an optional slice of coordinates into a type that implements `Display`
pub fn make_displayable<T: Coordinate>(values: Option<&[T]>) -> DisplayableValues<'_, T> {
    DisplayableValues { values }
}

/// Shows the values that were set on the dimension, derived values are not shown
impl<T: Coordinate> Display for Dimension<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "(points) {}", make_displayable(self.explicit_points()))?;
        writeln!(f, "(edges)  {}", make_displayable(self.explicit_edges()))?;
        write!(f, "(nbins)  {}", self.nbins())
    }
}

fn fmt_grid<G: RectilinearGrid>(grid: &G, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (idx, dim) in grid.dimensions().enumerate() {
        if idx > 0 {
            writeln!(f)?;
        }
        write!(f, "{} : {}", dim.name().unwrap_or_default(), dim)?;
    }
    Ok(())
}

impl<T: Coordinate> Display for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_grid(self, f)
    }
}

impl<'a, T: Coordinate> Display for GridView<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_grid(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values() {
        assert_eq!("[0.5, 1, 2.25]", make_displayable(Some(&[0.5, 1.0, 2.25][..])).to_string());
        assert_eq!("[]", make_displayable::<f64>(Some(&[])).to_string());
        assert_eq!("None", make_displayable::<f32>(None).to_string());
    }

    #[test]
    fn dimension() {
        let dim = Dimension::with_edges("x", vec![0.0, 1.0, 2.0]).unwrap();
        assert_eq!(
            "(points) None\n(edges)  [0, 1, 2]\n(nbins)  2",
            dim.to_string()
        );
    }

    #[test]
    fn grid() {
        let mut grid = Grid::new();
        grid.dim("x").set_points(vec![1.5]).unwrap();
        grid.dim("y");
        assert_eq!(
            "x : (points) [1.5]\n(edges)  None\n(nbins)  1\ny : (points) None\n(edges)  None\n(nbins)  10",
            grid.to_string()
        );
    }
}
