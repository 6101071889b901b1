use std::ops::Range;

use super::Grid;
use crate::dimensions::Dimension;
use crate::number::Coordinate;
use crate::RectilinearGrid;

/// Selects one or more dimensions of a `Grid`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// The dimension at a position
    Position(usize),
    /// The dimension with a name. Selecting a name that is not part of the grid adds an empty dimension with that name
    Name(String),
    /// The dimensions at a range of positions
    Range(Range<usize>),
    /// The dimensions selected by each entry, which must be a `Position` or a `Name`
    Many(Vec<Selector>),
}

impl Selector {
    fn describe(&self) -> String {
        match self {
            Selector::Position(position) => format!("position {}", position),
            Selector::Name(name) => format!("name '{}'", name),
            Selector::Range(range) => format!("range {:?}", range),
            Selector::Many(selectors) => format!("list of {} selectors", selectors.len()),
        }
    }
}

impl From<usize> for Selector {
    fn from(position: usize) -> Self {
        Selector::Position(position)
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::Name(name.to_owned())
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Selector::Name(name)
    }
}

impl From<Range<usize>> for Selector {
    fn from(range: Range<usize>) -> Self {
        Selector::Range(range)
    }
}

impl<S: Into<Selector>> From<Vec<S>> for Selector {
    fn from(selectors: Vec<S>) -> Self {
        Selector::Many(selectors.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<Selector>, const N: usize> From<[S; N]> for Selector {
    fn from(selectors: [S; N]) -> Self {
        Selector::Many(selectors.into_iter().map(Into::into).collect())
    }
}

/// Result of selecting from a `Grid`: either a single dimension, or a view of several dimensions
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a, T: Coordinate> {
    Single(&'a Dimension<T>),
    Many(GridView<'a, T>),
}

impl<'a, T: Coordinate> Selection<'a, T> {
    pub fn single(self) -> Option<&'a Dimension<T>> {
        match self {
            Selection::Single(dim) => Some(dim),
            Selection::Many(_) => None,
        }
    }

    pub fn many(self) -> Option<GridView<'a, T>> {
        match self {
            Selection::Single(_) => None,
            Selection::Many(view) => Some(view),
        }
    }
}

/// Positions within a grid that a `Selector` resolved to
pub(crate) enum Resolved {
    Single(usize),
    Many(Vec<usize>),
}

impl<T: Coordinate> Grid<T> {
    /// Resolves `selector` to positions, adding placeholder dimensions for unknown names on the way
    pub(crate) fn resolve(&mut self, selector: &Selector) -> crate::Result<Resolved> {
        match selector {
            Selector::Position(position) => self.check_position(*position).map(Resolved::Single),
            Selector::Name(name) => Ok(Resolved::Single(self.position_or_placeholder(name))),
            Selector::Range(range) => {
                if range.end > self.ndim() {
                    return Err(crate::Error::PositionOutOfRange {
                        position: range.end - 1,
                        ndim: self.ndim(),
                    });
                }
                Ok(Resolved::Many(range.clone().collect()))
            }
            Selector::Many(selectors) => {
                let mut positions: Vec<usize> = Vec::with_capacity(selectors.len());
                for selector in selectors {
                    let position = match selector {
                        Selector::Position(position) => self.check_position(*position)?,
                        Selector::Name(name) => self.position_or_placeholder(name),
                        nested => return Err(crate::Error::UnknownSelector(nested.describe())),
                    };
                    // A grid holds each dimension once, so repeated selections collapse to the first one
                    if !positions.contains(&position) {
                        positions.push(position);
                    }
                }
                Ok(Resolved::Many(positions))
            }
        }
    }

    fn check_position(&self, position: usize) -> crate::Result<usize> {
        if position < self.ndim() {
            Ok(position)
        } else {
            Err(crate::Error::PositionOutOfRange {
                position,
                ndim: self.ndim(),
            })
        }
    }
}

/// Ordered selection of dimensions borrowed from a `Grid`. Provides the same read-only functionality as the grid itself
/// through `RectilinearGrid`, on the selected dimensions only
#[derive(Debug, Clone, PartialEq)]
pub struct GridView<'a, T: Coordinate> {
    dims: Vec<&'a Dimension<T>>,
}

impl<'a, T: Coordinate> GridView<'a, T> {
    pub(crate) fn new(dims: Vec<&'a Dimension<T>>) -> Self {
        Self { dims }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Dimension<T>> + '_ {
        self.dims.iter().copied()
    }
}

impl<'a, T: Coordinate> RectilinearGrid for GridView<'a, T> {
    type Coord = T;

    fn ndim(&self) -> usize {
        self.dims.len()
    }

    fn dimension_at(&self, position: usize) -> Option<&Dimension<T>> {
        self.dims.get(position).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn test_grid() -> Grid {
        let mut grid = Grid::new();
        grid.add_dimension(Dimension::with_edges("x", vec![0.0, 1.0, 2.0]).unwrap())
            .unwrap();
        grid.add_dimension(Dimension::with_points("y", vec![1.0, 2.0, 3.0]).unwrap())
            .unwrap();
        grid.add_dimension("z").unwrap();
        grid
    }

    #[test]
    fn selector_conversions() {
        assert_eq!(Selector::Position(2), Selector::from(2usize));
        assert_eq!(Selector::Name("x".into()), Selector::from("x"));
        assert_eq!(Selector::Range(0..2), Selector::from(0usize..2));
        assert_eq!(
            Selector::Many(vec![Selector::Name("a".into()), Selector::Name("b".into())]),
            Selector::from(["a", "b"])
        );
    }

    #[test]
    fn many_keeps_requested_order() {
        let mut grid = test_grid();
        let view = grid.select(["y", "x"]).unwrap().many().unwrap();
        assert_eq!(vec!["y", "x"], view.vars());
        assert_eq!(vec![Some(3), Some(2)], view.shape());
        assert!(view.initialized());
    }

    #[test]
    fn many_borrows_the_same_dimensions() {
        let mut grid = test_grid();
        let view = grid.select(vec![Selector::from(0usize), "y".into()]).unwrap().many().unwrap();
        let x: *const Dimension = view.dimension_at(0).unwrap();
        assert!(std::ptr::eq(x, grid.get(0).unwrap()));
    }

    #[test]
    fn many_collapses_duplicates() {
        let mut grid = test_grid();
        let view = grid
            .select(vec![Selector::from("x"), Selector::from(0usize), Selector::from("y")])
            .unwrap()
            .many()
            .unwrap();
        assert_eq!(vec!["x", "y"], view.vars());
    }

    #[test]
    fn range() {
        let mut grid = test_grid();
        let view = grid.select(1usize..3).unwrap().many().unwrap();
        assert_eq!(vec!["y", "z"], view.vars());
        assert!(!view.initialized());
        assert_eq!(
            Err(Error::PositionOutOfRange { position: 3, ndim: 3 }),
            grid.select(0usize..4).map(|_| ())
        );
    }

    #[test]
    fn nested_selectors_are_unknown() {
        let mut grid = test_grid();
        let nested = Selector::Many(vec![Selector::from("x"), Selector::from(vec!["y", "z"])]);
        assert!(matches!(grid.select(nested), Err(Error::UnknownSelector(_))));
        let nested_range = Selector::Many(vec![Selector::from(0usize..1)]);
        assert!(matches!(grid.select(nested_range), Err(Error::UnknownSelector(_))));
    }
}
