mod dimension_map;
pub use self::dimension_map::*;

mod dimension_mut;
pub use self::dimension_mut::*;

mod selector;
pub use self::selector::*;
use self::selector::Resolved;

use crate::dimensions::{Dimension, DimensionSpec, Shorthand};
use crate::number::Coordinate;
use crate::RectilinearGrid;

/// An N-dimensional rectilinear grid, made up of an ordered collection of uniquely named `Dimension`s. A grid starts out
/// empty and grows by adding dimensions, it is `initialized` once the edges of every dimension are known:
/// ```text
///   Empty  ──add──▶  Partially defined  ──set edges/points──▶  Initialized
/// ```
///
/// Dimensions can be looked up by position or by name. Looking up a name that is not part of the grid adds an empty
/// placeholder dimension with that name, so that edges or points can be assigned right away:
/// ```
/// # use rectigrid::{Grid, RectilinearGrid};
/// let mut grid: Grid = Grid::new();
/// grid.dim("x").set_edges(vec![0.0, 1.0, 2.0]).unwrap();
/// grid.dim("y").set_points(vec![0.5, 1.5, 2.5, 3.5]).unwrap();
/// assert_eq!(vec!["x", "y"], grid.vars());
/// assert_eq!(8, grid.size().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Coordinate = f64> {
    dims: DimensionMap<T>,
}

impl<T: Coordinate> Default for Grid<T> {
    fn default() -> Self {
        Self {
            dims: DimensionMap::default(),
        }
    }
}

impl<T: Coordinate> Grid<T> {
    /// Creates an empty `Grid`
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `Grid` with a dimension for each of the given `specs`, in order
    pub fn from_specs<S, I>(specs: I) -> crate::Result<Self>
    where
        S: Into<DimensionSpec<T>>,
        I: IntoIterator<Item = S>,
    {
        let mut grid = Self::new();
        for spec in specs {
            grid.add_dimension(spec)?;
        }
        Ok(grid)
    }

    /// Creates a `Grid` from `(name, shorthand)` pairs. A number of bins creates an empty dimension with that pending bin
    /// count, a list of values creates a dimension with these edges:
    /// ```
    /// # use rectigrid::{Grid, RectilinearGrid, Shorthand};
    /// let grid = Grid::<f64>::from_shorthand([
    ///     ("x", Shorthand::Bins(10)),
    ///     ("y", Shorthand::Edges(vec![0.0, 1.0, 10.0])),
    /// ])
    /// .unwrap();
    /// assert_eq!(10, grid.get(0).unwrap().nbins());
    /// assert_eq!(vec![None, Some(2)], grid.shape());
    /// ```
    pub fn from_shorthand<'a, S, I>(dims: I) -> crate::Result<Self>
    where
        S: Into<Shorthand<T>>,
        I: IntoIterator<Item = (&'a str, S)>,
    {
        let mut grid = Self::new();
        for (name, shorthand) in dims {
            let shorthand: Shorthand<T> = shorthand.into();
            grid.add_dimension(shorthand.into_dimension(name)?)?;
        }
        Ok(grid)
    }

    /// Adds a dimension to this grid. If the grid already contains a dimension with the same name, that dimension is
    /// replaced as a whole (keeping its position), nothing is merged. Fails if the dimension can't be constructed from
    /// `spec` or has no name
    pub fn add_dimension(&mut self, spec: impl Into<DimensionSpec<T>>) -> crate::Result<()> {
        let spec: DimensionSpec<T> = spec.into();
        let dim = spec.into_dimension()?;
        if dim.name().is_none() {
            return Err(crate::Error::UnnamedDimension);
        }
        self.insert_named(dim);
        Ok(())
    }

    pub(crate) fn insert_named(&mut self, dim: Dimension<T>) {
        if let Some(replaced) = self.dims.insert(dim) {
            log::debug!(
                "Replaced existing dimension '{}'",
                replaced.name().unwrap_or_default()
            );
        }
    }

    /// Returns the position of the dimension `name`, adding an empty placeholder dimension first if there is none
    pub(crate) fn position_or_placeholder(&mut self, name: &str) -> usize {
        let (position, created) = self.dims.get_or_insert_placeholder(name);
        if created {
            log::debug!("Added placeholder dimension '{}'", name);
        }
        position
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Returns the dimension at `position`, or `None` if there is no such dimension
    pub fn get(&self, position: usize) -> Option<&Dimension<T>> {
        self.dims.get(position)
    }

    /// Like `get`, but allows setting the edges or points of the dimension
    pub fn get_mut(&mut self, position: usize) -> Option<DimensionMut<'_, T>> {
        self.dims.get_mut(position).map(DimensionMut::new)
    }

    /// Returns the dimension with the given `name`, or `None` if there is no such dimension. Unlike `dim`, this never
    /// modifies the grid
    pub fn find(&self, name: &str) -> Option<&Dimension<T>> {
        self.dims.by_name(name)
    }

    /// Returns the dimension with the given `name` for setting its edges or points. If the grid has no such dimension,
    /// an empty dimension with that name is appended to the grid first
    pub fn dim(&mut self, name: &str) -> DimensionMut<'_, T> {
        let position = self.position_or_placeholder(name);
        DimensionMut::new(&mut self.dims[position])
    }

    /// Selects dimensions by position, name, a range of positions, or a list of positions and names. A single position
    /// or name yields `Selection::Single`, everything else yields `Selection::Many` with a view of the selected
    /// dimensions in the requested order. Like `dim`, names that are not part of the grid are added as empty placeholder
    /// dimensions
    pub fn select(&mut self, selector: impl Into<Selector>) -> crate::Result<Selection<'_, T>> {
        let resolved = self.resolve(&selector.into())?;
        let dims = &self.dims;
        match resolved {
            Resolved::Single(position) => Ok(Selection::Single(&dims[position])),
            Resolved::Many(positions) => Ok(Selection::Many(GridView::new(
                positions.into_iter().map(|position| &dims[position]).collect(),
            ))),
        }
    }

    /// Dimensions can't be replaced through the grid, since it would be ambiguous whether the new values are meant as
    /// edges or as points. This always fails with `Error::DirectAssignmentNotSupported`, set the edges or points of the
    /// dimension instead:
    /// ```
    /// # use rectigrid::{Error, Grid};
    /// let mut grid: Grid = Grid::new();
    /// assert!(matches!(
    ///     grid.assign("x", vec![0.0, 1.0]),
    ///     Err(Error::DirectAssignmentNotSupported { .. })
    /// ));
    /// grid.dim("x").set_edges(vec![0.0, 1.0]).unwrap();
    /// ```
    pub fn assign<V>(&mut self, selector: impl Into<Selector>, _value: V) -> crate::Result<()> {
        let name = match selector.into() {
            Selector::Name(name) => name,
            Selector::Position(position) => self
                .get(position)
                .and_then(|dim| dim.name())
                .map(str::to_owned)
                .unwrap_or_else(|| position.to_string()),
            other => format!("{:?}", other),
        };
        Err(crate::Error::DirectAssignmentNotSupported { name })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dimension<T>> {
        self.dims.iter()
    }
}

impl<T: Coordinate> RectilinearGrid for Grid<T> {
    type Coord = T;

    fn ndim(&self) -> usize {
        self.dims.len()
    }

    fn dimension_at(&self, position: usize) -> Option<&Dimension<T>> {
        self.dims.get(position)
    }
}

impl<'a, T: Coordinate> IntoIterator for &'a Grid<T> {
    type Item = &'a Dimension<T>;
    type IntoIter = std::slice::Iter<'a, Dimension<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::{DimensionProperties, PropertyValue};
    use crate::Error;

    #[test]
    fn empty_grid() {
        let grid = Grid::<f64>::new();
        assert!(grid.is_empty());
        assert_eq!(0, grid.ndim());
        assert!(!grid.initialized());
        assert!(grid.vars().is_empty());
        assert_eq!(Ok(1), grid.size());
    }

    #[test]
    fn add_dimension_variants() {
        let mut grid = Grid::new();
        grid.add_dimension(Dimension::with_edges("a", vec![0.0, 1.0]).unwrap())
            .unwrap();
        grid.add_dimension(DimensionProperties {
            name: Some("b".into()),
            points: Some(vec![1.0, 2.0, 3.0]),
            ..Default::default()
        })
        .unwrap();
        grid.add_dimension(
            DimensionProperties::from_pairs([
                ("var", PropertyValue::Text("c".into())),
                ("nbins", PropertyValue::Count(4)),
            ])
            .unwrap(),
        )
        .unwrap();
        grid.add_dimension("d").unwrap();

        assert_eq!(vec!["a", "b", "c", "d"], grid.vars());
        assert_eq!(vec![Some(1), Some(3), None, None], grid.shape());
        assert_eq!(4, grid.find("c").unwrap().nbins());
    }

    #[test]
    fn unnamed_dimension_is_rejected() {
        let mut grid = Grid::<f64>::new();
        assert_eq!(
            Err(Error::UnnamedDimension),
            grid.add_dimension(Dimension::new())
        );
        assert!(grid.is_empty());
    }

    #[test]
    fn add_dimension_overwrites() {
        let mut grid = Grid::new();
        grid.add_dimension(Dimension::with_edges("x", vec![0.0, 1.0, 2.0]).unwrap())
            .unwrap();
        grid.add_dimension("y").unwrap();
        grid.add_dimension(Dimension::with_points("x", vec![5.0]).unwrap())
            .unwrap();

        assert_eq!(vec!["x", "y"], grid.vars());
        let x = grid.get(0).unwrap();
        assert_eq!(Some(1), x.len());
        // The old edges are gone, nothing was merged
        assert_eq!(None, x.edges());
    }

    #[test]
    fn dim_creates_placeholder() {
        let mut grid = Grid::<f64>::new();
        assert_eq!(None, grid.find("x"));
        assert!(!grid.dim("x").has_data());
        assert_eq!(vec!["x"], grid.vars());
        assert!(!grid.initialized());

        grid.dim("x").set_edges(vec![0.0, 1.0]).unwrap();
        assert_eq!(vec!["x"], grid.vars());
        assert!(grid.initialized());
    }

    #[test]
    fn mutable_lookup_by_position() {
        let mut grid = Grid::<f64>::from_specs(["x", "y"]).unwrap();
        grid.get_mut(1).unwrap().set_points(vec![1.0, 2.0, 3.0]).unwrap();
        assert!(grid.get_mut(2).is_none());

        assert_eq!(vec![None, Some(3)], grid.shape());
        assert_eq!(Some(3), grid.find("y").unwrap().len());
        assert_eq!(vec!["x", "y"], grid.vars());
    }

    #[test]
    fn select_single() {
        let mut grid = Grid::<f64>::from_shorthand([("x", Shorthand::Edges(vec![0.0, 1.0]))]).unwrap();
        let x = grid.select(0usize).unwrap().single().unwrap();
        assert_eq!(Some("x"), x.name());
        assert_eq!(
            Err(Error::PositionOutOfRange { position: 1, ndim: 1 }),
            grid.select(1usize).map(|_| ())
        );

        let y = grid.select("y").unwrap().single().unwrap();
        assert!(!y.has_data());
        assert_eq!(vec!["x", "y"], grid.vars());
    }

    #[test]
    fn assignment_is_rejected() {
        let mut grid = Grid::<f64>::from_shorthand([("x", Shorthand::Bins(3))]).unwrap();
        assert_eq!(
            Err(Error::DirectAssignmentNotSupported { name: "x".into() }),
            grid.assign("x", vec![0.0, 1.0])
        );
        assert_eq!(
            Err(Error::DirectAssignmentNotSupported { name: "x".into() }),
            grid.assign(0usize, Dimension::<f64>::named("x"))
        );
        assert!(matches!(
            grid.assign("y", 12),
            Err(Error::DirectAssignmentNotSupported { .. })
        ));
        // Nothing was added or changed
        assert_eq!(vec!["x"], grid.vars());
        assert!(!grid.get(0).unwrap().has_data());
    }

    #[test]
    fn iterate_dimensions() {
        let grid = Grid::<f64>::from_specs(["a", "b", "c"]).unwrap();
        let names = (&grid)
            .into_iter()
            .map(|dim| dim.name().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(vec!["a", "b", "c"], names);
        assert_eq!(3, grid.dimensions().count());
        assert_eq!(grid.iter().count(), grid.dimensions().size_hint().0);
        assert!(Grid::<f32>::from_specs(["a"]).unwrap().get(0).is_some());
    }
}
