use std::borrow::Cow;

use super::{edges_from_points, points_from_edges, DimensionProperties};
use crate::error::Representation;
use crate::number::{monotonicity, Coordinate};

/// Number of bins a `Dimension` reports before its edges or points are defined
pub const DEFAULT_NBINS: usize = 10;

/// A single axis of a `Grid`. The axis can be described by its bin `edges` (one value per bin boundary), by its `points`
/// (one representative value per bin), or by both. Whichever representation is missing is derived on demand from the
/// other one:
/// ```text
///   edges:   |-------|-------|---------------|
///   points:      *       *           *
/// ```
///
/// Derived values are computed fresh on every access and never stored. Setting one representation does not touch the
/// other one, so a `Dimension` with both edges and points set keeps both as given, only their lengths are checked against
/// each other. Use `Dimension::has_data` to find out whether either representation is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension<T: Coordinate = f64> {
    name: Option<String>,
    edges: Option<Vec<T>>,
    points: Option<Vec<T>>,
    nbins: usize,
}

impl<T: Coordinate> Default for Dimension<T> {
    fn default() -> Self {
        Self {
            name: None,
            edges: None,
            points: None,
            nbins: DEFAULT_NBINS,
        }
    }
}

impl<T: Coordinate> Dimension<T> {
    /// Creates an empty, unnamed `Dimension`
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `Dimension` with the given `name`. This is the placeholder that a `Grid` creates when
    /// a dimension is looked up by a name that is not yet part of the grid
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Creates a named `Dimension` from the given `edges`. Fails if there are fewer than two edges or if the edges are not
    /// strictly monotonic
    pub fn with_edges(name: impl Into<String>, edges: Vec<T>) -> crate::Result<Self> {
        let mut dim = Self::named(name);
        dim.set_edges(edges)?;
        Ok(dim)
    }

    /// Creates a named `Dimension` from the given `points`
    pub fn with_points(name: impl Into<String>, points: Vec<T>) -> crate::Result<Self> {
        let mut dim = Self::named(name);
        dim.set_points(points)?;
        Ok(dim)
    }

    /// Creates a named `Dimension` without edges or points but with a pending number of bins
    pub fn with_nbins(name: impl Into<String>, nbins: usize) -> Self {
        Self {
            nbins,
            ..Self::named(name)
        }
    }

    /// Creates a `Dimension` from the given `properties`. If both edges and points are given, their lengths have to agree
    pub fn from_properties(properties: DimensionProperties<T>) -> crate::Result<Self> {
        let DimensionProperties {
            name,
            edges,
            points,
            nbins,
        } = properties;
        let mut dim = Self {
            name,
            nbins: nbins.unwrap_or(DEFAULT_NBINS),
            ..Default::default()
        };
        if let Some(edges) = edges {
            dim.set_edges(edges)?;
        }
        if let Some(points) = points {
            dim.set_points(points)?;
        }
        Ok(dim)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of bins, or `None` if neither edges nor points are defined. Explicitly set points take precedence over edges
    pub fn len(&self) -> Option<usize> {
        match (&self.points, &self.edges) {
            (Some(points), _) => Some(points.len()),
            (None, Some(edges)) => Some(edges.len() - 1),
            (None, None) => None,
        }
    }

    /// True if either edges or points are set
    pub fn has_data(&self) -> bool {
        self.edges.is_some() || self.points.is_some()
    }

    /// Returns the stored edges, or edges derived from the stored points. Returns `None` if neither are set, or if the
    /// edges can't be derived because there are fewer than two points
    pub fn edges(&self) -> Option<Cow<'_, [T]>> {
        if let Some(edges) = &self.edges {
            return Some(Cow::Borrowed(edges.as_slice()));
        }
        let points = self.points.as_ref()?;
        edges_from_points(points).ok().map(Cow::Owned)
    }

    /// Same as `edges`
    pub fn bin_edges(&self) -> Option<Cow<'_, [T]>> {
        self.edges()
    }

    /// Sets the edges of this `Dimension`. The edges must have at least two entries and be strictly monotonic. If this
    /// `Dimension` already has data, the number of edges must be `self.len() + 1`. Previously set points are kept.
    pub fn set_edges(&mut self, edges: Vec<T>) -> crate::Result<()> {
        if edges.len() < 2 {
            return Err(crate::Error::InsufficientLength { got: edges.len() });
        }
        if let Some(len) = self.len() {
            if edges.len() != len + 1 {
                return Err(crate::Error::LengthMismatch {
                    kind: Representation::Edges,
                    expected: len + 1,
                    got: edges.len(),
                });
            }
        }
        if monotonicity(&edges).is_none() {
            return Err(crate::Error::NotMonotonic);
        }
        self.edges = Some(edges);
        Ok(())
    }

    /// Returns the stored points, or the bin centers of the stored edges. Returns `None` if neither are set
    pub fn points(&self) -> Option<Cow<'_, [T]>> {
        if let Some(points) = &self.points {
            return Some(Cow::Borrowed(points.as_slice()));
        }
        let edges = self.edges.as_ref()?;
        points_from_edges(edges).ok().map(Cow::Owned)
    }

    /// Sets the points of this `Dimension`. If this `Dimension` already has data, the number of points must equal
    /// `self.len()`. Previously set edges are kept.
    pub fn set_points(&mut self, points: Vec<T>) -> crate::Result<()> {
        if let Some(len) = self.len() {
            if points.len() != len {
                return Err(crate::Error::LengthMismatch {
                    kind: Representation::Points,
                    expected: len,
                    got: points.len(),
                });
            }
        }
        self.points = Some(points);
        Ok(())
    }

    /// The number of bins. This is the pending number of bins as long as neither edges nor points are set
    pub fn nbins(&self) -> usize {
        self.len().unwrap_or(self.nbins)
    }

    /// Sets the pending number of bins. Fails once edges or points are defined
    pub fn set_nbins(&mut self, nbins: usize) -> crate::Result<()> {
        if self.has_data() {
            return Err(crate::Error::BinsAlreadyDefined);
        }
        self.nbins = nbins;
        Ok(())
    }

    /// Stored edges, without derivation
    pub(crate) fn explicit_edges(&self) -> Option<&[T]> {
        self.edges.as_deref()
    }

    /// Stored points, without derivation
    pub(crate) fn explicit_points(&self) -> Option<&[T]> {
        self.points.as_deref()
    }
}
