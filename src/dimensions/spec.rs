use super::Dimension;
use crate::number::Coordinate;

/// Named properties from which a `Dimension` can be constructed. All properties are optional, a `Dimension` built from
/// the default properties is empty and unnamed
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionProperties<T: Coordinate = f64> {
    pub name: Option<String>,
    pub edges: Option<Vec<T>>,
    pub points: Option<Vec<T>>,
    pub nbins: Option<usize>,
}

impl<T: Coordinate> Default for DimensionProperties<T> {
    fn default() -> Self {
        Self {
            name: None,
            edges: None,
            points: None,
            nbins: None,
        }
    }
}

/// Value of a single entry in a key-value description of a `Dimension`, see `DimensionProperties::from_pairs`
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue<T: Coordinate = f64> {
    Text(String),
    Values(Vec<T>),
    Count(usize),
}

impl<T: Coordinate> PropertyValue<T> {
    fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Text(_) => "text",
            PropertyValue::Values(_) => "values",
            PropertyValue::Count(_) => "count",
        }
    }
}

impl<T: Coordinate> DimensionProperties<T> {
    /// Collects properties from key-value pairs. Recognized keys are `name` (or `var`), `edges`, `points` and `nbins`.
    /// Unknown keys, or values of the wrong kind for a key, result in `Error::UnsupportedSpec`. Later pairs replace earlier
    /// ones with the same key
    pub fn from_pairs<'a, I>(pairs: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (&'a str, PropertyValue<T>)>,
    {
        let mut properties = Self::default();
        for (key, value) in pairs {
            match (key, value) {
                ("name" | "var", PropertyValue::Text(name)) => properties.name = Some(name),
                ("edges", PropertyValue::Values(edges)) => properties.edges = Some(edges),
                ("points", PropertyValue::Values(points)) => properties.points = Some(points),
                ("nbins", PropertyValue::Count(nbins)) => properties.nbins = Some(nbins),
                (key @ ("name" | "var" | "edges" | "points" | "nbins"), value) => {
                    return Err(crate::Error::UnsupportedSpec(format!(
                        "property '{}' with a {} value",
                        key,
                        value.type_name()
                    )))
                }
                (key, _) => {
                    return Err(crate::Error::UnsupportedSpec(format!(
                        "unknown property '{}'",
                        key
                    )))
                }
            }
        }
        Ok(properties)
    }
}

/// All the ways in which a dimension can be added to a `Grid`
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionSpec<T: Coordinate = f64> {
    /// An existing `Dimension`, which is moved into the grid as-is
    Dimension(Dimension<T>),
    /// Properties from which a new `Dimension` is constructed
    Properties(DimensionProperties<T>),
    /// Only a name, which yields an empty placeholder `Dimension`
    Name(String),
}

impl<T: Coordinate> DimensionSpec<T> {
    /// Turns this spec into a `Dimension`
    pub fn into_dimension(self) -> crate::Result<Dimension<T>> {
        match self {
            DimensionSpec::Dimension(dim) => Ok(dim),
            DimensionSpec::Properties(properties) => Dimension::from_properties(properties),
            DimensionSpec::Name(name) => Ok(Dimension::named(name)),
        }
    }
}

impl<T: Coordinate> From<Dimension<T>> for DimensionSpec<T> {
    fn from(dim: Dimension<T>) -> Self {
        DimensionSpec::Dimension(dim)
    }
}

impl<T: Coordinate> From<DimensionProperties<T>> for DimensionSpec<T> {
    fn from(properties: DimensionProperties<T>) -> Self {
        DimensionSpec::Properties(properties)
    }
}

impl<T: Coordinate> From<&str> for DimensionSpec<T> {
    fn from(name: &str) -> Self {
        DimensionSpec::Name(name.to_owned())
    }
}

impl<T: Coordinate> From<String> for DimensionSpec<T> {
    fn from(name: String) -> Self {
        DimensionSpec::Name(name)
    }
}

/// Short form for a named dimension: either a number of bins, or the bin edges
#[derive(Debug, Clone, PartialEq)]
pub enum Shorthand<T: Coordinate = f64> {
    /// Sets the pending number of bins, the dimension has no edges or points yet
    Bins(usize),
    /// Sets the edges directly
    Edges(Vec<T>),
}

impl<T: Coordinate> Shorthand<T> {
    /// Creates the `Dimension` with the given `name` that this shorthand describes
    pub fn into_dimension(self, name: impl Into<String>) -> crate::Result<Dimension<T>> {
        match self {
            Shorthand::Bins(nbins) => Ok(Dimension::with_nbins(name, nbins)),
            Shorthand::Edges(edges) => Dimension::with_edges(name, edges),
        }
    }
}

impl<T: Coordinate> From<usize> for Shorthand<T> {
    fn from(nbins: usize) -> Self {
        Shorthand::Bins(nbins)
    }
}

impl<T: Coordinate> From<Vec<T>> for Shorthand<T> {
    fn from(edges: Vec<T>) -> Self {
        Shorthand::Edges(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn properties_from_pairs() {
        let properties = DimensionProperties::from_pairs([
            ("var", PropertyValue::Text("energy".into())),
            ("edges", PropertyValue::Values(vec![1.0, 10.0, 100.0])),
            ("nbins", PropertyValue::Count(2)),
        ])
        .unwrap();
        assert_eq!(Some("energy".to_string()), properties.name);
        assert_eq!(Some(vec![1.0, 10.0, 100.0]), properties.edges);
        assert_eq!(None, properties.points);
        assert_eq!(Some(2), properties.nbins);
    }

    #[test]
    fn unknown_property_is_unsupported() {
        let res = DimensionProperties::<f64>::from_pairs([("bins", PropertyValue::Count(3))]);
        assert!(matches!(res, Err(Error::UnsupportedSpec(_))));
    }

    #[test]
    fn wrongly_typed_property_is_unsupported() {
        let res = DimensionProperties::<f64>::from_pairs([("edges", PropertyValue::Count(3))]);
        assert!(matches!(res, Err(Error::UnsupportedSpec(_))));
        let res = DimensionProperties::<f64>::from_pairs([("name", PropertyValue::Values(vec![]))]);
        assert!(matches!(res, Err(Error::UnsupportedSpec(_))));
    }

    #[test]
    fn spec_into_dimension() {
        let dim = DimensionSpec::<f64>::from("x").into_dimension().unwrap();
        assert_eq!(Dimension::named("x"), dim);

        let dim = DimensionSpec::from(DimensionProperties {
            name: Some("y".into()),
            points: Some(vec![1.0, 2.0]),
            ..Default::default()
        })
        .into_dimension()
        .unwrap();
        assert_eq!(Some(2), dim.len());

        let bad_edges = DimensionSpec::from(DimensionProperties {
            edges: Some(vec![1.0]),
            ..Default::default()
        })
        .into_dimension();
        assert_eq!(Err(Error::InsufficientLength { got: 1 }), bad_edges);
    }

    #[test]
    fn shorthand() {
        let dim = Shorthand::<f64>::from(5usize).into_dimension("x").unwrap();
        assert!(!dim.has_data());
        assert_eq!(5, dim.nbins());

        let dim = Shorthand::from(vec![0.0, 0.5, 1.0]).into_dimension("y").unwrap();
        assert_eq!(Some("y"), dim.name());
        assert_eq!(2, dim.nbins());
    }
}
