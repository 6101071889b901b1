use crate::dimensions::Dimension;
use crate::number::Coordinate;

/// Insertion-ordered collection of dimensions, keyed by dimension name. Names are unique, inserting a dimension with a
/// name that is already present replaces the existing dimension at its current position
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionMap<T: Coordinate> {
    entries: Vec<Dimension<T>>,
}

impl<T: Coordinate> Default for DimensionMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Coordinate> DimensionMap<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|dim| dim.name() == Some(name))
    }

    pub fn get(&self, position: usize) -> Option<&Dimension<T>> {
        self.entries.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Dimension<T>> {
        self.entries.get_mut(position)
    }

    pub fn by_name(&self, name: &str) -> Option<&Dimension<T>> {
        self.position(name).map(|position| &self.entries[position])
    }

    /// Inserts `dim` under its name. Returns the replaced dimension if the name was already present
    pub fn insert(&mut self, dim: Dimension<T>) -> Option<Dimension<T>> {
        match dim.name().and_then(|name| self.position(name)) {
            Some(position) => Some(std::mem::replace(&mut self.entries[position], dim)),
            None => {
                self.entries.push(dim);
                None
            }
        }
    }

    /// Returns the position of the dimension with the given `name`, appending an empty placeholder dimension with that
    /// name first if there is none. The second value is `true` if the placeholder was created
    pub fn get_or_insert_placeholder(&mut self, name: &str) -> (usize, bool) {
        match self.position(name) {
            Some(position) => (position, false),
            None => {
                self.entries.push(Dimension::named(name));
                (self.entries.len() - 1, true)
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dimension<T>> {
        self.entries.iter()
    }
}

impl<T: Coordinate> std::ops::Index<usize> for DimensionMap<T> {
    type Output = Dimension<T>;

    fn index(&self, position: usize) -> &Self::Output {
        &self.entries[position]
    }
}

impl<T: Coordinate> std::ops::IndexMut<usize> for DimensionMap<T> {
    fn index_mut(&mut self, position: usize) -> &mut Self::Output {
        &mut self.entries[position]
    }
}
