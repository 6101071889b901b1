mod rectilinear;
pub use self::rectilinear::*;

mod grid;
pub use self::grid::*;

mod indices;
pub use self::indices::*;

mod mesh;
pub use self::mesh::*;

mod error;
pub use self::error::*;

mod helper;
pub use self::helper::*;

pub mod number;
pub mod dimensions;
pub use self::dimensions::{Dimension, DimensionProperties, DimensionSpec, PropertyValue, Shorthand};
