mod bin_indices;
pub use self::bin_indices::*;

mod digitize;
pub use self::digitize::*;
