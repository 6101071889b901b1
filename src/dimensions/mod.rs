mod conversion;
pub use self::conversion::*;

mod dimension;
pub use self::dimension::*;

mod spec;
pub use self::spec::*;
