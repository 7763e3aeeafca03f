pub mod ecef;
pub mod geodesy;
pub mod sez;

pub use ecef::*;
pub use geodesy::*;
pub use sez::*;
