use std::f64::consts::PI;

pub mod angle;
pub mod hit;
pub mod layout;

pub use hit::locate;
pub use layout::{Layout, LayoutError, MenuConfig, SectorSpan};

pub const TWO_PI: f64 = 2.0 * PI;
