//! Plane geometry used to turn arc words into polylines

pub mod arc;

pub use arc::{radius_range, solve_arc, ArcPath, RadiusRange};
