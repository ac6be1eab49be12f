//! Card shapes, the shape catalogue, and the containment seam.

pub mod catalogue;
pub mod containment;
pub mod shape;

pub use catalogue::ShapeCatalogue;
pub use containment::{RankCounting, ShapeContainment};
pub use shape::CardShape;
