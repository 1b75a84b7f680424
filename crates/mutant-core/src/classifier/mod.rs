//! Grid classifier: shape validation plus the four-axis run scan.
//!
//! ## Files
//! - `grid.rs`: validated square symbol matrix.
//! - `direction.rs`: scan direction vectors and the configurable set.
//! - `scan.rs`: `Classifier`: run counting with quota early exit.
//!
//! Nothing here performs I/O or logs; callers decide what to do with
//! a verdict or a `ShapeError`.

pub mod direction;
pub mod grid;
pub mod scan;

pub use direction::{Direction, DirectionSet};
pub use grid::Grid;
pub use scan::{Classifier, ClassifierSettings};
