//! Conic parameter engine.
//!
//! Implements:
//! - Canonical scale and ellipse/degeneracy check of general conic coefficients.
//! - Homogeneous least-squares conic fit from 2D points (SVD null vector).
//! - Transformation of a conic through a plane homography.

mod fit;
mod transform;
mod types;

pub use fit::{conic_from_points, conic_from_points_with, FitOptions, MIN_FIT_POINTS};
pub use transform::{conic_transform, project_point, project_points};
pub use types::{conic_scale, try_conic_scale, ConicCoeffs, ConicScale};
