//! Mapping conics and points through a plane homography.

use nalgebra::{Matrix3, Vector3};

use super::ConicCoeffs;
use crate::error::EllipseError;

/// Conic coefficients of the image of `conic` under the homography `h`.
///
/// With `M` the symmetric matrix of the conic, the image is
/// `M' = H⁻ᵀ M H⁻¹`. The result is not rescaled.
pub fn conic_transform(conic: &ConicCoeffs, h: &Matrix3<f64>) -> Result<ConicCoeffs, EllipseError> {
    let h_inv = h.try_inverse().ok_or(EllipseError::SingularHomography)?;
    let m = h_inv.transpose() * conic.to_matrix() * h_inv;
    Ok(ConicCoeffs::from_matrix(&m))
}

/// Project a 2D point through a 3×3 homography: H * [x, y, 1]^T → [u, v].
///
/// Points mapped to the line at infinity come back as NaN. The cutoff on the
/// homogeneous coordinate is relative to the norm of `h`, so rescaling `h`
/// does not change which points are rejected.
pub fn project_point(h: &Matrix3<f64>, [x, y]: [f64; 2]) -> [f64; 2] {
    let p = h * Vector3::new(x, y, 1.0);
    if p[2].abs() <= 1e-15 * h.norm() {
        return [f64::NAN, f64::NAN];
    }
    [p[0] / p[2], p[1] / p[2]]
}

/// Project every point through `h`.
pub fn project_points(h: &Matrix3<f64>, points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    points.iter().map(|&p| project_point(h, p)).collect()
}

impl ConicCoeffs {
    /// See [`conic_transform`].
    pub fn transform(&self, h: &Matrix3<f64>) -> Result<Self, EllipseError> {
        conic_transform(self, h)
    }
}
