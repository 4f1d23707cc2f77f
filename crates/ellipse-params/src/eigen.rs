//! Closed-form eigen-decomposition of a real symmetric 2×2 matrix.

use nalgebra::{Matrix2, Vector2};

/// Eigenvalues and (unnormalized) eigenvectors of `[[x, y], [y, z]]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetricEigen2 {
    /// Eigenvalues in ascending order.
    pub values: Vector2<f64>,
    /// Eigenvectors as columns; column `i` belongs to `values[i]`.
    ///
    /// The columns are not unit length. Column `0` vanishes when the matrix is
    /// diagonal with `z >= x`, column `1` when it is diagonal with `x >= z`.
    pub vectors: Matrix2<f64>,
}

/// Eigen-decompose the symmetric matrix `[[x, y], [y, z]]`.
///
/// Uses the quadratic formula with `q = sqrt((z - x)² + 4y²)`:
/// `w = (z + x ∓ q) / 2`, eigenvectors `(2y, z - x ∓ q)`.
/// Non-finite input propagates to NaN output.
pub fn eigh_2x2(x: f64, y: f64, z: f64) -> SymmetricEigen2 {
    let q = ((z - x) * (z - x) + 4.0 * y * y).sqrt();

    let values = Vector2::new(0.5 * (z + x - q), 0.5 * (z + x + q));

    #[rustfmt::skip]
    let vectors = Matrix2::new(
        2.0 * y,     2.0 * y,
        z - x - q,   z - x + q,
    );

    SymmetricEigen2 { values, vectors }
}
