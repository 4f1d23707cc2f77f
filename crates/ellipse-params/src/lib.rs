//! ellipse-params — conversions between parameterizations of a planar ellipse.
//!
//! Three equivalent representations are supported:
//!
//! 1. **Geometric** – [`Ellipse`]: center `(x₀, y₀)`, semi-axes `a ≥ b`, and
//!    rotation `θ` of the major axis (radians, defined modulo π).
//! 2. **Conic** – [`ConicCoeffs`]: `Ax² + Bxy + Cy² + Dx + Ey + F = 0`,
//!    defined up to scale. At the canonical scale (see [`conic_scale`]):
//!
//!    ```text
//!    A = a²(sin θ)² + b²(cos θ)²
//!    B = 2(b² − a²) sin θ cos θ
//!    C = a²(cos θ)² + b²(sin θ)²
//!    D = −2Ax₀ − By₀
//!    E = −Bx₀ − 2Cy₀
//!    F = Ax₀² + Bx₀y₀ + Cy₀² − a²b²
//!    ```
//! 3. **Moments** – [`ShapeMoments`]: area `m₀₀`, first moments `m₁₀, m₀₁`,
//!    and central second moments `mu₂₀, mu₁₁, mu₀₂`.
//!
//! Besides the conversions the crate provides a homogeneous least-squares
//! conic fit ([`conic_from_points`]), the image of a conic under a homography
//! ([`conic_transform`]) and moments of a polygonal contour
//! ([`moments_from_contour`]).
//!
//! Conversions out of a conic return `None` when the conic is not an ellipse.
//! Contract violations (too few points, singular homography) are reported as
//! [`EllipseError`].
//!
//! ```
//! use ellipse_params::{conic_scale, Ellipse};
//!
//! let e = Ellipse { cx: 450.0, cy: 320.0, a: 300.0, b: 200.0, angle: -0.25 };
//! let conic = e.to_conic().scaled(1e-3);
//! let scale = conic_scale(&conic).unwrap();
//! assert!((scale.k / 1e-3 - 1.0).abs() < 1e-9);
//! assert!((scale.ab - 60000.0).abs() < 1e-3);
//!
//! let back = conic.to_ellipse().unwrap();
//! assert!((back.a - 300.0).abs() < 1e-6);
//! ```

mod conic;
mod eigen;
mod error;
mod format;
mod gparams;
mod moments;

#[cfg(test)]
pub(crate) mod test_utils;

pub use conic::{
    conic_from_points, conic_from_points_with, conic_scale, conic_transform, project_point,
    project_points, try_conic_scale, ConicCoeffs, ConicScale, FitOptions, MIN_FIT_POINTS,
};
pub use eigen::{eigh_2x2, SymmetricEigen2};
pub use error::EllipseError;
pub use format::{
    CONIC_DISPLAY_NAMES, CONIC_NAMES, GPARAMS_DISPLAY_NAMES, GPARAMS_NAMES,
    MOMENTS_DISPLAY_NAMES, MOMENTS_NAMES,
};
pub use gparams::{
    conic_from_gparams, gparams_from_conic, gparams_from_moments, moments_from_gparams,
    try_gparams_from_conic, Ellipse,
};
pub use moments::{
    conic_from_moments, moments_from_conic, moments_from_contour, try_moments_from_conic,
    ShapeMoments,
};
