//! Conic coefficients, their matrix form and the scale/degeneracy check.

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::error::EllipseError;
use crate::gparams::{gparams_from_conic, Ellipse};
use crate::moments::{moments_from_conic, ShapeMoments};

/// General conic: A x² + B xy + C y² + D x + E y + F = 0
/// Stored as [A, B, C, D, E, F].
///
/// The coefficients are only defined up to a nonzero factor; see
/// [`conic_scale`] for the canonical scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConicCoeffs(pub [f64; 6]);

/// Canonical scale of an elliptical conic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConicScale {
    /// Divisor that brings the coefficients to the canonical scale.
    pub k: f64,
    /// Product of the semi-axes, i.e. the enclosed area divided by π.
    pub ab: f64,
}

/// Compute the canonical scale `k` and the semi-axis product `ab` of a conic.
///
/// With `T = 4AC − B²` and `S = AE² + B²F + CD² − BDE − 4ACF`:
/// `k = T² / (4S)` and `ab = |2S / T^(3/2)|`.
///
/// For any nonzero `s`, scaling the conic by `s` scales `k` by `s` and
/// leaves `ab` unchanged.
///
/// Returns `None` if the conic is not an ellipse: `T < 0` (hyperbola),
/// `S == 0` (degenerate), `S` and `A + C` of opposite sign (no real points),
/// or a non-finite `k`/`ab` (parabola, NaN input).
pub fn conic_scale(conic: &ConicCoeffs) -> Option<ConicScale> {
    let [a, b, c, d, e, f] = conic.0;

    let t = 4.0 * a * c - b * b;
    if t < 0.0 {
        tracing::trace!(t, "conic rejected: hyperbola");
        return None;
    }

    let s = a * e * e + b * b * f + c * d * d - b * d * e - 4.0 * a * c * f;
    if s == 0.0 {
        tracing::trace!(t, s, "conic rejected: degenerate");
        return None;
    }
    if s * (a + c) < 0.0 {
        tracing::trace!(t, s, "conic rejected: imaginary ellipse");
        return None;
    }

    let k = 0.25 * t * t / s;
    let ab = (2.0 * s / (t * t.sqrt())).abs();
    if !k.is_finite() || !ab.is_finite() {
        tracing::trace!(t, s, "conic rejected: non-finite scale");
        return None;
    }

    Some(ConicScale { k, ab })
}

/// [`conic_scale`] with an error describing the rejection.
pub fn try_conic_scale(conic: &ConicCoeffs) -> Result<ConicScale, EllipseError> {
    conic_scale(conic).ok_or(EllipseError::NotAnEllipse {
        discriminant: conic.discriminant(),
    })
}

impl ConicCoeffs {
    /// Build from the six coefficients.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self([a, b, c, d, e, f])
    }

    /// `4AC − B²`; positive for ellipses.
    pub fn discriminant(&self) -> f64 {
        let [a, b, c, ..] = self.0;
        4.0 * a * c - b * b
    }

    /// Whether the conic passes the scale check, i.e. describes an ellipse.
    pub fn is_ellipse(&self) -> bool {
        conic_scale(self).is_some()
    }

    /// Multiply every coefficient by `s`. Describes the same curve for `s != 0`.
    pub fn scaled(&self, s: f64) -> Self {
        Self(self.0.map(|v| v * s))
    }

    /// Divide by the canonical scale `k`.
    /// Returns `None` if the conic is not an ellipse.
    pub fn normalized(&self) -> Option<Self> {
        let scale = conic_scale(self)?;
        Some(self.scaled(1.0 / scale.k))
    }

    /// Algebraic distance of a point (x, y) to this conic.
    pub fn algebraic_distance(&self, x: f64, y: f64) -> f64 {
        let [a, b, c, d, e, f] = self.0;
        a * x * x + b * x * y + c * y * y + d * x + e * y + f
    }

    /// Symmetric matrix `M` with `[x y 1] M [x y 1]ᵀ` equal to the conic
    /// polynomial.
    pub fn to_matrix(&self) -> Matrix3<f64> {
        let [a, b, c, d, e, f] = self.0;
        Matrix3::new(
            a,
            b * 0.5,
            d * 0.5,
            b * 0.5,
            c,
            e * 0.5,
            d * 0.5,
            e * 0.5,
            f,
        )
    }

    /// Inverse of [`ConicCoeffs::to_matrix`]; reads the upper triangle.
    pub fn from_matrix(m: &Matrix3<f64>) -> Self {
        Self([
            m[(0, 0)],
            m[(0, 1)] * 2.0,
            m[(1, 1)],
            m[(0, 2)] * 2.0,
            m[(1, 2)] * 2.0,
            m[(2, 2)],
        ])
    }

    /// Convert to geometric ellipse parameters.
    /// Returns `None` if the conic is not an ellipse.
    pub fn to_ellipse(&self) -> Option<Ellipse> {
        gparams_from_conic(self)
    }

    /// Convert to shape moments.
    /// Returns `None` if the conic is not an ellipse.
    pub fn to_moments(&self) -> Option<ShapeMoments> {
        moments_from_conic(self)
    }
}

impl From<[f64; 6]> for ConicCoeffs {
    fn from(c: [f64; 6]) -> Self {
        Self(c)
    }
}

impl From<ConicCoeffs> for [f64; 6] {
    fn from(c: ConicCoeffs) -> Self {
        c.0
    }
}
