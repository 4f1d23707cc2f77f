//! Shape moments up to second order.
//!
//! Converts moments to and from conic coefficients and computes them from a
//! polygonal contour.

mod contour;

use serde::{Deserialize, Serialize};

use crate::conic::{conic_scale, ConicCoeffs};
use crate::error::EllipseError;
use crate::gparams::{gparams_from_moments, Ellipse};

pub use contour::moments_from_contour;

/// Area, first moments and second-order central moments of a shape.
///
/// Field names follow the usual image-moment naming, so a moment dictionary
/// (JSON object with at least these keys) deserializes directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeMoments {
    /// Area.
    pub m00: f64,
    /// First moment in x (area-weighted centroid x).
    pub m10: f64,
    /// First moment in y.
    pub m01: f64,
    /// Second central moment in x.
    pub mu20: f64,
    /// Second central cross moment.
    pub mu11: f64,
    /// Second central moment in y.
    pub mu02: f64,
}

impl ShapeMoments {
    /// Build from `[m00, m10, m01, mu20, mu11, mu02]`.
    pub fn from_array([m00, m10, m01, mu20, mu11, mu02]: [f64; 6]) -> Self {
        Self {
            m00,
            m10,
            m01,
            mu20,
            mu11,
            mu02,
        }
    }

    /// `[m00, m10, m01, mu20, mu11, mu02]`.
    pub fn to_array(&self) -> [f64; 6] {
        [self.m00, self.m10, self.m01, self.mu20, self.mu11, self.mu02]
    }

    /// Centroid `(m10/m00, m01/m00)`, or `None` for zero area.
    pub fn centroid(&self) -> Option<[f64; 2]> {
        if self.m00 == 0.0 {
            return None;
        }
        Some([self.m10 / self.m00, self.m01 / self.m00])
    }

    /// See [`gparams_from_moments`].
    pub fn to_ellipse(&self) -> Ellipse {
        gparams_from_moments(self)
    }

    /// See [`conic_from_moments`].
    pub fn to_conic(&self) -> ConicCoeffs {
        conic_from_moments(self)
    }
}

impl From<[f64; 6]> for ShapeMoments {
    fn from(m: [f64; 6]) -> Self {
        Self::from_array(m)
    }
}

/// Conic coefficients, at the canonical scale, of the ellipse with the given
/// moments.
pub fn conic_from_moments(m: &ShapeMoments) -> ConicCoeffs {
    let x0 = m.m10 / m.m00;
    let y0 = m.m01 / m.m00;

    let a = 4.0 * m.mu02 / m.m00;
    let b = -8.0 * m.mu11 / m.m00;
    let c = 4.0 * m.mu20 / m.m00;

    // (ab)² from the determinant of the quadratic part.
    let a2b2 = 0.25 * (4.0 * a * c - b * b);

    let d = -2.0 * a * x0 - b * y0;
    let e = -b * x0 - 2.0 * c * y0;
    let f = a * x0 * x0 + b * x0 * y0 + c * y0 * y0 - a2b2;

    ConicCoeffs([a, b, c, d, e, f])
}

/// Shape moments of the ellipse described by a conic at any scale.
///
/// Returns `None` if the conic is not an ellipse.
pub fn moments_from_conic(conic: &ConicCoeffs) -> Option<ShapeMoments> {
    let scale = conic_scale(conic)?;
    let [a, b, c, d, e, _] = conic.scaled(1.0 / scale.k).0;

    let denom = 4.0 * a * c - b * b;
    let x0 = (b * e - 2.0 * c * d) / denom;
    let y0 = (-2.0 * a * e + b * d) / denom;

    let m00 = std::f64::consts::PI * scale.ab;

    Some(ShapeMoments {
        m00,
        m10: x0 * m00,
        m01: y0 * m00,
        mu20: 0.25 * c * m00,
        mu11: -0.125 * b * m00,
        mu02: 0.25 * a * m00,
    })
}

/// [`moments_from_conic`] with an error describing the rejection.
pub fn try_moments_from_conic(conic: &ConicCoeffs) -> Result<ShapeMoments, EllipseError> {
    moments_from_conic(conic).ok_or(EllipseError::NotAnEllipse {
        discriminant: conic.discriminant(),
    })
}
