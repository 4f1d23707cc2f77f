//! Geometric ellipse parameters and their conversions.

use serde::{Deserialize, Serialize};

use crate::conic::{conic_scale, ConicCoeffs};
use crate::eigen::eigh_2x2;
use crate::error::EllipseError;
use crate::moments::ShapeMoments;

/// Geometric ellipse parameters `(x0, y0, a, b, θ)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Center x.
    pub cx: f64,
    /// Center y.
    pub cy: f64,
    /// Semi-major axis length.
    pub a: f64,
    /// Semi-minor axis length.
    pub b: f64,
    /// Rotation angle of the major axis from +x, in radians. Defined modulo π.
    pub angle: f64,
}

impl Ellipse {
    /// Build from `[x0, y0, a, b, θ]`.
    pub fn from_array([cx, cy, a, b, angle]: [f64; 5]) -> Self {
        Self { cx, cy, a, b, angle }
    }

    /// `[x0, y0, a, b, θ]`.
    pub fn to_array(&self) -> [f64; 5] {
        [self.cx, self.cy, self.a, self.b, self.angle]
    }

    /// Check basic validity: positive semi-axes, finite values.
    pub fn is_valid(&self) -> bool {
        self.a > 0.0
            && self.b > 0.0
            && self.a.is_finite()
            && self.b.is_finite()
            && self.cx.is_finite()
            && self.cy.is_finite()
            && self.angle.is_finite()
    }

    /// Conic coefficients at the canonical scale.
    pub fn to_conic(&self) -> ConicCoeffs {
        conic_from_gparams(self)
    }

    /// Shape moments of the filled ellipse.
    pub fn to_moments(&self) -> ShapeMoments {
        moments_from_gparams(self)
    }

    /// Point of the parametric curve at parameter `phi`.
    pub fn evaluate(&self, phi: f64) -> [f64; 2] {
        let (s, c) = self.angle.sin_cos();
        let (sp, cp) = phi.sin_cos();
        [
            self.a * cp * c - self.b * sp * s + self.cx,
            self.a * cp * s + self.b * sp * c + self.cy,
        ]
    }

    /// Sample `n` points on the ellipse boundary, counter-clockwise for θ
    /// in the usual y-up orientation.
    pub fn sample_points(&self, n: usize) -> Vec<[f64; 2]> {
        (0..n)
            .map(|i| self.evaluate(2.0 * std::f64::consts::PI * (i as f64) / (n as f64)))
            .collect()
    }
}

impl From<[f64; 5]> for Ellipse {
    fn from(p: [f64; 5]) -> Self {
        Self::from_array(p)
    }
}

/// Convert geometric parameters to conic coefficients at the canonical scale.
///
/// ```text
/// A = a² sin²θ + b² cos²θ
/// B = 2 (b² − a²) sinθ cosθ
/// C = a² cos²θ + b² sin²θ
/// D = −2A x0 − B y0
/// E = −B x0 − 2C y0
/// F = A x0² + B x0 y0 + C y0² − a² b²
/// ```
pub fn conic_from_gparams(e: &Ellipse) -> ConicCoeffs {
    let (s, c) = e.angle.sin_cos();
    let a2 = e.a * e.a;
    let b2 = e.b * e.b;
    let (x0, y0) = (e.cx, e.cy);

    let ca = a2 * s * s + b2 * c * c;
    let cb = 2.0 * (b2 - a2) * s * c;
    let cc = a2 * c * c + b2 * s * s;
    let cd = -2.0 * ca * x0 - cb * y0;
    let ce = -cb * x0 - 2.0 * cc * y0;
    let cf = ca * x0 * x0 + cb * x0 * y0 + cc * y0 * y0 - a2 * b2;

    ConicCoeffs([ca, cb, cc, cd, ce, cf])
}

/// Convert general conic coefficients to geometric ellipse parameters.
///
/// Returns `None` if the conic does not describe an ellipse (see
/// [`conic_scale`]). The conic is brought to the canonical scale first, so
/// the sign of the input coefficients does not matter. The larger eigenvalue
/// of the quadratic part yields `a`, so `a >= b`; the angle is taken from its
/// eigenvector.
pub fn gparams_from_conic(conic: &ConicCoeffs) -> Option<Ellipse> {
    let scale = conic_scale(conic)?;
    let [a, b, c, d, e, _] = conic.scaled(1.0 / scale.k).0;

    let denom = 4.0 * a * c - b * b;
    let cx = (b * e - 2.0 * c * d) / denom;
    let cy = (-2.0 * a * e + b * d) / denom;

    // Canonical quadratic block has eigenvalues (b², a²).
    let eig = eigh_2x2(a, 0.5 * b, c);
    let semi_b = eig.values[0].sqrt();
    let semi_a = eig.values[1].sqrt();
    let angle = (-eig.vectors[(0, 1)]).atan2(eig.vectors[(1, 1)]);

    Some(Ellipse {
        cx,
        cy,
        a: semi_a,
        b: semi_b,
        angle,
    })
}

/// [`gparams_from_conic`] with an error describing the rejection.
pub fn try_gparams_from_conic(conic: &ConicCoeffs) -> Result<Ellipse, EllipseError> {
    gparams_from_conic(conic).ok_or(EllipseError::NotAnEllipse {
        discriminant: conic.discriminant(),
    })
}

/// Shape moments of the filled ellipse.
pub fn moments_from_gparams(e: &Ellipse) -> ShapeMoments {
    let (s, c) = e.angle.sin_cos();
    let a2 = e.a * e.a;
    let b2 = e.b * e.b;

    let m00 = e.a * e.b * std::f64::consts::PI;

    ShapeMoments {
        m00,
        m10: e.cx * m00,
        m01: e.cy * m00,
        mu20: (a2 * c * c + b2 * s * s) * m00 * 0.25,
        mu11: -(b2 - a2) * s * c * m00 * 0.25,
        mu02: (a2 * s * s + b2 * c * c) * m00 * 0.25,
    }
}

/// Convert shape moments to geometric ellipse parameters.
///
/// Semi-axes are twice the square roots of the eigenvalues of the normalized
/// central-moment matrix. The angle comes from the eigenvector of the smaller
/// eigenvalue. This column/sign convention differs from
/// [`gparams_from_conic`] and is kept separate on purpose.
///
/// `m00` is not checked; a zero area yields non-finite output.
pub fn gparams_from_moments(m: &ShapeMoments) -> Ellipse {
    let cx = m.m10 / m.m00;
    let cy = m.m01 / m.m00;

    let eig = eigh_2x2(m.mu20 / m.m00, m.mu11 / m.m00, m.mu02 / m.m00);
    let b = 2.0 * eig.values[0].sqrt();
    let a = 2.0 * eig.values[1].sqrt();
    let angle = eig.vectors[(0, 0)].atan2(-eig.vectors[(1, 0)]);

    Ellipse {
        cx,
        cy,
        a,
        b,
        angle,
    }
}
