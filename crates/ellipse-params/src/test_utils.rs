//! Shared fixtures and float assertions for unit tests.

use approx::relative_eq;
use nalgebra::Matrix3;

use crate::conic::ConicCoeffs;
use crate::gparams::Ellipse;
use crate::moments::ShapeMoments;

/// Pixel-scale ellipse used across the conversion tests.
pub(crate) fn reference_ellipse() -> Ellipse {
    Ellipse {
        cx: 450.0,
        cy: 320.0,
        a: 300.0,
        b: 200.0,
        angle: -0.25,
    }
}

/// Ellipse inside `[-1, 1]²`, well conditioned for the plain fit.
pub(crate) fn unit_ellipse() -> Ellipse {
    Ellipse {
        cx: 0.1,
        cy: -0.2,
        a: 0.8,
        b: 0.5,
        angle: 0.6,
    }
}

/// `n` boundary points at evenly spaced parameters over `[0, 2π]`, both ends
/// included, so the first and last point coincide.
pub(crate) fn sample_closed(e: &Ellipse, n: usize) -> Vec<[f64; 2]> {
    let step = 2.0 * std::f64::consts::PI / (n - 1) as f64;
    (0..n).map(|i| e.evaluate(i as f64 * step)).collect()
}

/// Mild perspective warp around (400, 300) that keeps the reference ellipse
/// in front of the vanishing line.
pub(crate) fn perspective_homography() -> Matrix3<f64> {
    let (hx, hy) = (0.001, 0.0015);
    let h = Matrix3::new(1.0, -0.2, 0.0, 0.0, 0.7, 0.0, hx, hy, 1.0);
    let t = Matrix3::new(1.0, 0.0, 400.0, 0.0, 1.0, 300.0, 0.0, 0.0, 1.0);
    let t_inv = Matrix3::new(1.0, 0.0, -400.0, 0.0, 1.0, -300.0, 0.0, 0.0, 1.0);
    t * h * t_inv
}

fn assert_slices_close(what: &str, got: &[f64], expected: &[f64], tol: f64) {
    for (i, (g, e)) in got.iter().zip(expected).enumerate() {
        assert!(
            relative_eq!(*g, *e, epsilon = tol, max_relative = tol),
            "{} [{}]: got {}, expected {} (tol {})\n  got:      {:?}\n  expected: {:?}",
            what,
            i,
            g,
            e,
            tol,
            got,
            expected
        );
    }
}

pub(crate) fn assert_conic_close(got: &ConicCoeffs, expected: &ConicCoeffs, tol: f64) {
    assert_slices_close("conic", &got.0, &expected.0, tol);
}

pub(crate) fn assert_moments_close(got: &ShapeMoments, expected: &ShapeMoments, tol: f64) {
    assert_slices_close("moments", &got.to_array(), &expected.to_array(), tol);
}

pub(crate) fn assert_ellipse_close(got: &Ellipse, expected: &Ellipse, tol: f64) {
    assert_slices_close("ellipse", &got.to_array(), &expected.to_array(), tol);
}
