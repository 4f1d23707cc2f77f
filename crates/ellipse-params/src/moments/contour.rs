//! Shape moments of a closed polygon via Green's theorem.
//!
//! Follows the boundary-integral formulation of OpenCV's `contourMoments`.

use super::ShapeMoments;
use crate::error::EllipseError;

/// Minimum number of vertices of a polygon with nonzero area.
const MIN_CONTOUR_POINTS: usize = 3;

/// Raw boundary sums before normalization.
#[derive(Debug, Default, Clone, Copy)]
struct EdgeSums {
    a00: f64,
    a10: f64,
    a01: f64,
    a20: f64,
    a11: f64,
    a02: f64,
}

impl EdgeSums {
    fn add_edge(&mut self, [xp, yp]: [f64; 2], [x, y]: [f64; 2]) {
        let dxy = xp * y - x * yp;
        let xs = xp + x;
        let ys = yp + y;

        self.a00 += dxy;
        self.a10 += dxy * xs;
        self.a01 += dxy * ys;
        self.a20 += dxy * (xp * xs + x * x);
        self.a11 += dxy * (xp * (ys + yp) + x * (ys + y));
        self.a02 += dxy * (yp * ys + y * y);
    }
}

/// Compute shape moments of the polygon with the given vertices.
///
/// The polygon is closed implicitly (last vertex connects to the first) and
/// may be wound either way. For a polygon sampled from an ellipse boundary
/// the result approximates [`crate::moments_from_gparams`]; accuracy depends
/// on the sampling density.
///
/// Fails with [`EllipseError::TooFewPoints`] for fewer than 3 vertices and
/// [`EllipseError::ZeroArea`] if the enclosed signed area is exactly zero.
pub fn moments_from_contour(points: &[[f64; 2]]) -> Result<ShapeMoments, EllipseError> {
    let n = points.len();
    if n < MIN_CONTOUR_POINTS {
        return Err(EllipseError::TooFewPoints {
            needed: MIN_CONTOUR_POINTS,
            got: n,
        });
    }

    let mut sums = EdgeSums::default();
    let mut prev = points[n - 1];
    for &p in points {
        sums.add_edge(prev, p);
        prev = p;
    }

    if sums.a00 == 0.0 {
        return Err(EllipseError::ZeroArea);
    }

    // Clockwise polygons accumulate negative area; flip all normalizers.
    let sign = if sums.a00 > 0.0 { 1.0 } else { -1.0 };
    let db1_2 = sign / 2.0;
    let db1_6 = sign / 6.0;
    let db1_12 = sign / 12.0;
    let db1_24 = sign / 24.0;

    let m00 = sums.a00 * db1_2;
    let m10 = sums.a10 * db1_6;
    let m01 = sums.a01 * db1_6;
    let m20 = sums.a20 * db1_12;
    let m11 = sums.a11 * db1_24;
    let m02 = sums.a02 * db1_12;

    let cx = m10 / m00;
    let cy = m01 / m00;

    Ok(ShapeMoments {
        m00,
        m10,
        m01,
        mu20: m20 - m10 * cx,
        mu11: m11 - m10 * cy,
        mu02: m02 - m01 * cy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conic::{conic_transform, project_points};
    use crate::test_utils::{
        assert_moments_close, perspective_homography, reference_ellipse, sample_closed,
    };
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_square() {
        let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let m = moments_from_contour(&square).expect("square has area");
        assert_relative_eq!(m.m00, 1.0, epsilon = 1e-15);
        assert_relative_eq!(m.m10, 0.5, epsilon = 1e-15);
        assert_relative_eq!(m.m01, 0.5, epsilon = 1e-15);
        assert_relative_eq!(m.mu20, 1.0 / 12.0, epsilon = 1e-15);
        assert_relative_eq!(m.mu11, 0.0, epsilon = 1e-15);
        assert_relative_eq!(m.mu02, 1.0 / 12.0, epsilon = 1e-15);
    }

    #[test]
    fn test_triangle_cross_moment() {
        // Right triangle (0,0), (2,0), (0,1): area 1, centroid (2/3, 1/3),
        // mu11 = -b²h²/72 = -1/18.
        let tri = [[0.0, 0.0], [2.0, 0.0], [0.0, 1.0]];
        let m = moments_from_contour(&tri).expect("triangle has area");
        assert_relative_eq!(m.m00, 1.0, epsilon = 1e-15);
        assert_relative_eq!(m.m10 / m.m00, 2.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(m.m01 / m.m00, 1.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(m.mu11, -1.0 / 18.0, epsilon = 1e-14);
    }

    #[test]
    fn test_winding_direction_does_not_matter() {
        let pts = sample_closed(&reference_ellipse(), 500);
        let ccw = moments_from_contour(&pts).expect("ellipse has area");
        let reversed: Vec<[f64; 2]> = pts.iter().rev().copied().collect();
        let cw = moments_from_contour(&reversed).expect("ellipse has area");
        assert_moments_close(&cw, &ccw, 1e-9);
        assert!(cw.m00 > 0.0);
    }

    #[test]
    fn test_dense_contour_approximates_closed_form() {
        let e = reference_ellipse();
        let m = moments_from_contour(&sample_closed(&e, 1001)).expect("ellipse has area");
        assert_moments_close(&m, &e.to_moments(), 1e-4);
    }

    #[test]
    fn test_transformed_contour_approximates_transformed_conic() {
        let e = reference_ellipse();
        let h = perspective_homography();
        let h_pts = project_points(&h, &sample_closed(&e, 1001));
        let from_contour = moments_from_contour(&h_pts).expect("image has area");
        let from_conic = conic_transform(&e.to_conic(), &h)
            .expect("homography is invertible")
            .to_moments()
            .expect("image is an ellipse");
        assert_moments_close(&from_contour, &from_conic, 1e-4);
    }

    #[test]
    fn test_degenerate_contours() {
        assert_eq!(
            moments_from_contour(&[[0.0, 0.0], [1.0, 1.0]]),
            Err(EllipseError::TooFewPoints { needed: 3, got: 2 })
        );
        let line = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
        assert_eq!(moments_from_contour(&line), Err(EllipseError::ZeroArea));
    }
}
