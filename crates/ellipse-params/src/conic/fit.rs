//! Homogeneous least-squares conic fitting.

use nalgebra::{DMatrix, Matrix3};
use serde::{Deserialize, Serialize};

use super::ConicCoeffs;
use crate::error::EllipseError;

/// Minimum number of points for a conic fit.
pub const MIN_FIT_POINTS: usize = 6;

/// Options for [`conic_from_points_with`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    /// Shift points to their centroid and scale them to mean distance √2
    /// before fitting, then map the conic back to the input frame.
    ///
    /// Off by default: the plain fit expects coordinates near `[-1, 1]`.
    pub normalize: bool,
}

/// Fit conic coefficients to 2D points by homogeneous least squares.
///
/// Builds the design matrix with rows `[x², xy, y², x, y, 1]` and returns the
/// right singular vector of its smallest singular value (unit norm, arbitrary
/// sign and scale). Requires at least 6 points.
///
/// The result is poorly conditioned when the coordinates are far from the
/// `[-1, 1]` interval; pre-scale the points or use [`conic_from_points_with`].
/// Degenerate point sets produce some null vector that need not be an
/// ellipse, check it with [`super::conic_scale`].
pub fn conic_from_points(points: &[[f64; 2]]) -> Result<ConicCoeffs, EllipseError> {
    let n = points.len();
    if n < MIN_FIT_POINTS {
        return Err(EllipseError::TooFewPoints {
            needed: MIN_FIT_POINTS,
            got: n,
        });
    }

    let mut d = DMatrix::<f64>::zeros(n, 6);
    for (i, &[x, y]) in points.iter().enumerate() {
        d[(i, 0)] = x * x;
        d[(i, 1)] = x * y;
        d[(i, 2)] = y * y;
        d[(i, 3)] = x;
        d[(i, 4)] = y;
        d[(i, 5)] = 1.0;
    }

    let svd = d.svd(false, true);
    let v_t = svd
        .v_t
        .ok_or_else(|| EllipseError::NumericalFailure("SVD did not return V".into()))?;

    // Singular values are not assumed to be sorted.
    let s = &svd.singular_values;
    let mut min_i = 0usize;
    for i in 1..s.len() {
        if s[i] < s[min_i] {
            min_i = i;
        }
    }
    tracing::debug!(n, sigma_min = s[min_i], "homogeneous conic fit");

    let row = v_t.row(min_i);
    Ok(ConicCoeffs([row[0], row[1], row[2], row[3], row[4], row[5]]))
}

/// Fit conic coefficients with explicit options.
pub fn conic_from_points_with(
    points: &[[f64; 2]],
    options: &FitOptions,
) -> Result<ConicCoeffs, EllipseError> {
    if !options.normalize {
        return conic_from_points(points);
    }
    if points.len() < MIN_FIT_POINTS {
        return Err(EllipseError::TooFewPoints {
            needed: MIN_FIT_POINTS,
            got: points.len(),
        });
    }

    let t = normalizing_transform(points);
    let normalized: Vec<[f64; 2]> = points
        .iter()
        .map(|&[x, y]| {
            [
                t[(0, 0)] * x + t[(0, 2)],
                t[(1, 1)] * y + t[(1, 2)],
            ]
        })
        .collect();

    // Input points p satisfy (T p)ᵀ M' (T p) = 0, so M = Tᵀ M' T.
    let m = conic_from_points(&normalized)?.to_matrix();
    Ok(ConicCoeffs::from_matrix(&(t.transpose() * m * t)))
}

/// Similarity that moves the centroid to the origin and scales the mean
/// distance from it to √2.
fn normalizing_transform(points: &[[f64; 2]]) -> Matrix3<f64> {
    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p[0], sy + p[1]));
    let (mx, my) = (sum_x / n, sum_y / n);

    let mean_dist = points
        .iter()
        .map(|p| (p[0] - mx).hypot(p[1] - my))
        .sum::<f64>()
        / n;

    let s = if mean_dist > 1e-15 {
        std::f64::consts::SQRT_2 / mean_dist
    } else {
        tracing::warn!(
            n = points.len(),
            "points have no spread; fitting without rescaling"
        );
        1.0
    };

    Matrix3::new(s, 0.0, -s * mx, 0.0, s, -s * my, 0.0, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_conic_close, reference_ellipse, sample_closed, unit_ellipse};

    #[test]
    fn test_too_few_points() {
        let pts = vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        assert_eq!(
            conic_from_points(&pts),
            Err(EllipseError::TooFewPoints { needed: 6, got: 3 })
        );
        let opts = FitOptions { normalize: true };
        assert!(conic_from_points_with(&pts, &opts).is_err());
    }

    #[test]
    fn test_fit_returns_unit_vector() {
        let pts = sample_closed(&unit_ellipse(), 64);
        let c = conic_from_points(&pts).expect("fit should succeed");
        let norm = c.0.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12, "norm = {}", norm);
    }

    #[test]
    fn test_points_lie_on_fitted_conic() {
        let pts = sample_closed(&unit_ellipse(), 32);
        let c = conic_from_points(&pts).expect("fit should succeed");
        for &[x, y] in &pts {
            assert!(c.algebraic_distance(x, y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normalized_fit_on_pixel_coordinates() {
        let e = reference_ellipse();
        let pts = sample_closed(&e, 1001);
        let c = conic_from_points_with(&pts, &FitOptions { normalize: true })
            .expect("fit should succeed")
            .normalized()
            .expect("fit should be an ellipse");
        assert_conic_close(&c, &e.to_conic(), 1e-6);
    }

    #[test]
    fn test_normalizing_transform() {
        let pts = [[10.0, 20.0], [14.0, 20.0], [10.0, 24.0], [14.0, 24.0]];
        let t = normalizing_transform(&pts);
        let mapped: Vec<[f64; 2]> = pts
            .iter()
            .map(|&[x, y]| [t[(0, 0)] * x + t[(0, 2)], t[(1, 1)] * y + t[(1, 2)]])
            .collect();
        let cx: f64 = mapped.iter().map(|p| p[0]).sum();
        let cy: f64 = mapped.iter().map(|p| p[1]).sum();
        assert!(cx.abs() < 1e-12 && cy.abs() < 1e-12);
        for [x, y] in mapped {
            assert!((x.hypot(y) - std::f64::consts::SQRT_2).abs() < 1e-12);
        }

        let same = [[3.0, 3.0]; 6];
        assert_eq!(normalizing_transform(&same)[(0, 0)], 1.0);
    }

    #[test]
    fn test_fit_options_serde_defaults() {
        let opts: FitOptions = serde_json::from_str("{}").expect("empty config is valid");
        assert_eq!(opts, FitOptions::default());
        let opts: FitOptions =
            serde_json::from_str(r#"{"normalize": true}"#).expect("config should parse");
        assert!(opts.normalize);
    }
}
