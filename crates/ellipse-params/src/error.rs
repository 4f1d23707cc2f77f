//! Error type shared by the fallible conversions.

/// Errors reported by the `try_*` conversions, the fit and the contour
/// integration.
#[derive(Debug, Clone, PartialEq)]
pub enum EllipseError {
    /// Too few points for the requested operation.
    TooFewPoints {
        /// Required minimum number of points.
        needed: usize,
        /// Provided number of points.
        got: usize,
    },
    /// The conic is a hyperbola, parabola, point or otherwise not an ellipse.
    NotAnEllipse {
        /// Discriminant `4AC - B²` of the rejected conic.
        discriminant: f64,
    },
    /// The homography has no inverse.
    SingularHomography,
    /// The contour encloses exactly zero area.
    ZeroArea,
    /// A linear-algebra routine did not produce a result.
    NumericalFailure(String),
}

impl std::fmt::Display for EllipseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewPoints { needed, got } => {
                write!(f, "too few points: need {}, got {}", needed, got)
            }
            Self::NotAnEllipse { discriminant } => {
                write!(
                    f,
                    "conic is not an ellipse (4AC - B² = {})",
                    discriminant
                )
            }
            Self::SingularHomography => write!(f, "homography is not invertible"),
            Self::ZeroArea => write!(f, "contour encloses zero area"),
            Self::NumericalFailure(msg) => write!(f, "numerical failure: {}", msg),
        }
    }
}

impl std::error::Error for EllipseError {}
