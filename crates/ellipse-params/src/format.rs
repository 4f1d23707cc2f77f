//! Parameter names and human-readable rendering of the three tuples.

use std::fmt;

use crate::conic::ConicCoeffs;
use crate::gparams::Ellipse;
use crate::moments::ShapeMoments;

/// Identifier-style names of the geometric parameters, in array order.
pub const GPARAMS_NAMES: [&str; 5] = ["x0", "y0", "a", "b", "theta"];
/// Display names of the geometric parameters.
pub const GPARAMS_DISPLAY_NAMES: [&str; 5] = ["x₀", "y₀", "a", "b", "θ"];

/// Names of the conic coefficients, in array order.
pub const CONIC_NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
/// Display names of the conic coefficients.
pub const CONIC_DISPLAY_NAMES: [&str; 6] = CONIC_NAMES;

/// Keys of the shape moments, in array order. These match the keys of the
/// usual image-moment dictionaries.
pub const MOMENTS_NAMES: [&str; 6] = ["m00", "m10", "m01", "mu20", "mu11", "mu02"];
/// Display names of the shape moments.
pub const MOMENTS_DISPLAY_NAMES: [&str; 6] = ["m₀₀", "m₁₀", "m₀₁", "mu₂₀", "mu₁₁", "mu₀₂"];

/// Write `(name: value, ...)`. Formatter flags such as precision apply to
/// every value.
fn write_params(f: &mut fmt::Formatter<'_>, names: &[&str], values: &[f64]) -> fmt::Result {
    f.write_str("(")?;
    for (i, (name, value)) in names.iter().zip(values).enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}: ", name)?;
        fmt::Display::fmt(value, f)?;
    }
    f.write_str(")")
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_params(f, &GPARAMS_DISPLAY_NAMES, &self.to_array())
    }
}

impl fmt::Display for ConicCoeffs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_params(f, &CONIC_DISPLAY_NAMES, &self.0)
    }
}

impl fmt::Display for ShapeMoments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_params(f, &MOMENTS_DISPLAY_NAMES, &self.to_array())
    }
}

impl ShapeMoments {
    /// Build from any keyed moment source, looking up [`MOMENTS_NAMES`].
    ///
    /// Returns `None` if a key is missing.
    pub fn from_lookup<F>(mut lookup: F) -> Option<Self>
    where
        F: FnMut(&str) -> Option<f64>,
    {
        let mut values = [0.0; 6];
        for (slot, name) in values.iter_mut().zip(MOMENTS_NAMES) {
            *slot = lookup(name)?;
        }
        Some(Self::from_array(values))
    }
}
