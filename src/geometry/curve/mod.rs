mod cycloid;
mod line;
mod parabola;

pub use cycloid::{Cycloid, DEFAULT_THETA_MAX};
pub use line::Line;
pub use parabola::{Parabola, DEFAULT_SAG_DEPTH};

use crate::error::Result;
use crate::math::Point2;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric descent curves in the simulation plane.
///
/// Every curve connects a start point A to an end point B: evaluating
/// at `domain().t_min` yields A and at `domain().t_max` yields B.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 2D point.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point2>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;
}

/// A candidate curve family, selected explicitly.
#[derive(Debug, Clone)]
pub enum CurveSpec {
    /// A straight chord from A to B.
    Line(Line),
    /// A parabolic path sagging below the chord.
    Parabola(Parabola),
    /// A cycloid-like path fitted to the chord.
    Cycloid(Cycloid),
}

impl Curve for CurveSpec {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        match self {
            CurveSpec::Line(line) => line.evaluate(t),
            CurveSpec::Parabola(parabola) => parabola.evaluate(t),
            CurveSpec::Cycloid(cycloid) => cycloid.evaluate(t),
        }
    }

    fn domain(&self) -> CurveDomain {
        match self {
            CurveSpec::Line(line) => line.domain(),
            CurveSpec::Parabola(parabola) => parabola.domain(),
            CurveSpec::Cycloid(cycloid) => cycloid.domain(),
        }
    }
}
