use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

use super::{Curve, CurveDomain};

/// A straight chord from a start point A to an end point B.
///
/// The parametric form is: `P(t) = A + t * (B - A)` for `t` in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Line {
    start: Point2,
    end: Point2,
}

impl Line {
    /// Creates a new chord between two points.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide.
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        if (end - start).norm() < TOLERANCE {
            return Err(GeometryError::DegenerateCurve("endpoints coincide".into()).into());
        }
        Ok(Self { start, end })
    }

    /// Returns the start point A.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point B.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        Ok(self.start + (self.end - self.start) * t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }
}
