use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

use super::{Curve, CurveDomain};

/// Default bow factor for parabolic candidate paths.
///
/// Comparison call sites historically mixed 2.0 and 4.0; the depth is an
/// explicit constructor argument so callers can pick either, with 4.0 as
/// the single documented default.
pub const DEFAULT_SAG_DEPTH: f64 = 4.0;

/// A parabolic path from A to B that dips below the chord.
///
/// The parametric form for `t` in `[0, 1]` is the chord interpolation
/// with a symmetric sagitta term subtracted from the y-coordinate:
///
/// `y(t) = lerp_y(t) - depth * t * (1 - t) * |y1 - y0|`
#[derive(Debug, Clone)]
pub struct Parabola {
    start: Point2,
    end: Point2,
    depth: f64,
}

impl Parabola {
    /// Creates a new parabolic path.
    ///
    /// # Arguments
    ///
    /// * `start` - Start point A
    /// * `end` - End point B
    /// * `depth` - Bow factor scaling the sagitta (must be finite and non-negative)
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide or the depth is
    /// negative or non-finite.
    pub fn new(start: Point2, end: Point2, depth: f64) -> Result<Self> {
        if (end - start).norm() < TOLERANCE {
            return Err(GeometryError::DegenerateCurve("endpoints coincide".into()).into());
        }
        if !depth.is_finite() || depth < 0.0 {
            return Err(GeometryError::DegenerateCurve(
                "sag depth must be finite and non-negative".into(),
            )
            .into());
        }
        Ok(Self { start, end, depth })
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

    /// Returns the bow factor.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }
}

impl Curve for Parabola {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        let x = self.start.x + t * (self.end.x - self.start.x);
        let drop = (self.end.y - self.start.y).abs();
        let y = self.start.y + t * (self.end.y - self.start.y)
            - self.depth * t * (1.0 - t) * drop;
        Ok(Point2::new(x, y))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn standard_parabola(depth: f64) -> Parabola {
        Parabola::new(Point2::new(-4.0, 2.0), Point2::new(4.0, -2.0), depth).unwrap()
    }

    #[test]
    fn evaluate_at_endpoints() {
        let p = standard_parabola(2.0);
        let a = p.evaluate(0.0).unwrap();
        let b = p.evaluate(1.0).unwrap();
        assert!((a - Point2::new(-4.0, 2.0)).norm() < TOLERANCE);
        assert!((b - Point2::new(4.0, -2.0)).norm() < TOLERANCE);
    }

    #[test]
    fn dips_below_chord() {
        let p = standard_parabola(2.0);
        let mid = p.evaluate(0.5).unwrap();
        // Chord midpoint is (0, 0); sagitta is 2 * 0.25 * 4 = 2
        assert!((mid - Point2::new(0.0, -2.0)).norm() < TOLERANCE);
    }

    #[test]
    fn zero_depth_is_the_chord() {
        let p = standard_parabola(0.0);
        let mid = p.evaluate(0.5).unwrap();
        assert!((mid - Point2::new(0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn deeper_bow_dips_lower() {
        let shallow = standard_parabola(2.0).evaluate(0.5).unwrap();
        let deep = standard_parabola(4.0).evaluate(0.5).unwrap();
        assert!(deep.y < shallow.y);
    }

    #[test]
    fn coincident_endpoints() {
        let r = Parabola::new(Point2::new(0.0, 0.0), Point2::new(0.0, 0.0), 2.0);
        assert!(r.is_err());
    }

    #[test]
    fn invalid_depth() {
        let r = Parabola::new(Point2::new(-4.0, 2.0), Point2::new(4.0, -2.0), -1.0);
        assert!(r.is_err());
        let r = Parabola::new(Point2::new(-4.0, 2.0), Point2::new(4.0, -2.0), f64::NAN);
        assert!(r.is_err());
    }
}
