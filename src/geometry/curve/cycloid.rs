use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

use super::{Curve, CurveDomain};

/// Default rolling-angle range for cycloid candidate paths.
///
/// This is a heuristic, not the solution of the transcendental equation
/// that fits a rolling-circle arc to an arbitrary chord aspect ratio;
/// 2.5 rad produces a plausible dip for chords near the standard race
/// geometry and is kept for continuity with existing comparisons.
pub const DEFAULT_THETA_MAX: f64 = 2.5;

/// A cycloid-like path from A to B.
///
/// Raw cycloid coordinates are generated from a rolling angle `theta`
/// in `[0, theta_max]`:
///
/// `x = x0 + r * (theta - sin(theta))`
/// `y = y0 - r * (1 - cos(theta))`
///
/// with the radius `r` chosen so the raw x-displacement over the full
/// angle range matches the horizontal chord, and the raw y rescaled by
/// a fixed ratio so `theta_max` lands exactly on B.
#[derive(Debug, Clone)]
pub struct Cycloid {
    start: Point2,
    end: Point2,
    theta_max: f64,
    radius: f64,
    y_scale: f64,
}

impl Cycloid {
    /// Creates a new cycloid path.
    ///
    /// # Arguments
    ///
    /// * `start` - Start point A
    /// * `end` - End point B (must lie strictly to the right of A)
    /// * `theta_max` - Rolling-angle range (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide, the angle range is
    /// non-positive or non-finite, the rolling radius is not strictly
    /// positive, or the raw vertical drop at `theta_max` is too small
    /// to anchor the y-rescale.
    pub fn new(start: Point2, end: Point2, theta_max: f64) -> Result<Self> {
        if (end - start).norm() < TOLERANCE {
            return Err(GeometryError::DegenerateCurve("endpoints coincide".into()).into());
        }
        if !theta_max.is_finite() || theta_max < TOLERANCE {
            return Err(GeometryError::DegenerateCurve(
                "rolling-angle range must be positive".into(),
            )
            .into());
        }

        let chord_x = end.x - start.x;
        if chord_x < TOLERANCE {
            return Err(GeometryError::DegenerateCurve(
                "cycloid requires a positive horizontal chord".into(),
            )
            .into());
        }

        let radius = chord_x / (theta_max - theta_max.sin());
        if radius < TOLERANCE {
            return Err(
                GeometryError::DegenerateCurve("cycloid radius must be positive".into()).into(),
            );
        }

        // Raw endpoint drop anchors the y-rescale onto B.
        let raw_drop = radius * (1.0 - theta_max.cos());
        if raw_drop < TOLERANCE {
            return Err(GeometryError::DegenerateCurve(
                "rolling-angle range produces no vertical drop".into(),
            )
            .into());
        }
        let y_scale = (end.y - start.y) / -raw_drop;

        Ok(Self {
            start,
            end,
            theta_max,
            radius,
            y_scale,
        })
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

    /// Returns the rolling-angle range.
    #[must_use]
    pub fn theta_max(&self) -> f64 {
        self.theta_max
    }

    /// Returns the rolling radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Curve for Cycloid {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        // The general formula is numerically unstable near theta = 0;
        // the singular case must return A exactly.
        if t == 0.0 {
            return Ok(self.start);
        }
        let x = self.start.x + self.radius * (t - t.sin());
        let y_raw = self.start.y - self.radius * (1.0 - t.cos());
        let y = self.start.y + (y_raw - self.start.y) * self.y_scale;
        Ok(Point2::new(x, y))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.theta_max)
    }
}
