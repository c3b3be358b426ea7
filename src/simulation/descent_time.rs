use crate::error::{Result, SimulationError};
use crate::geometry::curve::Curve;
use crate::math::Point2;

/// Default gravitational acceleration.
pub const DEFAULT_GRAVITY: f64 = 9.8;

/// Default number of integration steps.
pub const DEFAULT_STEP_COUNT: usize = 100;

/// Velocity substituted when a segment's average height is at or above
/// the release height, where energy conservation gives no real speed.
///
/// This is a numerical-stability device against division by zero, not a
/// general error-masking mechanism; every other failure in the
/// integrator surfaces immediately.
pub const VELOCITY_FLOOR: f64 = 1e-3;

/// Parameters controlling descent-time integration.
#[derive(Debug, Clone, Copy)]
pub struct IntegrationParams {
    /// Gravitational acceleration (must be positive).
    pub gravity: f64,
    /// Number of uniform parameter steps (must be positive).
    pub step_count: usize,
}

impl Default for IntegrationParams {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            step_count: DEFAULT_STEP_COUNT,
        }
    }
}

impl IntegrationParams {
    /// Checks that the parameters define a physical descent.
    ///
    /// # Errors
    ///
    /// Returns an error if the step count is zero or gravity is
    /// non-positive or non-finite.
    pub fn validate(&self) -> Result<()> {
        if self.step_count == 0 {
            return Err(SimulationError::InvalidIntegrationParameters(
                "step count must be positive".into(),
            )
            .into());
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(SimulationError::InvalidIntegrationParameters(
                "gravity must be positive".into(),
            )
            .into());
        }
        Ok(())
    }
}

/// The outcome of one descent-time integration.
#[derive(Debug, Clone)]
pub struct Descent {
    /// Total physical descent time.
    pub time: f64,
    /// The parameter-uniform points visited, in increasing parameter order.
    pub samples: Vec<Point2>,
}

/// Computes the descent time of a particle sliding from rest along a curve.
///
/// The elapsed time is the sum of `ds / v` over uniform parameter steps,
/// with `ds` the Euclidean distance between the segment's endpoint
/// evaluations and `v = sqrt(2 * g * h)` from energy conservation, where
/// `h` is the height fallen from the release point down to the average
/// of the segment's two endpoint heights. The two-point average is a
/// deliberate precision/cost trade-off; raising the step count shrinks
/// the discretization error.
pub struct DescentTime<'a> {
    curve: &'a dyn Curve,
    t_start: f64,
    t_end: f64,
    params: IntegrationParams,
}

impl<'a> DescentTime<'a> {
    /// Creates a new `DescentTime` operation over `[t_start, t_end]`.
    #[must_use]
    pub fn new(curve: &'a dyn Curve, t_start: f64, t_end: f64, params: IntegrationParams) -> Self {
        Self {
            curve,
            t_start,
            t_end,
            params,
        }
    }

    /// Executes the integration, returning the total time and the
    /// points visited.
    ///
    /// # Errors
    ///
    /// Returns an error if the integration parameters are invalid or
    /// the curve evaluates to a non-finite point anywhere in range.
    pub fn execute(&self) -> Result<Descent> {
        self.params.validate()?;

        let steps = self.params.step_count;
        #[allow(clippy::cast_precision_loss)]
        let dt = (self.t_end - self.t_start) / steps as f64;

        let mut samples = Vec::with_capacity(steps + 1);
        let mut prev = self.evaluate_finite(self.t_start)?;
        samples.push(prev);

        // The particle is released from rest at the first sample.
        let release_y = prev.y;

        let mut total = 0.0;
        for i in 1..=steps {
            #[allow(clippy::cast_precision_loss)]
            let t = self.t_start + i as f64 * dt;
            let p = self.evaluate_finite(t)?;

            let ds = (p - prev).norm();
            let y_avg = (prev.y + p.y) / 2.0;
            let drop = release_y - y_avg;
            let v = if drop > 0.0 {
                (2.0 * self.params.gravity * drop).sqrt()
            } else {
                VELOCITY_FLOOR
            };
            total += ds / v;

            samples.push(p);
            prev = p;
        }

        Ok(Descent {
            time: total,
            samples,
        })
    }

    fn evaluate_finite(&self, t: f64) -> Result<Point2> {
        let p = self.curve.evaluate(t)?;
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(SimulationError::NonFiniteEvaluation { parameter: t }.into());
        }
        Ok(p)
    }
}
