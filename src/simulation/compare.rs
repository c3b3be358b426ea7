use crate::error::{Result, SimulationError};
use crate::geometry::curve::{Curve, CurveSpec};
use crate::math::Point2;

use super::{DescentTime, IntegrationParams};

/// Default display-scaling multiplier (no scaling).
pub const DEFAULT_DISPLAY_SCALE: f64 = 1.0;

/// A labeled candidate curve entered into a descent comparison.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Display label identifying the curve.
    pub label: String,
    /// The candidate curve.
    pub curve: CurveSpec,
}

impl Candidate {
    /// Creates a new labeled candidate.
    #[must_use]
    pub fn new(label: impl Into<String>, curve: CurveSpec) -> Self {
        Self {
            label: label.into(),
            curve,
        }
    }
}

/// The descent outcome for one candidate curve.
#[derive(Debug, Clone)]
pub struct DescentResult {
    /// Label of the candidate.
    pub label: String,
    /// Total physical descent time.
    pub time: f64,
    /// `time` multiplied by the display scale, for external pacing only.
    ///
    /// This never replaces the physical [`time`](Self::time); both are
    /// always retrievable.
    pub scaled_time: f64,
    /// The points visited by the integrator, in parameter order.
    pub samples: Vec<Point2>,
}

/// The ranked outcome of a descent comparison.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Per-candidate results, sorted ascending by physical time.
    pub results: Vec<DescentResult>,
    /// The display-scaling multiplier applied to `scaled_time`.
    pub display_scale: f64,
}

impl Comparison {
    /// Returns the candidate with the least physical descent time.
    #[must_use]
    pub fn fastest(&self) -> &DescentResult {
        // Results are non-empty: execute() rejects empty candidate sets.
        &self.results[0]
    }
}

/// Races a set of candidate curves and ranks them by descent time.
///
/// Each candidate is integrated over its own parameter domain with the
/// shared parameters; evaluation is sequential and deterministic.
pub struct CompareDescent {
    candidates: Vec<Candidate>,
    params: IntegrationParams,
    display_scale: f64,
}

impl CompareDescent {
    /// Creates a new `CompareDescent` operation.
    #[must_use]
    pub fn new(candidates: Vec<Candidate>, params: IntegrationParams) -> Self {
        Self {
            candidates,
            params,
            display_scale: DEFAULT_DISPLAY_SCALE,
        }
    }

    /// Sets the display-scaling multiplier applied to `scaled_time`.
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f64) -> Self {
        self.display_scale = display_scale;
        self
    }

    /// Executes the comparison, returning results sorted ascending by
    /// physical time.
    ///
    /// # Errors
    ///
    /// Returns an error if the candidate set is empty, the display scale
    /// is non-positive or non-finite, the integration parameters are
    /// invalid, or any curve evaluates to a non-finite point.
    pub fn execute(&self) -> Result<Comparison> {
        if self.candidates.is_empty() {
            return Err(SimulationError::InvalidIntegrationParameters(
                "candidate set is empty".into(),
            )
            .into());
        }
        if !self.display_scale.is_finite() || self.display_scale <= 0.0 {
            return Err(SimulationError::InvalidIntegrationParameters(
                "display scale must be positive".into(),
            )
            .into());
        }

        let mut results = Vec::with_capacity(self.candidates.len());
        for candidate in &self.candidates {
            let domain = candidate.curve.domain();
            let descent =
                DescentTime::new(&candidate.curve, domain.t_min, domain.t_max, self.params)
                    .execute()?;
            results.push(DescentResult {
                label: candidate.label.clone(),
                time: descent.time,
                scaled_time: descent.time * self.display_scale,
                samples: descent.samples,
            });
        }

        // Times are verified finite, so the total order is well defined.
        results.sort_by(|a, b| a.time.total_cmp(&b.time));

        Ok(Comparison {
            results,
            display_scale: self.display_scale,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{Cycloid, Line, Parabola, DEFAULT_SAG_DEPTH, DEFAULT_THETA_MAX};
    use approx::assert_relative_eq;

    fn standard_race() -> Vec<Candidate> {
        let a = Point2::new(-4.0, 2.0);
        let b = Point2::new(4.0, -2.0);
        vec![
            Candidate::new("Straight", CurveSpec::Line(Line::new(a, b).unwrap())),
            Candidate::new(
                "Parabola",
                CurveSpec::Parabola(Parabola::new(a, b, DEFAULT_SAG_DEPTH).unwrap()),
            ),
            Candidate::new(
                "Cycloid",
                CurveSpec::Cycloid(Cycloid::new(a, b, DEFAULT_THETA_MAX).unwrap()),
            ),
        ]
    }

    #[test]
    fn cycloid_wins_the_standard_race() {
        let comparison = CompareDescent::new(standard_race(), IntegrationParams::default())
            .execute()
            .unwrap();

        for result in &comparison.results {
            assert!(result.time.is_finite());
            assert!(result.time > 0.0);
        }

        let fastest = comparison.fastest();
        assert_eq!(fastest.label, "Cycloid");
        for other in &comparison.results[1..] {
            assert!(fastest.time < other.time);
        }
    }

    #[test]
    fn results_sorted_ascending_by_physical_time() {
        let comparison = CompareDescent::new(standard_race(), IntegrationParams::default())
            .execute()
            .unwrap();
        for pair in comparison.results.windows(2) {
            assert!(pair[0].time <= pair[1].time);
        }
    }

    #[test]
    fn scaled_and_physical_times_are_both_retrievable() {
        let comparison = CompareDescent::new(standard_race(), IntegrationParams::default())
            .with_display_scale(1.5)
            .execute()
            .unwrap();
        for result in &comparison.results {
            assert_relative_eq!(result.scaled_time, result.time * 1.5, max_relative = 1e-12);
            assert!(result.scaled_time != result.time);
        }
    }

    #[test]
    fn samples_span_the_endpoints() {
        let comparison = CompareDescent::new(standard_race(), IntegrationParams::default())
            .execute()
            .unwrap();
        for result in &comparison.results {
            assert_eq!(result.samples.len(), 101);
            let first = result.samples[0];
            let last = result.samples[100];
            assert!((first - Point2::new(-4.0, 2.0)).norm() < 1e-9);
            assert!((last - Point2::new(4.0, -2.0)).norm() < 1e-9);
        }
    }

    #[test]
    fn empty_candidate_set() {
        let r = CompareDescent::new(Vec::new(), IntegrationParams::default()).execute();
        assert!(r.is_err());
    }

    #[test]
    fn invalid_display_scale() {
        for scale in [0.0, -1.0, f64::INFINITY] {
            let r = CompareDescent::new(standard_race(), IntegrationParams::default())
                .with_display_scale(scale)
                .execute();
            assert!(r.is_err());
        }
    }
}
