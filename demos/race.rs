//! Brachis race demo — runs the standard descent comparison and prints
//! the ranked times.
//!
//! Usage:
//! ```text
//! cargo run --example race
//! ```

use brachis::geometry::curve::{
    CurveSpec, Cycloid, Line, Parabola, DEFAULT_SAG_DEPTH, DEFAULT_THETA_MAX,
};
use brachis::math::Point2;
use brachis::simulation::{Candidate, CompareDescent, IntegrationParams};
use brachis::Result;

fn main() -> Result<()> {
    let a = Point2::new(-4.0, 2.0);
    let b = Point2::new(4.0, -2.0);

    let candidates = vec![
        Candidate::new("Straight", CurveSpec::Line(Line::new(a, b)?)),
        Candidate::new(
            "Parabola",
            CurveSpec::Parabola(Parabola::new(a, b, DEFAULT_SAG_DEPTH)?),
        ),
        Candidate::new(
            "Cycloid",
            CurveSpec::Cycloid(Cycloid::new(a, b, DEFAULT_THETA_MAX)?),
        ),
    ];

    let comparison = CompareDescent::new(candidates, IntegrationParams::default())
        .with_display_scale(1.5)
        .execute()?;

    println!("Descent from A = ({}, {}) to B = ({}, {}):", a.x, a.y, b.x, b.y);
    for result in &comparison.results {
        println!(
            "  {:<10} {:.3} s  (display {:.3} s)",
            result.label, result.time, result.scaled_time
        );
    }
    println!("Winner: {}", comparison.fastest().label);

    Ok(())
}
