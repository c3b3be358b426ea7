pub mod curve;

pub use curve::{Curve, CurveDomain, CurveSpec, Cycloid, Line, Parabola};
