/// 2D point type.
///
/// The simulation plane has y increasing upward; gravity acts in -y.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
