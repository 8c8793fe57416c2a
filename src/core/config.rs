/// Tolerance used by [`Vec2::almost_eq`](crate::util::linalg::Vec2::almost_eq). The GLSL-style
/// comparisons (`equal`, `less`, ...) are always exact and ignore this.
pub const EPSILON: f64 = 1e-10;
pub const LOG_FILE: &str = "run.log";
