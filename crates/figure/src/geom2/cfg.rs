//! Tolerance defaults for grid figures.
//!
//! Policy
//! - Side lengths, collinearity and parallelism are compared at grid scale with
//!   a tight absolute epsilon.
//! - Right angles are compared in degrees with a loose window, since `atan2`
//!   amplifies rounding near 90°.

/// Absolute epsilon for real-valued equality (lengths, cross products, Pythagoras).
pub const EPSILON: f64 = 1e-5;
/// Allowed deviation from 90° when deciding that an interior angle is right.
pub const RIGHT_ANGLE_TOL_DEG: f64 = 2.0;
