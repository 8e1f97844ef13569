use crate::error::StrokeError;

/// Default maximum distance error, in input units.
pub const DEFAULT_MAX_DISTANCE_ERROR: f64 = 1.5;
/// Default maximum angle error, in degrees.
pub const DEFAULT_MAX_ANGLE_ERROR: f64 = 1.5;
/// Magnitudes and angles at or below this are treated as zero.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// All simplification and fitting parameters in one struct.
/// Passed explicitly to every stage; nothing is read from global state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorConfig {
    /// Which error test decides whether a scanned point becomes an anchor.
    pub mode: ErrorMode,
    /// Maximum perpendicular deviation before a point must be kept.
    /// Also the merge radius for near-duplicate leading points.
    pub max_distance_error: f64,
    /// Maximum turn angle (degrees) before a point must be kept.
    pub max_angle_error: f64,
    /// Effective zero for magnitudes. Segments this short are degenerate.
    pub epsilon: f64,
    /// Curve fitting strategy used by [`crate::fit::fit`].
    pub strategy: FitStrategy,
}

/// Error test used by the point simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Local and anchor-relative turn angles.
    #[default]
    Angle,
    /// Perpendicular distance from the anchor chord.
    Distance,
    /// Fails when either the distance test or an angle test fails.
    Both,
}

/// How the fitter turns points into quadratic segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitStrategy {
    /// One quadratic per non-overlapping window of three points.
    #[default]
    Sequential,
    /// Grow spans while the turn stays under `max_angle_error`, then fit one
    /// quadratic through the span's convex point.
    Adaptive,
}

impl Default for ErrorConfig {
    fn default() -> Self {
        Self {
            mode: ErrorMode::default(),
            max_distance_error: DEFAULT_MAX_DISTANCE_ERROR,
            max_angle_error: DEFAULT_MAX_ANGLE_ERROR,
            epsilon: DEFAULT_EPSILON,
            strategy: FitStrategy::default(),
        }
    }
}

impl ErrorConfig {
    /// Check the numeric thresholds.
    ///
    /// The geometry functions accept any config, but a zero or negative
    /// threshold makes every point an anchor and a NaN makes none.
    pub fn validate(&self) -> Result<(), StrokeError> {
        if !(self.max_distance_error.is_finite() && self.max_distance_error > 0.0) {
            return Err(StrokeError::InvalidConfig(format!(
                "max distance error must be a positive number, got {}",
                self.max_distance_error
            )));
        }
        if !(self.max_angle_error.is_finite() && self.max_angle_error > 0.0) {
            return Err(StrokeError::InvalidConfig(format!(
                "max angle error must be a positive number of degrees, got {}",
                self.max_angle_error
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon >= 0.0) {
            return Err(StrokeError::InvalidConfig(format!(
                "epsilon must be zero or positive, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

impl std::str::FromStr for ErrorMode {
    type Err = StrokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "angle" => Ok(Self::Angle),
            "distance" | "dis" => Ok(Self::Distance),
            "both" => Ok(Self::Both),
            other => Err(StrokeError::InvalidConfig(format!(
                "unknown error mode '{}' (expected angle, distance or both)",
                other
            ))),
        }
    }
}

impl std::str::FromStr for FitStrategy {
    type Err = StrokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "adaptive" => Ok(Self::Adaptive),
            other => Err(StrokeError::InvalidConfig(format!(
                "unknown fit strategy '{}' (expected sequential or adaptive)",
                other
            ))),
        }
    }
}
