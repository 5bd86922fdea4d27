use std::{fmt, num::NonZeroU32};

use serde::{Deserialize, Serialize};

/// Pixel coordinate selected by the operator.
///
/// `(0, 0)` is the top-left corner of the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Outward form of a [`Point`]: pixel units as floating point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetPoint {
    pub x: f64,
    pub y: f64,
}

impl TargetPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Converts a pixel coordinate into its published form.
///
/// # Example
///
/// ```
/// use assert_approx_eq::assert_approx_eq;
/// use clicksteer_interface::{Point, TargetPoint};
///
/// let target = TargetPoint::from(Point::new(300, 100));
/// assert_approx_eq!(target.x, 300.0);
/// assert_approx_eq!(target.y, 100.0);
/// ```
impl From<Point> for TargetPoint {
    fn from(point: Point) -> Self {
        Self {
            x: point.x as f64,
            y: point.y as f64,
        }
    }
}

/// Side length in pixels of the square drawn around the selected point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationSize(NonZeroU32);

impl AnnotationSize {
    /// Returns `None` unless `size` is a positive integer that fits in `u32`.
    pub fn new(size: i64) -> Option<Self> {
        u32::try_from(size)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for AnnotationSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Velocity command for a differential-drive base.
///
/// `linear` is the forward/backward speed and `angular` the rotation rate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VelocityCommand {
    pub linear: f64,
    pub angular: f64,
}

impl VelocityCommand {
    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }
}
