use std::time::Duration;

use clicksteer_interface::AnnotationSize;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Period of the velocity republish timer.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);
/// Linear speed commanded while the target lies in the upper half of the frame.
pub const FORWARD_SPEED: f64 = 0.5;
/// Angular speed, commanded unconditionally.
pub const ANGULAR_SPEED: f64 = 0.5;
pub const DEFAULT_ANNOTATION_SIZE: i64 = 100;

/// Size of the frames the node is built for.
///
/// Incoming frames are expected to have this size; the velocity rule always
/// uses `height` from here, never the size of an arriving frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    pub width: u32,
    pub height: u32,
}

impl FrameGeometry {
    pub const DEFAULT: Self = Self {
        width: 512,
        height: 512,
    };

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn default_annotation_size() -> i64 {
    DEFAULT_ANNOTATION_SIZE
}

/// Startup configuration of the node.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ClickSteerConfig {
    /// Side length in pixels of the square drawn at the selected point.
    /// Must be a positive integer.
    #[serde(default = "default_annotation_size")]
    pub annotation_size: i64,
}

impl Default for ClickSteerConfig {
    fn default() -> Self {
        Self {
            annotation_size: DEFAULT_ANNOTATION_SIZE,
        }
    }
}

impl ClickSteerConfig {
    pub fn validate(&self) -> Result<AnnotationSize, Error> {
        AnnotationSize::new(self.annotation_size)
            .ok_or(Error::InvalidAnnotationSize(self.annotation_size))
    }
}
