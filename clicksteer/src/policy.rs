use clicksteer_interface::{Point, VelocityCommand};

use crate::{ANGULAR_SPEED, FORWARD_SPEED};

/// Maps the selected point to a velocity command.
///
/// This is a two-level step on the point's row, not a controller: the upper
/// half of the frame drives forward, everything else stops. The middle row
/// (`frame_height / 2`, integer division) belongs to the stopping half.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityPolicy {
    forward_speed: f64,
    angular_speed: f64,
}

impl Default for VelocityPolicy {
    fn default() -> Self {
        Self::new(FORWARD_SPEED, ANGULAR_SPEED)
    }
}

impl VelocityPolicy {
    pub const fn new(forward_speed: f64, angular_speed: f64) -> Self {
        Self {
            forward_speed,
            angular_speed,
        }
    }

    /// Linear speed for `point`.
    ///
    /// # Example
    ///
    /// ```
    /// use assert_approx_eq::assert_approx_eq;
    /// use clicksteer::VelocityPolicy;
    /// use clicksteer_interface::Point;
    ///
    /// let policy = VelocityPolicy::default();
    /// assert_approx_eq!(policy.derive(Point::new(300, 100), 512), 0.5);
    /// assert_approx_eq!(policy.derive(Point::new(300, 256), 512), 0.0);
    /// ```
    pub fn derive(&self, point: Point, frame_height: u32) -> f64 {
        if point.y < frame_height / 2 {
            self.forward_speed
        } else {
            0.0
        }
    }

    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    /// Command published before any point is selected.
    pub fn idle(&self) -> VelocityCommand {
        VelocityCommand::new(0.0, self.angular_speed)
    }

    pub fn command(&self, point: Point, frame_height: u32) -> VelocityCommand {
        VelocityCommand::new(self.derive(point, frame_height), self.angular_speed)
    }
}
