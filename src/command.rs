//! Messages flowing through the avoider and their ROS counterparts.

use geometry_msgs::msg::{Twist, Vector3};
use sensor_msgs::msg::Range;

/// Readings closer than this (in cm) count as an obstacle.
pub const OBSTACLE_THRESHOLD: f64 = 100.0;

/// Turn rate is `TURN_GAIN / distance` when an obstacle is seen.
pub const TURN_GAIN: f64 = 10.0;

/// Forward speed is `distance / DRIVE_DIVISOR`.
pub const DRIVE_DIVISOR: f64 = 200.0;

/// One ultrasonic distance measurement, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeReading {
    pub distance: f64,
}

impl RangeReading {
    pub fn new(distance: f64) -> Self {
        Self { distance }
    }

    pub fn is_obstacle(&self) -> bool {
        self.distance < OBSTACLE_THRESHOLD
    }
}

impl From<&Range> for RangeReading {
    fn from(msg: &Range) -> Self {
        Self::new(f64::from(msg.range))
    }
}

/// Forward speed plus turn rate for the steering consumer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionCommand {
    pub linear_velocity: f64,
    /// Radians per second, positive turns left.
    pub angular_velocity: f64,
}

impl MotionCommand {
    pub fn is_finite(&self) -> bool {
        self.linear_velocity.is_finite() && self.angular_velocity.is_finite()
    }
}

impl From<&MotionCommand> for Twist {
    fn from(command: &MotionCommand) -> Self {
        Twist {
            linear: Vector3 {
                x: command.linear_velocity,
                ..Default::default()
            },
            angular: Vector3 {
                z: command.angular_velocity,
                ..Default::default()
            },
        }
    }
}

impl From<MotionCommand> for Twist {
    fn from(command: MotionCommand) -> Self {
        Twist::from(&command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_widens_the_range_field() {
        let msg = Range {
            range: 42.5,
            min_range: 2.0,
            max_range: 400.0,
            ..Default::default()
        };
        assert_eq!(RangeReading::from(&msg).distance, 42.5);
    }

    #[test]
    fn threshold_is_strict() {
        assert!(RangeReading::new(99.99).is_obstacle());
        assert!(!RangeReading::new(100.0).is_obstacle());
    }

    #[test]
    fn twist_only_carries_forward_and_yaw() {
        let twist = Twist::from(MotionCommand {
            linear_velocity: 0.25,
            angular_velocity: -0.2,
        });
        assert_eq!(twist.linear.x, 0.25);
        assert_eq!(twist.angular.z, -0.2);
        assert_eq!(twist.linear.y, 0.0);
        assert_eq!(twist.linear.z, 0.0);
        assert_eq!(twist.angular.x, 0.0);
        assert_eq!(twist.angular.y, 0.0);
    }
}
