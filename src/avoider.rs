//! Reactive obstacle avoidance: one motion command per range reading.

use ranger_demo_derive::WorkerNode;
use tracing::{error, info, warn};

use crate::command::{DRIVE_DIVISOR, MotionCommand, RangeReading, TURN_GAIN};
use crate::sink::CommandSink;
use crate::turn::TurnSource;

/// Maps a reading to a command without emitting it.
///
/// The turn source is only consulted when the reading is an obstacle. No
/// validation happens here: a zero distance gives an infinite turn rate and a
/// negative one flips the signs, exactly as the arithmetic says.
pub fn steer(reading: &RangeReading, turns: &mut impl TurnSource) -> MotionCommand {
    let mut command = MotionCommand::default();
    if reading.is_obstacle() {
        let turn_magnitude = TURN_GAIN / reading.distance;
        command.angular_velocity = turns.next_direction().signum() * turn_magnitude;
    }
    command.linear_velocity = reading.distance / DRIVE_DIVISOR;
    command
}

/// Owns the turn source and the outbound sink; holds no memory of past readings.
#[derive(WorkerNode)]
pub struct ObstacleAvoider<T, S> {
    turns: T,
    sink: S,
}

impl<T, S> ObstacleAvoider<T, S>
where
    T: TurnSource,
    S: CommandSink,
{
    pub fn new(turns: T, sink: S) -> Self {
        Self { turns, sink }
    }

    /// Computes and emits exactly one command for `reading`.
    ///
    /// A failed emission is logged and not retried; the computed command is
    /// returned either way.
    pub fn on_reading(&mut self, reading: RangeReading) -> MotionCommand {
        let command = steer(&reading, &mut self.turns);

        if reading.is_obstacle() {
            info!(
                range = reading.distance,
                turn_amount = command.angular_velocity.abs(),
                "obstacle detected"
            );
        }
        info!(drive_distance = command.linear_velocity, "drive");
        if !command.is_finite() {
            warn!(
                range = reading.distance,
                linear = command.linear_velocity,
                angular = command.angular_velocity,
                "non-finite command, publishing as-is"
            );
        }

        if let Err(err) = self.sink.send(&command) {
            error!(%err, "failed to publish motion command");
        }
        command
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turn::TurnDirection;

    fn never_called() -> TurnDirection {
        panic!("turn source consulted without an obstacle")
    }

    #[test]
    fn clear_path_skips_the_draw() {
        let command = steer(&RangeReading::new(250.0), &mut never_called);
        assert_eq!(command.angular_velocity, 0.0);
        assert_eq!(command.linear_velocity, 1.25);
    }

    #[test]
    fn obstacle_turns_by_inverse_distance() {
        let command = steer(&RangeReading::new(20.0), &mut || TurnDirection::Right);
        assert_eq!(command.angular_velocity, -0.5);
        assert_eq!(command.linear_velocity, 0.1);
    }

    #[test]
    fn negative_distance_flows_through() {
        let command = steer(&RangeReading::new(-10.0), &mut || TurnDirection::Left);
        assert_eq!(command.angular_velocity, -1.0);
        assert_eq!(command.linear_velocity, -0.05);
    }
}
