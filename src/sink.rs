use geometry_msgs::msg::Twist;

use crate::command::MotionCommand;
use crate::error::Result;

/// Accepts every command the avoider produces.
pub trait CommandSink {
    fn send(&self, command: &MotionCommand) -> Result<()>;
}

impl CommandSink for rclrs::Publisher<Twist> {
    fn send(&self, command: &MotionCommand) -> Result<()> {
        self.publish(Twist::from(command))?;
        Ok(())
    }
}
