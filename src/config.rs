//! Build-time defaults for the ranger node.
//!
//! Topic names here are only defaults; renaming at runtime goes through the
//! usual ROS remapping arguments.

pub const NODE_NAME: &str = "ranger_demo";

/// Must match the topic the sensor bridge publishes on.
pub const RANGE_TOPIC: &str = "/sensors/ultrasonic_range";
pub const RANGE_QUEUE_DEPTH: u32 = 100;

pub const COMMAND_TOPIC: &str = "/turtle1/cmd_vel";
pub const COMMAND_QUEUE_DEPTH: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvoiderOptions {
    pub range_topic: String,
    pub range_depth: u32,
    pub command_topic: String,
    pub command_depth: u32,
}

impl Default for AvoiderOptions {
    fn default() -> Self {
        Self {
            range_topic: RANGE_TOPIC.to_owned(),
            range_depth: RANGE_QUEUE_DEPTH,
            command_topic: COMMAND_TOPIC.to_owned(),
            command_depth: COMMAND_QUEUE_DEPTH,
        }
    }
}
