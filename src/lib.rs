//! Ultrasonic obstacle avoidance for turtlesim.
//!
//! Range readings come in on one topic, one velocity command goes out on
//! another for each of them. [`ObstacleAvoider`] holds the logic and can be
//! driven without a ROS context; [`RangerNode`] hooks it up to `rclrs`.

use std::any::Any;

use rclrs::{Node, WorkScope};

pub mod avoider;
pub mod command;
pub mod config;
pub mod error;
pub mod node;
pub mod sink;
pub mod turn;

pub use avoider::{ObstacleAvoider, steer};
pub use command::{MotionCommand, OBSTACLE_THRESHOLD, RangeReading};
pub use config::AvoiderOptions;
pub use error::{AvoiderError, Result};
pub use node::RangerNode;
pub use ranger_demo_derive::WorkerNode;
pub use sink::CommandSink;
pub use turn::{RandomTurnSource, TurnDirection, TurnSource};

/// A node whose callbacks all run against one payload through an `rclrs` worker.
///
/// Subscriptions created here are kept alive for as long as the `WorkerNode` is.
pub struct WorkerNode<Payload> {
    _node: Node,
    worker: rclrs::Worker<Payload>,
    storage: Vec<Box<dyn Any>>,
}

impl<Payload> WorkerNode<Payload>
where
    Payload: WorkScope,
{
    pub fn new(node: &Node, payload: Payload) -> Self {
        let worker = node.create_worker(payload);
        Self {
            _node: node.clone(),
            worker,
            storage: Vec::new(),
        }
    }

    pub fn create_subscription<'a, T: rosidl_runtime_rs::Message + 'static, Args>(
        &mut self,
        options: impl Into<rclrs::SubscriptionOptions<'a>>,
        callback: impl rclrs::IntoWorkerSubscriptionCallback<T, Payload, Args>,
    ) -> Result<()> {
        let subscription = self.worker.create_subscription(options, callback)?;
        self.storage.push(Box::new(subscription));
        Ok(())
    }
}
