use geometry_msgs::msg::Twist;
use rclrs::{IntoPrimitiveOptions, Node};
use sensor_msgs::msg::Range;
use tracing::info;

use crate::WorkerNode;
use crate::avoider::ObstacleAvoider;
use crate::command::RangeReading;
use crate::config::AvoiderOptions;
use crate::error::Result;
use crate::turn::TurnSource;

/// The avoider as it runs on a node: commands go straight to a Twist publisher.
pub type PublishingAvoider<T> = ObstacleAvoider<T, rclrs::Publisher<Twist>>;

pub struct RangerNode<T>
where
    T: TurnSource + Send + Sync + 'static,
{
    _inner: WorkerNode<PublishingAvoider<T>>,
}

impl<T> RangerNode<T>
where
    T: TurnSource + Send + Sync + 'static,
{
    /// Advertises the command topic, then subscribes to the range topic.
    pub fn new(node: &Node, options: &AvoiderOptions, turns: T) -> Result<Self> {
        let publisher = node.create_publisher::<Twist>(
            options
                .command_topic
                .as_str()
                .keep_last(options.command_depth),
        )?;

        let mut inner = WorkerNode::new(node, ObstacleAvoider::new(turns, publisher));
        inner.create_subscription::<Range, _>(
            options.range_topic.as_str().keep_last(options.range_depth),
            move |avoider: &mut PublishingAvoider<T>, msg: Range| {
                avoider.on_reading(RangeReading::from(&msg));
            },
        )?;

        info!(
            range_topic = %options.range_topic,
            command_topic = %options.command_topic,
            "ranger node ready"
        );
        Ok(Self { _inner: inner })
    }
}
