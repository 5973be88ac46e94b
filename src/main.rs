use anyhow::{Error, Result};
use rclrs::*;
use tracing::{error, info};

use ranger_demo::config::NODE_NAME;
use ranger_demo::{AvoiderOptions, RandomTurnSource, RangerNode};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ranger_demo=info".parse()?),
        )
        .init();

    let context = Context::default_from_env()?;

    let mut executor = context.create_basic_executor();

    let node = executor.create_node(NODE_NAME)?;
    let _ranger = RangerNode::new(
        &node,
        &AvoiderOptions::default(),
        RandomTurnSource::from_time(),
    )?;
    info!(node = NODE_NAME, "spinning");

    for err in executor.spin(SpinOptions::default()) {
        error!(%err, "executor error");
    }

    Ok(())
}
