use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvoiderError {
    /// Node, publisher or subscription setup failed, or a publish was rejected.
    #[error("ROS error: {0}")]
    Ros(#[from] rclrs::RclrsError),
}

pub type Result<T> = std::result::Result<T, AvoiderError>;
