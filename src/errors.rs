use thiserror::Error;

#[derive(Error, Debug)]
pub enum CraftError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CraftError {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
