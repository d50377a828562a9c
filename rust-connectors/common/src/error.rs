use aws_sdk_kinesis::types::StreamStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamValidationError {
    #[error("{0} is not a valid AWS region.")]
    InvalidRegion(String),
    #[error("Stream {0} does not exist. Please create it in the console.")]
    StreamNotFound(String),
    #[error("Stream {stream} is not active (status {status:?}). Please wait a few moments and try again.")]
    StreamNotActive {
        stream: String,
        status: StreamStatus,
    },
    #[error("Error found while describing the stream {stream}: {message}")]
    Describe { stream: String, message: String },
}
