use kinesis_connectors_common::error::StreamValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageConnectorError {
    #[error("Stream validation error: `{0}`.")]
    Stream(#[from] StreamValidationError),
    #[error("Failed to decode bundled image {name}: {source}")]
    ImageDecode {
        name: &'static str,
        source: image::ImageError,
    },
    #[error("The bundled image set is empty.")]
    EmptyImageSet,
    #[error("Failed to encode image to jpeg: {0}")]
    ImageEncode(#[source] image::ImageError),
}
