use std::time::Duration;

use image::DynamicImage;
use kinesis_connectors_common::kinesis::{Blob, Client};
use tokio_stream::StreamExt;
use tracing::{info, warn};

use crate::error::ImageConnectorError;
use crate::images::{to_record_bytes, ImageSet};
use crate::opt::ImageSourceOpts;

pub async fn produce(opts: ImageSourceOpts) -> Result<(), ImageConnectorError> {
    let client = opts.common.create_client().await?;

    // Validate that the stream exists and is active
    opts.common.validate_stream(&client).await?;

    let images = ImageSet::bundled()?;
    info!(
        "Loaded {} bundled images for stream {}",
        images.len(),
        opts.common.stream_name
    );

    let num_records = opts.count.unwrap_or(i64::MAX);
    let timer = tokio::time::interval(Duration::from_millis(opts.interval));
    let mut timer_stream = tokio_stream::wrappers::IntervalStream::new(timer);

    let mut sent: i64 = 0;
    while sent < num_records && timer_stream.next().await.is_some() {
        let image = images.get_random_image();
        send_image(&client, &opts, image).await;
        sent += 1;
    }
    Ok(())
}

/// Puts one image record on the stream. Transport errors are logged and
/// swallowed so the loop keeps running.
async fn send_image(client: &Client, opts: &ImageSourceOpts, image: &DynamicImage) {
    let bytes = match to_record_bytes(image) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("Could not serialize the image: {:?}", err);
            return;
        }
    };
    if bytes.is_empty() {
        warn!("Could not send the image, serialization produced no bytes");
        return;
    }

    info!("Putting image (width {}), length: {}", image.width(), bytes.len());
    let request = client
        .put_record()
        .stream_name(&opts.common.stream_name)
        .partition_key(&opts.partition_key)
        .data(Blob::new(bytes));

    if let Err(err) = request.send().await {
        warn!("Error sending record to Amazon Kinesis: {:?}", err);
    }
}
