use schemars::schema_for;
use serde::Serialize;
use structopt::StructOpt;
use tracing::info;

mod error;
mod images;
mod opt;
mod produce;

use error::ImageConnectorError;
use opt::{ImageSourceOpts, ImageSourceSubCmd};
use produce::produce;

#[derive(Debug, Serialize)]
struct MySchema {
    name: &'static str,
    direction: ConnectorDirection,
    schema: schemars::schema::RootSchema,
    version: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
#[allow(dead_code)] // Only the Source variant is used today.
enum ConnectorDirection {
    Source,
    Sink,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ImageConnectorError> {
    // Handle the metadata subcommand
    if let Ok(ImageSourceSubCmd::Metadata) = ImageSourceSubCmd::from_args_safe() {
        let schema = MySchema {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            direction: ConnectorDirection::Source,
            schema: schema_for!(ImageSourceOpts),
        };
        println!("{}", serde_json::to_string(&schema).unwrap());
        return Ok(());
    }

    let opts = ImageSourceOpts::from_args();
    opts.common.enable_logging();
    info!("Initializing Kinesis image connector");

    produce(opts).await?;
    Ok(())
}
