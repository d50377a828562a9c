use kinesis_connectors_common::opt::CommonSourceOpt;
use schemars::JsonSchema;
use structopt::StructOpt;

pub const DEFAULT_PARTITION_KEY: &str = "partitionkey";

#[derive(StructOpt, Debug, JsonSchema)]
pub enum ImageSourceSubCmd {
    /// Return connector metadata
    Metadata,
}

#[derive(StructOpt, Debug, JsonSchema)]
pub struct ImageSourceOpts {
    #[structopt(flatten)]
    #[schemars(flatten)]
    pub common: CommonSourceOpt,

    /// Milliseconds to wait between records
    #[structopt(long, default_value = "100")]
    pub interval: u64,

    /// Number of records to send before exiting. Runs forever if not given
    #[structopt(long)]
    pub count: Option<i64>,

    /// Partition key attached to every record
    // TBD: Use a different partition key per record
    #[structopt(long, default_value = DEFAULT_PARTITION_KEY)]
    pub partition_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_option_defaults() {
        let opts = ImageSourceOpts::from_iter(["connector", "--region", "us-east-1"]);

        assert_eq!(opts.interval, 100);
        assert_eq!(opts.count, None);
        assert_eq!(opts.partition_key, DEFAULT_PARTITION_KEY);
    }
}
