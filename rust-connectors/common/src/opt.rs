use aws_sdk_kinesis::config::Region;
use aws_sdk_kinesis::types::StreamStatus;
use aws_sdk_kinesis::Client;
use schemars::JsonSchema;
use structopt::clap::AppSettings;
use structopt::StructOpt;

use crate::error::StreamValidationError;

pub const DEFAULT_STREAM_NAME: &str = "FrameStream";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(StructOpt, Debug, JsonSchema, Clone)]
#[structopt(settings = &[AppSettings::DeriveDisplayOrder])]
pub struct CommonSourceOpt {
    /// The Kinesis stream where this connector sends records
    #[structopt(long, env = "STREAM_NAME", default_value = DEFAULT_STREAM_NAME)]
    #[schemars(skip)]
    pub stream_name: String,

    /// The AWS region hosting the stream
    #[structopt(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    #[schemars(skip)]
    pub region: String,

    /// The rust log level. If it is not defined, `RUST_LOG` environment variable
    /// will be used. If environment variable is not defined,
    /// then INFO level will be used.
    #[structopt(long)]
    #[schemars(skip)]
    pub rust_log: Option<String>,
}

impl CommonSourceOpt {
    pub fn enable_logging(&self) {
        if let Some(ref rust_log) = self.rust_log {
            std::env::set_var("RUST_LOG", rust_log);
        }
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info")
        }
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    pub fn region(&self) -> Result<Region, StreamValidationError> {
        if self.region.trim().is_empty() {
            return Err(StreamValidationError::InvalidRegion(self.region.clone()));
        }
        Ok(Region::new(self.region.clone()))
    }

    /// Credential resolution is left entirely to the SDK's default chain.
    pub async fn create_client(&self) -> Result<Client, StreamValidationError> {
        let region = self.region()?;
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(region)
            .load()
            .await;
        Ok(Client::new(&config))
    }

    /// Checks that the target stream exists and is active
    pub async fn validate_stream(&self, client: &Client) -> Result<(), StreamValidationError> {
        let output = client
            .describe_stream()
            .stream_name(&self.stream_name)
            .send()
            .await
            .map_err(|err| {
                let service_err = err.into_service_error();
                if service_err.is_resource_not_found_exception() {
                    StreamValidationError::StreamNotFound(self.stream_name.clone())
                } else {
                    StreamValidationError::Describe {
                        stream: self.stream_name.clone(),
                        message: service_err.to_string(),
                    }
                }
            })?;

        let description =
            output
                .stream_description()
                .ok_or_else(|| StreamValidationError::Describe {
                    stream: self.stream_name.clone(),
                    message: "missing stream description".to_string(),
                })?;

        ensure_active(&self.stream_name, description.stream_status())
    }
}

pub fn ensure_active(stream: &str, status: &StreamStatus) -> Result<(), StreamValidationError> {
    match status {
        StreamStatus::Active => Ok(()),
        other => Err(StreamValidationError::StreamNotActive {
            stream: stream.to_string(),
            status: other.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_active_stream_passes() {
        assert!(ensure_active("frames", &StreamStatus::Active).is_ok());
    }

    #[test]
    fn test_non_active_statuses_are_rejected() {
        for status in [
            StreamStatus::Creating,
            StreamStatus::Deleting,
            StreamStatus::Updating,
        ] {
            //when
            let result = ensure_active("frames", &status);

            //then
            match result.unwrap_err() {
                StreamValidationError::StreamNotActive {
                    stream,
                    status: rejected,
                } => {
                    assert_eq!(stream, "frames");
                    assert_eq!(rejected, status);
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_blank_region_is_rejected() {
        let opt = CommonSourceOpt::from_iter(["connector", "--region", " "]);
        assert!(matches!(
            opt.region(),
            Err(StreamValidationError::InvalidRegion(_))
        ));
    }

    #[test]
    fn test_stream_name_default() {
        let opt = CommonSourceOpt::from_iter(["connector", "--region", "us-west-2"]);
        assert_eq!(opt.stream_name, DEFAULT_STREAM_NAME);
    }
}
