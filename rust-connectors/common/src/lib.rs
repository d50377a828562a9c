pub mod kinesis {
    pub use aws_sdk_kinesis::{
        config::Region,
        primitives::Blob,
        types::{StreamDescription, StreamStatus},
        Client,
    };
}

pub mod error;
pub mod opt;
