pub mod request;
pub mod response;
pub mod topic;
pub mod classification;

pub use response::*;
pub use request::*;
pub use topic::Topic;
pub use classification::{Classification, Guess, ZeroShotRequest, InferenceError};

use serde::{Serialize, Deserialize};

/// Messages that cross the boundary as one JSON document per message.
pub trait JsonMessage<'a>: Serialize + Deserialize<'a> {
    fn deser(text: &'a str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(text)
    }

    fn ser(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self)
    }
}
