//! Zero-shot text classification behind a small async trait.
//!
//! The game only ever talks to [`Gateway`]; [`HuggingFace`] is the hosted
//! implementation.

mod error;
mod gateway;
mod huggingface;

pub use error::{ErrorKind, GatewayResult};
pub use gateway::{Gateway, WARM_UP_TEXT};
pub use huggingface::{HuggingFace, DEFAULT_ENDPOINT, DEFAULT_MODEL};

pub use protocol::{Classification, Guess};
