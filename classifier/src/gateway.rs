use async_trait::async_trait;
use protocol::Classification;

use crate::error::GatewayResult;

/// Throw-away input used to wake a cold hosted model.
pub const WARM_UP_TEXT: &str = "Hello";

#[async_trait]
pub trait Gateway: Send + Sync {
    /// Classifies `text` against `labels`. On success the guesses are
    /// ranked best first and never empty.
    async fn classify(&self, text: &str, labels: &[String]) -> GatewayResult<Classification>;

    /// Sends one request whose answer nobody reads, so the first real
    /// submission does not pay for the model start-up. Failures are logged.
    async fn warm_up(&self, labels: &[String]) {
        match self.classify(WARM_UP_TEXT, labels).await {
            Ok(_) => log::info!("classifier warmed up"),
            Err(e) => log::warn!("classifier warm-up failed: {}", e),
        }
    }
}
