use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use protocol::{Classification, InferenceError, JsonMessage, ZeroShotRequest};
use protocol::classification::ZeroShotResponse;

use crate::error::{ErrorKind, GatewayResult};
use crate::gateway::Gateway;

pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_MODEL: &str = "facebook/bart-large-mnli";

/// Client for the Hugging Face Inference API zero-shot task.
#[derive(Debug, Clone)]
pub struct HuggingFace {
    client: Client,
    endpoint: String,
    model: String,
    token: Option<String>,
    wait_for_model: bool,
}

impl HuggingFace {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            token: token.filter(|t| !t.is_empty()),
            wait_for_model: true,
        }
    }

    /// Ask the API to fail fast with 503 instead of holding the request
    /// while the model loads.
    pub fn no_wait(mut self) -> Self {
        self.wait_for_model = false;
        self
    }

    pub fn url(&self) -> String {
        format!("{}/models/{}", self.endpoint.trim_end_matches('/'), self.model)
    }
}

fn status_error(status: StatusCode, body: &str) -> ErrorKind {
    match InferenceError::deser(body) {
        Ok(InferenceError { estimated_time: Some(estimated_time), .. })
            if status == StatusCode::SERVICE_UNAVAILABLE =>
        {
            ErrorKind::ModelLoading { estimated_time }
        }
        Ok(err) => ErrorKind::Status { code: status.as_u16(), message: err.error },
        Err(_) => ErrorKind::Status { code: status.as_u16(), message: body.to_string() },
    }
}

#[async_trait]
impl Gateway for HuggingFace {
    async fn classify(&self, text: &str, labels: &[String]) -> GatewayResult<Classification> {
        let body = ZeroShotRequest::new(text, labels, self.wait_for_model);
        log::debug!("POST {} {:?}", self.url(), body);

        let mut req = self.client.post(self.url()).json(&body);
        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await?;
        let status = resp.status();
        let answer = resp.text().await?;

        if !status.is_success() {
            return Err(status_error(status, &answer));
        }

        let classification = ZeroShotResponse::deser(&answer)?
            .into_classification()
            .ok_or_else(|| ErrorKind::Malformed("labels and scores differ in length".to_string()))?;
        if classification.is_empty() {
            return Err(ErrorKind::Empty);
        }
        Ok(classification)
    }
}
