use serde::{Serialize, Deserialize};
use crate::JsonMessage;

/// Body of a zero-shot classification call to the inference API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroShotRequest {
    pub inputs: String,
    pub parameters: Parameters,
    #[serde(default)]
    pub options: Options,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub candidate_labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Options {
    pub wait_for_model: bool,
}

impl ZeroShotRequest {
    pub fn new(inputs: impl Into<String>, labels: &[String], wait_for_model: bool) -> Self {
        Self {
            inputs: inputs.into(),
            parameters: Parameters { candidate_labels: labels.to_vec() },
            options: Options { wait_for_model },
        }
    }
}

impl JsonMessage<'_> for ZeroShotRequest {}

/// Successful answer of the inference API. `labels[i]` goes with `scores[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroShotResponse {
    #[serde(default)]
    pub sequence: String,
    pub labels: Vec<String>,
    pub scores: Vec<f32>,
}

impl JsonMessage<'_> for ZeroShotResponse {}

impl ZeroShotResponse {
    /// Pairs labels with scores, best guess first.
    /// `None` when the two lists do not line up.
    pub fn into_classification(self) -> Option<Classification> {
        if self.labels.len() != self.scores.len() {
            return None;
        }
        let guesses = self.labels.into_iter()
            .zip(self.scores)
            .map(|(label, score)| Guess { label, score })
            .collect();
        Some(Classification::ranked(guesses))
    }
}

/// Error body returned by the inference API, e.g. while a model is loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceError {
    pub error: String,
    #[serde(default)]
    pub estimated_time: Option<f32>,
}

impl JsonMessage<'_> for InferenceError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guess {
    pub label: String,
    pub score: f32,
}

impl Guess {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self { label: label.into(), score }
    }
}

/// Ranked guesses, ordered by descending confidence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Classification {
    guesses: Vec<Guess>,
}

impl Classification {
    pub fn ranked(mut guesses: Vec<Guess>) -> Self {
        guesses.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self { guesses }
    }

    pub fn best(&self) -> Option<&Guess> {
        self.guesses.first()
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }
}
