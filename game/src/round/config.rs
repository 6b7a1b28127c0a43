use protocol::Topic;

use crate::consts::*;
use crate::scoring::Scoring;
use super::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub topics: Vec<Topic>,
    pub time_limit: f32,
    pub threshold: f32,
    pub scoring: Scoring,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topics: Topic::ALL.to_vec(),
            time_limit: TIME_LIMIT,
            threshold: CLASSIFICATION_THRESHOLD,
            scoring: Scoring::default(),
        }
    }
}

impl Config {
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if self.topics.is_empty() {
            return Err(ConfigError::NoTopics);
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::Threshold(self.threshold));
        }
        if !(self.time_limit > 0.0) {
            return Err(ConfigError::TimeLimit(self.time_limit));
        }
        // repeated topics would skew the draw
        let mut seen = Vec::with_capacity(self.topics.len());
        self.topics.retain(|t| {
            let first = !seen.contains(t);
            seen.push(*t);
            first
        });
        Ok(self)
    }

    /// Candidate labels in configured order.
    pub fn labels(&self) -> Vec<String> {
        self.topics.iter().map(|t| t.label().to_string()).collect()
    }

    pub fn min_length(&self) -> usize {
        self.scoring.min_length
    }
}
