use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

/// What the player is asked to write about during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Nice,
    Mean,
    Information,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Nice, Topic::Mean, Topic::Information];

    /// Candidate label sent to the classifier.
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Nice => "nice",
            Topic::Mean => "mean",
            Topic::Information => "information",
        }
    }

    /// Prompt shown to the player.
    pub fn prompt(&self) -> &'static str {
        match self {
            Topic::Nice => "Nice!",
            Topic::Mean => "Bad!",
            Topic::Information => "Interesting!",
        }
    }

    pub fn from_label(label: &str) -> Option<Topic> {
        Topic::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTopic(pub String);

impl fmt::Display for UnknownTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown topic `{}` (expected nice, mean or information)", self.0)
    }
}

impl std::error::Error for UnknownTopic {}

impl FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::from_label(s.trim().to_lowercase().as_str())
            .ok_or_else(|| UnknownTopic(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for topic in Topic::ALL {
            assert_eq!(topic.label().parse::<Topic>(), Ok(topic));
        }
        assert_eq!(" Mean ".parse::<Topic>(), Ok(Topic::Mean));
        assert!("neutral".parse::<Topic>().is_err());
    }

    #[test]
    fn prompts_are_distinct() {
        assert_ne!(Topic::Nice.prompt(), Topic::Mean.prompt());
        assert_ne!(Topic::Mean.prompt(), Topic::Information.prompt());
        assert_ne!(Topic::Nice.prompt(), Topic::Information.prompt());
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&Topic::Information).unwrap(), "\"information\"");
    }
}
