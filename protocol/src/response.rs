use std::fmt;

use serde::{Serialize, Deserialize};
use crate::{JsonMessage, Topic};

/// Mood of the robot face shown next to the feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Positive,
    Negative,
    Neutral,
    Thinking,
}

impl Emotion {
    /// How many face textures exist for this mood.
    pub fn variants(&self) -> u8 {
        match self {
            Emotion::Neutral => 1,
            _ => 2,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Emotion::Positive => "positive",
            Emotion::Negative => "negative",
            Emotion::Neutral => "neutral",
            Emotion::Thinking => "thinking",
        }
    }
}

/// One concrete face texture, `variant` counts from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub emotion: Emotion,
    pub variant: u8,
}

impl Face {
    /// Asset key, e.g. `positive_2`. Single-variant moods have no suffix.
    pub fn asset_key(&self) -> String {
        if self.emotion.variants() == 1 {
            self.emotion.name().to_string()
        } else {
            format!("{}_{}", self.emotion.name(), self.variant)
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.asset_key())
    }
}

/// Everything the game tells the screen. Never read back by the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Presentation {
    Topic {
        topic: Topic,
        text: String,
    },
    Feedback {
        text: String,
    },
    Emotion {
        face: Face,
    },
    ClearInput,
    Score {
        value: u32,
    },
    HighScore {
        value: u32,
    },
    /// Remaining whole seconds.
    Timer {
        secs: u32,
    },
    GameOverPanel {
        visible: bool,
    },
    FinalScore {
        value: u32,
    },
    /// A page the player may open in a browser.
    Link {
        url: String,
    },
}

impl JsonMessage<'_> for Presentation {}
