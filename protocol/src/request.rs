use serde::{Deserialize, Serialize};
use crate::JsonMessage;

#[derive(Deserialize, Serialize, PartialEq, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerRequest {
    Submit {
        text: String,
    },
    NewGame,
    Credits,
    Quit,
}

impl JsonMessage<'_> for PlayerRequest {}

impl PlayerRequest {
    /// Reads one line typed at the terminal. Slash commands control the
    /// session, anything else is an answer.
    pub fn from_line(line: &str) -> Self {
        match line.trim() {
            "/new" => PlayerRequest::NewGame,
            "/credits" => PlayerRequest::Credits,
            "/quit" | "/exit" => PlayerRequest::Quit,
            _ => PlayerRequest::Submit {
                text: line.trim_end_matches(&['\r', '\n'][..]).to_string(),
            },
        }
    }
}
