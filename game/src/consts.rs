use std::time::Duration;

/// Seconds on the clock when a game starts.
pub const TIME_LIMIT: f32 = 60.0;

/// Shorter answers are refused without asking the classifier.
pub const MIN_LENGTH: usize = 10;

/// The best guess must be strictly above this to count.
pub const CLASSIFICATION_THRESHOLD: f32 = 0.50;

pub const BASE_SCORE: u32 = 1;
pub const BASE_BONUS_TIME: u32 = 3;
/// Every started block of this many extra characters is worth one more
/// point and one more second.
pub const SCORE_STEP: usize = 10;

pub const FRAME: Duration = Duration::from_millis(16);

pub const CHANNEL_SIZE: usize = 32;

pub const CREDITS_URL: &str = "https://huggingface.co/facebook/bart-large-mnli";
