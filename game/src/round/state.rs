#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    AwaitingInput,
    /// `len` is the character count of the answer being classified.
    AwaitingClassification { len: usize },
    Resolved,
    GameOver,
}

impl Stage {
    /// Stages in which the clock runs.
    pub fn is_playing(&self) -> bool {
        matches!(self, Stage::AwaitingInput | Stage::AwaitingClassification { .. })
    }
}

/// Proof that a submission was accepted during a given turn. A result
/// carrying a stale ticket is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub(crate) generation: u64,
}

/// How a classification result was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Stale,
    Failed,
    OffTopic,
    NotEnough,
    Correct { score: u32, bonus_time: u32 },
}
