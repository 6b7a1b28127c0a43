use crate::consts::*;

/// Turns the length of an accepted answer into points and extra seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoring {
    pub min_length: usize,
    pub base_score: u32,
    pub base_bonus_time: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    pub score: u32,
    /// Whole seconds.
    pub bonus_time: u32,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH,
            base_score: BASE_SCORE,
            base_bonus_time: BASE_BONUS_TIME,
        }
    }
}

impl Scoring {
    /// `ceil((len - min_length) / SCORE_STEP)`. Callers only pass lengths
    /// that already passed validation; shorter ones count as zero steps.
    pub fn steps(&self, len: usize) -> u32 {
        let extra = len.saturating_sub(self.min_length);
        ((extra + SCORE_STEP - 1) / SCORE_STEP) as u32
    }

    pub fn award(&self, len: usize) -> Award {
        let steps = self.steps(len);
        Award {
            score: self.base_score + steps,
            bonus_time: self.base_bonus_time + steps,
        }
    }
}
