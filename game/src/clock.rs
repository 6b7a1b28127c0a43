use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running,
    /// Time ran out on this tick. Reported once per start.
    Expired,
    Stopped,
}

/// Countdown advanced by the host once per frame.
#[derive(Debug, Clone)]
pub struct Clock {
    remaining: f32,
    expired: bool,
    shown: Option<u32>,
}

impl Clock {
    pub fn new(limit: f32) -> Self {
        Self {
            remaining: limit,
            expired: false,
            shown: None,
        }
    }

    pub fn reset(&mut self, limit: f32) {
        *self = Clock::new(limit);
    }

    pub fn tick(&mut self, dt: Duration) -> Tick {
        if self.expired {
            return Tick::Stopped;
        }
        self.remaining -= dt.as_secs_f32();
        if self.remaining <= 0.0 {
            self.expired = true;
            Tick::Expired
        } else {
            Tick::Running
        }
    }

    pub fn add(&mut self, secs: u32) {
        self.remaining += secs as f32;
    }

    /// Never negative.
    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Whole seconds for display.
    pub fn display(&self) -> u32 {
        self.remaining().round() as u32
    }

    /// The displayed value if it changed since the last call.
    pub fn take_display_change(&mut self) -> Option<u32> {
        let secs = self.display();
        if self.shown == Some(secs) {
            return None;
        }
        self.shown = Some(secs);
        Some(secs)
    }
}
