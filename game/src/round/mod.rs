mod config;
mod state;
mod error;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use classifier::{Classification, GatewayResult};
use protocol::response::{Emotion, Face};
use protocol::{Presentation, Topic};

use crate::clock::{Clock, Tick};
use crate::observer::{ListenerId, Observers};
use crate::player::Sink;

pub use config::Config;
pub use error::{ConfigError, SubmitError, SubmitResult};
pub use state::{Outcome, Stage, Ticket};

pub const OFF_TOPIC: &str = "Are you sure it's on the topic I asked?";
pub const NOT_ENOUGH: &str = "Not enough!";
pub const CLASSIFIER_FAILED: &str = "Hmm, I could not read that. Try again!";

/// Topic selection, answer checking, scoring and the countdown of one
/// player's game. Everything it has to say goes to the sink.
pub struct Round<S: Sink> {
    config: Config,
    stage: Stage,
    topic: Option<Topic>,
    score: u32,
    high_score: u32,
    clock: Clock,
    /// Advanced on every new turn and on game over; tickets from older
    /// generations are stale.
    generation: u64,
    rng: StdRng,
    game_over: Observers,
    sink: S,
}

impl<S: Sink> Round<S> {
    pub fn new(config: Config, sink: S) -> Self {
        Self::with_rng(config, sink, StdRng::from_entropy())
    }

    pub fn with_rng(config: Config, sink: S, rng: StdRng) -> Self {
        let clock = Clock::new(config.time_limit);
        Self {
            config,
            stage: Stage::Idle,
            topic: None,
            score: 0,
            high_score: 0,
            clock,
            generation: 0,
            rng,
            game_over: Observers::new(),
            sink,
        }
    }

    pub fn subscribe_game_over(&mut self, listener: impl FnMut() + Send + 'static) -> ListenerId {
        self.game_over.subscribe(listener)
    }

    pub fn unsubscribe_game_over(&mut self, id: ListenerId) -> bool {
        self.game_over.unsubscribe(id)
    }

    /// Starts a fresh game from any stage. The high score survives.
    pub fn start(&mut self) {
        self.stage = Stage::Idle;
        self.score = 0;
        self.clock.reset(self.config.time_limit);

        self.sink.publish(Presentation::GameOverPanel { visible: false });
        self.sink.publish(Presentation::Feedback { text: String::new() });
        self.sink.publish(Presentation::Score { value: self.score });
        self.sink.publish(Presentation::HighScore { value: self.high_score });
        self.publish_timer();

        self.new_turn();
    }

    fn new_turn(&mut self) {
        self.generation += 1;
        let topic = self.choose_topic();
        self.topic = Some(topic);
        self.stage = Stage::AwaitingInput;
        log::debug!("turn {} topic {}", self.generation, topic);

        self.sink.publish(Presentation::ClearInput);
        self.sink.publish(Presentation::Topic { topic, text: topic.prompt().to_string() });
    }

    fn choose_topic(&mut self) -> Topic {
        // config validation guarantees at least one topic
        *self.config.topics.choose(&mut self.rng).unwrap_or(&Topic::ALL[0])
    }

    /// Accepts an answer for classification. The returned ticket must come
    /// back with the classifier's result.
    pub fn submit(&mut self, text: &str) -> SubmitResult<Ticket> {
        match self.stage {
            Stage::AwaitingInput => {},
            Stage::AwaitingClassification { .. } => return Err(SubmitError::Busy),
            _ => return Err(SubmitError::NotPlaying),
        }

        let len = text.chars().count();
        let min = self.config.min_length();
        if len < min {
            self.feedback(format!("Your phrase is too short! Write at least {} characters!", min));
            return Err(SubmitError::TooShort { len, min });
        }

        self.stage = Stage::AwaitingClassification { len };
        Ok(Ticket { generation: self.generation })
    }

    /// Applies a classifier result. Results for a turn that already ended
    /// change nothing.
    pub fn resolve(&mut self, ticket: Ticket, result: GatewayResult<Classification>) -> Outcome {
        let len = match self.stage {
            Stage::AwaitingClassification { len } if ticket.generation == self.generation => len,
            _ => {
                log::debug!("dropping stale classification for turn {}", ticket.generation);
                return Outcome::Stale;
            }
        };
        self.stage = Stage::Resolved;

        let best = match result {
            Ok(ref classification) => classification.best(),
            Err(ref e) => {
                log::warn!("classification failed: {}", e);
                None
            }
        };
        let (topic, best) = match (self.topic, best) {
            (Some(topic), Some(best)) => (topic, best),
            _ => {
                self.feedback(CLASSIFIER_FAILED);
                self.stage = Stage::AwaitingInput;
                return Outcome::Failed;
            }
        };
        log::info!("best guess {} ({:.2}) for topic {}", best.label, best.score, topic);

        if best.label != topic.label() {
            self.show(Emotion::Thinking);
            self.feedback(OFF_TOPIC);
            self.stage = Stage::AwaitingInput;
            return Outcome::OffTopic;
        }
        if best.score <= self.config.threshold {
            self.show(Emotion::Thinking);
            self.feedback(NOT_ENOUGH);
            self.stage = Stage::AwaitingInput;
            return Outcome::NotEnough;
        }

        let award = self.config.scoring.award(len);
        self.add_score(award.score);
        self.clock.add(award.bonus_time);
        self.publish_timer();

        let (emotion, text) = match topic {
            Topic::Nice => (Emotion::Positive, "Nice! Keep going!"),
            Topic::Mean => (Emotion::Negative, "Oh!"),
            Topic::Information => (Emotion::Neutral, "Okay"),
        };
        self.show(emotion);
        self.feedback(text);
        self.new_turn();

        Outcome::Correct { score: award.score, bonus_time: award.bonus_time }
    }

    /// Advances the countdown. Returns true on the tick that ended the game.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.stage.is_playing() {
            return false;
        }
        let expired = self.clock.tick(dt) == Tick::Expired;
        self.publish_timer();
        if expired {
            self.game_over();
        }
        expired
    }

    fn game_over(&mut self) {
        self.stage = Stage::GameOver;
        self.generation += 1;
        log::info!("game over, score {} (best {})", self.score, self.high_score);

        self.sink.publish(Presentation::FinalScore { value: self.score });
        self.sink.publish(Presentation::GameOverPanel { visible: true });
        self.game_over.notify();
    }

    fn add_score(&mut self, delta: u32) {
        self.score += delta;
        self.sink.publish(Presentation::Score { value: self.score });
        if self.score > self.high_score {
            self.high_score = self.score;
            self.sink.publish(Presentation::HighScore { value: self.high_score });
        }
    }

    fn show(&mut self, emotion: Emotion) {
        let variant = self.rng.gen_range(1..=emotion.variants());
        self.sink.publish(Presentation::Emotion { face: Face { emotion, variant } });
    }

    fn feedback(&mut self, text: impl Into<String>) {
        self.sink.publish(Presentation::Feedback { text: text.into() });
    }

    fn publish_timer(&mut self) {
        if let Some(secs) = self.clock.take_display_change() {
            self.sink.publish(Presentation::Timer { secs });
        }
    }

    /// Passes an out-of-band message straight to the sink.
    pub fn publish(&mut self, msg: Presentation) {
        self.sink.publish(msg);
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn topic(&self) -> Option<Topic> {
        self.topic
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn remaining(&self) -> f32 {
        self.clock.remaining()
    }

    pub fn labels(&self) -> Vec<String> {
        self.config.labels()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests;
