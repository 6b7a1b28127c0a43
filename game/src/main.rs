//! # Tasks
//! 1. game loop: owns the round, handles one request at a time
//! 2. ticker: one `Tick` per frame
//! 3. reader: player input lines
//! 4. one short-lived task per classification

mod logger;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use classifier::{HuggingFace, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use protocol::Topic;

use game::consts::*;
use game::driver::Game;
use game::music::BackgroundMusic;
use game::player::{spawn_reader, JsonLines, Sink, Terminal};
use game::round::{Config, ConfigError, Round};
use game::scoring::Scoring;
use game::types::SharedGateway;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Write something nice, mean or interesting before the clock runs out", long_about = None)]
struct Args {
    /// Hugging Face API token
    #[clap(long, env = "HF_API_TOKEN", hide_env_values = true)]
    token: Option<String>,
    #[clap(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    /// Zero-shot classification model
    #[clap(long, default_value = DEFAULT_MODEL)]
    model: String,
    /// Fail fast while the hosted model is loading instead of waiting for it
    #[clap(long)]
    no_wait_for_model: bool,
    /// Skip the start-up request that wakes the model
    #[clap(long)]
    no_warm_up: bool,

    /// Seconds on the clock at the start of a game
    #[clap(long, default_value_t = TIME_LIMIT)]
    time_limit: f32,
    /// Shortest accepted answer, in characters
    #[clap(long, default_value_t = MIN_LENGTH)]
    min_length: usize,
    /// Confidence the best guess must exceed
    #[clap(long, default_value_t = CLASSIFICATION_THRESHOLD)]
    threshold: f32,
    #[clap(long, default_value_t = BASE_SCORE)]
    base_score: u32,
    /// Seconds added for a correct answer before length bonus
    #[clap(long, default_value_t = BASE_BONUS_TIME)]
    bonus_time: u32,
    #[clap(long, use_value_delimiter = true, default_value = "nice,mean,information")]
    topics: Vec<Topic>,
    #[clap(long, default_value_t = FRAME.as_millis() as u64)]
    frame_ms: u64,

    /// Print events as JSON lines and read JSON requests
    #[clap(long)]
    json: bool,
    #[clap(long)]
    no_color: bool,
}

impl Args {
    fn config(&self) -> Result<Config, ConfigError> {
        Config {
            topics: self.topics.clone(),
            time_limit: self.time_limit,
            threshold: self.threshold,
            scoring: Scoring {
                min_length: self.min_length,
                base_score: self.base_score,
                base_bonus_time: self.bonus_time,
            },
        }.validate()
    }

    fn gateway(&self) -> SharedGateway {
        let hf = HuggingFace::new(&self.endpoint, &self.model, self.token.clone());
        if self.no_wait_for_model {
            Arc::new(hf.no_wait())
        } else {
            Arc::new(hf)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init();
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = args.config()?;
    let gateway = args.gateway();
    if args.token.is_none() {
        log::warn!("no HF_API_TOKEN set, the inference api may throttle requests");
    }
    if !args.no_warm_up {
        let gateway = gateway.clone();
        let labels = config.labels();
        tokio::spawn(async move { gateway.warm_up(&labels).await });
    }

    let sink: Box<dyn Sink + Send> = if args.json {
        Box::new(JsonLines::new(std::io::stdout()))
    } else {
        Box::new(Terminal::new(std::io::stdout()))
    };
    let mut round = Round::new(config, sink);
    round.subscribe_game_over(|| log::info!("Game Over!"));

    let music = BackgroundMusic::new("main theme");
    let mut quiz = Game::new(round, gateway, music, Duration::from_millis(args.frame_ms.max(1)));
    let _reader = spawn_reader(tokio::io::stdin(), quiz.get_tx(), args.json);

    log::info!("launch {} ({})", args.model, args.endpoint);
    quiz.run().await;
    log::info!("bye");

    // the reader may still be parked in a blocking stdin read
    std::process::exit(0)
}
