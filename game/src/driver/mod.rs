mod request;

use std::time::Duration;

use tokio::sync::mpsc::{Sender, Receiver, channel};
use tokio::sync::oneshot;
use tokio::time::{interval, Instant, MissedTickBehavior};

use protocol::{PlayerRequest, Presentation};

use crate::consts::*;
use crate::music::BackgroundMusic;
use crate::player::Sink;
use crate::round::{Round, Ticket};
use crate::types::SharedGateway;
pub use request::Request as GameReq;

/// Owns the round and serialises everything that can change it: player
/// requests, frame ticks and classifier results all arrive on one channel.
pub struct Game<S: Sink> {
    round: Round<S>,
    gateway: SharedGateway,
    music: BackgroundMusic,
    frame: Duration,

    rm_rx: Receiver<GameReq>,
    loopback: Sender<GameReq>,
}

impl<S: Sink> Game<S> {
    pub fn new(round: Round<S>, gateway: SharedGateway, music: BackgroundMusic, frame: Duration) -> Self {
        let (loopback, rm_rx) = channel::<GameReq>(CHANNEL_SIZE);
        Self {
            round,
            gateway,
            music,
            frame,

            rm_rx,
            loopback,
        }
    }

    pub fn get_tx(&self) -> Sender<GameReq> {
        self.loopback.clone()
    }

    pub fn round(&self) -> &Round<S> {
        &self.round
    }

    /// Plays until a quit request arrives.
    pub async fn run(&mut self) {
        self.music.play();
        self.round.start();
        let stopper = self.set_ticker();

        while let Some(req) = self.rm_rx.recv().await {
            match req {
                GameReq::Player(PlayerRequest::Submit { text }) => {
                    match self.round.submit(&text) {
                        Ok(ticket) => self.classify(ticket, text),
                        Err(e) => log::info!("answer refused: {}", e),
                    }
                },
                GameReq::Player(PlayerRequest::NewGame) => {
                    log::info!("new game");
                    self.round.start();
                },
                GameReq::Player(PlayerRequest::Credits) => {
                    self.round.publish(Presentation::Link { url: CREDITS_URL.to_string() });
                },
                GameReq::Player(PlayerRequest::Quit) => break,
                GameReq::Tick(dt) => {
                    self.round.tick(dt);
                },
                GameReq::Classified { ticket, result } => {
                    let outcome = self.round.resolve(ticket, result);
                    log::debug!("{:?}", outcome);
                },
            }
        }

        stopper.send(()).unwrap_or_default();
        self.music.stop();
    }

    /// The classifier runs off the loop; its answer comes back as a
    /// request carrying the ticket.
    fn classify(&self, ticket: Ticket, text: String) {
        let gateway = self.gateway.clone();
        let labels = self.round.labels();
        let loopback = self.loopback.clone();
        tokio::spawn(async move {
            log::info!("classifying {:?}", text);
            let result = gateway.classify(&text, &labels).await;
            loopback.send(GameReq::Classified { ticket, result }).await.unwrap_or_default();
        });
    }

    fn set_ticker(&self) -> oneshot::Sender<()> {
        let (tx, mut rx) = oneshot::channel::<()>();
        let loopback_tx = self.loopback.clone();
        let frame = self.frame;
        tokio::spawn(async move {
            let mut frames = interval(frame);
            frames.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut last = Instant::now();
            loop {
                frames.tick().await;
                if rx.try_recv().is_ok() {
                    return;
                }
                let now = Instant::now();
                if loopback_tx.send(GameReq::Tick(now - last)).await.is_err() {
                    return;
                }
                last = now;
            }
        });
        tx
    }
}
