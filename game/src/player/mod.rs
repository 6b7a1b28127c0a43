use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use protocol::{JsonMessage, PlayerRequest, Presentation};
use crate::driver::GameReq;

/// Where the game's presentation events go. Write-only.
pub trait Sink {
    fn publish(&mut self, msg: Presentation);
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn publish(&mut self, msg: Presentation) {
        (**self).publish(msg)
    }
}

/// Collects events in memory.
impl Sink for Vec<Presentation> {
    fn publish(&mut self, msg: Presentation) {
        self.push(msg);
    }
}

/// One JSON document per line, for an external UI to consume.
pub struct JsonLines<W: Write> {
    out: W,
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for JsonLines<W> {
    fn publish(&mut self, msg: Presentation) {
        match msg.ser() {
            Ok(line) => writeln!(self.out, "{}", line)
                .and_then(|_| self.out.flush())
                .unwrap_or_else(|e| log::error!("cannot write event: {}", e)),
            Err(e) => log::error!("cannot encode {:?}: {}", msg, e),
        }
    }
}

/// Human-readable rendering for a terminal session.
pub struct Terminal<W: Write> {
    out: W,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&self, msg: &Presentation) -> Option<String> {
        let line = match msg {
            Presentation::Topic { text, .. } => {
                format!("\n{} {}", "Make it".bold(), text.yellow().bold())
            }
            Presentation::Feedback { text } if text.is_empty() => return None,
            Presentation::Feedback { text } => format!("  {}", text.italic()),
            Presentation::Emotion { face } => format!("  {}", format!("[{}]", face).cyan()),
            Presentation::ClearInput => return None,
            Presentation::Score { value } => format!("  score {}", value.to_string().green()),
            Presentation::HighScore { value } => format!("  best {}", value.to_string().green().bold()),
            // every ten seconds, then the last five
            Presentation::Timer { secs } if *secs > 0 && (*secs % 10 == 0 || *secs <= 5) => {
                format!("  {}s left", secs.to_string().red())
            }
            Presentation::Timer { .. } => return None,
            Presentation::GameOverPanel { visible: true } => format!(
                "\n{}\n  /new to play again, /quit to leave",
                "GAME OVER".red().bold()
            ),
            Presentation::GameOverPanel { visible: false } => return None,
            Presentation::FinalScore { value } => format!("  final score {}", value.to_string().bold()),
            Presentation::Link { url } => format!("  {}", url.underline()),
        };
        Some(line)
    }
}

impl<W: Write> Sink for Terminal<W> {
    fn publish(&mut self, msg: Presentation) {
        if let Some(line) = self.line(&msg) {
            writeln!(self.out, "{}", line)
                .and_then(|_| self.out.flush())
                .unwrap_or_else(|e| log::error!("cannot write to terminal: {}", e));
        }
    }
}

/// Forwards player input lines to the game. Plain lines are answers or
/// slash commands; with `json` every line is a [`PlayerRequest`] document.
/// End of input quits.
pub fn spawn_reader<R>(input: R, game_tx: mpsc::Sender<GameReq>, json: bool) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(input).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let req = if json {
                match PlayerRequest::deser(&line) {
                    Ok(req) => req,
                    Err(e) => {
                        log::warn!("ignoring input line: {}", e);
                        continue;
                    }
                }
            } else {
                PlayerRequest::from_line(&line)
            };
            let quit = req == PlayerRequest::Quit;
            if game_tx.send(GameReq::Player(req)).await.is_err() || quit {
                return;
            }
        }
        game_tx.send(GameReq::Player(PlayerRequest::Quit)).await.unwrap_or_default();
    })
}
