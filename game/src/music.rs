/// Background track that keeps playing across games. Built once in
/// `main` and owned by the game loop; audio output itself is left to the
/// host, this only tracks and logs the state.
#[derive(Debug)]
pub struct BackgroundMusic {
    track: String,
    playing: bool,
}

impl BackgroundMusic {
    pub fn new(track: impl Into<String>) -> Self {
        Self {
            track: track.into(),
            playing: false,
        }
    }

    /// No-op when already playing.
    pub fn play(&mut self) {
        if self.playing {
            return;
        }
        self.playing = true;
        log::info!("music: {} playing", self.track);
    }

    pub fn stop(&mut self) {
        if !self.playing {
            return;
        }
        self.playing = false;
        log::info!("music: {} stopped", self.track);
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}
