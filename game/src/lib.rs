//! Round logic and game loop of the topic quiz.

pub mod types;
pub mod consts;
pub mod music;
pub mod scoring;
pub mod clock;
pub mod round;

pub mod player;
pub mod observer;
pub mod driver;
