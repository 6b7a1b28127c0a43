use std::time::Duration;

use classifier::{Classification, GatewayResult};
use protocol::PlayerRequest;

use crate::round::Ticket;

#[derive(Debug)]
pub enum Request {
    Player(PlayerRequest),
    /// Wall time since the previous frame.
    Tick(Duration),
    Classified {
        ticket: Ticket,
        result: GatewayResult<Classification>,
    },
}
