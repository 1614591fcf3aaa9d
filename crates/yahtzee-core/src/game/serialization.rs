use crate::model::player::PlayerState;
use serde::{Deserialize, Serialize};

/// Serialized snapshot of an in-progress game: the next turn to play plus
/// every player's full state. Scoreboards and the turn number fully
/// determine legal continuation; there is no hidden state to restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub turn: u32,
    pub players: Vec<PlayerState>,
}

impl GameSnapshot {
    pub fn capture(players: &[PlayerState], turn: u32) -> Self {
        Self {
            turn,
            players: players.to_vec(),
        }
    }

    pub fn restore(self) -> (Vec<PlayerState>, u32) {
        (self.players, self.turn)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
