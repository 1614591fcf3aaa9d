//! Game sessions driven entirely by the CPU policies: repeated solo
//! games for score analysis, and a round-robin match between all five
//! archetypes with snapshot save/resume between rounds.

use std::fs;
use std::path::{Path, PathBuf};

use rand::RngCore;
use thiserror::Error;
use tracing::{Level, event};
use yahtzee_bot::policy::{GamblerPolicy, Policy, SimulationPolicy, policy_for};
use yahtzee_bot::turn::{TurnError, play_turn};
use yahtzee_core::game::serialization::GameSnapshot;
use yahtzee_core::model::archetype::Archetype;
use yahtzee_core::model::player::PlayerState;

pub const TURNS_PER_GAME: u32 = 12;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("turn {turn} failed for {player}: {source}")]
    Turn {
        player: String,
        turn: u32,
        #[source]
        source: TurnError,
    },
    #[error("player '{0}' has no archetype to drive")]
    MissingArchetype(String),
    #[error("{context} at {path}: {source}")]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("snapshot is not valid JSON: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Builds the policy for an archetype with the Monte-Carlo sample count
/// overridden; the rule-only archetypes ignore `samples`.
pub fn policy_with_samples(archetype: Archetype, samples: u32) -> Box<dyn Policy> {
    match archetype {
        Archetype::Simulation => Box::new(SimulationPolicy::new(samples)),
        Archetype::Gambler => Box::new(GamblerPolicy::simulated(samples)),
        other => policy_for(other),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoloResult {
    pub total: u32,
    pub upper_sum: u32,
    pub bonus: u32,
}

/// Plays one complete twelve-turn game for a single CPU player.
pub fn run_solo_game(
    policy: &dyn Policy,
    rng: &mut dyn RngCore,
) -> Result<SoloResult, SessionError> {
    let mut player = PlayerState::cpu(policy.archetype());
    for turn in 1..=TURNS_PER_GAME {
        play_turn(&mut player, turn, policy, rng).map_err(|source| SessionError::Turn {
            player: player.name.clone(),
            turn,
            source,
        })?;
    }

    let result = SoloResult {
        total: player.scoreboard.total(),
        upper_sum: player.scoreboard.upper_sum(),
        bonus: player.scoreboard.bonus(),
    };
    event!(
        target: "yahtzee_bench::session",
        Level::INFO,
        archetype = %policy.archetype(),
        total = result.total,
        bonus = result.bonus,
    );
    Ok(result)
}

/// Round-robin match state: every player takes one turn per round, and
/// the whole match is twelve rounds. Serializes to a [`GameSnapshot`]
/// between rounds.
#[derive(Debug)]
pub struct MatchSession {
    players: Vec<PlayerState>,
    next_turn: u32,
    samples: u32,
}

impl MatchSession {
    /// One CPU player per archetype, in enumeration order.
    pub fn all_archetypes(samples: u32) -> Self {
        Self {
            players: Archetype::ALL.into_iter().map(PlayerState::cpu).collect(),
            next_turn: 1,
            samples,
        }
    }

    pub fn from_snapshot(snapshot: GameSnapshot, samples: u32) -> Self {
        let (players, next_turn) = snapshot.restore();
        Self {
            players,
            next_turn,
            samples,
        }
    }

    pub fn load(path: &Path, samples: u32) -> Result<Self, SessionError> {
        let json = fs::read_to_string(path).map_err(|source| SessionError::Io {
            context: "reading snapshot",
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_snapshot(GameSnapshot::from_json(&json)?, samples))
    }

    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        let json = self.snapshot().to_json()?;
        fs::write(path, json).map_err(|source| SessionError::Io {
            context: "writing snapshot",
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.players, self.next_turn)
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn next_turn(&self) -> u32 {
        self.next_turn
    }

    pub fn is_finished(&self) -> bool {
        self.next_turn > TURNS_PER_GAME
    }

    /// Every player takes one turn. No-op once the match is finished.
    pub fn play_round(&mut self, rng: &mut dyn RngCore) -> Result<(), SessionError> {
        if self.is_finished() {
            return Ok(());
        }
        let turn = self.next_turn;
        for player in &mut self.players {
            let archetype = player
                .archetype
                .ok_or_else(|| SessionError::MissingArchetype(player.name.clone()))?;
            let policy = policy_with_samples(archetype, self.samples);
            play_turn(player, turn, policy.as_ref(), rng).map_err(|source| {
                SessionError::Turn {
                    player: player.name.clone(),
                    turn,
                    source,
                }
            })?;
        }
        self.next_turn += 1;
        Ok(())
    }

    pub fn run_to_completion(&mut self, rng: &mut dyn RngCore) -> Result<(), SessionError> {
        while !self.is_finished() {
            self.play_round(rng)?;
        }
        Ok(())
    }

    /// Player names and totals, best first. Ties keep seating order.
    pub fn standings(&self) -> Vec<(String, u32)> {
        let mut rows: Vec<(String, u32)> = self
            .players
            .iter()
            .map(|player| (player.name.clone(), player.scoreboard.total()))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }
}
