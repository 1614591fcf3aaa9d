//! Drives one complete turn for a CPU player: initial roll, up to two
//! policy-directed rerolls, then a category commit on the scoreboard.

use crate::policy::{Policy, PolicyContext, PolicyError};
use rand::RngCore;
use std::fmt;
use tracing::{Level, event};
use yahtzee_core::model::category::Category;
use yahtzee_core::model::hand::Hand;
use yahtzee_core::model::player::PlayerState;
use yahtzee_core::model::scoreboard::ScoreboardError;
use yahtzee_core::scoring::score;

/// What a finished turn produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub hand: Hand,
    pub category: Category,
    pub score: u32,
    /// Rolls actually taken, 1 through 3.
    pub rolls_used: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum TurnError {
    Policy(PolicyError),
    Scoreboard(ScoreboardError),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::Policy(err) => write!(f, "policy failed: {err}"),
            TurnError::Scoreboard(err) => write!(f, "commit rejected: {err}"),
        }
    }
}

impl std::error::Error for TurnError {}

impl From<PolicyError> for TurnError {
    fn from(err: PolicyError) -> Self {
        TurnError::Policy(err)
    }
}

impl From<ScoreboardError> for TurnError {
    fn from(err: ScoreboardError) -> Self {
        TurnError::Scoreboard(err)
    }
}

/// Plays `player`'s turn with `policy` and commits the result. The
/// policy may end the rolling phase early by retaining every die.
pub fn play_turn(
    player: &mut PlayerState,
    turn: u32,
    policy: &dyn Policy,
    rng: &mut dyn RngCore,
) -> Result<TurnOutcome, TurnError> {
    let mut hand = Hand::rolled(rng);
    let mut rolls_used = 1u32;

    for rolls_remaining in [2u32, 1] {
        let retention = {
            let ctx = PolicyContext {
                hand: &hand,
                scoreboard: &player.scoreboard,
                turn,
                rolls_remaining,
            };
            policy.choose_retention(&ctx, rng)?
        };
        if retention.keeps_all() {
            break;
        }
        hand.reroll(retention, rng);
        rolls_used += 1;
    }

    let category = {
        let ctx = PolicyContext {
            hand: &hand,
            scoreboard: &player.scoreboard,
            turn,
            rolls_remaining: 0,
        };
        policy.choose_category(&ctx)?
    };
    let points = score(&hand, category);
    player.scoreboard.commit(category, points)?;

    if tracing::enabled!(target: "yahtzee_bot::turn", Level::INFO) {
        event!(
            target: "yahtzee_bot::turn",
            Level::INFO,
            player = %player.name,
            turn,
            rolls_used,
            hand = ?hand.faces(),
            category = %category,
            points,
            total = player.scoreboard.total(),
        );
    }

    Ok(TurnOutcome {
        hand,
        category,
        score: points,
        rolls_used,
    })
}
