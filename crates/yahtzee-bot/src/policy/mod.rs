mod aggressive;
mod defensive;
mod gambler;
mod keeps;
mod normal;
mod simulation;
pub mod weights;

pub use aggressive::AggressivePolicy;
pub use defensive::DefensivePolicy;
pub use gambler::GamblerPolicy;
pub use normal::NormalPolicy;
pub use simulation::SimulationPolicy;

use rand::RngCore;
use std::fmt;
use yahtzee_core::model::archetype::Archetype;
use yahtzee_core::model::category::Category;
use yahtzee_core::model::hand::Hand;
use yahtzee_core::model::retention::Retention;
use yahtzee_core::model::scoreboard::Scoreboard;

/// Decision-point inputs shared by every policy call. `turn` is 1..=12;
/// `rolls_remaining` is the number of reroll opportunities actually left
/// in the real turn (0, 1, or 2).
#[derive(Debug, Clone, Copy)]
pub struct PolicyContext<'a> {
    pub hand: &'a Hand,
    pub scoreboard: &'a Scoreboard,
    pub turn: u32,
    pub rolls_remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyError {
    /// `choose_category` was invoked with nothing left to fill. The turn
    /// loop stops after 12 turns, so this is an invariant violation, not
    /// a recoverable state.
    NoOpenCategories,
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::NoOpenCategories => {
                write!(f, "no open categories left on the scoreboard")
            }
        }
    }
}

impl std::error::Error for PolicyError {}

/// Shared two-operation interface for CPU playing styles.
pub trait Policy: Send {
    fn archetype(&self) -> Archetype;

    /// Which die positions to keep unchanged before the next reroll.
    /// Returning all five positions ends the rolling phase early.
    fn choose_retention(
        &self,
        ctx: &PolicyContext,
        rng: &mut dyn RngCore,
    ) -> Result<Retention, PolicyError>;

    /// The open category to commit the final hand to.
    fn choose_category(&self, ctx: &PolicyContext) -> Result<Category, PolicyError>;
}

/// Archetype tag to strategy object.
pub fn policy_for(archetype: Archetype) -> Box<dyn Policy> {
    match archetype {
        Archetype::Simulation => Box::new(SimulationPolicy::default()),
        Archetype::Gambler => Box::new(GamblerPolicy::default()),
        Archetype::Aggressive => Box::new(AggressivePolicy),
        Archetype::Defensive => Box::new(DefensivePolicy),
        Archetype::Normal => Box::new(NormalPolicy),
    }
}
