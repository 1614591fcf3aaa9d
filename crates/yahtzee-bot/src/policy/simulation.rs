use super::keeps::{argmax_open, candidate_keeps};
use super::weights::simulation_weights;
use super::{Policy, PolicyContext, PolicyError};
use crate::estimator::Estimator;
use rand::RngCore;
use tracing::{Level, event};
use yahtzee_core::model::archetype::Archetype;
use yahtzee_core::model::category::Category;
use yahtzee_core::model::retention::Retention;
use yahtzee_core::scoring::score;

/// Categories committed immediately when they score: rare, fixed-payout
/// hands that must never be left un-scored once achieved.
const INSTANT_COMMITS: [Category; 3] = [
    Category::Yahtzee,
    Category::LargeStraight,
    Category::FullHouse,
];

/// Search order for a zero-score slot when dumping a weak hand.
const SACRIFICE_PRIORITY: [Category; 4] = [
    Category::Yahtzee,
    Category::Ones,
    Category::Twos,
    Category::Chance,
];

/// The simulation-driven archetype: retention is chosen by ranking a
/// bounded candidate set with the Monte-Carlo estimator, seeded with this
/// policy's own layered category rule.
#[derive(Debug, Clone, Copy)]
pub struct SimulationPolicy {
    estimator: Estimator,
}

impl SimulationPolicy {
    pub const RETENTION_SAMPLES: u32 = 500;

    pub const fn new(samples: u32) -> Self {
        Self {
            estimator: Estimator::new(samples),
        }
    }
}

impl Default for SimulationPolicy {
    fn default() -> Self {
        Self::new(Self::RETENTION_SAMPLES)
    }
}

impl Policy for SimulationPolicy {
    fn archetype(&self) -> Archetype {
        Archetype::Simulation
    }

    fn choose_retention(
        &self,
        ctx: &PolicyContext,
        rng: &mut dyn RngCore,
    ) -> Result<Retention, PolicyError> {
        let mut best_keep = Retention::NONE;
        let mut best_ev = -1.0f64;
        for keep in candidate_keeps(ctx.hand, ctx.scoreboard) {
            let ev = self.estimator.estimate(
                ctx.hand,
                keep,
                ctx.scoreboard,
                ctx.turn,
                ctx.rolls_remaining,
                self,
                rng,
            )?;
            if ev > best_ev {
                best_ev = ev;
                best_keep = keep;
            }
        }
        Ok(best_keep)
    }

    fn choose_category(&self, ctx: &PolicyContext) -> Result<Category, PolicyError> {
        let scoreboard = ctx.scoreboard;
        if scoreboard.open_categories().is_empty() {
            return Err(PolicyError::NoOpenCategories);
        }
        let raw = |category: Category| score(ctx.hand, category);

        for category in INSTANT_COMMITS {
            if scoreboard.is_open(category) && raw(category) > 0 {
                return Ok(category);
            }
        }

        // Held back later in the game: a made small straight may still be
        // upgraded to a large straight while turns remain.
        if scoreboard.is_open(Category::SmallStraight)
            && raw(Category::SmallStraight) > 0
            && ctx.turn <= 8
        {
            return Ok(Category::SmallStraight);
        }

        let weights = simulation_weights(ctx.turn, scoreboard);
        let best = argmax_open(scoreboard, |category| {
            f64::from(raw(category)) * weights[category.index()]
        })
        .ok_or(PolicyError::NoOpenCategories)?;

        if raw(best) < 5 && ctx.turn < 11 {
            for sacrifice in SACRIFICE_PRIORITY {
                if scoreboard.is_open(sacrifice) && raw(sacrifice) == 0 {
                    log_sacrifice(ctx, best, sacrifice);
                    return Ok(sacrifice);
                }
            }
        }

        Ok(best)
    }
}

fn log_sacrifice(ctx: &PolicyContext, preserved: Category, sacrifice: Category) {
    if !tracing::enabled!(target: "yahtzee_bot::policy", Level::DEBUG) {
        return;
    }
    event!(
        target: "yahtzee_bot::policy",
        Level::DEBUG,
        turn = ctx.turn,
        preserved = %preserved,
        sacrifice = %sacrifice,
        "dumping zero score to preserve a weak category"
    );
}
