use super::keeps::{argmax_open, candidate_keeps, rule_based_keep};
use super::weights::base_weight;
use super::{Policy, PolicyContext, PolicyError};
use crate::estimator::Estimator;
use rand::RngCore;
use yahtzee_core::model::archetype::Archetype;
use yahtzee_core::model::category::Category;
use yahtzee_core::model::retention::Retention;
use yahtzee_core::scoring::score;

/// How the gambler picks dice to hold. The Monte-Carlo variant is the
/// shipped default; the rule-based variant predates the estimator and is
/// kept selectable so both behaviors stay testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamblerRetention {
    Simulated,
    RuleBased,
}

/// Flat-weighted archetype: commits to `argmax(raw score × base weight)`
/// with no urgency or endgame adjustment, and (by default) ranks
/// retention candidates with the estimator seeded by that same rule.
#[derive(Debug, Clone, Copy)]
pub struct GamblerPolicy {
    retention: GamblerRetention,
    estimator: Estimator,
}

impl GamblerPolicy {
    pub const RETENTION_SAMPLES: u32 = 500;

    pub const fn simulated(samples: u32) -> Self {
        Self {
            retention: GamblerRetention::Simulated,
            estimator: Estimator::new(samples),
        }
    }

    pub const fn rule_based() -> Self {
        Self {
            retention: GamblerRetention::RuleBased,
            estimator: Estimator::new(0),
        }
    }

    pub const fn retention_mode(&self) -> GamblerRetention {
        self.retention
    }
}

impl Default for GamblerPolicy {
    fn default() -> Self {
        Self::simulated(Self::RETENTION_SAMPLES)
    }
}

impl Policy for GamblerPolicy {
    fn archetype(&self) -> Archetype {
        Archetype::Gambler
    }

    fn choose_retention(
        &self,
        ctx: &PolicyContext,
        rng: &mut dyn RngCore,
    ) -> Result<Retention, PolicyError> {
        match self.retention {
            GamblerRetention::RuleBased => Ok(rule_based_keep(ctx.hand, ctx.scoreboard)),
            GamblerRetention::Simulated => {
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
        }
    }

    fn choose_category(&self, ctx: &PolicyContext) -> Result<Category, PolicyError> {
        argmax_open(ctx.scoreboard, |category| {
            f64::from(score(ctx.hand, category)) * base_weight(category)
        })
        .ok_or(PolicyError::NoOpenCategories)
    }
}

#[cfg(test)]
mod tests {
    use super::{GamblerPolicy, GamblerRetention};
    use crate::policy::{Policy, PolicyContext};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use yahtzee_core::model::category::Category;
    use yahtzee_core::model::hand::Hand;
    use yahtzee_core::model::scoreboard::Scoreboard;

    #[test]
    fn category_choice_uses_flat_base_weights() {
        let policy = GamblerPolicy::default();
        let board = Scoreboard::new();
        // Chance raw 20 × 1.0 loses to Sixes raw 18 × 1.2 = 21.6.
        let hand = Hand::from_faces([6, 6, 6, 1, 1]);
        let ctx = PolicyContext {
            hand: &hand,
            scoreboard: &board,
            turn: 2,
            rolls_remaining: 0,
        };
        assert_eq!(policy.choose_category(&ctx).unwrap(), Category::Sixes);
    }

    #[test]
    fn no_urgency_adjustment_late_in_the_game() {
        let policy = GamblerPolicy::default();
        let board = Scoreboard::new();
        let hand = Hand::from_faces([6, 6, 6, 1, 1]);
        for turn in [1, 6, 12] {
            let ctx = PolicyContext {
                hand: &hand,
                scoreboard: &board,
                turn,
                rolls_remaining: 0,
            };
            assert_eq!(policy.choose_category(&ctx).unwrap(), Category::Sixes);
        }
    }

    #[test]
    fn rule_based_variant_skips_the_estimator() {
        let policy = GamblerPolicy::rule_based();
        assert_eq!(policy.retention_mode(), GamblerRetention::RuleBased);
        let board = Scoreboard::new();
        let hand = Hand::from_faces([5, 5, 5, 5, 2]);
        let ctx = PolicyContext {
            hand: &hand,
            scoreboard: &board,
            turn: 1,
            rolls_remaining: 2,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let keep = policy.choose_retention(&ctx, &mut rng).unwrap();
        assert_eq!(keep.positions().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn simulated_variant_locks_a_made_yahtzee() {
        let policy = GamblerPolicy::simulated(120);
        let board = Scoreboard::new();
        let hand = Hand::from_faces([3, 3, 3, 3, 3]);
        let ctx = PolicyContext {
            hand: &hand,
            scoreboard: &board,
            turn: 1,
            rolls_remaining: 2,
        };
        let mut rng = StdRng::seed_from_u64(8);
        let keep = policy.choose_retention(&ctx, &mut rng).unwrap();
        assert!(keep.keeps_all());
    }
}
