use crate::policy::{Policy, PolicyContext, PolicyError};
use rand::RngCore;
use yahtzee_core::model::hand::Hand;
use yahtzee_core::model::retention::Retention;
use yahtzee_core::model::scoreboard::Scoreboard;
use yahtzee_core::scoring::score;

/// Monte-Carlo expected-value estimator for a retention choice: "if I
/// keep these dice, reroll the rest `rolls_remaining` more times, then
/// play my best category, what score do I average?"
#[derive(Debug, Clone, Copy)]
pub struct Estimator {
    samples: u32,
}

impl Estimator {
    pub const DEFAULT_SAMPLES: u32 = 200;

    pub const fn new(samples: u32) -> Self {
        Self { samples }
    }

    pub const fn samples(&self) -> u32 {
        self.samples
    }

    /// Mean score over independent trials. Each trial copies the hand,
    /// re-randomizes every non-retained position once per remaining reroll
    /// round, then scores the category `category_policy` picks for the
    /// simulated hand.
    ///
    /// `rolls_remaining` must be the number of reroll opportunities left in
    /// the real turn; with zero rounds the simulation degenerates to exact
    /// direct scoring.
    pub fn estimate(
        &self,
        hand: &Hand,
        retention: Retention,
        scoreboard: &Scoreboard,
        turn: u32,
        rolls_remaining: u32,
        category_policy: &dyn Policy,
        rng: &mut dyn RngCore,
    ) -> Result<f64, PolicyError> {
        let samples = self.samples.max(1);
        let mut total: u64 = 0;
        for _ in 0..samples {
            let mut simulated = *hand;
            for _ in 0..rolls_remaining {
                simulated.reroll(retention, rng);
            }
            let ctx = PolicyContext {
                hand: &simulated,
                scoreboard,
                turn,
                rolls_remaining: 0,
            };
            let category = category_policy.choose_category(&ctx)?;
            total += u64::from(score(&simulated, category));
        }
        Ok(total as f64 / f64::from(samples))
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SAMPLES)
    }
}

#[cfg(test)]
mod tests {
    use super::Estimator;
    use crate::policy::GamblerPolicy;
    use crate::policy::{Policy, PolicyContext};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use yahtzee_core::model::category::Category;
    use yahtzee_core::model::hand::Hand;
    use yahtzee_core::model::retention::Retention;
    use yahtzee_core::model::scoreboard::Scoreboard;
    use yahtzee_core::scoring::score;

    #[test]
    fn zero_rolls_remaining_degenerates_to_direct_scoring() {
        // Regression guard: the estimator must honor the true remaining
        // reroll count instead of always simulating two future rounds.
        let policy = GamblerPolicy::rule_based();
        let estimator = Estimator::new(50);
        let board = Scoreboard::new();
        let hand = Hand::from_faces([2, 2, 5, 5, 5]);

        let ctx = PolicyContext {
            hand: &hand,
            scoreboard: &board,
            turn: 4,
            rolls_remaining: 0,
        };
        let chosen = policy.choose_category(&ctx).unwrap();
        let exact = f64::from(score(&hand, chosen));

        for keep in [
            Retention::NONE,
            Retention::ALL,
            Retention::from_positions(&[0, 3]).unwrap(),
        ] {
            let mut rng = StdRng::seed_from_u64(9);
            let estimate = estimator
                .estimate(&hand, keep, &board, 4, 0, &policy, &mut rng)
                .unwrap();
            assert_eq!(estimate, exact);
        }
    }

    #[test]
    fn keeping_everything_is_unaffected_by_reroll_rounds() {
        let policy = GamblerPolicy::rule_based();
        let estimator = Estimator::new(40);
        let board = Scoreboard::new();
        let hand = Hand::from_faces([3, 3, 3, 4, 4]);
        let mut rng = StdRng::seed_from_u64(21);

        let with_rolls = estimator
            .estimate(&hand, Retention::ALL, &board, 2, 2, &policy, &mut rng)
            .unwrap();
        let without = estimator
            .estimate(&hand, Retention::ALL, &board, 2, 0, &policy, &mut rng)
            .unwrap();
        assert_eq!(with_rolls, without);
    }

    #[test]
    fn better_retention_scores_higher() {
        // Only Sixes open: holding four sixes dominates holding nothing.
        let policy = GamblerPolicy::rule_based();
        let estimator = Estimator::new(300);
        let mut board = Scoreboard::new();
        for category in Category::ALL {
            if category != Category::Sixes {
                board.commit(category, 0).unwrap();
            }
        }
        let hand = Hand::from_faces([6, 6, 6, 6, 1]);

        let mut rng = StdRng::seed_from_u64(5);
        let hold_sixes = Retention::from_positions(&[0, 1, 2, 3]).unwrap();
        let ev_hold = estimator
            .estimate(&hand, hold_sixes, &board, 6, 1, &policy, &mut rng)
            .unwrap();
        let ev_dump = estimator
            .estimate(&hand, Retention::NONE, &board, 6, 1, &policy, &mut rng)
            .unwrap();
        assert!(ev_hold > ev_dump);
        assert!(ev_hold >= 24.0);
    }
}
