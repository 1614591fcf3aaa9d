use super::keeps::{best_raw_category, majority_keep, rule_based_keep, run_keep};
use super::{Policy, PolicyContext, PolicyError};
use rand::RngCore;
use yahtzee_core::model::archetype::Archetype;
use yahtzee_core::model::category::Category;
use yahtzee_core::model::retention::Retention;

/// Baseline archetype: hunts straights when a partial run shows, then
/// falls back to the rule-based keep, then to the majority face.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalPolicy;

impl Policy for NormalPolicy {
    fn archetype(&self) -> Archetype {
        Archetype::Normal
    }

    fn choose_retention(
        &self,
        ctx: &PolicyContext,
        _rng: &mut dyn RngCore,
    ) -> Result<Retention, PolicyError> {
        let hand = ctx.hand;
        let scoreboard = ctx.scoreboard;

        let straight_open = scoreboard.is_open(Category::SmallStraight)
            || scoreboard.is_open(Category::LargeStraight);
        if straight_open && hand.longest_run().len() >= 3 {
            return Ok(run_keep(hand));
        }

        let keep = rule_based_keep(hand, scoreboard);
        if keep.is_empty() {
            Ok(majority_keep(hand))
        } else {
            Ok(keep)
        }
    }

    fn choose_category(&self, ctx: &PolicyContext) -> Result<Category, PolicyError> {
        best_raw_category(ctx.hand, ctx.scoreboard)
    }
}

#[cfg(test)]
mod tests {
    use super::NormalPolicy;
    use crate::policy::{Policy, PolicyContext};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use yahtzee_core::model::category::Category;
    use yahtzee_core::model::hand::Hand;
    use yahtzee_core::model::scoreboard::Scoreboard;

    fn retention_for(hand: &Hand, scoreboard: &Scoreboard) -> Vec<usize> {
        let ctx = PolicyContext {
            hand,
            scoreboard,
            turn: 3,
            rolls_remaining: 2,
        };
        let mut rng = StdRng::seed_from_u64(0);
        NormalPolicy
            .choose_retention(&ctx, &mut rng)
            .unwrap()
            .positions()
            .collect()
    }

    #[test]
    fn partial_run_is_kept_while_a_straight_is_open() {
        let board = Scoreboard::new();
        let hand = Hand::from_faces([3, 4, 5, 1, 1]);
        assert_eq!(retention_for(&hand, &board), vec![0, 1, 2]);
    }

    #[test]
    fn run_is_ignored_once_both_straights_are_filled() {
        let mut board = Scoreboard::new();
        board.commit(Category::SmallStraight, 15).unwrap();
        board.commit(Category::LargeStraight, 0).unwrap();
        let hand = Hand::from_faces([3, 4, 5, 1, 1]);
        // Rule-based keep takes over; the base-weighted target is Chance,
        // so the majority face (ones) is held.
        assert_eq!(retention_for(&hand, &board), vec![3, 4]);
    }

    #[test]
    fn near_yahtzee_is_locked_without_a_run() {
        let board = Scoreboard::new();
        let hand = Hand::from_faces([5, 5, 5, 5, 2]);
        assert_eq!(retention_for(&hand, &board), vec![0, 1, 2, 3]);
    }

    #[test]
    fn commits_to_highest_raw_score() {
        let board = Scoreboard::new();
        let hand = Hand::from_faces([1, 2, 3, 4, 4]);
        let ctx = PolicyContext {
            hand: &hand,
            scoreboard: &board,
            turn: 6,
            rolls_remaining: 0,
        };
        assert_eq!(
            NormalPolicy.choose_category(&ctx).unwrap(),
            Category::SmallStraight
        );
    }
}
