use super::keeps::{best_raw_category, keep_face, majority_keep, recommended_target};
use super::{Policy, PolicyContext, PolicyError};
use rand::RngCore;
use yahtzee_core::model::archetype::Archetype;
use yahtzee_core::model::category::Category;
use yahtzee_core::model::retention::Retention;

/// Chases the big multiples: locks Yahtzee/Four-of-a-Kind material as
/// soon as three of a face show, freezes a ready full house, and
/// otherwise follows the base-weighted recommendation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressivePolicy;

impl Policy for AggressivePolicy {
    fn archetype(&self) -> Archetype {
        Archetype::Aggressive
    }

    fn choose_retention(
        &self,
        ctx: &PolicyContext,
        _rng: &mut dyn RngCore,
    ) -> Result<Retention, PolicyError> {
        let hand = ctx.hand;
        let scoreboard = ctx.scoreboard;
        let counts = hand.face_counts();
        let majority = hand.majority_face();

        if scoreboard.is_open(Category::Yahtzee) && counts[majority as usize] >= 3 {
            return Ok(majority_keep(hand));
        }

        let mut groups: Vec<u32> = counts.iter().copied().filter(|&c| c > 0).collect();
        groups.sort_unstable();
        if scoreboard.is_open(Category::FullHouse) && groups == [2, 3] {
            return Ok(Retention::ALL);
        }

        if let Some(target) = recommended_target(hand, scoreboard) {
            if let Some(face) = target.face_value() {
                let keep = keep_face(hand, face);
                if !keep.is_empty() {
                    return Ok(keep);
                }
            }
        }
        Ok(majority_keep(hand))
    }

    fn choose_category(&self, ctx: &PolicyContext) -> Result<Category, PolicyError> {
        best_raw_category(ctx.hand, ctx.scoreboard)
    }
}
