use super::keeps::{best_raw_category, keep_face, majority_keep};
use super::{Policy, PolicyContext, PolicyError};
use rand::RngCore;
use yahtzee_core::model::archetype::Archetype;
use yahtzee_core::model::category::Category;
use yahtzee_core::model::retention::Retention;
use yahtzee_core::scoring::score;

/// Bonus-first archetype: while the upper bonus is still reachable it
/// chases whichever open upper category pays best right now; afterwards
/// it holds dice for the single best-scoring open category overall.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefensivePolicy;

impl Policy for DefensivePolicy {
    fn archetype(&self) -> Archetype {
        Archetype::Defensive
    }

    fn choose_retention(
        &self,
        ctx: &PolicyContext,
        _rng: &mut dyn RngCore,
    ) -> Result<Retention, PolicyError> {
        let hand = ctx.hand;
        let scoreboard = ctx.scoreboard;

        if !scoreboard.bonus_secured() {
            let mut upper_target: Option<(Category, u32)> = None;
            for category in Category::UPPER {
                if !scoreboard.is_open(category) {
                    continue;
                }
                let raw = score(hand, category);
                if upper_target.is_none_or(|(_, best)| raw > best) {
                    upper_target = Some((category, raw));
                }
            }
            if let Some((target, _)) = upper_target {
                if let Some(face) = target.face_value() {
                    return Ok(keep_face(hand, face));
                }
            }
        }

        match best_raw_category(hand, scoreboard) {
            Ok(target) => {
                if let Some(face) = target.face_value() {
                    Ok(keep_face(hand, face))
                } else {
                    Ok(majority_keep(hand))
                }
            }
            // A full board means nothing is worth rerolling for.
            Err(PolicyError::NoOpenCategories) => Ok(Retention::ALL),
        }
    }

    fn choose_category(&self, ctx: &PolicyContext) -> Result<Category, PolicyError> {
        best_raw_category(ctx.hand, ctx.scoreboard)
    }
}
