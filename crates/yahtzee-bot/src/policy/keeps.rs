//! Retention building blocks shared across the archetype policies.

use crate::policy::PolicyError;
use crate::policy::weights::base_weight;
use yahtzee_core::model::category::Category;
use yahtzee_core::model::hand::Hand;
use yahtzee_core::model::retention::Retention;
use yahtzee_core::model::scoreboard::Scoreboard;
use yahtzee_core::scoring::score;

pub fn keep_face(hand: &Hand, face: u8) -> Retention {
    Retention::from_positions(&hand.positions_of(face)).expect("die positions are in range")
}

pub fn majority_keep(hand: &Hand) -> Retention {
    keep_face(hand, hand.majority_face())
}

/// Keeps every die whose face participates in the longest run.
pub fn run_keep(hand: &Hand) -> Retention {
    let run = hand.longest_run();
    let positions: Vec<usize> = hand
        .faces()
        .iter()
        .enumerate()
        .filter(|(_, face)| run.contains(face))
        .map(|(position, _)| position)
        .collect();
    Retention::from_positions(&positions).expect("die positions are in range")
}

/// The open category maximizing `raw score × base weight`; ties resolve
/// toward the earlier category in enumeration order.
pub fn recommended_target(hand: &Hand, scoreboard: &Scoreboard) -> Option<Category> {
    argmax_open(scoreboard, |category| {
        f64::from(score(hand, category)) * base_weight(category)
    })
}

/// The open category with the highest raw score; commit rule for the
/// non-simulation archetypes.
pub fn best_raw_category(hand: &Hand, scoreboard: &Scoreboard) -> Result<Category, PolicyError> {
    argmax_open(scoreboard, |category| f64::from(score(hand, category)))
        .ok_or(PolicyError::NoOpenCategories)
}

pub fn argmax_open<F>(scoreboard: &Scoreboard, mut value: F) -> Option<Category>
where
    F: FnMut(Category) -> f64,
{
    let mut best: Option<(Category, f64)> = None;
    for category in scoreboard.open_categories() {
        let v = value(category);
        if best.is_none_or(|(_, best_v)| v > best_v) {
            best = Some((category, v));
        }
    }
    best.map(|(category, _)| category)
}

/// Dice worth holding when chasing `target`. May be empty; callers fall
/// back to the majority face.
pub fn keeps_for_target(hand: &Hand, target: Category) -> Retention {
    if let Some(face) = target.face_value() {
        return keep_face(hand, face);
    }
    match target {
        Category::FourOfAKind | Category::Yahtzee => majority_keep(hand),
        Category::FullHouse => {
            let counts = hand.face_counts();
            let mut groups: Vec<u32> = counts.iter().copied().filter(|&c| c > 0).collect();
            groups.sort_unstable();
            if groups == [2, 3] {
                return Retention::ALL;
            }
            let positions: Vec<usize> = hand
                .faces()
                .iter()
                .enumerate()
                .filter(|&(_, &face)| matches!(counts[face as usize], 2 | 3))
                .map(|(position, _)| position)
                .collect();
            Retention::from_positions(&positions).expect("die positions are in range")
        }
        Category::SmallStraight | Category::LargeStraight => {
            if hand.longest_run().len() >= 3 {
                run_keep(hand)
            } else {
                Retention::NONE
            }
        }
        _ => Retention::NONE,
    }
}

/// Rule-based retention from before the Monte-Carlo estimator existed:
/// lock a near-Yahtzee or ready full house, otherwise chase the
/// base-weighted recommended category, otherwise hold the majority face.
pub fn rule_based_keep(hand: &Hand, scoreboard: &Scoreboard) -> Retention {
    let counts = hand.face_counts();
    let max_count = counts.iter().copied().max().unwrap_or(0);
    if scoreboard.is_open(Category::Yahtzee) && max_count >= 4 {
        return majority_keep(hand);
    }
    let mut groups: Vec<u32> = counts.iter().copied().filter(|&c| c > 0).collect();
    groups.sort_unstable();
    if scoreboard.is_open(Category::FullHouse) && groups == [2, 3] {
        return Retention::ALL;
    }

    let keep = match recommended_target(hand, scoreboard) {
        Some(target) => keeps_for_target(hand, target),
        None => Retention::ALL,
    };
    if keep.is_empty() { majority_keep(hand) } else { keep }
}

/// Candidate retention subsets ranked by the Monte-Carlo estimator: every
/// one of the 2^5 subsets plus the heuristic shortcuts (majority face and
/// recommended-category keeps), deduplicated.
pub fn candidate_keeps(hand: &Hand, scoreboard: &Scoreboard) -> Vec<Retention> {
    let mut candidates: Vec<Retention> = Retention::all_subsets().collect();

    let mut extras = vec![majority_keep(hand)];
    if let Some(target) = recommended_target(hand, scoreboard) {
        extras.push(keeps_for_target(hand, target));
    }
    for extra in extras {
        if !candidates.contains(&extra) {
            candidates.push(extra);
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(faces: [u8; 5]) -> Hand {
        Hand::from_faces(faces)
    }

    #[test]
    fn majority_keep_holds_most_frequent_face() {
        let keep = majority_keep(&hand([5, 2, 5, 5, 1]));
        assert_eq!(keep.positions().collect::<Vec<_>>(), vec![0, 2, 3]);
    }

    #[test]
    fn run_keep_holds_all_dice_in_the_run() {
        let keep = run_keep(&hand([2, 3, 4, 4, 6]));
        assert_eq!(keep.positions().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn recommended_target_uses_base_weights() {
        // Sixes raw 18 * 1.2 = 21.6 beats Chance 20 * 1.0.
        let board = Scoreboard::new();
        let target = recommended_target(&hand([6, 6, 6, 1, 1]), &board);
        assert_eq!(target, Some(Category::Sixes));
    }

    #[test]
    fn best_raw_breaks_ties_by_enumeration_order() {
        let mut board = Scoreboard::new();
        board.commit(Category::Chance, 20).unwrap();
        board.commit(Category::FullHouse, 25).unwrap();
        board.commit(Category::FourOfAKind, 0).unwrap();
        // Twos and Threes both score 6; Twos enumerates first.
        let best = best_raw_category(&hand([2, 2, 2, 3, 3]), &board).unwrap();
        assert_eq!(best, Category::Twos);
    }

    #[test]
    fn best_raw_errors_on_full_board() {
        let mut board = Scoreboard::new();
        for category in Category::ALL {
            board.commit(category, 1).unwrap();
        }
        assert_eq!(
            best_raw_category(&hand([1, 2, 3, 4, 5]), &board),
            Err(PolicyError::NoOpenCategories)
        );
    }

    #[test]
    fn full_house_target_keeps_pair_and_triple_material() {
        let keep = keeps_for_target(&hand([3, 3, 5, 5, 1]), Category::FullHouse);
        assert_eq!(keep.positions().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(
            keeps_for_target(&hand([3, 3, 5, 5, 5]), Category::FullHouse),
            Retention::ALL
        );
    }

    #[test]
    fn rule_based_keep_locks_near_yahtzee() {
        let board = Scoreboard::new();
        let keep = rule_based_keep(&hand([4, 4, 4, 4, 1]), &board);
        assert_eq!(keep.positions().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn rule_based_keep_freezes_ready_full_house() {
        let board = Scoreboard::new();
        assert_eq!(rule_based_keep(&hand([2, 2, 6, 6, 6]), &board), Retention::ALL);
    }

    #[test]
    fn candidate_keeps_cover_every_subset() {
        let board = Scoreboard::new();
        let candidates = candidate_keeps(&hand([1, 2, 3, 4, 5]), &board);
        assert_eq!(candidates.len(), 32);
        let unique: std::collections::HashSet<_> = candidates.iter().copied().collect();
        assert_eq!(unique.len(), candidates.len());
    }
}
