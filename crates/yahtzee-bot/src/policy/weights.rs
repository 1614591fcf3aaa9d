use yahtzee_core::model::category::Category;
use yahtzee_core::model::scoreboard::Scoreboard;

/// Fixed per-category weights, indexed by [`Category::index`]. Lower
/// categories and Yahtzee outrank the cheap upper categories.
pub const BASE_WEIGHTS: [f64; 12] = [
    0.3, // Ones
    0.4, // Twos
    0.6, // Threes
    0.8, // Fours
    1.0, // Fives
    1.2, // Sixes
    1.8, // Four of a Kind
    2.0, // Full House
    1.1, // Small Straight
    1.6, // Large Straight
    3.0, // Yahtzee
    1.0, // Chance
];

/// High-value lower categories favored once the endgame approaches.
pub const ENDGAME_PRIORITIES: [Category; 4] = [
    Category::Yahtzee,
    Category::FullHouse,
    Category::LargeStraight,
    Category::FourOfAKind,
];

pub const fn base_weight(category: Category) -> f64 {
    BASE_WEIGHTS[category.index()]
}

/// Turn- and scoreboard-dependent weights for the simulation archetype.
///
/// While the upper bonus is still in play, open upper weights are scaled
/// by `1.5 × urgency`, where urgency grows as the unplayed-category
/// budget shrinks. From turn 8 onward, or once the bonus is secured, the
/// remaining high-value lower categories are scaled by 1.5.
pub fn simulation_weights(turn: u32, scoreboard: &Scoreboard) -> [f64; 12] {
    let mut weights = BASE_WEIGHTS;

    let upper_open = Category::UPPER
        .iter()
        .any(|category| scoreboard.is_open(*category));
    if !scoreboard.bonus_secured() && upper_open {
        let urgency = 1.0 + f64::from(12u32.saturating_sub(turn)) / 10.0;
        for category in Category::UPPER {
            if scoreboard.is_open(category) {
                weights[category.index()] *= 1.5 * urgency;
            }
        }
    }

    if turn >= 8 || scoreboard.bonus_secured() {
        for category in ENDGAME_PRIORITIES {
            if scoreboard.is_open(category) {
                weights[category.index()] *= 1.5;
            }
        }
    }

    weights
}
