use crate::model::category::Category;
use crate::model::hand::Hand;

/// Pure, total scoring function: the point value of committing `hand` to
/// `category`. Defined for every category on every hand.
pub fn score(hand: &Hand, category: Category) -> u32 {
    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            let face = category.face_value().unwrap_or(0);
            hand.count_of(face) * face as u32
        }
        Category::FourOfAKind => {
            if max_count(hand) >= 4 {
                hand.sum()
            } else {
                0
            }
        }
        Category::FullHouse => {
            if is_full_house(hand) {
                25
            } else {
                0
            }
        }
        Category::SmallStraight => {
            if hand.longest_run().len() >= 4 {
                15
            } else {
                0
            }
        }
        Category::LargeStraight => {
            if hand.longest_run().len() == 5 {
                30
            } else {
                0
            }
        }
        Category::Yahtzee => {
            if max_count(hand) == 5 {
                50
            } else {
                0
            }
        }
        Category::Chance => hand.sum(),
    }
}

fn max_count(hand: &Hand) -> u32 {
    hand.face_counts().into_iter().max().unwrap_or(0)
}

/// Exactly one pair and one triple. Five of a kind does not qualify: the
/// check is on the exact count multiset, not a superset.
fn is_full_house(hand: &Hand) -> bool {
    let mut groups: Vec<u32> = hand
        .face_counts()
        .into_iter()
        .filter(|&count| count > 0)
        .collect();
    groups.sort_unstable();
    groups == [2, 3]
}

#[cfg(test)]
mod tests {
    use super::score;
    use crate::model::category::Category;
    use crate::model::hand::Hand;

    fn hand(faces: [u8; 5]) -> Hand {
        Hand::from_faces(faces)
    }

    #[test]
    fn number_categories_count_matching_faces() {
        let h = hand([3, 3, 3, 5, 1]);
        assert_eq!(score(&h, Category::Threes), 9);
        assert_eq!(score(&h, Category::Fives), 5);
        assert_eq!(score(&h, Category::Ones), 1);
        assert_eq!(score(&h, Category::Sixes), 0);
    }

    #[test]
    fn four_of_a_kind_sums_all_dice() {
        assert_eq!(score(&hand([4, 4, 4, 4, 2]), Category::FourOfAKind), 18);
        assert_eq!(score(&hand([6, 6, 6, 6, 6]), Category::FourOfAKind), 30);
        assert_eq!(score(&hand([4, 4, 4, 3, 2]), Category::FourOfAKind), 0);
    }

    #[test]
    fn full_house_requires_exact_two_three_split() {
        assert_eq!(score(&hand([2, 2, 3, 3, 3]), Category::FullHouse), 25);
        assert_eq!(score(&hand([5, 5, 5, 5, 2]), Category::FullHouse), 0);
        assert_eq!(score(&hand([5, 5, 5, 5, 5]), Category::FullHouse), 0);
        assert_eq!(score(&hand([1, 1, 2, 2, 3]), Category::FullHouse), 0);
    }

    #[test]
    fn small_straight_needs_four_consecutive_faces() {
        assert_eq!(score(&hand([1, 2, 3, 4, 4]), Category::SmallStraight), 15);
        assert_eq!(score(&hand([3, 4, 5, 6, 6]), Category::SmallStraight), 15);
        assert_eq!(score(&hand([1, 2, 4, 5, 6]), Category::SmallStraight), 0);
    }

    #[test]
    fn large_straight_needs_five_distinct_consecutive_faces() {
        assert_eq!(score(&hand([2, 3, 4, 5, 6]), Category::LargeStraight), 30);
        assert_eq!(score(&hand([1, 2, 3, 4, 5]), Category::LargeStraight), 30);
        assert_eq!(score(&hand([1, 2, 3, 4, 4]), Category::LargeStraight), 0);
        assert_eq!(score(&hand([1, 2, 3, 4, 6]), Category::LargeStraight), 0);
    }

    #[test]
    fn large_straight_also_scores_small() {
        let h = hand([2, 3, 4, 5, 6]);
        assert_eq!(score(&h, Category::SmallStraight), 15);
    }

    #[test]
    fn yahtzee_requires_five_of_a_face() {
        assert_eq!(score(&hand([4, 4, 4, 4, 4]), Category::Yahtzee), 50);
        assert_eq!(score(&hand([4, 4, 4, 4, 3]), Category::Yahtzee), 0);
    }

    #[test]
    fn chance_always_sums() {
        assert_eq!(score(&hand([1, 1, 1, 1, 2]), Category::Chance), 6);
        assert_eq!(score(&hand([6, 6, 6, 6, 6]), Category::Chance), 30);
    }

    #[test]
    fn score_is_total_and_non_negative() {
        let hands = [
            hand([1, 1, 1, 1, 1]),
            hand([1, 2, 3, 4, 5]),
            hand([6, 6, 5, 5, 4]),
            hand([2, 4, 6, 1, 3]),
        ];
        for h in &hands {
            for category in Category::ALL {
                // u32 return already rules out negatives; this pins totality.
                let _ = score(h, category);
            }
        }
    }
}
