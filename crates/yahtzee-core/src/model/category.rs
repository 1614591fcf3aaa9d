use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the twelve scoring slots. Each is usable exactly once per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Category {
    Ones = 0,
    Twos = 1,
    Threes = 2,
    Fours = 3,
    Fives = 4,
    Sixes = 5,
    FourOfAKind = 6,
    FullHouse = 7,
    SmallStraight = 8,
    LargeStraight = 9,
    Yahtzee = 10,
    Chance = 11,
}

impl Category {
    /// Display/enumeration order; argmax tie-breaks resolve toward the
    /// earlier entry.
    pub const ALL: [Category; 12] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    /// The six number categories that feed the bonus threshold.
    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Category::Ones),
            1 => Some(Category::Twos),
            2 => Some(Category::Threes),
            3 => Some(Category::Fours),
            4 => Some(Category::Fives),
            5 => Some(Category::Sixes),
            6 => Some(Category::FourOfAKind),
            7 => Some(Category::FullHouse),
            8 => Some(Category::SmallStraight),
            9 => Some(Category::LargeStraight),
            10 => Some(Category::Yahtzee),
            11 => Some(Category::Chance),
            _ => None,
        }
    }

    pub const fn is_upper(self) -> bool {
        (self as u8) < 6
    }

    /// Die face counted by an upper category (`Ones` -> 1, ... `Sixes` -> 6).
    pub const fn face_value(self) -> Option<u8> {
        if self.is_upper() {
            Some(self as u8 + 1)
        } else {
            None
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Small Straight",
            Category::LargeStraight => "Large Straight",
            Category::Yahtzee => "Yahtzee",
            Category::Chance => "Chance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| ParseCategoryError(raw.to_string()))
    }
}
