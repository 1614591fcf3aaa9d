use crate::model::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BONUS_THRESHOLD: u32 = 63;
pub const BONUS_VALUE: u32 = 35;

/// Per-category score slots. `None` means the category is still open; a
/// committed slot is never overwritten. Zero is a legitimate committed
/// score, which is why the empty marker is an `Option` and not a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    slots: [Option<u32>; 12],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreboardError {
    AlreadyFilled(Category),
}

impl fmt::Display for ScoreboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreboardError::AlreadyFilled(category) => {
                write!(f, "category '{category}' has already been scored")
            }
        }
    }
}

impl std::error::Error for ScoreboardError {}

impl Scoreboard {
    pub const fn new() -> Self {
        Self { slots: [None; 12] }
    }

    pub const fn entry(&self, category: Category) -> Option<u32> {
        self.slots[category.index()]
    }

    pub const fn is_open(&self, category: Category) -> bool {
        self.slots[category.index()].is_none()
    }

    /// Records a score. Fails if the category is already filled; callers
    /// must pick from [`Scoreboard::open_categories`].
    pub fn commit(&mut self, category: Category, score: u32) -> Result<(), ScoreboardError> {
        let slot = &mut self.slots[category.index()];
        if slot.is_some() {
            return Err(ScoreboardError::AlreadyFilled(category));
        }
        *slot = Some(score);
        Ok(())
    }

    pub fn open_categories(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|category| self.is_open(*category))
            .collect()
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.filled_count() == self.slots.len()
    }

    pub fn upper_sum(&self) -> u32 {
        Category::UPPER
            .iter()
            .filter_map(|category| self.entry(*category))
            .sum()
    }

    pub fn lower_sum(&self) -> u32 {
        Category::ALL
            .iter()
            .filter(|category| !category.is_upper())
            .filter_map(|category| self.entry(*category))
            .sum()
    }

    pub fn bonus(&self) -> u32 {
        bonus_for(self.upper_sum())
    }

    pub fn total(&self) -> u32 {
        self.upper_sum() + self.lower_sum() + self.bonus()
    }

    /// True once the upper bonus can no longer be lost.
    pub fn bonus_secured(&self) -> bool {
        self.upper_sum() >= BONUS_THRESHOLD
    }
}

pub const fn bonus_for(upper_sum: u32) -> u32 {
    if upper_sum >= BONUS_THRESHOLD {
        BONUS_VALUE
    } else {
        0
    }
}
