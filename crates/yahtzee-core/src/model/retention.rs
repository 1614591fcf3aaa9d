use crate::model::hand::HAND_SIZE;
use std::fmt;

/// A subset of the five die positions to keep unchanged across a reroll.
/// Stored as a bitmask so enumerating all 2^5 subsets is a plain range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Retention {
    mask: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionError {
    InvalidPosition(usize),
}

impl fmt::Display for RetentionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetentionError::InvalidPosition(position) => {
                write!(f, "die position {position} is outside 0..{HAND_SIZE}")
            }
        }
    }
}

impl std::error::Error for RetentionError {}

impl Retention {
    pub const NONE: Retention = Retention { mask: 0 };
    pub const ALL: Retention = Retention {
        mask: (1 << HAND_SIZE) - 1,
    };

    /// Every possible retention subset, in mask order.
    pub fn all_subsets() -> impl Iterator<Item = Retention> {
        (0u8..1 << HAND_SIZE).map(|mask| Retention { mask })
    }

    pub fn from_positions(positions: &[usize]) -> Result<Self, RetentionError> {
        let mut mask = 0u8;
        for &position in positions {
            if position >= HAND_SIZE {
                return Err(RetentionError::InvalidPosition(position));
            }
            mask |= 1 << position;
        }
        Ok(Self { mask })
    }

    pub const fn keeps(self, position: usize) -> bool {
        position < HAND_SIZE && self.mask & (1 << position) != 0
    }

    /// Keeping all five dice ends the rolling phase early.
    pub const fn keeps_all(self) -> bool {
        self.mask == Self::ALL.mask
    }

    pub const fn is_empty(self) -> bool {
        self.mask == 0
    }

    pub const fn len(self) -> u32 {
        self.mask.count_ones()
    }

    pub fn positions(self) -> impl Iterator<Item = usize> {
        (0..HAND_SIZE).filter(move |&position| self.keeps(position))
    }
}

impl fmt::Display for Retention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: Vec<String> = self.positions().map(|p| p.to_string()).collect();
        write!(f, "[{}]", positions.join(","))
    }
}
