use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Named CPU playing style. The tag lives in the data model so snapshots
/// can round-trip it; the decision functions themselves live in the bot
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Simulation,
    Gambler,
    Aggressive,
    Defensive,
    Normal,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Archetype::Simulation,
        Archetype::Gambler,
        Archetype::Aggressive,
        Archetype::Defensive,
        Archetype::Normal,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Archetype::Simulation => "simulation",
            Archetype::Gambler => "gambler",
            Archetype::Aggressive => "aggressive",
            Archetype::Defensive => "defensive",
            Archetype::Normal => "normal",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseArchetypeError(pub String);

impl fmt::Display for ParseArchetypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown archetype '{}'", self.0)
    }
}

impl std::error::Error for ParseArchetypeError {}

impl FromStr for Archetype {
    type Err = ParseArchetypeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Archetype::ALL
            .iter()
            .copied()
            .find(|archetype| archetype.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| ParseArchetypeError(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Archetype;

    #[test]
    fn parse_roundtrip() {
        for archetype in Archetype::ALL {
            let parsed: Archetype = archetype.as_str().parse().unwrap();
            assert_eq!(parsed, archetype);
        }
        assert!("optimal".parse::<Archetype>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Archetype::Simulation).unwrap();
        assert_eq!(json, "\"simulation\"");
    }
}
