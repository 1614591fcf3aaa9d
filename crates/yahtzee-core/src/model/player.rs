use crate::model::archetype::Archetype;
use crate::model::scoreboard::Scoreboard;
use serde::{Deserialize, Serialize};

/// One participant's state for a whole game. The scoreboard is owned here
/// for the player's game lifetime; the turn driver mutates it one commit
/// per turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub is_cpu: bool,
    pub archetype: Option<Archetype>,
    pub scoreboard: Scoreboard,
}

impl PlayerState {
    pub fn cpu(archetype: Archetype) -> Self {
        Self {
            name: format!("CPU({archetype})"),
            is_cpu: true,
            archetype: Some(archetype),
            scoreboard: Scoreboard::new(),
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_cpu: false,
            archetype: None,
            scoreboard: Scoreboard::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PlayerState;
    use crate::model::archetype::Archetype;

    #[test]
    fn cpu_player_carries_archetype() {
        let player = PlayerState::cpu(Archetype::Gambler);
        assert!(player.is_cpu);
        assert_eq!(player.archetype, Some(Archetype::Gambler));
        assert_eq!(player.name, "CPU(gambler)");
        assert!(player.scoreboard.open_categories().len() == 12);
    }

    #[test]
    fn human_player_has_no_archetype() {
        let player = PlayerState::human("Dana");
        assert!(!player.is_cpu);
        assert_eq!(player.archetype, None);
        assert_eq!(player.name, "Dana");
    }
}
