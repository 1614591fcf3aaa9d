pub mod archetype;
pub mod category;
pub mod hand;
pub mod player;
pub mod retention;
pub mod scoreboard;
