#![deny(warnings)]
pub mod estimator;
pub mod policy;
pub mod turn;

pub use estimator::Estimator;
pub use policy::{
    AggressivePolicy, DefensivePolicy, GamblerPolicy, NormalPolicy, Policy, PolicyContext,
    PolicyError, SimulationPolicy, policy_for,
};
pub use turn::{TurnError, TurnOutcome, play_turn};
