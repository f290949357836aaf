//! Engine output

use std::fmt;

use super::strategy::Phase;

/// One thing the player can do this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Action {
    /// Use the move in `slot` (0-3)
    UseMove { slot: usize, move_id: u16 },
    /// Send in the party member at `index`
    Switch { index: usize },
    Flee,
    /// Throw a Poke Ball
    Catch,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::UseMove { slot, move_id } => write!(f, "move {slot} (#{move_id})"),
            Action::Switch { index } => write!(f, "switch to {index}"),
            Action::Flee => write!(f, "flee"),
            Action::Catch => write!(f, "catch"),
        }
    }
}

/// A legal action and its score
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredAction {
    pub action: Action,
    pub score: f32,
    /// Expected damage reaches the opponent's current HP
    pub lethal: bool,
}

/// The chosen action with every candidate that was weighed
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub action: Action,
    /// Candidates in enumeration order
    pub scores: Vec<ScoredAction>,
    pub phase: Phase,
}

impl Decision {
    /// The scored entry for the chosen action
    pub fn chosen(&self) -> Option<&ScoredAction> {
        self.scores.iter().find(|s| s.action == self.action)
    }

    pub fn score_of(&self, action: Action) -> Option<f32> {
        self.scores.iter().find(|s| s.action == action).map(|s| s.score)
    }

    pub fn is_lethal(&self) -> bool {
        self.chosen().is_some_and(|s| s.lethal)
    }
}
