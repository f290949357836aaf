//! Engine error types

use thiserror::Error;

use super::state::Side;

/// Contract violations reported by [`Engine`](super::Engine).
///
/// These are signals for the caller's control flow, not decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("active battler has no usable move")]
    NoLegalAction,

    #[error("active battler fainted and no switch target was requested")]
    ForcedSwitchRequired,

    #[error("no active battler on the {0} side")]
    MissingBattler(Side),

    #[error("party slot {0} cannot be switched in")]
    InvalidSwitchTarget(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::MissingBattler(Side::Opponent).to_string(),
            "no active battler on the opponent side"
        );
        assert_eq!(
            EngineError::InvalidSwitchTarget(4).to_string(),
            "party slot 4 cannot be switched in"
        );
    }
}
