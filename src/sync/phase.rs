use std::fmt;

use serde::Serialize;

/// Phases of a sync run.
///
/// A run flows INIT → FETCHING → (SELECTING → TRANSLATING*)* → TERMINAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Init,
    Fetching,
    Selecting,
    Translating,
    Terminal,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Init => write!(f, "INIT"),
            Phase::Fetching => write!(f, "FETCHING"),
            Phase::Selecting => write!(f, "SELECTING"),
            Phase::Translating => write!(f, "TRANSLATING"),
            Phase::Terminal => write!(f, "TERMINAL"),
        }
    }
}

impl Phase {
    /// Whether a run in `self` may move on to `next`.
    pub fn can_advance_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Init, Phase::Fetching)
                | (Phase::Fetching, Phase::Selecting | Phase::Terminal)
                | (Phase::Selecting, Phase::Selecting | Phase::Translating | Phase::Terminal)
                | (Phase::Translating, Phase::Translating | Phase::Selecting | Phase::Terminal)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Phase::Init.to_string(), "INIT");
        assert_eq!(Phase::Translating.to_string(), "TRANSLATING");
        assert_eq!(Phase::Terminal.to_string(), "TERMINAL");
    }

    #[test]
    fn linear_flow_is_allowed() {
        assert!(Phase::Init.can_advance_to(Phase::Fetching));
        assert!(Phase::Fetching.can_advance_to(Phase::Selecting));
        assert!(Phase::Selecting.can_advance_to(Phase::Translating));
        assert!(Phase::Translating.can_advance_to(Phase::Selecting));
        assert!(Phase::Translating.can_advance_to(Phase::Terminal));
    }

    #[test]
    fn no_fetched_keys_goes_straight_to_terminal() {
        assert!(Phase::Fetching.can_advance_to(Phase::Terminal));
    }

    #[test]
    fn terminal_is_final() {
        for next in [
            Phase::Init,
            Phase::Fetching,
            Phase::Selecting,
            Phase::Translating,
            Phase::Terminal,
        ] {
            assert!(!Phase::Terminal.can_advance_to(next));
        }
    }

    #[test]
    fn cannot_translate_before_selecting() {
        assert!(!Phase::Fetching.can_advance_to(Phase::Translating));
        assert!(!Phase::Init.can_advance_to(Phase::Selecting));
    }
}
