use std::fmt::Display;

/// Verdict of a recognizer on one candidate lexeme.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Trap < Maybe < Accept`; verdicts are combined with `max`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum AcceptState {
    /// Neither this candidate nor any extension of it can match.
    Trap,
    /// Not a match yet, but a longer candidate still could be.
    Maybe,
    /// Exact match.
    Accept,
}

impl AcceptState {
    pub fn is_trap(self) -> bool {
        self == AcceptState::Trap
    }

    pub fn is_accept(self) -> bool {
        self == AcceptState::Accept
    }
}

impl Display for AcceptState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
