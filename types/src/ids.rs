use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-deck turn counter. A new turn starts whenever the top card changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnId(u64);

impl TurnId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of an in-flight exit motion.
///
/// A completion only dispatches when its token still equals the deck's active
/// token; teardown bumps the generation so stale completions fall through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnToken {
    turn: TurnId,
    generation: u64,
}

impl TurnToken {
    #[must_use]
    pub const fn new(turn: TurnId, generation: u64) -> Self {
        Self { turn, generation }
    }

    #[must_use]
    pub const fn turn(self) -> TurnId {
        self.turn
    }

    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

impl fmt::Display for TurnToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.turn, self.generation)
    }
}
