//! Swipe decisions and the outcomes they bind to cards.

use std::fmt;

/// Horizontal exit direction of a resolved card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Right,
    Left,
}

impl SwipeDirection {
    /// `+1.0` for right, `-1.0` for left.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }
}

/// Card-free result of evaluating a released gesture.
///
/// Moving right accepts and moving left rejects. That mapping is a policy of
/// the job-matching domain, kept in [`SwipeDecision::direction`] and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDecision {
    Accept,
    Reject,
    Abort,
}

impl SwipeDecision {
    /// Exit direction, or `None` when the card snaps back.
    #[must_use]
    pub const fn direction(self) -> Option<SwipeDirection> {
        match self {
            Self::Accept => Some(SwipeDirection::Right),
            Self::Reject => Some(SwipeDirection::Left),
            Self::Abort => None,
        }
    }

    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Abort)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
            Self::Abort => "abort",
        }
    }

    /// Attach the responsible card.
    #[must_use]
    pub fn bind<C>(self, card: C) -> SwipeOutcome<C> {
        match self {
            Self::Accept => SwipeOutcome::Accept(card),
            Self::Reject => SwipeOutcome::Reject(card),
            Self::Abort => SwipeOutcome::Abort,
        }
    }
}

impl fmt::Display for SwipeDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decision bound to the card it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeOutcome<C> {
    Accept(C),
    Reject(C),
    Abort,
}

impl<C> SwipeOutcome<C> {
    #[must_use]
    pub fn decision(&self) -> SwipeDecision {
        match self {
            Self::Accept(_) => SwipeDecision::Accept,
            Self::Reject(_) => SwipeDecision::Reject,
            Self::Abort => SwipeDecision::Abort,
        }
    }

    #[must_use]
    pub fn card(&self) -> Option<&C> {
        match self {
            Self::Accept(card) | Self::Reject(card) => Some(card),
            Self::Abort => None,
        }
    }
}
