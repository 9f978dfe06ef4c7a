//! Notification order for a resolved turn.

use swipedeck_types::{Card, SwipeDecision};

use crate::stack::CardStack;

/// Callbacks owed to the hosting screen.
///
/// Calls are fire-and-forget: the engine never waits on any effect they
/// start, and each is made at most once per resolved turn.
pub trait SwipeHandler<C> {
    fn on_accept(&mut self, card: &C);

    fn on_reject(&mut self, card: &C);

    /// Runs after the accept/reject call and before the stack advances.
    fn on_after_resolve(&mut self) {}
}

/// Bookkeeping for one dispatched turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Resolution {
    pub(crate) resolved_index: usize,
    pub(crate) next_index: usize,
}

/// Runs the accept/reject → after-resolve → advance sequence.
pub(crate) struct Dispatcher;

impl Dispatcher {
    /// Dispatch a resolved decision for the top card.
    ///
    /// Returns `None` without calling anything for `Abort` or an exhausted stack.
    pub(crate) fn dispatch<C, H>(
        stack: &mut CardStack<C>,
        decision: SwipeDecision,
        handler: &mut H,
    ) -> Option<Resolution>
    where
        C: Card,
        H: SwipeHandler<C>,
    {
        let resolved_index = stack.current_index();
        let card = stack.current()?;

        match decision {
            SwipeDecision::Accept => handler.on_accept(card),
            SwipeDecision::Reject => handler.on_reject(card),
            SwipeDecision::Abort => return None,
        }
        tracing::debug!(card = card.card_id(), %decision, index = resolved_index, "dispatched");

        handler.on_after_resolve();

        let next_index = stack.advance()?;
        Some(Resolution {
            resolved_index,
            next_index,
        })
    }
}
