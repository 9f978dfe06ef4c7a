//! Ordered card sequence with a single forward-only cursor.

use swipedeck_types::JobCard;

/// Cards are immutable entries; only the index moves.
///
/// Invariant: `0 <= current_index <= len`. At `len` the stack is exhausted and
/// no card is interactive. [`CardStack::advance`] is the single mutation path
/// and is reachable only through the dispatcher.
#[derive(Debug, Clone)]
pub struct CardStack<C> {
    order: Vec<C>,
    current_index: usize,
}

impl<C> CardStack<C> {
    #[must_use]
    pub fn new(order: Vec<C>) -> Self {
        Self {
            order,
            current_index: 0,
        }
    }

    /// The interactive top card.
    #[must_use]
    pub fn current(&self) -> Option<&C> {
        self.order.get(self.current_index)
    }

    /// The card rendered beneath the top card, if any.
    #[must_use]
    pub fn next_up(&self) -> Option<&C> {
        self.order.get(self.current_index.saturating_add(1))
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len() - self.current_index
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.order.len()
    }

    #[must_use]
    pub fn cards(&self) -> &[C] {
        &self.order
    }

    /// Move past the top card. Returns the new index, or `None` when already exhausted.
    pub(crate) fn advance(&mut self) -> Option<usize> {
        if self.is_exhausted() {
            return None;
        }
        self.current_index += 1;
        Some(self.current_index)
    }
}

impl<C> FromIterator<C> for CardStack<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl CardStack<JobCard> {
    /// Build a stack from the job source, keeping source order and dropping
    /// inactive postings.
    pub fn from_active_jobs(jobs: impl IntoIterator<Item = JobCard>) -> Self {
        jobs.into_iter().filter(|job| job.is_active).collect()
    }
}
