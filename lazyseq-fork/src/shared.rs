use std::collections::VecDeque;
use std::iter::Fuse;

/// State shared by all cursors forked from one source.
///
/// The buffer always covers the half-open range `offset()..pulled` of
/// absolute source positions, where `offset()` is the position of the
/// trailing live cursor.
pub(crate) struct Shared<I: Iterator> {
    source: Fuse<I>,
    buffer: VecDeque<I::Item>,
    // number of items pulled from the source so far
    pulled: usize,
    // absolute position of each cursor; `None` once it's released
    positions: Vec<Option<usize>>,
}

impl<I: Iterator> Shared<I> {
    pub(crate) fn new(source: I) -> Self {
        Self {
            source: source.fuse(),
            buffer: VecDeque::new(),
            pulled: 0,
            positions: Vec::new(),
        }
    }

    fn offset(&self) -> usize {
        self.pulled - self.buffer.len()
    }

    pub(crate) fn buffered(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) fn position(&self, id: usize) -> Option<usize> {
        self.positions.get(id).copied().flatten()
    }

    /// Register a new cursor at `position`, reusing a released slot if
    /// there is one.
    pub(crate) fn register(&mut self, position: usize) -> usize {
        if let Some(id) = self.positions.iter().position(Option::is_none) {
            self.positions[id] = Some(position);
            id
        } else {
            self.positions.push(Some(position));
            self.positions.len() - 1
        }
    }

    pub(crate) fn release(&mut self, id: usize) {
        if let Some(slot) = self.positions.get_mut(id) {
            *slot = None;
        }
        self.evict();
        log::trace!(
            "fork cursor {} released, {} items still buffered",
            id,
            self.buffer.len()
        );
    }

    fn shared_with_others(&self, id: usize, position: usize) -> bool {
        self.positions
            .iter()
            .enumerate()
            .any(|(other, p)| other != id && *p == Some(position))
    }

    fn has_others(&self, id: usize) -> bool {
        self.positions
            .iter()
            .enumerate()
            .any(|(other, p)| other != id && p.is_some())
    }

    // drop everything no live cursor can still reach
    fn evict(&mut self) {
        match self.positions.iter().flatten().min().copied() {
            Some(low) => {
                let evict = low.saturating_sub(self.offset()).min(self.buffer.len());
                self.buffer.drain(..evict);
            }
            None => self.buffer.clear(),
        }
    }

    pub(crate) fn size_hint(&self, id: usize) -> (usize, Option<usize>) {
        let ahead = self
            .position(id)
            .map(|position| self.pulled - position)
            .unwrap_or(0);
        let (lower, upper) = self.source.size_hint();
        (
            lower.saturating_add(ahead),
            upper.and_then(|upper| upper.checked_add(ahead)),
        )
    }
}

impl<I> Shared<I>
where
    I: Iterator,
    I::Item: Clone,
{
    pub(crate) fn next_for(&mut self, id: usize) -> Option<I::Item> {
        let position = self.position(id)?;
        let item = if position < self.pulled {
            let index = position - self.offset();
            if index == 0 && !self.shared_with_others(id, position) {
                // we're the last cursor that needs this one
                self.buffer.pop_front()?
            } else {
                self.buffer.get(index)?.clone()
            }
        } else {
            let item = self.source.next()?;
            self.pulled += 1;
            if self.has_others(id) {
                self.buffer.push_back(item.clone());
            }
            item
        };
        self.positions[id] = Some(position + 1);
        self.evict();
        Some(item)
    }
}
