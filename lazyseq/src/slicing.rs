use std::collections::vec_deque;
use std::collections::VecDeque;
use std::iter::{FusedIterator, Skip, SkipWhile, Take, TakeWhile};

use lazyseq_fork::{fork, Fork};

/// The first `limit` items of a sequence, or fewer if it is shorter.
pub fn take<I>(limit: usize, iterable: I) -> Take<I::IntoIter>
where
    I: IntoIterator,
{
    iterable.into_iter().take(limit)
}

/// Everything after the first `limit` items.
///
/// The skipped items are pulled on the first call to `next`, not here.
pub fn drop<I>(limit: usize, iterable: I) -> Skip<I::IntoIter>
where
    I: IntoIterator,
{
    iterable.into_iter().skip(limit)
}

/// The last `n` items of a finite sequence, in their original order.
///
/// The whole source is consumed immediately; at most `n` items are held at
/// any time.
pub fn takelast<I>(n: usize, iterable: I) -> vec_deque::IntoIter<I::Item>
where
    I: IntoIterator,
{
    let mut last = VecDeque::with_capacity(n);
    for item in iterable {
        if n == 0 {
            continue;
        }
        if last.len() == n {
            last.pop_front();
        }
        last.push_back(item);
    }
    last.into_iter()
}

/// Everything except the last `n` items.
///
/// A leading cursor runs `n` items ahead of the cursor that produces the
/// output, so an item is only yielded once `n` more are known to exist. The
/// shared buffer never holds more than `n + 1` items.
pub fn droplast<I>(n: usize, iterable: I) -> DropLast<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let (lag, lead) = fork(iterable);
    DropLast {
        lag,
        lead: lead.skip(n),
    }
}

/// Iterator returned by [`droplast`].
#[derive(Debug)]
pub struct DropLast<I: Iterator> {
    lag: Fork<I>,
    lead: Skip<Fork<I>>,
}

impl<I> Iterator for DropLast<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.lead.next()?;
        self.lag.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lead.size_hint()
    }
}

impl<I> FusedIterator for DropLast<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

/// Split a sequence after `at` items.
///
/// Both halves are cursors over the same source, so either can be consumed
/// first.
pub fn splitat<I>(at: usize, iterable: I) -> (Take<Fork<I::IntoIter>>, Skip<Fork<I::IntoIter>>)
where
    I: IntoIterator,
    I::Item: Clone,
{
    let (head, rest) = fork(iterable);
    (head.take(at), rest.skip(at))
}

/// Split a sequence at the first item that fails `predicate`.
///
/// The first half is the longest prefix for which `predicate` holds; the
/// second starts at the first failing item. The predicate is called by both
/// halves, so it is cloned.
pub fn splitby<I, P>(
    predicate: P,
    iterable: I,
) -> (
    TakeWhile<Fork<I::IntoIter>, P>,
    SkipWhile<Fork<I::IntoIter>, P>,
)
where
    I: IntoIterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool + Clone,
{
    let (head, rest) = fork(iterable);
    (head.take_while(predicate.clone()), rest.skip_while(predicate))
}

/// Overlapping pairs of consecutive items: `(s0, s1), (s1, s2), ...`
///
/// Empty and single item sequences produce no pairs.
pub fn pairwise<I>(iterable: I) -> Pairwise<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let (current, ahead) = fork(iterable);
    Pairwise {
        current,
        ahead,
        primed: false,
    }
}

/// Iterator returned by [`pairwise`].
#[derive(Debug)]
pub struct Pairwise<I: Iterator> {
    current: Fork<I>,
    ahead: Fork<I>,
    // whether `ahead` has been moved one step past `current`
    primed: bool,
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.primed {
            self.primed = true;
            self.ahead.next()?;
        }
        let current = self.current.next()?;
        let ahead = self.ahead.next()?;
        Some((current, ahead))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.ahead.size_hint();
        if self.primed {
            (lower, upper)
        } else {
            (lower.saturating_sub(1), upper.map(|upper| upper.saturating_sub(1)))
        }
    }
}

impl<I> FusedIterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
