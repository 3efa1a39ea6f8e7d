use std::iter::{Flatten, Fuse, FusedIterator};
use std::vec;

use itertools::{Combinations, Itertools};

use crate::error;

/// Collect items into groups of `n`, padding the last group with `fill`.
///
/// ```
/// use lazyseq::grouper;
///
/// let groups: Vec<String> = grouper(3, "ABCDEFG".chars(), 'x')
///     .unwrap()
///     .map(|group| group.into_iter().collect())
///     .collect();
/// assert_eq!(groups, vec!["ABC", "DEF", "Gxx"]);
/// ```
///
/// Fails with [`error::Error::ZeroGroupSize`] when `n` is zero.
pub fn grouper<I>(n: usize, iterable: I, fill: I::Item) -> error::Result<Grouper<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    if n == 0 {
        return Err(error::Error::ZeroGroupSize);
    }
    Ok(Grouper {
        iter: iterable.into_iter().fuse(),
        n,
        fill,
    })
}

/// Iterator returned by [`grouper`].
#[derive(Debug, Clone)]
pub struct Grouper<I: Iterator> {
    iter: Fuse<I>,
    n: usize,
    fill: I::Item,
}

impl<I> Iterator for Grouper<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.iter.next()?;
        let mut group = Vec::with_capacity(self.n);
        group.push(first);
        group.extend(self.iter.by_ref().take(self.n - 1));
        if group.len() < self.n {
            log::trace!("padding final group of {} to {}", group.len(), self.n);
            group.resize(self.n, self.fill.clone());
        }
        Some(group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(self.n),
            upper.map(|upper| upper.div_ceil(self.n)),
        )
    }
}

impl<I> FusedIterator for Grouper<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

/// Take one item from each sequence in turn, dropping sequences as they run
/// out.
///
/// ```
/// use lazyseq::roundrobin;
///
/// let s: String = roundrobin(vec!["ABC".chars(), "D".chars(), "EF".chars()]).collect();
/// assert_eq!(s, "ADEBFC");
/// ```
pub fn roundrobin<S, I>(iterables: S) -> RoundRobin<I::IntoIter>
where
    S: IntoIterator<Item = I>,
    I: IntoIterator,
{
    RoundRobin {
        iters: iterables.into_iter().map(IntoIterator::into_iter).collect(),
        current: 0,
    }
}

/// Iterator returned by [`roundrobin`].
#[derive(Debug, Clone)]
pub struct RoundRobin<I> {
    // still active sequences, in argument order
    iters: Vec<I>,
    current: usize,
}

impl<I: Iterator> Iterator for RoundRobin<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while !self.iters.is_empty() {
            if self.current >= self.iters.len() {
                self.current = 0;
            }
            match self.iters[self.current].next() {
                Some(item) => {
                    self.current += 1;
                    return Some(item);
                }
                None => {
                    // the next sequence slides into this slot
                    self.iters.remove(self.current);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iters
            .iter()
            .map(Iterator::size_hint)
            .fold((0, Some(0)), |(lower, upper), (l, u)| {
                (
                    lower.saturating_add(l),
                    upper.zip(u).and_then(|(a, b)| a.checked_add(b)),
                )
            })
    }
}

impl<I: Iterator> FusedIterator for RoundRobin<I> {}

/// Every subset of a sequence, smallest first.
///
/// The sequence is collected up front. Subsets of one size come out in
/// combination order before any subset of the next size, starting with the
/// empty subset and ending with the whole sequence.
pub fn powerset<I>(iterable: I) -> Powerset<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Powerset {
        items: iterable.into_iter().collect(),
        size: 0,
        combinations: None,
    }
}

/// Iterator returned by [`powerset`].
#[derive(Debug)]
pub struct Powerset<T> {
    items: Vec<T>,
    // next subset size to enumerate
    size: usize,
    combinations: Option<Combinations<vec::IntoIter<T>>>,
}

impl<T: Clone> Iterator for Powerset<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        loop {
            if let Some(subset) = self.combinations.as_mut().and_then(Iterator::next) {
                return Some(subset);
            }
            if self.size > self.items.len() {
                self.combinations = None;
                return None;
            }
            let size = self.size;
            self.size += 1;
            if size == 0 {
                return Some(Vec::new());
            }
            self.combinations = Some(self.items.clone().into_iter().combinations(size));
        }
    }
}

impl<T: Clone> FusedIterator for Powerset<T> {}

/// Concatenate one level of nested sequences.
///
/// Inner sequences are yielded as they are; nothing deeper is unpacked.
pub fn flatten<I>(iterable: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    iterable.into_iter().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouper_size_hint_rounds_up() {
        let groups = grouper(3, 0..7, 0).unwrap();
        assert_eq!(groups.size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_powerset_stays_exhausted() {
        let mut subsets = powerset(vec!['a']);
        assert_eq!(subsets.next(), Some(vec![]));
        assert_eq!(subsets.next(), Some(vec!['a']));
        assert_eq!(subsets.next(), None);
        assert_eq!(subsets.next(), None);
    }

    #[test]
    fn test_roundrobin_skips_exhausted_in_order() {
        let merged: Vec<_> = roundrobin(vec![vec![1, 4], vec![2], vec![3, 5, 6]]).collect();
        assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
    }
}
