use std::iter::{Filter, FusedIterator};

use lazyseq_fork::{fork, Fork};

/// The items for which `predicate` is false.
pub fn filterfalse<I, P>(predicate: P, iterable: I) -> FilterFalse<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    FilterFalse {
        iter: iterable.into_iter(),
        predicate,
    }
}

/// Iterator returned by [`filterfalse`].
#[derive(Debug, Clone)]
pub struct FilterFalse<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Iterator for FilterFalse<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &mut self.predicate;
        self.iter.find(|item| !predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

impl<I, P> FusedIterator for FilterFalse<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Split a sequence into the items failing `predicate` and the items
/// passing it.
///
/// Both halves are lazy cursors over the same source; each source item is
/// tested by both and yielded by exactly one. Draining one half before
/// touching the other buffers the whole source.
///
/// ```
/// use lazyseq::partition;
///
/// let (even, odd) = partition(|n: &u32| n % 2 == 1, 0..10);
/// assert_eq!(even.collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
/// assert_eq!(odd.collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
/// ```
pub fn partition<I, P>(
    predicate: P,
    iterable: I,
) -> (
    FilterFalse<Fork<I::IntoIter>, P>,
    Filter<Fork<I::IntoIter>, P>,
)
where
    I: IntoIterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool + Clone,
{
    let (failing, passing) = fork(iterable);
    (
        filterfalse(predicate.clone(), failing),
        passing.filter(predicate),
    )
}
