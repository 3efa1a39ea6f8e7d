use std::iter::Skip;

/// Advance a sequence `n` steps, or to exhaustion if `n` is `None`.
///
/// Pass `&mut iter` to keep using the rest of the sequence afterwards.
pub fn consume<I>(iterable: I, n: Option<usize>)
where
    I: IntoIterator,
{
    let mut iter = iterable.into_iter();
    match n {
        None => iter.for_each(|_| ()),
        Some(0) => {}
        Some(n) => {
            iter.nth(n - 1);
        }
    }
}

/// The item at position `n` (zero-based), or `None` if the sequence is
/// shorter.
///
/// Everything up to and including position `n` is consumed.
pub fn nth<I>(iterable: I, n: usize) -> Option<I::Item>
where
    I: IntoIterator,
{
    iterable.into_iter().nth(n)
}

/// Like [`nth`], with a `default` for sequences that are too short.
pub fn nth_or<I>(iterable: I, n: usize, default: I::Item) -> I::Item
where
    I: IntoIterator,
{
    nth(iterable, n).unwrap_or(default)
}

/// The first item, if any.
pub fn head<I>(iterable: I) -> Option<I::Item>
where
    I: IntoIterator,
{
    nth(iterable, 0)
}

/// Everything but the first item.
pub fn tail<I>(iterable: I) -> Skip<I::IntoIter>
where
    I: IntoIterator,
{
    crate::slicing::drop(1, iterable)
}
