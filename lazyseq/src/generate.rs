use std::iter::{Fuse, FusedIterator};

use crate::zipwith::Spread;

/// The items of a sequence wrapped in `Some`, followed by `None` forever.
///
/// Never ends; bound it with `take` or by zipping it with a finite
/// sequence.
pub fn padnone<I>(iterable: I) -> PadNone<I::IntoIter>
where
    I: IntoIterator,
{
    PadNone {
        iter: iterable.into_iter().fuse(),
    }
}

/// Iterator returned by [`padnone`].
#[derive(Debug, Clone)]
pub struct PadNone<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> Iterator for PadNone<I> {
    type Item = Option<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<I: Iterator> FusedIterator for PadNone<I> {}

/// The items of a sequence, repeated `n` times.
///
/// The sequence is collected once, up front.
pub fn ncycles<I>(iterable: I, n: usize) -> NCycles<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let items: Vec<_> = iterable.into_iter().collect();
    let remaining = if items.is_empty() { 0 } else { n };
    NCycles {
        items,
        index: 0,
        remaining,
    }
}

/// Iterator returned by [`ncycles`].
#[derive(Debug, Clone)]
pub struct NCycles<T> {
    items: Vec<T>,
    index: usize,
    // cycles left, including the current one
    remaining: usize,
}

impl<T: Clone> Iterator for NCycles<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.items.get(self.index)?.clone();
        self.index += 1;
        if self.index == self.items.len() {
            self.index = 0;
            self.remaining -= 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self
            .remaining
            .checked_mul(self.items.len())
            .map(|total| total - self.index);
        (left.unwrap_or(usize::MAX), left)
    }
}

impl<T: Clone> FusedIterator for NCycles<T> {}

/// Call `func` repeatedly with `args`, yielding each result.
///
/// `args` is a tuple spread into separate arguments, cloned for every call;
/// use `()` for a function without arguments. With `times` of `None` the
/// sequence is infinite.
///
/// ```
/// use lazyseq::repeatfunc;
///
/// let powers: Vec<_> = repeatfunc(u32::pow, Some(3), (2, 10)).collect();
/// assert_eq!(powers, vec![1024, 1024, 1024]);
/// ```
pub fn repeatfunc<F, A>(func: F, times: Option<usize>, args: A) -> RepeatFunc<F, A>
where
    F: Spread<A>,
    A: Clone,
{
    RepeatFunc {
        func,
        args,
        remaining: times,
    }
}

/// Iterator returned by [`repeatfunc`].
#[derive(Debug, Clone)]
pub struct RepeatFunc<F, A> {
    func: F,
    args: A,
    remaining: Option<usize>,
}

impl<F, A> Iterator for RepeatFunc<F, A>
where
    F: Spread<A>,
    A: Clone,
{
    type Item = F::Output;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.remaining {
            Some(0) => return None,
            Some(remaining) => *remaining -= 1,
            None => {}
        }
        Some(self.func.spread(self.args.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}
