use std::collections::vec_deque;
use std::iter::{Skip, SkipWhile, Take, TakeWhile};

use lazyseq_fork::Fork;

use crate::combine::{self, Grouper};
use crate::error;
use crate::generate::{self, NCycles, PadNone};
use crate::slicing::{self, DropLast, Pairwise};

/// Method forms of the single-sequence recipes.
///
/// Names stay clear of the methods `Iterator` already has, so importing
/// this trait never makes a call ambiguous.
///
/// ```
/// use lazyseq::SeqExt;
///
/// let pairs: Vec<_> = "abc".chars().pairwise().collect();
/// assert_eq!(pairs, vec![('a', 'b'), ('b', 'c')]);
/// ```
pub trait SeqExt: Iterator + Sized {
    fn take_last(self, n: usize) -> vec_deque::IntoIter<Self::Item> {
        slicing::takelast(n, self)
    }

    fn drop_last(self, n: usize) -> DropLast<Self>
    where
        Self::Item: Clone,
    {
        slicing::droplast(n, self)
    }

    fn split_at(self, at: usize) -> (Take<Fork<Self>>, Skip<Fork<Self>>)
    where
        Self::Item: Clone,
    {
        slicing::splitat(at, self)
    }

    fn split_by<P>(self, predicate: P) -> (TakeWhile<Fork<Self>, P>, SkipWhile<Fork<Self>, P>)
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool + Clone,
    {
        slicing::splitby(predicate, self)
    }

    fn pairwise(self) -> Pairwise<Self>
    where
        Self::Item: Clone,
    {
        slicing::pairwise(self)
    }

    fn pad_none(self) -> PadNone<Self> {
        generate::padnone(self)
    }

    fn ncycles(self, n: usize) -> NCycles<Self::Item>
    where
        Self::Item: Clone,
    {
        generate::ncycles(self, n)
    }

    fn grouper(self, n: usize, fill: Self::Item) -> error::Result<Grouper<Self>>
    where
        Self::Item: Clone,
    {
        combine::grouper(n, self, fill)
    }

    fn fork(self) -> (Fork<Self>, Fork<Self>) {
        lazyseq_fork::fork(self)
    }
}

impl<I: Iterator> SeqExt for I {}
