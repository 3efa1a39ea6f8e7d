//! Lazy sequence recipes.
//!
//! Small combinators over iterators: windowing and slicing, consumption
//! control, generation and interleaving, and partitioning. Everything is
//! lazy unless documented otherwise, and every combinator that needs to read
//! one source from two places does so through a [`Fork`] rather than
//! pulling the source twice.
mod combine;
mod consume;
pub mod error;
mod except;
mod ext;
mod generate;
mod partition;
mod slicing;
mod zipwith;

pub use combine::{flatten, grouper, powerset, roundrobin, Grouper, Powerset, RoundRobin};
pub use consume::{consume, head, nth, nth_or, tail};
pub use except::{iter_except, iter_except_first, IterExcept};
pub use ext::SeqExt;
pub use generate::{ncycles, padnone, repeatfunc, NCycles, PadNone, RepeatFunc};
pub use lazyseq_fork::{fork, fork_n, Fork};
pub use partition::{filterfalse, partition, FilterFalse};
pub use slicing::{drop, droplast, pairwise, splitat, splitby, take, takelast, DropLast, Pairwise};
pub use zipwith::{zipwith, Spread, ZipAll, ZipWith, ZipWithIter};
