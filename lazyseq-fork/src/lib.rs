//! Fork one iterator into several independent cursors.
//!
//! Each cursor sees every item of the source, in order, while the source
//! itself is only pulled once. Items pulled by a leading cursor are kept in a
//! shared buffer until every trailing cursor has passed them.
//!
//! ```
//! use lazyseq_fork::fork;
//!
//! let (a, b) = fork(1..4);
//! assert_eq!(b.collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(a.collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```
mod fork;
mod shared;

pub use fork::{fork, fork_n, Fork};
