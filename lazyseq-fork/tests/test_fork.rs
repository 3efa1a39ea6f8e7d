use std::cell::Cell;

use lazyseq_fork::{fork, fork_n, Fork};
use static_assertions::assert_not_impl_any;

assert_not_impl_any!(Fork<std::vec::IntoIter<u8>>: Send, Sync);

#[test]
fn test_both_cursors_see_everything() {
    let (a, b) = fork(vec!['a', 'b', 'c']);
    assert_eq!(a.collect::<String>(), "abc");
    assert_eq!(b.collect::<String>(), "abc");
}

#[test]
fn test_interleaved_pulls() {
    let (mut a, mut b) = fork(0..5);
    assert_eq!(a.next(), Some(0));
    assert_eq!(a.next(), Some(1));
    assert_eq!(b.next(), Some(0));
    assert_eq!(a.next(), Some(2));
    assert_eq!(b.next(), Some(1));
    assert_eq!(b.next(), Some(2));
    assert_eq!(b.next(), Some(3));
    assert_eq!(a.next(), Some(3));
    assert_eq!(a.next(), Some(4));
    assert_eq!(a.next(), None);
    assert_eq!(b.next(), Some(4));
    assert_eq!(b.next(), None);
}

#[test]
fn test_source_pulled_once() {
    let pulls = Cell::new(0);
    let source = (0..4).inspect(|_| pulls.set(pulls.get() + 1));
    let forks = fork_n(source, 3);
    for f in forks {
        assert_eq!(f.collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }
    assert_eq!(pulls.get(), 4);
}

#[test]
fn test_buffer_is_distance_between_cursors() {
    let (mut a, b) = fork(0..100);
    for _ in 0..10 {
        a.next();
    }
    assert_eq!(a.buffered(), 10);
    assert_eq!(b.buffered(), 10);
    drop(b);
    assert_eq!(a.buffered(), 0);
}

#[test]
fn test_lockstep_keeps_buffer_small() {
    let (mut a, mut b) = fork(0..1000);
    while let Some(x) = a.next() {
        assert_eq!(b.next(), Some(x));
        assert_eq!(a.buffered(), 0);
    }
}

#[test]
fn test_clone_starts_at_same_position() {
    let (mut a, _b) = fork(0..5);
    a.next();
    a.next();
    let c = a.clone();
    assert_eq!(c.collect::<Vec<_>>(), vec![2, 3, 4]);
    assert_eq!(a.collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn test_fork_n_zero() {
    let forks = fork_n(0..3, 0);
    assert!(forks.is_empty());
}

#[test]
fn test_empty_source() {
    let (mut a, mut b) = fork(Vec::<u8>::new());
    assert_eq!(a.next(), None);
    assert_eq!(b.next(), None);
}

#[test]
fn test_size_hint_counts_buffered() {
    let (mut a, b) = fork(vec![1, 2, 3, 4]);
    a.next();
    assert_eq!(a.size_hint(), (3, Some(3)));
    assert_eq!(b.size_hint(), (4, Some(4)));
}
