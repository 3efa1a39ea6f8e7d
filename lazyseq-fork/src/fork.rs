use std::cell::RefCell;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use crate::shared::Shared;

/// A cursor over a source shared with other cursors.
///
/// Created by [`fork`] and [`fork_n`], or by cloning an existing cursor,
/// which yields a new cursor at the same position.
///
/// Cursors are single-threaded; they share their buffer through an `Rc`.
pub struct Fork<I: Iterator> {
    shared: Rc<RefCell<Shared<I>>>,
    id: usize,
}

impl<I: Iterator> Fork<I> {
    fn new(shared: Rc<RefCell<Shared<I>>>, position: usize) -> Self {
        let id = shared.borrow_mut().register(position);
        Self { shared, id }
    }

    /// The number of items currently held in the shared buffer.
    ///
    /// This is the distance between the leading and the trailing cursor.
    pub fn buffered(&self) -> usize {
        self.shared.borrow().buffered()
    }
}

/// Fork an iterator into two independent cursors.
pub fn fork<I>(iterable: I) -> (Fork<I::IntoIter>, Fork<I::IntoIter>)
where
    I: IntoIterator,
{
    let shared = Rc::new(RefCell::new(Shared::new(iterable.into_iter())));
    let first = Fork::new(shared.clone(), 0);
    let second = Fork::new(shared, 0);
    (first, second)
}

/// Fork an iterator into `n` independent cursors.
///
/// With `n == 0` the source is dropped without being pulled.
pub fn fork_n<I>(iterable: I, n: usize) -> Vec<Fork<I::IntoIter>>
where
    I: IntoIterator,
{
    let shared = Rc::new(RefCell::new(Shared::new(iterable.into_iter())));
    (0..n).map(|_| Fork::new(shared.clone(), 0)).collect()
}

impl<I> Iterator for Fork<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.shared.borrow_mut().next_for(self.id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.shared.borrow().size_hint(self.id)
    }
}

impl<I> FusedIterator for Fork<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I: Iterator> Clone for Fork<I> {
    fn clone(&self) -> Self {
        let position = self.shared.borrow().position(self.id).unwrap_or(0);
        Self::new(self.shared.clone(), position)
    }
}

impl<I: Iterator> Drop for Fork<I> {
    fn drop(&mut self) {
        self.shared.borrow_mut().release(self.id);
    }
}

impl<I: Iterator> fmt::Debug for Fork<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("Fork")
            .field("id", &self.id)
            .field("position", &shared.position(self.id))
            .field("buffered", &shared.buffered())
            .finish()
    }
}
