use std::iter::FusedIterator;

/// Call a fallible producer until it reports it has nothing more.
///
/// `func` is called repeatedly and every `Ok` value is yielded. An error
/// for which `is_end` returns true ends the sequence quietly. Any other
/// error is yielded once as `Err` and ends the sequence as well.
///
/// ```
/// use lazyseq::iter_except;
///
/// let mut stack = vec![1, 2, 3];
/// let popped: Vec<_> = iter_except(|| stack.pop().ok_or("empty"), |e| *e == "empty")
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(popped, vec![3, 2, 1]);
/// ```
pub fn iter_except<F, P, T, E>(func: F, is_end: P) -> IterExcept<F, P, fn() -> Result<T, E>>
where
    F: FnMut() -> Result<T, E>,
    P: FnMut(&E) -> bool,
{
    IterExcept {
        first: None,
        func,
        is_end,
        done: false,
    }
}

/// Like [`iter_except`], but yield the result of `first` before calling
/// `func` at all.
///
/// `first` is subject to the same end-of-sequence check as `func`.
pub fn iter_except_first<G, F, P, T, E>(first: G, func: F, is_end: P) -> IterExcept<F, P, G>
where
    G: FnOnce() -> Result<T, E>,
    F: FnMut() -> Result<T, E>,
    P: FnMut(&E) -> bool,
{
    IterExcept {
        first: Some(first),
        func,
        is_end,
        done: false,
    }
}

/// Iterator returned by [`iter_except`] and [`iter_except_first`].
#[derive(Debug, Clone)]
pub struct IterExcept<F, P, G> {
    first: Option<G>,
    func: F,
    is_end: P,
    done: bool,
}

impl<F, P, G, T, E> Iterator for IterExcept<F, P, G>
where
    G: FnOnce() -> Result<T, E>,
    F: FnMut() -> Result<T, E>,
    P: FnMut(&E) -> bool,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = match self.first.take() {
            Some(first) => first(),
            None => (self.func)(),
        };
        match result {
            Ok(value) => Some(Ok(value)),
            Err(e) if (self.is_end)(&e) => {
                log::trace!("producer signalled end of sequence");
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<F, P, G, T, E> FusedIterator for IterExcept<F, P, G>
where
    G: FnOnce() -> Result<T, E>,
    F: FnMut() -> Result<T, E>,
    P: FnMut(&E) -> bool,
{
}
