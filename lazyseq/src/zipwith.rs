use itertools::{multizip, Zip};

/// Call a function with the elements of a tuple as separate arguments.
///
/// Implemented for every `FnMut` taking up to six arguments, so that
/// `|a, b| a + b` can be driven by a stream of `(a, b)` tuples.
pub trait Spread<Args> {
    type Output;

    fn spread(&mut self, args: Args) -> Self::Output;
}

macro_rules! impl_spread {
    ($($ty:ident $arg:ident),*) => {
        impl<F, R, $($ty),*> Spread<($($ty,)*)> for F
        where
            F: FnMut($($ty),*) -> R,
        {
            type Output = R;

            fn spread(&mut self, ($($arg,)*): ($($ty,)*)) -> R {
                (*self)($($arg),*)
            }
        }
    };
}

impl_spread!();
impl_spread!(A a);
impl_spread!(A a, B b);
impl_spread!(A a, B b, C c);
impl_spread!(A a, B b, C c, D d);
impl_spread!(A a, B b, C c, D d, E e);
impl_spread!(A a, B b, C c, D d, E e, G g);

/// Lift `f` into a function over sequences.
///
/// The returned [`ZipWith`] zips its sequences elementwise and applies `f`
/// to each group of aligned items, stopping at the shortest sequence.
///
/// ```
/// use lazyseq::zipwith;
///
/// let add = zipwith(|a: i32, b: i32| a + b);
/// let sums: Vec<_> = add.zip((vec![1, 2, 3], vec![10, 20])).collect();
/// assert_eq!(sums, vec![11, 22]);
/// ```
pub fn zipwith<F>(f: F) -> ZipWith<F> {
    ZipWith { f }
}

/// A function lifted over sequences; see [`zipwith`].
#[derive(Debug, Clone)]
pub struct ZipWith<F> {
    f: F,
}

impl<F> ZipWith<F> {
    /// Apply to a tuple of one to six sequences; `f` takes one argument per
    /// sequence.
    pub fn zip<T, U>(self, sources: U) -> ZipWithIter<Zip<T>, F>
    where
        Zip<T>: From<U> + Iterator,
        F: Spread<<Zip<T> as Iterator>::Item>,
    {
        ZipWithIter {
            iter: multizip(sources),
            f: self.f,
        }
    }

    /// Apply to any number of sequences of the same type; `f` receives the
    /// aligned items as a `Vec`.
    ///
    /// With no sequences at all the result is empty.
    pub fn zip_all<S, I, R>(self, sources: S) -> ZipAll<I::IntoIter, F>
    where
        S: IntoIterator<Item = I>,
        I: IntoIterator,
        F: FnMut(Vec<I::Item>) -> R,
    {
        ZipAll {
            iters: sources.into_iter().map(IntoIterator::into_iter).collect(),
            f: self.f,
        }
    }
}

/// Iterator returned by [`ZipWith::zip`].
#[derive(Debug, Clone)]
pub struct ZipWithIter<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Iterator for ZipWithIter<I, F>
where
    I: Iterator,
    F: Spread<I::Item>,
{
    type Item = F::Output;

    fn next(&mut self) -> Option<Self::Item> {
        let args = self.iter.next()?;
        Some(self.f.spread(args))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Iterator returned by [`ZipWith::zip_all`].
#[derive(Debug, Clone)]
pub struct ZipAll<I, F> {
    iters: Vec<I>,
    f: F,
}

impl<I, F, R> Iterator for ZipAll<I, F>
where
    I: Iterator,
    F: FnMut(Vec<I::Item>) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if self.iters.is_empty() {
            return None;
        }
        // sequences are pulled left to right, stopping at the first that
        // is exhausted
        match self.iters.iter_mut().map(Iterator::next).collect::<Option<Vec<_>>>() {
            Some(items) => Some((self.f)(items)),
            None => {
                self.iters.clear();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iters
            .iter()
            .map(Iterator::size_hint)
            .reduce(|(lower_a, upper_a), (lower_b, upper_b)| {
                let upper = match (upper_a, upper_b) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
                (lower_a.min(lower_b), upper)
            })
            .unwrap_or((0, Some(0)))
    }
}
