//! Zipping helpers

use std::iter::Fuse;

/// Pair up the items of `a` and `b`, stopping at the shorter input
pub fn zip<A, B>(a: A, b: B) -> Vec<(A::Item, B::Item)>
where
    A: IntoIterator,
    B: IntoIterator,
{
    a.into_iter().zip(b).collect()
}

/// Iterate several iterables in lockstep
///
/// Each row holds one item from every input, in input order. Iteration stops
/// as soon as any input runs out; with no inputs there are no rows.
pub fn zip_all<I, T>(iterables: I) -> ZipAll<T::IntoIter>
where
    I: IntoIterator<Item = T>,
    T: IntoIterator,
{
    ZipAll {
        iters: iterables.into_iter().map(IntoIterator::into_iter).collect(),
    }
}

/// Pair up the items of `a` and `b` until both are exhausted
pub fn zip_longest<A, B>(a: A, b: B) -> ZipLongest<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    ZipLongest {
        a: a.into_iter().fuse(),
        b: b.into_iter().fuse(),
    }
}

/// Iterator returned by [`zip_all`]
#[derive(Debug, Clone)]
pub struct ZipAll<I> {
    iters: Vec<I>,
}

impl<I: Iterator> Iterator for ZipAll<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.iters.is_empty() {
            return None;
        }
        self.iters.iter_mut().map(Iterator::next).collect()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.iters.is_empty() {
            return (0, Some(0));
        }
        self.iters
            .iter()
            .map(Iterator::size_hint)
            .fold((usize::MAX, None), |(lo, hi), (l, h)| {
                let hi = match (hi, h) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
                (lo.min(l), hi)
            })
    }
}

/// Iterator returned by [`zip_longest`]
#[derive(Debug, Clone)]
pub struct ZipLongest<A: Iterator, B: Iterator> {
    a: Fuse<A>,
    b: Fuse<B>,
}

impl<A: Iterator, B: Iterator> Iterator for ZipLongest<A, B> {
    type Item = (Option<A::Item>, Option<B::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.a.next(), self.b.next()) {
            (None, None) => None,
            pair => Some(pair),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lo, a_hi) = self.a.size_hint();
        let (b_lo, b_hi) = self.b.size_hint();
        let hi = match (a_hi, b_hi) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => None,
        };
        (a_lo.max(b_lo), hi)
    }
}
