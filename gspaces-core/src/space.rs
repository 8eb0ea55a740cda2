//! The `Space` trait: a finite, immutable, randomly-indexable sequence whose
//! elements are computed on demand.

use crate::error::Result;
use crate::real::Real;
use std::iter::FusedIterator;

/// Lazily evaluated sequence of evenly spaced values
pub trait Space {
    type Value: Real;

    /// Number of elements
    fn len(&self) -> usize;

    /// Element at `index`, or `IndexOutOfRange` when `index >= len()`
    fn get(&self, index: usize) -> Result<Self::Value>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn first(&self) -> Option<Self::Value> {
        self.get(0).ok()
    }

    fn last(&self) -> Option<Self::Value> {
        self.len().checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Iterate over all elements in index order
    fn iter(&self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }
}

/// A [`Space`] with a constant spacing between consecutive elements,
/// accessible as `(value, step)` pairs
pub trait StepSpace: Space {
    /// Spacing between consecutive elements; `None` when it is undefined
    fn step(&self) -> Option<Self::Value>;

    /// Element at `index` paired with the sequence step
    fn get_with_step(&self, index: usize) -> Result<(Self::Value, Option<Self::Value>)> {
        Ok((self.get(index)?, self.step()))
    }

    /// Iterate over `(value, step)` pairs in index order
    fn iter_with_step(&self) -> StepIter<'_, Self>
    where
        Self: Sized,
    {
        StepIter {
            inner: Iter::new(self),
        }
    }
}

impl<S: Space + ?Sized> Space for &S {
    type Value = S::Value;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Result<Self::Value> {
        (**self).get(index)
    }
}

impl<S: StepSpace + ?Sized> StepSpace for &S {
    fn step(&self) -> Option<Self::Value> {
        (**self).step()
    }
}

/// Borrowing iterator over a [`Space`].
///
/// Indices handed to `get` are always in `[0, len)`. In-range access only
/// fails if the index is not representable in `S::Value`, which cannot
/// happen for `f32`/`f64`; the `ExactSizeIterator` count relies on that.
#[derive(Debug)]
pub struct Iter<'a, S> {
    space: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: Space> Iter<'a, S> {
    pub fn new(space: &'a S) -> Self {
        Self {
            space,
            front: 0,
            back: space.len(),
        }
    }
}

impl<S> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            space: self.space,
            front: self.front,
            back: self.back,
        }
    }
}

fn in_range<S: Space>(space: &S, index: usize) -> Option<S::Value> {
    let value = space.get(index);
    debug_assert!(value.is_ok(), "in-range index {} failed: {:?}", index, value);
    value.ok()
}

impl<S: Space> Iterator for Iter<'_, S> {
    type Item = S::Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        in_range(self.space, i)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<S: Space> DoubleEndedIterator for Iter<'_, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        in_range(self.space, self.back)
    }
}

impl<S: Space> ExactSizeIterator for Iter<'_, S> {}

impl<S: Space> FusedIterator for Iter<'_, S> {}

/// Iterator over `(value, step)` pairs of a [`StepSpace`]
#[derive(Debug)]
pub struct StepIter<'a, S> {
    inner: Iter<'a, S>,
}

impl<S> Clone for StepIter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: StepSpace> Iterator for StepIter<'_, S> {
    type Item = (S::Value, Option<S::Value>);

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.inner.space.step();
        self.inner.next().map(|v| (v, step))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S: StepSpace> DoubleEndedIterator for StepIter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let step = self.inner.space.step();
        self.inner.next_back().map(|v| (v, step))
    }
}

impl<S: StepSpace> ExactSizeIterator for StepIter<'_, S> {}

impl<S: StepSpace> FusedIterator for StepIter<'_, S> {}
