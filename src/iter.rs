//! Contains all iterator and cursor types.
//!
//! This is in its own module to not pollute the top-level namespace.

use std::{
    fmt,
    iter::FusedIterator,
    slice,
};

use allocator_api2::{
    alloc::{Allocator, Global},
    vec,
};

use crate::UnstableVec;


/// Iterator over immutable references to the elements of an `UnstableVec`,
/// in storage order.
///
/// Use the method [`UnstableVec::iter`] or the `IntoIterator` impl of
/// `&UnstableVec` to obtain an iterator of this kind.
#[derive(Clone, Debug)]
pub struct Iter<'a, T>(slice::Iter<'a, T>);

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slice: &'a [T]) -> Self {
        Self(slice.iter())
    }

    /// Returns the elements not yielded yet as slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.0.as_slice()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }

    fn count(self) -> usize {
        self.len()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.0.nth(n)
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}


/// Iterator over mutable references to the elements of an `UnstableVec`, in
/// storage order.
///
/// Use the method [`UnstableVec::iter_mut`] or the `IntoIterator` impl of
/// `&mut UnstableVec` to obtain an iterator of this kind.
#[derive(Debug)]
pub struct IterMut<'a, T>(slice::IterMut<'a, T>);

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slice: &'a mut [T]) -> Self {
        Self(slice.iter_mut())
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }

    fn count(self) -> usize {
        self.len()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.0.nth(n)
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}


/// Iterator over owned elements of an `UnstableVec`.
///
/// Use the method `UnstableVec::into_iter` to obtain an iterator of this
/// kind. Elements not yielded are dropped together with the iterator.
pub struct IntoIter<T, A: Allocator = Global>(vec::IntoIter<T, A>);

impl<T, A: Allocator> IntoIter<T, A> {
    pub(crate) fn new(buf: vec::Vec<T, A>) -> Self {
        Self(buf.into_iter())
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.0.len())
            .finish()
    }
}


/// Iterator which removes and yields all elements matching a predicate.
///
/// Use the method [`UnstableVec::swap_extract_if`] to obtain an iterator of
/// this kind.
///
/// Each call to `next` advances an index cursor until it finds a matching
/// element, which is then removed with `swap_erase`. The cursor stays at that
/// index for the next call, since the former last element now sits there.
/// Every element is tested exactly once.
///
/// The iterator is lazy: if it is dropped before being exhausted, all
/// elements that were not visited yet stay in the vector. After each
/// yielded element, the vector is in a valid state.
pub struct SwapExtractIf<'a, T, A: Allocator, P> {
    uv: &'a mut UnstableVec<T, A>,
    index: usize,
    pred: P,
}

impl<'a, T, A: Allocator, P> SwapExtractIf<'a, T, A, P>
where
    P: FnMut(&mut T) -> bool,
{
    pub(crate) fn new(uv: &'a mut UnstableVec<T, A>, pred: P) -> Self {
        Self {
            uv,
            index: 0,
            pred,
        }
    }
}

impl<T, A: Allocator, P> Iterator for SwapExtractIf<'_, T, A, P>
where
    P: FnMut(&mut T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.uv.len() {
            let elem = unsafe { self.uv.buf.get_unchecked_mut(self.index) };
            if (self.pred)(elem) {
                // We know that `self.index` is in bounds.
                return Some(unsafe { self.uv.swap_erase_unchecked(self.index) });
            }

            self.index += 1;
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.uv.len() - self.index))
    }
}

impl<T, A: Allocator, P> FusedIterator for SwapExtractIf<'_, T, A, P>
where
    P: FnMut(&mut T) -> bool,
{}

impl<T, A: Allocator, P> fmt::Debug for SwapExtractIf<'_, T, A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwapExtractIf")
            .field("index", &self.index)
            .field("len", &self.uv.len())
            .finish()
    }
}


/// A cursor over an `UnstableVec` which can remove the element it points to.
///
/// A cursor is a position in the vector: either the index of an element or
/// the *end position* `len()`, which points to no element. It's the
/// equivalent of the `it = erase(it)` idiom known from other languages:
/// [`swap_erase`][CursorMut::swap_erase] removes the current element and
/// leaves the cursor where it is. That position now holds the element that
/// was last before, or is the end position if the removed element was the
/// last one.
///
/// Use [`UnstableVec::cursor_front_mut`] or [`UnstableVec::cursor_at_mut`]
/// to obtain a cursor.
///
/// ```
/// use unstable_vec::UnstableVec;
///
/// let mut uv = UnstableVec::from(&[3, 8, 5, 6][..]);
/// let mut cursor = uv.cursor_front_mut();
/// while let Some(x) = cursor.current().copied() {
///     if x > 4 {
///         cursor.swap_erase();
///     } else {
///         cursor.move_next();
///     }
/// }
/// assert_eq!(uv, [3]);
/// ```
pub struct CursorMut<'a, T, A: Allocator = Global> {
    uv: &'a mut UnstableVec<T, A>,
    index: usize,
}

impl<'a, T, A: Allocator> CursorMut<'a, T, A> {
    pub(crate) fn new(uv: &'a mut UnstableVec<T, A>, index: usize) -> Self {
        debug_assert!(index <= uv.len());

        Self { uv, index }
    }

    /// Returns the index the cursor points to. Equals `len()` if the cursor
    /// is at the end position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the cursor points to no element.
    pub fn is_end(&self) -> bool {
        self.index == self.uv.len()
    }

    /// Returns a reference to the element under the cursor, or `None` at the
    /// end position.
    pub fn current(&self) -> Option<&T> {
        self.uv.buf.get(self.index)
    }

    /// Returns a mutable reference to the element under the cursor, or
    /// `None` at the end position.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.uv.buf.get_mut(self.index)
    }

    /// Moves the cursor to the next position. Returns `false` (and doesn't
    /// move) if the cursor is already at the end position.
    pub fn move_next(&mut self) -> bool {
        if self.is_end() {
            false
        } else {
            self.index += 1;
            true
        }
    }

    /// Moves the cursor to the previous position. Returns `false` (and
    /// doesn't move) if the cursor is already at index 0.
    pub fn move_prev(&mut self) -> bool {
        if self.index == 0 {
            false
        } else {
            self.index -= 1;
            true
        }
    }

    /// Removes the element under the cursor and returns it, or returns
    /// `None` if the cursor is at the end position.
    ///
    /// The cursor keeps its index, which now refers to the relocated former
    /// last element (or is the end position).
    pub fn swap_erase(&mut self) -> Option<T> {
        if self.is_end() {
            None
        } else {
            // We just checked that `self.index < len`.
            Some(unsafe { self.uv.swap_erase_unchecked(self.index) })
        }
    }

    /// Returns a read-only view of the whole vector.
    pub fn as_vec(&self) -> &UnstableVec<T, A> {
        self.uv
    }
}

impl<T, A: Allocator> fmt::Debug for CursorMut<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("len", &self.uv.len())
            .finish()
    }
}
