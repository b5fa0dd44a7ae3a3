//! A `Vec<T>`-like collection which does not preserve the order of its
//! elements and in exchange features O(1) deletion anywhere.
//!
//! This crate provides a thin wrapper around a growable array. You can find
//! nearly all the relevant documentation on
//! [this crate's main type: `UnstableVec`](struct.UnstableVec.html).
//!
//! ---
//!
//! In order to use this crate, you have to include it into your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! unstable-vec = "0.1"
//! ```
//!
//! ... and then you can use it like this:
//!
//! ```
//! use unstable_vec::UnstableVec;
//!
//! let mut uv = UnstableVec::from(&[1, 2, 3, 4, 5][..]);
//!
//! // The last element is moved into the hole, nothing is shifted.
//! assert_eq!(uv.swap_erase(1), 2);
//! assert_eq!(uv, [1, 5, 3, 4]);
//!
//! // Removing by predicate.
//! assert_eq!(uv.swap_erase_if(|&x| x % 2 == 1), 3);
//! assert_eq!(uv, [4]);
//! ```

#![no_std]
#![deny(missing_debug_implementations)]

extern crate no_std_compat as std;

use std::{
    fmt,
    iter::{repeat, repeat_with, FromIterator},
    mem::{self, ManuallyDrop},
    ops::{Index, IndexMut},
    ptr,
};

use allocator_api2::alloc::{Allocator, Global};

pub use allocator_api2::vec::Vec as Buffer;

pub use crate::{
    error::Error,
    iter::{CursorMut, IntoIter, Iter, IterMut, SwapExtractIf},
};

mod error;
pub mod iter;



/// A `Vec<T>`-like collection which gives up the order of its elements to
/// feature O(1) deletion of arbitrary elements.
///
/// # Why?
///
/// The standard `Vec<T>` stores all elements contiguously and in insertion
/// order. Keeping that order is what makes `Vec::remove` expensive: every
/// element after the removed one has to be shifted one slot to the left,
/// which is O(n). In a lot of situations the order doesn't matter at all,
/// though. Object pools, free lists, sets of entities or work items only care
/// about *which* elements are stored, not *where*.
///
/// This type makes that trade explicit. All removal methods (the
/// `swap_erase` family and `pop_any`) are documented to destroy the order
/// and in return run in O(1), regardless of the position of the removed
/// element.
///
///
/// # How?
///
/// Removing the element at index `i` moves the last element into slot `i`
/// and shrinks the length by one. This is usually called "swap and pop":
///
/// ```text
///      0   1   2   3   4                 0   1   2   3
///    ┌───┬───┬───┬───┬───┐             ┌───┬───┬───┬───┐
///    │ a │ b │ c │ d │ e │  erase 1 ⇒  │ a │ e │ c │ d │
///    └───┴───┴───┴───┴───┘             └───┴───┴───┴───┘
/// ```
///
/// Thus, after removing index `i`, all elements except the one previously at
/// the last position keep their index. That last element can now be found
/// at index `i` (unless `i` was the last index). No removal method ever
/// reallocates or changes the capacity.
///
/// Everything else (construction, element access, iteration, capacity
/// management) is forwarded unchanged to the underlying [`Buffer`], which is
/// `allocator_api2`'s `Vec<T, A>`. This also means that you can use custom
/// allocators on stable Rust.
///
///
/// # Note
///
/// This type's interface is very similar to the `Vec<T>` interface from the
/// Rust standard library. When in doubt about what a method is doing, please
/// consult [the official `Vec<T>` documentation][vec-doc] first.
///
/// `PartialEq` compares the elements in storage order, exactly like `Vec`.
/// If you want to know whether two collections contain the same elements in
/// any order, use [`same_elements`][UnstableVec::same_elements].
///
/// [vec-doc]: https://doc.rust-lang.org/stable/std/vec/struct.Vec.html
pub struct UnstableVec<T, A: Allocator = Global> {
    /// Storing the actual data. All elements in `0..buf.len()` are alive.
    buf: Buffer<T, A>,
}

impl<T> UnstableVec<T> {
    /// Constructs a new, empty `UnstableVec<T>`.
    ///
    /// The vector will not allocate until elements are pushed onto it.
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// Constructs a new, empty `UnstableVec<T>` with the specified capacity.
    ///
    /// The vector will be able to hold at least `capacity` elements without
    /// reallocating. If `capacity` is 0, the vector will not allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }

    /// Creates a vector containing `count` clones of `value`.
    pub fn from_elem(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        Self::from_elem_in(value, count, Global)
    }

    /// Creates a vector containing `count` default values.
    pub fn from_default(count: usize) -> Self
    where
        T: Default,
    {
        Self::from_default_in(count, Global)
    }

    /// Takes over the memory of a standard `Vec<T>`. No element is copied or
    /// moved and the capacity stays the same.
    pub fn from_vec(vec: std::vec::Vec<T>) -> Self {
        let mut vec = ManuallyDrop::new(vec);
        let (ptr, len, cap) = (vec.as_mut_ptr(), vec.len(), vec.capacity());

        // `allocator_api2::alloc::Global` forwards to the global allocator,
        // which is the one that allocated this memory.
        let buf = unsafe { Buffer::from_raw_parts(ptr, len, cap) };
        Self { buf }
    }

    /// Converts this collection into a standard `Vec<T>` without copying or
    /// moving any elements.
    pub fn into_vec(self) -> std::vec::Vec<T> {
        let mut buf = ManuallyDrop::new(self.buf);
        let (ptr, len, cap) = (buf.as_mut_ptr(), buf.len(), buf.capacity());

        // See `from_vec`.
        unsafe { std::vec::Vec::from_raw_parts(ptr, len, cap) }
    }
}

impl<T, A: Allocator> UnstableVec<T, A> {
    /// Constructs a new, empty vector which will allocate from `alloc`.
    pub fn new_in(alloc: A) -> Self {
        Self {
            buf: Buffer::new_in(alloc),
        }
    }

    /// Constructs a new, empty vector with the specified capacity which will
    /// allocate from `alloc`.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        Self {
            buf: Buffer::with_capacity_in(capacity, alloc),
        }
    }

    /// Creates a vector containing `count` clones of `value`, allocated from
    /// `alloc`.
    pub fn from_elem_in(value: T, count: usize, alloc: A) -> Self
    where
        T: Clone,
    {
        let mut buf = Buffer::with_capacity_in(count, alloc);
        buf.extend(repeat(value).take(count));
        Self { buf }
    }

    /// Creates a vector containing `count` default values, allocated from
    /// `alloc`.
    pub fn from_default_in(count: usize, alloc: A) -> Self
    where
        T: Default,
    {
        let mut buf = Buffer::with_capacity_in(count, alloc);
        buf.extend(repeat_with(T::default).take(count));
        Self { buf }
    }

    /// Creates a vector from all items of `iter`, allocated from `alloc`.
    pub fn from_iter_in<I>(iter: I, alloc: A) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut out = Self::new_in(alloc);
        out.extend(iter);
        out
    }

    /// Wraps the given buffer. The elements keep their current positions.
    pub fn from_buffer(buf: Buffer<T, A>) -> Self {
        Self { buf }
    }

    /// Returns a read-only view of the underlying buffer, for interop with
    /// code that expects the plain growable array.
    pub fn as_buffer(&self) -> &Buffer<T, A> {
        &self.buf
    }

    /// Unwraps the underlying buffer.
    pub fn into_buffer(self) -> Buffer<T, A> {
        self.buf
    }

    /// Returns a reference to the allocator this vector allocates from.
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Replaces the contents with `count` clones of `value`. Existing memory
    /// is reused where possible.
    pub fn assign(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.buf.clear();
        self.buf.extend(repeat(value).take(count));
    }

    /// Replaces the contents with the items of `iter`.
    pub fn assign_iter<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.buf.clear();
        self.buf.extend(iter);
    }

    /// Replaces the contents with clones of the elements in `slice`.
    pub fn assign_slice(&mut self, slice: &[T])
    where
        T: Clone,
    {
        self.buf.clear();
        self.buf.extend_from_slice(slice);
    }

    // ===== Element access ==================================================

    /// Returns a reference to the element at `index` or an
    /// [`Error::OutOfBounds`] if `index >= self.len()`.
    ///
    /// The result is `Ok` exactly when [`get`][UnstableVec::get] returns
    /// `Some`. Use this method if you want to propagate the failure as an
    /// error.
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len();
        self.buf.get(index).ok_or_else(|| Error::out_of_bounds(index, len))
    }

    /// Mutable version of [`at`][UnstableVec::at].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len();
        self.buf.get_mut(index).ok_or_else(|| Error::out_of_bounds(index, len))
    }

    /// Returns a reference to the element at `index`, or `None` if the index
    /// is out of bounds.
    ///
    /// Note that indices are only meaningful until the next removal: a
    /// removal may move the last element to a different index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    /// Returns a reference to the element at `index` without bounds checks.
    ///
    /// # Safety
    ///
    /// `index` must be smaller than `self.len()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());

        self.buf.get_unchecked(index)
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// checks.
    ///
    /// # Safety
    ///
    /// `index` must be smaller than `self.len()`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());

        self.buf.get_unchecked_mut(index)
    }

    /// Returns the element at index 0, or `None` if empty.
    pub fn first(&self) -> Option<&T> {
        self.buf.first()
    }

    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.buf.first_mut()
    }

    /// Returns the element at index `len - 1`, or `None` if empty. This is
    /// the element that the next removal will relocate (or remove).
    pub fn last(&self) -> Option<&T> {
        self.buf.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.buf.last_mut()
    }

    /// Like [`first`][UnstableVec::first], but returns [`Error::Empty`] if
    /// there are no elements.
    pub fn front(&self) -> Result<&T, Error> {
        self.buf.first().ok_or(Error::Empty)
    }

    /// Like [`first_mut`][UnstableVec::first_mut], but returns
    /// [`Error::Empty`] if there are no elements.
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.buf.first_mut().ok_or(Error::Empty)
    }

    /// Like [`last`][UnstableVec::last], but returns [`Error::Empty`] if
    /// there are no elements.
    pub fn back(&self) -> Result<&T, Error> {
        self.buf.last().ok_or(Error::Empty)
    }

    /// Like [`last_mut`][UnstableVec::last_mut], but returns
    /// [`Error::Empty`] if there are no elements.
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        self.buf.last_mut().ok_or(Error::Empty)
    }

    /// Returns a raw pointer to the contiguous storage.
    ///
    /// The pointer is invalidated by any reallocation, i.e. by all methods
    /// that can grow the vector.
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Returns all elements as slice, in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Returns the index of the element `elem` refers to, if `elem` refers
    /// to an element of this collection. The index is computed from the
    /// distance between `elem` and the start of the storage.
    ///
    /// This is mainly useful to turn a reference obtained from an iterator or
    /// search into something that can be passed to
    /// [`swap_erase`][UnstableVec::swap_erase]:
    ///
    /// ```
    /// use unstable_vec::UnstableVec;
    ///
    /// let mut uv = UnstableVec::from(&['a', 'b', 'c'][..]);
    /// let b = uv.iter().find(|&&c| c == 'b').unwrap();
    /// let idx = uv.index_of(b).unwrap();
    /// assert_eq!(uv.swap_erase(idx), 'b');
    /// ```
    ///
    /// Zero-sized elements are indistinguishable by address: for those, `0`
    /// is returned whenever the collection is not empty.
    pub fn index_of(&self, elem: &T) -> Option<usize> {
        let size = mem::size_of::<T>();
        if size == 0 {
            return if self.is_empty() { None } else { Some(0) };
        }

        let start = self.buf.as_ptr() as usize;
        let addr = elem as *const T as usize;
        if addr < start || (addr - start) % size != 0 {
            return None;
        }

        let index = (addr - start) / size;
        if index < self.len() {
            Some(index)
        } else {
            None
        }
    }

    // ===== Iteration =======================================================

    /// Returns an iterator over immutable references to all elements, in
    /// storage order. Use `.rev()` to iterate in reverse.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buf)
    }

    /// Returns an iterator over mutable references to all elements, in
    /// storage order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.buf)
    }

    /// Returns a cursor pointing to the first element (or to the end
    /// position, if the vector is empty).
    ///
    /// See [`CursorMut`] for more information.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, A> {
        CursorMut::new(self, 0)
    }

    /// Returns a cursor pointing to the element at `index`. `index == len()`
    /// is allowed and results in a cursor at the end position.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    pub fn cursor_at_mut(&mut self, index: usize) -> CursorMut<'_, T, A> {
        let len = self.len();
        if index > len {
            panic!("cursor index (is {}) should be <= len (is {})", index, len);
        }

        CursorMut::new(self, index)
    }

    // ===== Capacity ========================================================

    /// Returns `true` if this collection doesn't contain any elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the number of elements in this collection.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns the theoretical maximum number of elements this collection
    /// could hold.
    pub fn max_len(&self) -> usize {
        match mem::size_of::<T>() {
            0 => usize::max_value(),
            size => isize::max_value() as usize / size,
        }
    }

    /// Returns the number of elements the vector can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Reserves capacity for at least `additional` more elements to be
    /// inserted. Does nothing if the capacity is already sufficient.
    /// Otherwise, all pointers into the storage are invalidated.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    /// Like [`reserve`][UnstableVec::reserve], but does not deliberately
    /// over-allocate.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.buf.reserve_exact(additional);
    }

    /// Tries to reserve capacity for at least `additional` more elements.
    ///
    /// On failure, [`Error::Alloc`] is returned and the collection is left
    /// unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), Error> {
        self.buf.try_reserve(additional)?;
        Ok(())
    }

    /// Calls `shrink_to_fit()` on the underlying buffer. This is only a
    /// hint: the allocator may leave some excess capacity.
    pub fn shrink_to_fit(&mut self) {
        self.buf.shrink_to_fit();
    }

    // ===== Insertion and other delegated mutators ==========================

    /// Appends a new element to the back of the collection and returns its
    /// index.
    ///
    /// Note that this index is only stable until the next removal.
    pub fn push(&mut self, elem: T) -> usize {
        self.buf.push(elem);
        self.buf.len() - 1
    }

    /// Appends clones of all elements of `new_elements`.
    pub fn extend_from_slice(&mut self, new_elements: &[T])
    where
        T: Clone,
    {
        self.buf.extend_from_slice(new_elements);
    }

    /// Moves all elements of `other` into `self`, leaving `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        self.buf.append(&mut other.buf);
    }

    /// Removes all elements without deallocating memory.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Drops all elements with index `len` or higher. Does nothing if `len`
    /// is greater than or equal to the current length.
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    // ===== Removal =========================================================

    /// Removes the element at `index` and returns it. The last element is
    /// moved into the vacated slot.
    ///
    /// This is O(1), no matter where `index` is. All elements except the last
    /// one keep their index; the last element is now found at `index`
    /// (unless `index` was the last index). The capacity is not changed.
    ///
    /// ```
    /// use unstable_vec::UnstableVec;
    ///
    /// let mut uv = UnstableVec::from(&["a", "b", "c", "d"][..]);
    /// assert_eq!(uv.swap_erase(1), "b");
    /// assert_eq!(uv, ["a", "d", "c"]);
    ///
    /// assert_eq!(uv.swap_erase(2), "c");
    /// assert_eq!(uv, ["a", "d"]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. See
    /// [`try_swap_erase`][UnstableVec::try_swap_erase] for a non-panicking
    /// version.
    pub fn swap_erase(&mut self, index: usize) -> T {
        let len = self.len();
        if index >= len {
            panic!("swap_erase index (is {}) should be < len (is {})", index, len);
        }

        unsafe { self.swap_erase_unchecked(index) }
    }

    /// Like [`swap_erase`][UnstableVec::swap_erase], but returns
    /// [`Error::OutOfBounds`] instead of panicking.
    pub fn try_swap_erase(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len();
        if index >= len {
            return Err(Error::out_of_bounds(index, len));
        }

        Ok(unsafe { self.swap_erase_unchecked(index) })
    }

    /// Like [`swap_erase`][UnstableVec::swap_erase], but without bounds
    /// check. All other removal methods are implemented with this one.
    ///
    /// # Safety
    ///
    /// `index` must be smaller than `self.len()`.
    pub unsafe fn swap_erase_unchecked(&mut self, index: usize) -> T {
        debug_assert!(index < self.len());

        let last = self.buf.len() - 1;
        let base = self.buf.as_mut_ptr();

        // After this read, slot `index` is logically uninitialized. It is
        // either filled with the last element below or falls out of the live
        // range with `set_len`. Nothing in between can panic.
        let removed = ptr::read(base.add(index));
        if index != last {
            ptr::copy_nonoverlapping(base.add(last), base.add(index), 1);
        }
        self.buf.set_len(last);

        removed
    }

    /// Removes all elements for which `pred` returns `true` and returns how
    /// many were removed.
    ///
    /// The elements are visited with an index cursor. When an element is
    /// removed, the last element is moved into its slot and the predicate
    /// is evaluated again for the same index. The cursor only advances over
    /// elements that don't match. Thus, `pred` is called exactly once per
    /// element, and every matching element is removed exactly once.
    ///
    /// If `pred` (or the destructor of a removed element) panics, all
    /// removals up to that point have been fully performed and the vector is
    /// in a valid state.
    ///
    /// ```
    /// use unstable_vec::UnstableVec;
    ///
    /// let mut uv = UnstableVec::from(&[1, 2, 3][..]);
    /// assert_eq!(uv.swap_erase_if(|x| x % 2 == 0), 1);
    /// assert!(uv.same_elements(&UnstableVec::from(&[1, 3][..])));
    /// ```
    pub fn swap_erase_if<P>(&mut self, mut pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.erase_matching(|elem| pred(&*elem))
    }

    /// Retains only the elements for which `f` returns `true`. Elements may
    /// be mutated by `f`.
    ///
    /// This is the unordered counterpart of `Vec::retain_mut` and runs in
    /// O(n) without ever shifting elements. The order of the remaining
    /// elements is not preserved.
    pub fn swap_retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        self.erase_matching(|elem| !f(elem));
    }

    /// Returns an iterator which removes and yields all elements for which
    /// `pred` returns `true`.
    ///
    /// Elements are only visited while the iterator is advanced. If it is
    /// dropped early, the elements not visited yet stay in the vector. See
    /// [`SwapExtractIf`] for more information.
    ///
    /// ```
    /// use unstable_vec::UnstableVec;
    ///
    /// let mut uv: UnstableVec<_> = (1..=6).collect();
    /// let mut evens: Vec<_> = uv.swap_extract_if(|x| *x % 2 == 0).collect();
    /// evens.sort();
    ///
    /// assert_eq!(evens, [2, 4, 6]);
    /// assert_eq!(uv.len(), 3);
    /// ```
    pub fn swap_extract_if<P>(&mut self, pred: P) -> SwapExtractIf<'_, T, A, P>
    where
        P: FnMut(&mut T) -> bool,
    {
        SwapExtractIf::new(self, pred)
    }

    /// Removes the last element and returns it, or `None` if the vector is
    /// empty.
    ///
    /// The name reflects that callers of this type should not rely on which
    /// element is the "last" one: this method removes *some* element in O(1).
    pub fn pop_any(&mut self) -> Option<T> {
        match self.len() {
            0 => None,
            len => Some(unsafe { self.swap_erase_unchecked(len - 1) }),
        }
    }

    /// Like [`pop_any`][UnstableVec::pop_any], but returns [`Error::Empty`]
    /// if there are no elements.
    pub fn try_pop_any(&mut self) -> Result<T, Error> {
        self.pop_any().ok_or(Error::Empty)
    }

    /// Returns `true` if `self` and `other` contain the same elements with
    /// the same multiplicities, regardless of their order.
    ///
    /// This only requires `PartialEq` and is therefore O(n²).
    pub fn same_elements<B: Allocator>(&self, other: &UnstableVec<T, B>) -> bool
    where
        T: PartialEq,
    {
        // With equal lengths, matching counts for every element of `self`
        // leave no room for other elements in `other`.
        self.len() == other.len()
            && self.iter().all(|a| {
                let ours = self.iter().filter(|&b| a == b).count();
                let theirs = other.iter().filter(|&b| a == b).count();
                ours == theirs
            })
    }

    /// The shared loop of `swap_erase_if`, `swap_retain`.
    fn erase_matching<P>(&mut self, mut pred: P) -> usize
    where
        P: FnMut(&mut T) -> bool,
    {
        let mut removed = 0;
        let mut idx = 0;
        while idx < self.buf.len() {
            if pred(unsafe { self.buf.get_unchecked_mut(idx) }) {
                // The former last element now sits at `idx` and has to be
                // tested as well, so we don't advance.
                drop(unsafe { self.swap_erase_unchecked(idx) });
                removed += 1;
            } else {
                idx += 1;
            }
        }

        removed
    }
}


impl<T, A: Allocator + Default> Default for UnstableVec<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for UnstableVec<T, A> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_slice(&source.buf);
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for UnstableVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnstableVec ")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, A: Allocator> Index<usize> for UnstableVec<T, A> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Use [`UnstableVec::at`] for a
    /// checked version.
    fn index(&self, index: usize) -> &T {
        &self.buf[index]
    }
}

impl<T, A: Allocator> IndexMut<usize> for UnstableVec<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buf[index]
    }
}

impl<T, A: Allocator> AsRef<[T]> for UnstableVec<T, A> {
    fn as_ref(&self) -> &[T] {
        &self.buf
    }
}

impl<T, A: Allocator> AsMut<[T]> for UnstableVec<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.buf
    }
}

impl<T, A: Allocator> Extend<T> for UnstableVec<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for UnstableVec<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.buf.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for UnstableVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_in(iter, Global)
    }
}

impl<T, A: Allocator> IntoIterator for UnstableVec<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buf)
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a UnstableVec<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut UnstableVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, A: Allocator> From<Buffer<T, A>> for UnstableVec<T, A> {
    fn from(buf: Buffer<T, A>) -> Self {
        Self::from_buffer(buf)
    }
}

impl<T: Clone, A: Allocator + Clone> From<&Buffer<T, A>> for UnstableVec<T, A> {
    fn from(buf: &Buffer<T, A>) -> Self {
        Self::from_buffer(buf.clone())
    }
}

impl<T, A: Allocator> From<UnstableVec<T, A>> for Buffer<T, A> {
    fn from(uv: UnstableVec<T, A>) -> Self {
        uv.into_buffer()
    }
}

impl<T> From<std::vec::Vec<T>> for UnstableVec<T> {
    fn from(vec: std::vec::Vec<T>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T: Clone> From<&[T]> for UnstableVec<T> {
    fn from(slice: &[T]) -> Self {
        let mut out = Self::with_capacity(slice.len());
        out.extend_from_slice(slice);
        out
    }
}

impl<T, const N: usize> From<[T; N]> for UnstableVec<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_iter(IntoIterator::into_iter(array))
    }
}

impl<T, U, A, B> PartialEq<UnstableVec<U, B>> for UnstableVec<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &UnstableVec<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Allocator> Eq for UnstableVec<T, A> {}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<[U]> for UnstableVec<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<&[U]> for UnstableVec<T, A> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for UnstableVec<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<std::vec::Vec<U>> for UnstableVec<T, A> {
    fn eq(&self, other: &std::vec::Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
