use core::{fmt, marker::PhantomData, ptr::NonNull};

use crate::SizedTypeProperties;

/// A position in the buffer of a [`DynamicArray`](crate::DynamicArray).
///
/// Cursors are created by [`begin`](crate::DynamicArray::begin) and
/// [`end`](crate::DynamicArray::end). They can be moved in both directions and compared by
/// position. Moving a cursor never checks bounds and is always safe; reading through it is
/// `unsafe` and requires the cursor to point at a live element. Writing through a cursor
/// requires one created by [`begin_mut`](crate::DynamicArray::begin_mut) or
/// [`end_mut`](crate::DynamicArray::end_mut), which borrow the array mutably.
///
/// A cursor borrows its array, so the array can't be grown, reserved, cleared or dropped
/// while a cursor into it exists:
///
/// ```compile_fail
/// # use dynamic_array::dynamic_array;
/// let mut array = dynamic_array![1, 2];
/// let begin = array.begin();
/// array.push(3);
/// # let _ = begin;
/// ```
///
/// # Examples
/// ```
/// # use dynamic_array::dynamic_array;
/// let array = dynamic_array![1, 2, 3];
///
/// let mut sum = 0;
/// let mut cursor = array.begin();
/// let end = array.end();
///
/// while cursor != end {
///     sum += unsafe { *cursor.get() };
///     cursor.inc();
/// }
///
/// assert_eq!(sum, 6);
/// ```
///
/// For zero-sized types the cursor tracks its position by address alone, so
/// `begin` stepped `len` times still equals `end`.
pub struct Cursor<'a, T> {
    ptr: *const T,
    marker: PhantomData<&'a [T]>,
}

impl<'a, T> Cursor<'a, T> {
    /// # Safety
    /// `ptr` must point into, or one past the end of, a buffer that outlives `'a`.
    #[inline(always)]
    pub(crate) const unsafe fn new(ptr: NonNull<T>) -> Self {
        Self {
            ptr: ptr.as_ptr().cast_const(),
            marker: PhantomData,
        }
    }

    /// Moves the cursor `count` elements forward.
    #[must_use]
    #[inline(always)]
    pub(crate) fn advanced(mut self, count: usize) -> Self {
        self.ptr = Self::forward(self.ptr, count);
        self
    }

    #[inline(always)]
    fn forward(ptr: *const T, count: usize) -> *const T {
        if T::IS_ZST {
            ptr.wrapping_byte_add(count)
        } else {
            ptr.wrapping_add(count)
        }
    }

    #[inline(always)]
    fn backward(ptr: *const T, count: usize) -> *const T {
        if T::IS_ZST {
            ptr.wrapping_byte_sub(count)
        } else {
            ptr.wrapping_sub(count)
        }
    }

    #[inline(always)]
    fn element(ptr: *const T) -> *const T {
        if T::IS_ZST { NonNull::dangling().as_ptr() } else { ptr }
    }

    /// Moves the cursor one element forward and returns it.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.ptr = Self::forward(self.ptr, 1);
        self
    }

    /// Moves the cursor one element forward and returns the position it had before.
    #[inline]
    #[must_use = "use `inc` if the old position isn't needed"]
    pub fn post_inc(&mut self) -> Self {
        let old = *self;
        self.inc();
        old
    }

    /// Moves the cursor one element backward and returns it.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.ptr = Self::backward(self.ptr, 1);
        self
    }

    /// Moves the cursor one element backward and returns the position it had before.
    ///
    /// ```
    /// # use dynamic_array::dynamic_array;
    /// let array = dynamic_array![1, 2, 3];
    /// let mut cursor = array.end();
    /// cursor.dec();
    ///
    /// let old = cursor.post_dec();
    /// assert_eq!(unsafe { *old.get() }, 3);
    /// assert_eq!(unsafe { *cursor.get() }, 2);
    /// ```
    #[inline]
    #[must_use = "use `dec` if the old position isn't needed"]
    pub fn post_dec(&mut self) -> Self {
        let old = *self;
        self.dec();
        old
    }

    /// Returns a reference to the element at the cursor.
    ///
    /// # Safety
    /// The cursor must point at a live element of its array,
    /// so it must not be an [`end`](crate::DynamicArray::end) cursor.
    #[inline(always)]
    pub unsafe fn get(self) -> &'a T {
        unsafe { &*Self::element(self.ptr) }
    }

    /// Returns a mutable reference to the element at the cursor.
    ///
    /// # Safety
    /// The cursor must come from [`begin_mut`](crate::DynamicArray::begin_mut) or
    /// [`end_mut`](crate::DynamicArray::end_mut) and point at a live element of its array.
    /// No other reference to that element may be live while the returned one is.
    #[inline(always)]
    pub unsafe fn get_mut(self) -> &'a mut T {
        unsafe { &mut *Self::element(self.ptr).cast_mut() }
    }

    /// Returns a reference to the element `index` positions after the cursor.
    ///
    /// # Safety
    /// The position `index` elements after the cursor must be a live element of its array.
    #[inline(always)]
    pub unsafe fn at(self, index: usize) -> &'a T {
        unsafe { &*Self::element(Self::forward(self.ptr, index)) }
    }

    /// Returns a mutable reference to the element `index` positions after the cursor.
    ///
    /// # Safety
    /// The cursor must come from [`begin_mut`](crate::DynamicArray::begin_mut) or
    /// [`end_mut`](crate::DynamicArray::end_mut) and the position `index` elements after it
    /// must be a live element of its array.
    /// No other reference to that element may be live while the returned one is.
    #[inline(always)]
    pub unsafe fn at_mut(self, index: usize) -> &'a mut T {
        unsafe { &mut *Self::element(Self::forward(self.ptr, index)).cast_mut() }
    }

    /// Returns the raw position of the cursor.
    ///
    /// For zero-sized types this is an address used for position bookkeeping only.
    #[inline(always)]
    #[must_use]
    pub const fn as_ptr(self) -> *const T {
        self.ptr
    }
}

impl<T> Clone for Cursor<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.ptr).finish()
    }
}
