use core::{
    borrow::{Borrow, BorrowMut},
    fmt::{self, Debug, Display, Write as _},
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr,
    slice::{self, SliceIndex},
};

use log::{debug, trace};

use crate::{
    Cursor, ErrorBehavior, empty_array, error_behavior_generic_methods_allocation_failure,
    polyfill::nonnull, raw_buffer::RawBuffer, settings::ArraySettings,
};

/// Creates a [`DynamicArray`] containing the arguments.
///
/// The array's capacity is exactly the number of arguments. Without arguments this is
/// [`DynamicArray::new`], which starts with a capacity of 2.
///
/// # Panics
/// If used without `try`, panics on allocation failure.
///
/// # Errors
/// If used with `try`, errors on allocation failure.
///
/// # Examples
/// ```
/// # use dynamic_array::{dynamic_array, DynamicArray};
/// let empty: DynamicArray<i32> = dynamic_array![];
/// assert_eq!(empty.capacity(), 2);
///
/// let array = dynamic_array![1, 2, 3];
/// assert_eq!(array, [1, 2, 3]);
/// assert_eq!(array.capacity(), 3);
///
/// let array = dynamic_array![try; "a", "b"]?;
/// assert_eq!(array, ["a", "b"]);
/// # Ok::<(), dynamic_array::alloc::AllocError>(())
/// ```
#[macro_export]
macro_rules! dynamic_array {
    [try] => {
        $crate::DynamicArray::try_new()
    };
    [try; $($values:expr),+ $(,)?] => {
        $crate::DynamicArray::try_from_array([$($values),+])
    };
    [] => {
        $crate::DynamicArray::new()
    };
    [$($values:expr),+ $(,)?] => {
        $crate::DynamicArray::from_array([$($values),+])
    };
}

/// The capacity of an array created by [`DynamicArray::new`].
pub const INITIAL_CAPACITY: usize = 2;

/// A contiguous growable array.
///
/// Elements live in a single allocation of `capacity` slots of which the first `len`
/// are initialized. See the [crate documentation](crate) for the growth policy.
///
/// `DynamicArray` derefs to a slice, so the slice methods like `iter`, `get`,
/// `get_unchecked` and `contains` are available as well.
///
/// It does not implement `Clone`. To hand the elements to someone else, move the
/// array or use [`take`](Self::take).
///
/// # Examples
/// ```
/// # use dynamic_array::DynamicArray;
/// let mut array = DynamicArray::new();
/// array.push(String::from("hello"));
/// array.push_clone(&String::from("world"));
/// array.emplace("!");
///
/// assert_eq!(array.len(), 3);
/// assert_eq!(array[1], "world");
/// assert_eq!(array.last(), "!");
/// ```
pub struct DynamicArray<T> {
    buf: RawBuffer<T>,
    len: usize,
    settings: ArraySettings,
}

unsafe impl<T: Send> Send for DynamicArray<T> {}
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        if self.settings.traces_reallocations() {
            trace!(target: "dynamic_array", "dropping {} elements with a capacity of {}", self.len, self.capacity());
        }

        // `buf` deallocates afterwards, even if a destructor panics
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<T> Default for DynamicArray<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    error_behavior_generic_methods_allocation_failure! {
        /// Constructs a new empty `DynamicArray<T>` with a capacity of 2.
        impl
        do examples
        /// ```
        /// # use dynamic_array::DynamicArray;
        /// let array = DynamicArray::<i32>::new();
        /// assert_eq!(array.len(), 0);
        /// assert_eq!(array.capacity(), 2);
        /// ```
        for fn new
        do examples
        /// ```
        /// # use dynamic_array::DynamicArray;
        /// let array = DynamicArray::<i32>::try_new()?;
        /// assert_eq!(array.capacity(), 2);
        /// # Ok::<(), dynamic_array::alloc::AllocError>(())
        /// ```
        for fn try_new
        use fn generic_new() -> Self {
            Self::generic_allocate(INITIAL_CAPACITY, ArraySettings::new())
        }

        /// Constructs a new empty `DynamicArray<T>` with a capacity of 2 and the given settings.
        impl
        for fn new_with
        for fn try_new_with
        use fn generic_new_with(settings: ArraySettings) -> Self {
            Self::generic_allocate(INITIAL_CAPACITY, settings)
        }

        /// Constructs a new empty `DynamicArray<T>` with exactly the given capacity.
        impl
        do examples
        /// ```
        /// # use dynamic_array::DynamicArray;
        /// let array = DynamicArray::<i32>::with_capacity(10);
        /// assert_eq!(array.capacity(), 10);
        /// ```
        for fn with_capacity
        for fn try_with_capacity
        use fn generic_with_capacity(capacity: usize) -> Self {
            Self::generic_allocate(capacity, ArraySettings::new())
        }

        /// Constructs a new `DynamicArray<T>` from a `[T; N]`.
        ///
        /// The capacity is exactly `N`.
        impl
        do examples
        /// ```
        /// # use dynamic_array::DynamicArray;
        /// let array = DynamicArray::from_array([1, 2, 3]);
        /// assert_eq!(array, [1, 2, 3]);
        /// assert_eq!(array.capacity(), 3);
        /// ```
        for fn from_array
        for fn try_from_array
        use fn generic_from_array<{const N: usize}>(array: [T; N]) -> Self {
            let mut this = Self::generic_allocate::<B>(N, ArraySettings::new())?;

            for value in array {
                unsafe { this.push_unchecked(value) };
            }

            Ok(this)
        }

        /// Constructs a new `DynamicArray<T>` holding clones of the elements of `slice`.
        ///
        /// The capacity is exactly `slice.len()`.
        impl
        do examples
        /// ```
        /// # use dynamic_array::DynamicArray;
        /// let names = ["ferris", "corro"];
        /// let array = DynamicArray::from_slice_clone(&names);
        /// assert_eq!(array, names);
        /// ```
        for fn from_slice_clone
        for fn try_from_slice_clone
        use fn generic_from_slice_clone(slice: &[T]) -> Self
        where {
            T: Clone
        } in {
            let mut this = Self::generic_allocate::<B>(slice.len(), ArraySettings::new())?;

            for value in slice {
                unsafe { this.push_unchecked(value.clone()) };
            }

            Ok(this)
        }
    }

    fn generic_allocate<E: ErrorBehavior>(capacity: usize, settings: ArraySettings) -> Result<Self, E> {
        let buf = RawBuffer::generic_allocate::<E>(capacity)?;

        if settings.traces_reallocations() {
            debug!(target: "dynamic_array", "allocated {capacity} slots");
        }

        Ok(Self { buf, len: 0, settings })
    }

    /// Returns the total number of elements the array can hold without reallocating.
    #[must_use]
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of elements in the array.
    #[must_use]
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array contains no elements.
    #[must_use]
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the settings this array was created with.
    #[must_use]
    #[inline(always)]
    pub const fn settings(&self) -> ArraySettings {
        self.settings
    }

    /// Extracts a slice containing the entire array.
    #[must_use]
    #[inline(always)]
    pub const fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.ptr().as_ptr(), self.len) }
    }

    /// Extracts a mutable slice of the entire array.
    #[must_use]
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.ptr().as_ptr(), self.len) }
    }

    /// Returns a raw pointer to the buffer.
    ///
    /// The pointer is invalidated by any reallocation and by dropping the array.
    #[must_use]
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.ptr().as_ptr()
    }

    /// Returns a raw mutable pointer to the buffer.
    ///
    /// The pointer is invalidated by any reallocation and by dropping the array.
    #[must_use]
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr().as_ptr()
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Panics
    /// Panics if the array is empty. Use [`first_unchecked`](Self::first_unchecked) to skip the check.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::dynamic_array;
    /// let mut array = dynamic_array![1, 2, 3];
    /// *array.first() = 10;
    /// assert_eq!(array, [10, 2, 3]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn first(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(first) => first,
            None => empty_array("first"),
        }
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Panics
    /// Panics if the array is empty. Use [`last_unchecked`](Self::last_unchecked) to skip the check.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::dynamic_array;
    /// let mut array = dynamic_array![1, 2, 3];
    /// *array.last() = 30;
    /// assert_eq!(array, [1, 2, 30]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn last(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(last) => last,
            None => empty_array("last"),
        }
    }

    /// Returns a mutable reference to the first element without checking that there is one.
    ///
    /// # Safety
    /// The array must not be empty.
    #[inline(always)]
    pub unsafe fn first_unchecked(&mut self) -> &mut T {
        debug_assert!(!self.is_empty());
        unsafe { self.as_mut_slice().get_unchecked_mut(0) }
    }

    /// Returns a mutable reference to the last element without checking that there is one.
    ///
    /// # Safety
    /// The array must not be empty.
    #[inline(always)]
    pub unsafe fn last_unchecked(&mut self) -> &mut T {
        debug_assert!(!self.is_empty());
        let index = self.len - 1;
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Returns a cursor at the first element, or at [`end`](Self::end) if the array is empty.
    #[must_use]
    #[inline(always)]
    pub fn begin(&self) -> Cursor<'_, T> {
        unsafe { Cursor::new(self.buf.ptr()) }
    }

    /// Returns a cursor one past the last element.
    #[must_use]
    #[inline(always)]
    pub fn end(&self) -> Cursor<'_, T> {
        self.begin().advanced(self.len)
    }

    /// Returns a cursor at the first element that can write through
    /// [`get_mut`](Cursor::get_mut) and [`at_mut`](Cursor::at_mut).
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::dynamic_array;
    /// let mut array = dynamic_array![1, 2, 3];
    /// let cursor = array.begin_mut();
    /// unsafe { *cursor.at_mut(2) = 30 };
    /// assert_eq!(array, [1, 2, 30]);
    /// ```
    #[must_use]
    #[inline(always)]
    pub fn begin_mut(&mut self) -> Cursor<'_, T> {
        unsafe { Cursor::new(self.buf.ptr()) }
    }

    /// Returns a cursor one past the last element that can write through
    /// [`get_mut`](Cursor::get_mut) and [`at_mut`](Cursor::at_mut) once moved back.
    #[must_use]
    #[inline(always)]
    pub fn end_mut(&mut self) -> Cursor<'_, T> {
        let len = self.len;
        self.begin_mut().advanced(len)
    }

    /// Moves all elements into a new array, leaving this one empty and without an allocation.
    ///
    /// The returned array has the same capacity and settings. This one keeps its settings
    /// and has a capacity of 0, so its next append reallocates.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::dynamic_array;
    /// let mut array = dynamic_array![1, 2, 3];
    /// let taken = array.take();
    ///
    /// assert_eq!(taken, [1, 2, 3]);
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 0);
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        let empty = Self {
            buf: RawBuffer::EMPTY,
            len: 0,
            settings: self.settings,
        };

        mem::replace(self, empty)
    }

    /// Drops all elements. The capacity stays the same.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::dynamic_array;
    /// let mut array = dynamic_array![1, 2, 3];
    /// array.clear();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn clear(&mut self) {
        let elements: *mut [T] = self.as_mut_slice();

        // if a destructor panics the array is already empty, so nothing is dropped twice
        self.len = 0;

        unsafe { ptr::drop_in_place(elements) }
    }

    /// Appends an element without checking the capacity.
    ///
    /// # Safety
    /// The array must have spare capacity, `len() < capacity()`.
    #[inline(always)]
    pub unsafe fn push_unchecked(&mut self, value: T) {
        unsafe { self.push_unchecked_with(|| value) }
    }

    /// Appends the element returned by `f` without checking the capacity.
    ///
    /// # Safety
    /// The array must have spare capacity, `len() < capacity()`.
    #[inline(always)]
    pub unsafe fn push_unchecked_with(&mut self, f: impl FnOnce() -> T) {
        debug_assert!(self.len < self.capacity());

        unsafe {
            let slot = self.buf.ptr().add(self.len);
            nonnull::write_with(slot, f);
        }

        self.len += 1;
    }

    error_behavior_generic_methods_allocation_failure! {
        /// Appends an element by moving it into the array.
        ///
        /// Reallocates to `2 * capacity + 1` slots if the array is full.
        impl
        do examples
        /// ```
        /// # use dynamic_array::dynamic_array;
        /// let mut array = dynamic_array![1, 2];
        /// array.push(3);
        /// assert_eq!(array, [1, 2, 3]);
        /// assert_eq!(array.capacity(), 5);
        /// ```
        for fn push
        do examples
        /// ```
        /// # use dynamic_array::dynamic_array;
        /// let mut array = dynamic_array![try; 1, 2]?;
        /// array.try_push(3)?;
        /// assert_eq!(array, [1, 2, 3]);
        /// # Ok::<(), dynamic_array::alloc::AllocError>(())
        /// ```
        for fn try_push
        use fn generic_push(&mut self, value: T) {
            self.generic_emplace_with(|| value)
        }

        /// Appends a clone of `value`.
        ///
        /// This is the only single-element append that clones.
        /// Reallocates to `2 * capacity + 1` slots if the array is full.
        impl
        do examples
        /// ```
        /// # use dynamic_array::DynamicArray;
        /// let hello = String::from("hello");
        /// let mut array = DynamicArray::new();
        /// array.push_clone(&hello);
        /// assert_eq!(array, [hello]);
        /// ```
        for fn push_clone
        for fn try_push_clone
        use fn generic_push_clone(&mut self, value: &T)
        where {
            T: Clone
        } in {
            self.generic_reserve_one::<B>()?;
            unsafe { self.push_unchecked(value.clone()) };
            Ok(())
        }

        /// Appends all `values`, moving them into the array.
        ///
        /// Reallocates to `capacity + N + 1` slots if `len + N >= capacity`.
        impl
        do examples
        /// ```
        /// # use dynamic_array::DynamicArray;
        /// let mut array = DynamicArray::new();
        /// array.push_many([1, 2, 3]);
        /// assert_eq!(array, [1, 2, 3]);
        /// assert_eq!(array.capacity(), 6);
        /// ```
        for fn push_many
        for fn try_push_many
        use fn generic_push_many<{const N: usize}>(&mut self, values: [T; N]) {
            self.generic_reserve_many::<B>(N)?;

            for value in values {
                unsafe { self.push_unchecked(value) };
            }

            Ok(())
        }

        /// Appends clones of all `values`.
        ///
        /// Reallocates to `capacity + values.len() + 1` slots if `len + values.len() >= capacity`.
        impl
        do examples
        /// ```
        /// # use dynamic_array::dynamic_array;
        /// let mut array = dynamic_array![1];
        /// array.push_many_clone(&[2, 3]);
        /// assert_eq!(array, [1, 2, 3]);
        /// assert_eq!(array.capacity(), 4);
        /// ```
        for fn push_many_clone
        for fn try_push_many_clone
        use fn generic_push_many_clone(&mut self, values: &[T])
        where {
            T: Clone
        } in {
            self.generic_reserve_many::<B>(values.len())?;

            for value in values {
                unsafe { self.push_unchecked(value.clone()) };
            }

            Ok(())
        }

        /// Constructs an element from `args` directly in the next free slot.
        ///
        /// The conversion only runs once the slot is available.
        /// Reallocates to `2 * capacity + 1` slots if the array is full.
        impl
        do examples
        /// ```
        /// # use dynamic_array::DynamicArray;
        /// let mut array: DynamicArray<String> = DynamicArray::new();
        /// array.emplace("hello");
        /// assert_eq!(array, ["hello"]);
        /// ```
        for fn emplace
        for fn try_emplace
        use fn generic_emplace<{Args}>(&mut self, args: Args)
        where {
            T: From<Args>
        } in {
            self.generic_emplace_with(|| T::from(args))
        }

        /// Constructs an element with `f` directly in the next free slot.
        ///
        /// `f` only runs once the slot is available.
        /// Reallocates to `2 * capacity + 1` slots if the array is full.
        impl
        do examples
        /// ```
        /// # use dynamic_array::DynamicArray;
        /// let mut array = DynamicArray::new();
        /// array.emplace_with(|| [0u8; 64]);
        /// assert_eq!(array[0].len(), 64);
        /// ```
        for fn emplace_with
        for fn try_emplace_with
        use fn generic_emplace_with(&mut self, f: impl FnOnce() -> T) {
            self.generic_reserve_one::<B>()?;
            unsafe { self.push_unchecked_with(f) };
            Ok(())
        }

        /// Reallocates the array to exactly `new_capacity` slots.
        ///
        /// This always reallocates, even if the capacity doesn't change.
        ///
        /// If `new_capacity` is less than the length, the array is truncated:
        /// the elements that don't fit are dropped and are lost.
        impl
        do examples
        /// ```
        /// # use dynamic_array::dynamic_array;
        /// let mut array = dynamic_array![1, 2, 3, 4];
        ///
        /// array.reserve(10);
        /// assert_eq!(array.capacity(), 10);
        ///
        /// array.reserve(2);
        /// assert_eq!(array.capacity(), 2);
        /// assert_eq!(array, [1, 2]);
        /// ```
        for fn reserve
        do examples
        /// ```
        /// # use dynamic_array::dynamic_array;
        /// let mut array = dynamic_array![1u64, 2, 3];
        /// assert!(array.try_reserve(usize::MAX).is_err());
        /// assert_eq!(array, [1, 2, 3]);
        /// assert_eq!(array.capacity(), 3);
        /// ```
        for fn try_reserve
        use fn generic_reserve(&mut self, new_capacity: usize) {
            self.generic_grow_to(new_capacity)
        }
    }

    #[inline(always)]
    fn generic_reserve_one<E: ErrorBehavior>(&mut self) -> Result<(), E> {
        if self.len >= self.capacity() {
            self.generic_grow_one_cold::<E>()?;
        }

        Ok(())
    }

    #[inline(always)]
    fn generic_reserve_many<E: ErrorBehavior>(&mut self, count: usize) -> Result<(), E> {
        let Some(required) = self.len.checked_add(count) else {
            return Err(E::capacity_overflow());
        };

        if required >= self.capacity() {
            self.generic_grow_many_cold::<E>(count)?;
        }

        Ok(())
    }

    #[cold]
    #[inline(never)]
    fn generic_grow_one_cold<E: ErrorBehavior>(&mut self) -> Result<(), E> {
        let Some(doubled) = self.capacity().checked_mul(2) else {
            return Err(E::capacity_overflow());
        };

        let Some(new_capacity) = doubled.checked_add(1) else {
            return Err(E::capacity_overflow());
        };

        self.generic_grow_to(new_capacity)
    }

    #[cold]
    #[inline(never)]
    fn generic_grow_many_cold<E: ErrorBehavior>(&mut self, count: usize) -> Result<(), E> {
        let Some(grown) = self.capacity().checked_add(count) else {
            return Err(E::capacity_overflow());
        };

        let Some(new_capacity) = grown.checked_add(1) else {
            return Err(E::capacity_overflow());
        };

        self.generic_grow_to(new_capacity)
    }

    /// Moves the elements into a new buffer of exactly `new_capacity` slots.
    ///
    /// This is the only place that reallocates. Elements that don't fit are dropped.
    /// On error the array is unchanged.
    fn generic_grow_to<E: ErrorBehavior>(&mut self, new_capacity: usize) -> Result<(), E> {
        let new_buf = RawBuffer::<T>::generic_allocate::<E>(new_capacity)?;

        let old_len = self.len;
        let kept = old_len.min(new_capacity);

        if self.settings.traces_reallocations() {
            debug!(
                target: "dynamic_array",
                "reallocating from {} to {new_capacity} slots, keeping {kept} of {old_len} elements",
                self.capacity(),
            );
        }

        let old_buf = mem::replace(&mut self.buf, new_buf);

        // the truncated elements are dropped below, they must not be dropped again if one of them panics
        self.len = kept;

        unsafe {
            ptr::copy_nonoverlapping(old_buf.ptr().as_ptr(), self.buf.ptr().as_ptr(), kept);
            nonnull::drop_range(old_buf.ptr(), kept, old_len);
        }

        // `old_buf` deallocates here
        Ok(())
    }
}

impl<T: Display> DynamicArray<T> {
    /// Writes the elements separated by spaces and followed by a line break to standard output.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::dynamic_array;
    /// dynamic_array![1, 2, 3].print(); // prints "1 2 3\n"
    /// ```
    #[cfg(feature = "std")]
    pub fn print(&self) {
        std::println!("{self}");
    }

    /// Writes the elements separated by spaces and followed by a line break to `sink`.
    ///
    /// Returns `sink` so more output can be chained onto it.
    ///
    /// # Errors
    /// Errors if writing to `sink` or formatting an element fails.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::dynamic_array;
    /// let mut out = String::new();
    ///
    /// dynamic_array![1, 2, 3].print_to(&mut out)?.push_str("done");
    ///
    /// assert_eq!(out, "1 2 3\ndone");
    /// # Ok::<(), core::fmt::Error>(())
    /// ```
    pub fn print_to<'w, W: fmt::Write + ?Sized>(&self, sink: &'w mut W) -> Result<&'w mut W, fmt::Error> {
        writeln!(sink, "{self}")?;
        Ok(sink)
    }
}

/// Formats the elements separated by spaces.
impl<T: Display> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i != 0 {
                f.write_char(' ')?;
            }

            Display::fmt(value, f)?;
        }

        Ok(())
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_slice(), f)
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;

    #[inline(always)]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    #[inline(always)]
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    #[inline(always)]
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

/// Appends element by element, following the single-element growth policy.
#[cfg(feature = "panic-on-alloc")]
impl<T> Extend<T> for DynamicArray<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<'t, T: Clone + 't> Extend<&'t T> for DynamicArray<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'t T>>(&mut self, iter: I) {
        for value in iter {
            self.push_clone(value);
        }
    }
}

/// Starts from [`DynamicArray::new`] and appends element by element.
#[cfg(feature = "panic-on-alloc")]
impl<T> FromIterator<T> for DynamicArray<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

#[cfg(test)]
impl<T> DynamicArray<T> {
    pub(crate) fn buffer_ptr(&self) -> core::ptr::NonNull<T> {
        self.buf.ptr()
    }
}
