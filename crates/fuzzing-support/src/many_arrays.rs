use arbitrary::Arbitrary;
use dynamic_array::{ArraySettings, DynamicArray};
use log::debug;
use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::UpTo;

impl Fuzz {
    pub fn run(self) {
        let settings = ArraySettings::new().trace_reallocations(self.trace_reallocations);

        let mut arrays = self
            .arrays
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let pattern = (i % 255) as u8;
                match kind {
                    ArrayKind::T0 => ArrayObj::new::<()>(settings, pattern),
                    ArrayKind::T1 => ArrayObj::new::<T1>(settings, pattern),
                    ArrayKind::T2 => ArrayObj::new::<T2>(settings, pattern),
                    ArrayKind::T3 => ArrayObj::new::<T3>(settings, pattern),
                    ArrayKind::T4 => ArrayObj::new::<T4>(settings, pattern),
                    ArrayKind::T5 => ArrayObj::new::<T5>(settings, pattern),
                    ArrayKind::T6 => ArrayObj::new::<T6>(settings, pattern),
                }
            })
            .collect::<Vec<_>>();

        let arrays_len = arrays.len();

        if arrays_len == 0 {
            return;
        }

        for (operation_i, operation) in self.operations.into_iter().enumerate() {
            debug!("OPERATION {operation_i}: {operation:?}");

            match operation {
                Operation::Push(i) => arrays[i % arrays_len].push(),
                Operation::PushClone(i) => arrays[i % arrays_len].push_clone(),
                Operation::PushMany(i) => arrays[i % arrays_len].push_many(),
                Operation::PushManyClone(i, count) => arrays[i % arrays_len].push_many_clone(count.0),
                Operation::Emplace(i) => arrays[i % arrays_len].emplace(),
                Operation::Reserve(i, capacity) => arrays[i % arrays_len].reserve(capacity.0),
                Operation::Clear(i) => arrays[i % arrays_len].clear(),
                Operation::Take(i) => arrays[i % arrays_len].take(),
                Operation::WalkCursor(i) => arrays[i % arrays_len].walk_cursor(),
            }

            for array in &arrays {
                array.assert_valid();
            }
        }
    }
}

#[derive(Debug, Arbitrary)]
pub struct Fuzz {
    trace_reallocations: bool,

    arrays: Vec<ArrayKind>,
    operations: Vec<Operation>,
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum ArrayKind {
    T0,
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Operation {
    Push(usize),
    PushClone(usize),
    PushMany(usize),
    PushManyClone(usize, UpTo<16>),
    Emplace(usize),
    Reserve(usize, UpTo<64>),
    Clear(usize),
    Take(usize),
    WalkCursor(usize),
}

/// How many elements `push_many` appends at once.
const MANY: usize = 3;

trait ArrayTrait {
    fn push(&mut self, bit_pattern: u8);
    fn push_clone(&mut self, bit_pattern: u8);
    fn push_many(&mut self, bit_pattern: u8);
    fn push_many_clone(&mut self, bit_pattern: u8, count: usize);
    fn emplace(&mut self, bit_pattern: u8);
    fn reserve(&mut self, capacity: usize);
    fn clear(&mut self);
    fn take(&mut self);

    fn len(&self) -> usize;
    fn capacity(&self) -> usize;
    fn cursor_steps(&self) -> usize;
    fn assert_valid(&self, bit_pattern: u8);
}

/// An array of some element type together with the length and capacity it must have.
struct ArrayObj {
    array: Box<dyn ArrayTrait>,
    bit_pattern: u8,
    expected_len: usize,
    expected_capacity: usize,
}

impl ArrayObj {
    fn new<T: Element>(settings: ArraySettings, bit_pattern: u8) -> Self {
        let array = DynamicArray::<T>::new_with(settings);

        Self {
            expected_len: 0,
            expected_capacity: array.capacity(),
            array: Box::new(array),
            bit_pattern,
        }
    }

    fn expect_one(&mut self) {
        if self.expected_len >= self.expected_capacity {
            self.expected_capacity = 2 * self.expected_capacity + 1;
        }

        self.expected_len += 1;
    }

    fn expect_many(&mut self, count: usize) {
        if self.expected_len + count >= self.expected_capacity {
            self.expected_capacity += count + 1;
        }

        self.expected_len += count;
    }

    fn push(&mut self) {
        self.array.push(self.bit_pattern);
        self.expect_one();
    }

    fn push_clone(&mut self) {
        self.array.push_clone(self.bit_pattern);
        self.expect_one();
    }

    fn push_many(&mut self) {
        self.array.push_many(self.bit_pattern);
        self.expect_many(MANY);
    }

    fn push_many_clone(&mut self, count: usize) {
        self.array.push_many_clone(self.bit_pattern, count);
        self.expect_many(count);
    }

    fn emplace(&mut self) {
        self.array.emplace(self.bit_pattern);
        self.expect_one();
    }

    fn reserve(&mut self, capacity: usize) {
        self.array.reserve(capacity);
        self.expected_len = self.expected_len.min(capacity);
        self.expected_capacity = capacity;
    }

    fn clear(&mut self) {
        self.array.clear();
        self.expected_len = 0;
    }

    fn take(&mut self) {
        self.array.take();
        self.expected_len = 0;
        self.expected_capacity = 0;
    }

    fn walk_cursor(&self) {
        assert_eq!(self.array.cursor_steps(), self.expected_len);
    }

    fn assert_valid(&self) {
        assert_eq!(self.array.len(), self.expected_len);
        assert_eq!(self.array.capacity(), self.expected_capacity);
        self.array.assert_valid(self.bit_pattern);
    }
}

trait Element: Clone + Default + FromBytes + IntoBytes + Immutable + 'static {}

impl<T> Element for T where T: Clone + Default + FromBytes + IntoBytes + Immutable + 'static {}

impl<T: Element> ArrayTrait for DynamicArray<T> {
    fn push(&mut self, bit_pattern: u8) {
        DynamicArray::push(self, from_bit_pattern(bit_pattern));
    }

    fn push_clone(&mut self, bit_pattern: u8) {
        let value: T = from_bit_pattern(bit_pattern);
        DynamicArray::push_clone(self, &value);
    }

    fn push_many(&mut self, bit_pattern: u8) {
        DynamicArray::push_many(self, [(); MANY].map(|()| from_bit_pattern(bit_pattern)));
    }

    fn push_many_clone(&mut self, bit_pattern: u8, count: usize) {
        let values: Vec<T> = (0..count).map(|_| from_bit_pattern(bit_pattern)).collect();
        DynamicArray::push_many_clone(self, &values);
    }

    fn emplace(&mut self, bit_pattern: u8) {
        DynamicArray::emplace_with(self, || from_bit_pattern(bit_pattern));
    }

    fn reserve(&mut self, capacity: usize) {
        DynamicArray::reserve(self, capacity);
    }

    fn clear(&mut self) {
        DynamicArray::clear(self);
    }

    fn take(&mut self) {
        drop(DynamicArray::take(self));
    }

    fn len(&self) -> usize {
        DynamicArray::len(self)
    }

    fn capacity(&self) -> usize {
        DynamicArray::capacity(self)
    }

    fn cursor_steps(&self) -> usize {
        let mut cursor = self.begin();
        let end = self.end();
        let mut steps = 0;

        while cursor != end {
            cursor.inc();
            steps += 1;
        }

        steps
    }

    fn assert_valid(&self, bit_pattern: u8) {
        for &byte in self.as_slice().as_bytes() {
            assert_eq!(byte, bit_pattern);
        }
    }
}

fn from_bit_pattern<T: FromBytes + IntoBytes>(byte: u8) -> T {
    let mut value = T::new_zeroed();
    value.as_mut_bytes().fill(byte);
    value
}

#[repr(transparent)]
#[derive(Clone, Default, IntoBytes, FromBytes, Immutable)]
#[allow(dead_code)]
struct T1(u8);

#[repr(transparent)]
#[derive(Clone, Default, IntoBytes, FromBytes, Immutable)]
#[allow(dead_code)]
struct T2(u16);

#[repr(transparent)]
#[derive(Clone, Default, IntoBytes, FromBytes, Immutable)]
#[allow(dead_code)]
struct T3(u32);

#[repr(transparent)]
#[derive(Clone, Default, IntoBytes, FromBytes, Immutable)]
#[allow(dead_code)]
struct T4(u64);

#[repr(transparent)]
#[derive(Clone, Default, IntoBytes, FromBytes, Immutable)]
#[allow(dead_code)]
struct T5([u64; 2]);

#[repr(transparent)]
#[derive(Clone, Default, IntoBytes, FromBytes, Immutable)]
#[allow(dead_code)]
struct T6([u64; 3]);
