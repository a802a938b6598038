use std::vec::Vec;

use crate::{
    DynamicArray, dynamic_array,
    array::INITIAL_CAPACITY,
    tests::{Payload, Tracked, zst_or_not},
};

zst_or_not! {
    new_has_initial_capacity
    push_growth_sequence
    push_many_grows_by_count
    push_many_grows_when_exactly_full
    push_many_of_nothing
    push_many_clone_grows_by_count
    emplace_grows_like_push
    reserve_grows_exactly
    reserve_same_capacity_still_reallocates
    reserve_truncates
    reserve_zero
    growth_moves_without_cloning
}

fn new_has_initial_capacity<T: Payload>() {
    let array = DynamicArray::<Tracked<T>>::new();
    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), INITIAL_CAPACITY);
    assert!(array.is_empty());
}

fn push_growth_sequence<T: Payload>() {
    let mut array = DynamicArray::<Tracked<T>>::new();
    let mut capacities = Vec::from([array.capacity()]);

    for i in 0..24 {
        array.push(Tracked::new(T::nth(i)));

        if capacities.last() != Some(&array.capacity()) {
            capacities.push(array.capacity());
        }
    }

    assert_eq!(capacities, [2, 5, 11, 23, 47]);
    assert_eq!(array.len(), 24);

    for (i, value) in array.iter().enumerate() {
        assert_eq!(*value, T::nth(i));
    }
}

fn push_many_grows_by_count<T: Payload>() {
    let mut array = DynamicArray::<Tracked<T>>::new();

    array.push_many([Tracked::new(T::nth(0)), Tracked::new(T::nth(1)), Tracked::new(T::nth(2))]);
    assert_eq!(array.len(), 3);
    assert_eq!(array.capacity(), 6);

    array.push_many([Tracked::new(T::nth(3)), Tracked::new(T::nth(4))]);
    assert_eq!(array.len(), 5);
    assert_eq!(array.capacity(), 6);
}

fn push_many_grows_when_exactly_full<T: Payload>() {
    let mut array = DynamicArray::<Tracked<T>>::with_capacity(6);
    array.push_many([(); 5].map(|()| Tracked::new(T::nth(0))));
    assert_eq!(array.capacity(), 6);

    // 5 + 1 elements would fit, the policy grows anyway
    array.push_many([Tracked::new(T::nth(1))]);
    assert_eq!(array.len(), 6);
    assert_eq!(array.capacity(), 8);
}

fn push_many_of_nothing<T: Payload>() {
    let mut array = dynamic_array![Tracked::new(T::nth(0)), Tracked::new(T::nth(1))];
    assert_eq!(array.capacity(), 2);

    array.push_many([]);
    assert_eq!(array.len(), 2);
    assert_eq!(array.capacity(), 3);

    array.push_many([]);
    assert_eq!(array.capacity(), 3);
}

fn push_many_clone_grows_by_count<T: Payload>() {
    let source = [Tracked::new(T::nth(0)), Tracked::new(T::nth(1)), Tracked::new(T::nth(2))];

    let mut array = DynamicArray::new();
    array.push_many_clone(&source);
    assert_eq!(array.capacity(), 6);

    array.push_many_clone(&source);
    assert_eq!(array.len(), 6);
    assert_eq!(array.capacity(), 10);
}

fn emplace_grows_like_push<T: Payload>() {
    let mut array = DynamicArray::<Tracked<T>>::new();

    array.emplace(T::nth(0));
    array.emplace(T::nth(1));
    assert_eq!(array.capacity(), 2);

    array.emplace_with(|| Tracked::new(T::nth(2)));
    assert_eq!(array.capacity(), 5);
    assert_eq!(array, [T::nth(0), T::nth(1), T::nth(2)]);
}

fn reserve_grows_exactly<T: Payload>() {
    let mut array = dynamic_array![Tracked::new(T::nth(0))];
    array.reserve(100);
    assert_eq!(array.capacity(), 100);
    assert_eq!(array, [T::nth(0)]);

    array.push(Tracked::new(T::nth(1)));
    assert_eq!(array.capacity(), 100);
}

fn reserve_same_capacity_still_reallocates<T: Payload>() {
    let mut array = DynamicArray::<Tracked<T>>::with_capacity(4);
    array.push(Tracked::new(T::nth(0)));

    Tracked::expect().run(|| {
        array.reserve(4);
    });

    assert_eq!(array.capacity(), 4);
    assert_eq!(array, [T::nth(0)]);
}

fn reserve_truncates<T: Payload>() {
    Tracked::expect().constructions(5).drops(5).run(|| {
        let mut array = DynamicArray::new();

        for i in 0..5 {
            array.push(Tracked::new(T::nth(i)));
        }

        array.reserve(2);
        assert_eq!(Tracked::current_drops(), 3);
        assert_eq!(array.len(), 2);
        assert_eq!(array.capacity(), 2);
        assert_eq!(array, [T::nth(0), T::nth(1)]);
    });
}

fn reserve_zero<T: Payload>() {
    let mut array = dynamic_array![Tracked::new(T::nth(0)), Tracked::new(T::nth(1))];
    array.reserve(0);
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 0);

    array.push(Tracked::new(T::nth(2)));
    assert_eq!(array.capacity(), 1);
    assert_eq!(array, [T::nth(2)]);
}

fn growth_moves_without_cloning<T: Payload>() {
    Tracked::expect().constructions(50).drops(50).run(|| {
        let mut array = DynamicArray::new();

        for i in 0..50 {
            array.push(Tracked::new(T::nth(i)));
        }

        assert_eq!(array.capacity(), 95);
        assert_eq!(Tracked::current_drops(), 0);
    });
}

#[test]
fn overflowing_growth_is_an_error() {
    let mut array = DynamicArray::<u64>::new();
    array.push(1);

    assert!(array.try_reserve(usize::MAX).is_err());
    assert!(array.try_reserve(usize::MAX / 4).is_err());
    assert_eq!(array, [1]);
    assert_eq!(array.capacity(), 2);
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn overflowing_reserve_panics() {
    let mut array = DynamicArray::<u64>::new();
    array.reserve(usize::MAX);
}

#[test]
fn zero_sized_types_never_overflow_the_layout() {
    let mut array = DynamicArray::<()>::new();
    array.reserve(usize::MAX);
    assert_eq!(array.capacity(), usize::MAX);
}
