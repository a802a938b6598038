#![cfg(all(feature = "std", feature = "panic-on-alloc"))]

use dynamic_array::{ArraySettings, DynamicArray, dynamic_array};

mod common;

use common::logger;

#[test]
fn traced_arrays_log_every_reallocation() {
    let lines = logger::capture(|| {
        let mut array = DynamicArray::new_with(ArraySettings::new().trace_reallocations(true));
        array.push_many([1, 2, 3]);
        array.push(4);
        array.reserve(1);
    });

    assert_eq!(
        lines,
        [
            "DEBUG dynamic_array: allocated 2 slots",
            "DEBUG dynamic_array: reallocating from 2 to 6 slots, keeping 0 of 0 elements",
            "DEBUG dynamic_array: reallocating from 6 to 1 slots, keeping 1 of 4 elements",
            "TRACE dynamic_array: dropping 1 elements with a capacity of 1",
        ]
    );
}

#[test]
fn taken_arrays_keep_tracing() {
    let lines = logger::capture(|| {
        let mut array = DynamicArray::new_with(ArraySettings::new().trace_reallocations(true));
        array.push("a");
        let taken = array.take();
        array.push("b");
        drop(taken);
    });

    assert_eq!(
        lines,
        [
            "DEBUG dynamic_array: allocated 2 slots",
            "DEBUG dynamic_array: reallocating from 0 to 1 slots, keeping 0 of 0 elements",
            "TRACE dynamic_array: dropping 1 elements with a capacity of 2",
            "TRACE dynamic_array: dropping 1 elements with a capacity of 1",
        ]
    );
}

#[test]
fn untraced_arrays_are_quiet() {
    let lines = logger::capture(|| {
        let mut array = dynamic_array![1, 2];
        array.push(3);
        array.reserve(100);
        array.reserve(0);
    });

    assert!(lines.is_empty(), "{lines:?}");
}
