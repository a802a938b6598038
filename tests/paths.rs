#![cfg(feature = "panic-on-alloc")]

use dynamic_array::{ArraySettings, DynamicArray, dynamic_array};

#[test]
fn macro_import_keeps_crate_paths() {
    let array: DynamicArray<i32> = dynamic_array![1, 2, 3];
    let settings: dynamic_array::ArraySettings = array.settings();
    assert_eq!(settings, ArraySettings::new());

    let result: Result<DynamicArray<&str>, dynamic_array::alloc::AllocError> = dynamic_array![try; "a", "b"];
    assert_eq!(result.map(|array| array.len()), Ok(2));

    assert_eq!(DynamicArray::<u8>::new().capacity(), dynamic_array::array::INITIAL_CAPACITY);
}
