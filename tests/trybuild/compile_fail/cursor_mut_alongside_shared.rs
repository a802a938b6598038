use dynamic_array::dynamic_array;

fn main() {
    let mut array = dynamic_array![1, 2];
    let first = &array[0];
    let cursor = array.begin_mut();
    unsafe { *cursor.get_mut() = 3 };
    assert_eq!(*first, 1);
}
