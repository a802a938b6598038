use dynamic_array::dynamic_array;

fn main() {
    let mut array = dynamic_array![1, 2];

    let first = unsafe { *array.begin().get() };
    array.push(3);

    // a fresh cursor after the reallocation is fine
    let last = unsafe { *array.begin().at(2) };

    assert_eq!(first + last, 4);
}
