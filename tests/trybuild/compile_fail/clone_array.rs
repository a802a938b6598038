use dynamic_array::dynamic_array;

fn main() {
    let array = dynamic_array![1, 2];
    let copy = array.clone();
    assert_eq!(array, copy);
}
