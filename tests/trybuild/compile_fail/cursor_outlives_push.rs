use dynamic_array::dynamic_array;

fn main() {
    let mut array = dynamic_array![1, 2];
    let begin = array.begin();
    array.push(3);
    assert_eq!(unsafe { *begin.get() }, 1);
}
