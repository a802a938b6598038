use dynamic_array::dynamic_array;

fn main() {
    let mut array = dynamic_array![1, 2];
    let end = array.end();
    array.reserve(10);
    let _ = end;
}
