use dynamic_array::{Cursor, dynamic_array};

fn escape<'a>() -> Cursor<'a, i32> {
    let array = dynamic_array![1, 2];
    array.begin()
}

fn main() {
    let _ = escape();
}
