use lockhold::LockedDict;

fn main() {
    let mut dict: LockedDict<String, i32> = LockedDict::new();
    dict.foo = 42;
}
