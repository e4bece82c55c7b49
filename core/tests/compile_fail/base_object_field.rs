use lockhold::LockedObject;

fn main() {
    let mut obj = LockedObject::new();
    obj.name = "x";
}
