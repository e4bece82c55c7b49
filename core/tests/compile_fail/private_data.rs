use lockhold::LockedSet;

fn main() {
    let set: LockedSet<i32> = LockedSet::new();
    let _inner = set.data;
}
