pub struct SortedSet<T>(Vec<T>);

impl<T: Ord> SortedSet<T> {
    pub fn new() -> Self { Self(vec![]) }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn len(&self) -> usize { self.0.len() }

    pub fn insert(&mut self, elt: T) -> bool {
        match self.0.binary_search(&elt) {
            Ok(_) => false,
            Err(i) => {
                self.0.insert(i, elt);
                true
            }
        }
    }
    pub fn contains(&self, elt: &T) -> bool { self.0.binary_search(elt).is_ok() }
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }
}

#[test]
fn sanity_check() {
    let mut set = SortedSet::new();
    assert!(set.is_empty());
    assert!(set.insert(3));
    assert!(set.insert(1));
    assert!(!set.insert(3));
    assert!(set.insert(2));
    assert_eq!(set.len(), 3);
    assert!(set.contains(&2));
    assert!(!set.contains(&4));
    assert!(set.iter().copied().eq([1, 2, 3]));
}
