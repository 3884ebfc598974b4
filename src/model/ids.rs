/// Sequential id source owned by the records manager. The first id is 1.
#[derive(Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_allocator_is_sequential() {
    let mut ids = IdAllocator::new();
    assert_eq!((0..3).map(|_| ids.allocate()).collect::<Vec<_>>(), vec![1, 2, 3]);
    let mut other = IdAllocator::default();
    assert_eq!(other.allocate(), 1);
}
