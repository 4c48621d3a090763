//! Correlation index pool for the call bridge.
//!
//! Indices pair an outbound call with its eventual response. The pool is a
//! closed system: every index handed out by [`IndexAllocator::allocate`]
//! must come back through [`IndexAllocator::deallocate`] once the call
//! settles, and the total population never changes.

use std::collections::VecDeque;

use crate::error::Error;

/// Number of correlation indices available per side of the bridge.
/// Matches the pool size of the script-side allocator in the page bootstrap.
pub const POOL_CAPACITY: usize = 100_000;

/// Fixed-capacity FIFO pool of correlation indices.
///
/// Reuse is oldest-first rather than most-recent-first so identifiers age
/// out evenly and stale-index bugs surface quickly under test.
#[derive(Debug)]
pub struct IndexAllocator {
    free: VecDeque<u64>,
}

impl IndexAllocator {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: (0..capacity as u64).collect(),
        }
    }

    /// Take the least-recently-available index out of the pool.
    ///
    /// All indices in flight is a caller leak or runaway call volume;
    /// it is reported as [`Error::IndexPoolExhausted`], never ignored.
    pub fn allocate(&mut self) -> Result<u64, Error> {
        self.free.pop_front().ok_or(Error::IndexPoolExhausted)
    }

    /// Return an index to the back of the pool.
    pub fn deallocate(&mut self, index: u64) {
        self.free.push_back(index);
    }

    /// Indices currently available.
    pub fn available(&self) -> usize {
        self.free.len()
    }
}

impl Default for IndexAllocator {
    fn default() -> Self {
        Self::new(POOL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_outstanding_indices_are_unique() {
        let mut alloc = IndexAllocator::new(64);
        let mut seen = HashSet::new();
        for _ in 0..64 {
            assert!(seen.insert(alloc.allocate().unwrap()));
        }
    }

    #[test]
    fn test_fifo_reuse_order() {
        let mut alloc = IndexAllocator::new(3);
        let a = alloc.allocate().unwrap();
        let b = alloc.allocate().unwrap();
        let c = alloc.allocate().unwrap();
        // Return out of allocation order; reuse must follow return order.
        alloc.deallocate(b);
        alloc.deallocate(a);
        alloc.deallocate(c);
        assert_eq!(alloc.allocate().unwrap(), b);
        assert_eq!(alloc.allocate().unwrap(), a);
        assert_eq!(alloc.allocate().unwrap(), c);
    }

    #[test]
    fn test_exhaustion_is_an_error() {
        let mut alloc = IndexAllocator::new(2);
        alloc.allocate().unwrap();
        alloc.allocate().unwrap();
        assert!(matches!(alloc.allocate(), Err(Error::IndexPoolExhausted)));
    }

    #[test]
    fn test_capacity_is_closed() {
        let mut alloc = IndexAllocator::new(10);
        assert_eq!(alloc.available(), 10);
        let a = alloc.allocate().unwrap();
        let b = alloc.allocate().unwrap();
        assert_eq!(alloc.available(), 8);
        alloc.deallocate(a);
        alloc.deallocate(b);
        assert_eq!(alloc.available(), 10);
    }

    #[test]
    fn test_default_pool_size() {
        let alloc = IndexAllocator::default();
        assert_eq!(alloc.available(), POOL_CAPACITY);
    }
}
