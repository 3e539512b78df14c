//! Indexed binary min-heap keyed by `f64`.
//!
//! Items are dense identifiers in `[0, capacity)`. A position index maps each
//! stored item to its slot in the heap array, giving O(1) membership tests and
//! O(log n) `decrease_key`. Ties between equal keys are broken by item
//! identifier so extraction order is deterministic.

use std::cmp::Ordering;

use crate::error::HeapError;

/// Binary min-heap over item identifiers with decreasable `f64` keys.
#[derive(Clone, Debug)]
pub struct IndexedMinHeap {
    heap: Vec<usize>,
    keys: Vec<f64>,
    position: Vec<Option<usize>>,
}

impl IndexedMinHeap {
    /// Creates an empty queue able to hold items `0..capacity`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            keys: vec![f64::INFINITY; capacity],
            position: vec![None; capacity],
        }
    }

    /// Returns the number of stored items.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.heap.len() }

    /// Returns `true` when the queue holds no items.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.heap.is_empty() }

    /// Returns `true` when `item` is currently stored.
    #[must_use]
    pub fn contains(&self, item: usize) -> bool {
        self.position.get(item).is_some_and(Option::is_some)
    }

    /// Returns the key of `item` while it is stored.
    #[must_use]
    pub fn key_of(&self, item: usize) -> Option<f64> {
        self.contains(item).then(|| self.keys[item])
    }

    /// Inserts `item` with `key`.
    ///
    /// # Errors
    /// Returns [`HeapError::ItemOutOfRange`] when `item` exceeds the capacity
    /// and [`HeapError::DuplicateItem`] when it is already stored.
    pub fn insert(&mut self, item: usize, key: f64) -> Result<(), HeapError> {
        self.check_item(item)?;
        if self.contains(item) {
            return Err(HeapError::DuplicateItem { item });
        }
        let slot = self.heap.len();
        self.heap.push(item);
        self.keys[item] = key;
        self.position[item] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the item with the smallest key.
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] when the queue is empty.
    pub fn extract_min(&mut self) -> Result<(usize, f64), HeapError> {
        if self.heap.is_empty() {
            return Err(HeapError::Underflow);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let item = self.heap.pop().ok_or(HeapError::Underflow)?;
        self.position[item] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((item, self.keys[item]))
    }

    /// Lowers the key of a stored item. Setting an equal key is accepted.
    ///
    /// # Errors
    /// Returns [`HeapError::MissingItem`] when `item` is not stored and
    /// [`HeapError::KeyIncrease`] when `key` exceeds the current key.
    pub fn decrease_key(&mut self, item: usize, key: f64) -> Result<(), HeapError> {
        self.check_item(item)?;
        let slot = self.position[item].ok_or(HeapError::MissingItem { item })?;
        let current = self.keys[item];
        if key.total_cmp(&current) == Ordering::Greater {
            return Err(HeapError::KeyIncrease {
                item,
                current,
                requested: key,
            });
        }
        self.keys[item] = key;
        self.sift_up(slot);
        Ok(())
    }

    /// Inserts `item` or lowers its key, whichever applies.
    ///
    /// # Errors
    /// Propagates the errors of [`IndexedMinHeap::insert`] and
    /// [`IndexedMinHeap::decrease_key`].
    pub fn push_or_decrease(&mut self, item: usize, key: f64) -> Result<(), HeapError> {
        if self.contains(item) {
            self.decrease_key(item, key)
        } else {
            self.insert(item, key)
        }
    }

    fn check_item(&self, item: usize) -> Result<(), HeapError> {
        if item < self.position.len() {
            Ok(())
        } else {
            Err(HeapError::ItemOutOfRange {
                item,
                capacity: self.position.len(),
            })
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (left, right) = (self.heap[a], self.heap[b]);
        self.keys[left]
            .total_cmp(&self.keys[right])
            .then_with(|| left.cmp(&right))
            == Ordering::Less
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, slot) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::{error::HeapErrorCode, test_utils::suite_proptest_config};

    #[test]
    fn extract_from_empty_queue_underflows() {
        let mut heap = IndexedMinHeap::with_capacity(3);
        assert_eq!(heap.extract_min(), Err(HeapError::Underflow));
    }

    #[test]
    fn extracts_in_key_order_with_id_tie_break() {
        let mut heap = IndexedMinHeap::with_capacity(4);
        for (item, key) in [(3, 1.0), (0, 2.0), (1, 1.0), (2, 0.5)] {
            heap.insert(item, key).expect("item fits");
        }
        let order: Vec<_> = std::iter::from_fn(|| heap.extract_min().ok())
            .map(|(item, _)| item)
            .collect();
        assert_eq!(order, vec![2, 1, 3, 0]);
    }

    #[test]
    fn decrease_key_moves_item_forward() {
        let mut heap = IndexedMinHeap::with_capacity(3);
        heap.insert(0, 5.0).expect("item fits");
        heap.insert(1, 3.0).expect("item fits");
        heap.decrease_key(0, 1.0).expect("key decreases");
        assert_eq!(heap.key_of(0), Some(1.0));
        assert_eq!(heap.extract_min(), Ok((0, 1.0)));
        assert!(!heap.contains(0));
    }

    #[rstest]
    #[case::larger_key(0, 9.0, HeapErrorCode::KeyIncrease)]
    #[case::absent_item(1, 0.0, HeapErrorCode::MissingItem)]
    #[case::beyond_capacity(7, 0.0, HeapErrorCode::ItemOutOfRange)]
    fn decrease_key_contract_violations(
        #[case] item: usize,
        #[case] key: f64,
        #[case] expected: HeapErrorCode,
    ) {
        let mut heap = IndexedMinHeap::with_capacity(2);
        heap.insert(0, 4.0).expect("item fits");
        let err = heap.decrease_key(item, key).expect_err("contract violated");
        assert_eq!(err.code(), expected);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut heap = IndexedMinHeap::with_capacity(2);
        heap.insert(1, 4.0).expect("item fits");
        assert_eq!(
            heap.insert(1, 2.0),
            Err(HeapError::DuplicateItem { item: 1 })
        );
    }

    proptest! {
        #![proptest_config(suite_proptest_config(256))]

        #[test]
        fn extraction_yields_sorted_keys(
            keys in prop::collection::vec(-1.0e6f64..1.0e6, 0..64),
            decreases in prop::collection::vec((any::<prop::sample::Index>(), 0.0f64..1.0e3), 0..16),
        ) {
            let mut heap = IndexedMinHeap::with_capacity(keys.len());
            let mut expected = keys.clone();
            for (item, key) in keys.iter().enumerate() {
                heap.insert(item, *key).map_err(|err| TestCaseError::fail(err.to_string()))?;
            }
            if !keys.is_empty() {
                for (index, delta) in decreases {
                    let item = index.index(keys.len());
                    let lowered = expected[item] - delta;
                    heap.decrease_key(item, lowered)
                        .map_err(|err| TestCaseError::fail(err.to_string()))?;
                    expected[item] = lowered;
                }
            }
            expected.sort_by(f64::total_cmp);

            let mut extracted = Vec::with_capacity(keys.len());
            while let Ok((_, key)) = heap.extract_min() {
                extracted.push(key);
            }
            prop_assert_eq!(extracted, expected);
        }
    }
}
