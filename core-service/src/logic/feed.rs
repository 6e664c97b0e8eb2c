//! Rolling Feed - Bounded newest-first history
//!
//! Quản lý feed hiển thị: phần tử mới nhất luôn ở đầu, quá capacity thì
//! phần tử cũ nhất bị loại bỏ. No reordering by timestamp or severity.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FEED_CAPACITY;

// ============================================================================
// FEED
// ============================================================================

#[derive(Debug, Clone)]
pub struct RollingFeed<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> Default for RollingFeed<T> {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_CAPACITY)
    }
}

impl<T> RollingFeed<T> {
    /// Capacity is at least 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend an entry, returns the evicted oldest entry if the feed was full
    pub fn push(&mut self, entry: T) -> Option<T> {
        self.entries.push_front(entry);

        let mut evicted = None;
        while self.entries.len() > self.capacity {
            evicted = self.entries.pop_back();
        }
        evicted
    }

    /// Reset contents. `entries` are given newest-first; extras past
    /// capacity are dropped from the tail.
    pub fn replace_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.entries.clear();
        self.entries
            .extend(entries.into_iter().take(self.capacity));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&T> {
        self.entries.front()
    }

    /// Newest-first iteration
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn status(&self) -> FeedStatus {
        FeedStatus {
            current_size: self.entries.len(),
            capacity: self.capacity,
            fill_percent: self.entries.len() as f32 / self.capacity as f32 * 100.0,
        }
    }
}

impl<T: Clone> RollingFeed<T> {
    /// Owned newest-first copy for the view layer
    pub fn snapshot(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}

/// Feed fill information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedStatus {
    pub current_size: usize,
    pub capacity: usize,
    pub fill_percent: f32,
}

// ============================================================================
// TESTS
// ============================================================================
