//! Result caching. The cache is an injected object behind the
//! `ChartCache` port, never ambient global state.

use crate::domain::model::DesignChart;
use crate::domain::ports::ChartCache;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

struct Inner {
    entries: HashMap<u64, DesignChart>,
    order: VecDeque<u64>,
}

/// Bounded cache keyed by the `BirthData` cache key. Over capacity, the
/// oldest inserted key is evicted; there is no TTL. A single mutex guards
/// both maps, and nothing blocking happens while it is held.
pub struct BoundedChartCache {
    capacity: usize,
    inner: Mutex<Inner>,
}

impl BoundedChartCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock only means a panic elsewhere mid-insert; the
        // cache content stays usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ChartCache for BoundedChartCache {
    fn get(&self, key: u64) -> Option<DesignChart> {
        self.lock().entries.get(&key).cloned()
    }

    fn put(&self, key: u64, chart: DesignChart) {
        if self.capacity == 0 {
            return;
        }
        let mut inner = self.lock();
        if inner.entries.insert(key, chart).is_none() {
            inner.order.push_back(key);
        }
        while inner.order.len() > self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
            }
        }
    }

    fn len(&self) -> usize {
        self.lock().entries.len()
    }
}

/// Cache that stores nothing, for callers that want every request
/// recomputed.
pub struct NoopCache;

impl ChartCache for NoopCache {
    fn get(&self, _key: u64) -> Option<DesignChart> {
        None
    }

    fn put(&self, _key: u64, _chart: DesignChart) {}

    fn len(&self) -> usize {
        0
    }
}
