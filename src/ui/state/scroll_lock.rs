// SPDX-License-Identifier: MPL-2.0
//! Page scroll lock held while an overlay covers the page.
//!
//! [`ScrollLock`] is a cloneable handle to one window-wide flag. Each
//! [`ScrollGuard`] returned by [`ScrollLock::acquire`] keeps the page locked
//! until it is dropped, so releasing the lock cannot be forgotten: it happens
//! when the owner of the guard goes away, whichever way that occurs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared handle to the page scroll lock.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks page scrolling until the returned guard is dropped.
    #[must_use = "the page unlocks as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollGuard {
        let previous = self.holders.fetch_add(1, Ordering::AcqRel);
        if previous == 0 {
            log::debug!("Page scroll locked");
        }
        ScrollGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Whether any guard is alive.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::Acquire) > 0
    }
}

/// Keeps the page scroll lock engaged for as long as it lives.
#[derive(Debug)]
pub struct ScrollGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        if self.holders.fetch_sub(1, Ordering::AcqRel) == 1 {
            log::debug!("Page scroll unlocked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lock_is_released() {
        assert!(!ScrollLock::new().is_locked());
    }

    #[test]
    fn guard_locks_until_dropped() {
        let lock = ScrollLock::new();
        let guard = lock.acquire();
        assert!(lock.is_locked());

        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn clones_share_the_same_flag() {
        let lock = ScrollLock::new();
        let other = lock.clone();

        let _guard = other.acquire();
        assert!(lock.is_locked());
    }

    #[test]
    fn lock_stays_engaged_while_any_guard_lives() {
        let lock = ScrollLock::new();
        let first = lock.acquire();
        let second = lock.acquire();

        drop(first);
        assert!(lock.is_locked());

        drop(second);
        assert!(!lock.is_locked());
    }
}
