/// Scroll lock for the lightbox
///
/// While the lightbox is open the gallery grid must not scroll. The lock is
/// a guard over a shared flag: acquiring it sets the flag, dropping the
/// guard clears it, so the flag is released on every close path including
/// controller teardown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared scroll state read by the view
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    locked: Arc<AtomicBool>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a lock guard is alive
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }

    /// Acquire the lock. The returned guard releases it on drop.
    pub fn acquire(&self) -> ScrollLock {
        self.locked.store(true, Ordering::Relaxed);
        ScrollLock {
            locked: Arc::clone(&self.locked),
        }
    }
}

/// Guard that keeps grid scrolling suppressed while alive
#[derive(Debug)]
pub struct ScrollLock {
    locked: Arc<AtomicBool>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.locked.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_sets_flag() {
        let state = ScrollState::new();
        assert!(!state.is_locked());

        let lock = state.acquire();
        assert!(state.is_locked());
        drop(lock);
        assert!(!state.is_locked());
    }

    #[test]
    fn test_release_on_drop_scope() {
        let state = ScrollState::new();
        {
            let _lock = state.acquire();
            assert!(state.is_locked());
        }
        assert!(!state.is_locked());
    }
}
