//! Mutex helpers.
//!
//! A poisoned lock means an agent thread panicked while holding it. Every
//! guarded structure here is consistent between statements, so the data is
//! taken back instead of propagating the panic to every other agent.

use std::sync::{Mutex, MutexGuard, TryLockError};

/// Blocking acquire.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Non-blocking acquire. `None` when another thread holds the lock.
pub(crate) fn try_lock<T>(mutex: &Mutex<T>) -> Option<MutexGuard<'_, T>> {
    match mutex.try_lock() {
        Ok(guard) => Some(guard),
        Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
        Err(TryLockError::WouldBlock) => None,
    }
}
