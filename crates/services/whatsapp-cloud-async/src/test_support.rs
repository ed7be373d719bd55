//! Test-only utilities for safely mutating process-global state in tests.

/// RAII guard over a set of environment variables.
///
/// Every variable touched through the guard is restored to its previous value
/// (or removed if it was unset) when the guard is dropped, in reverse order.
/// Only safe when the test is marked `#[serial(env)]`.
#[derive(Debug, Default)]
pub struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    /// Set `key` to `val` for the lifetime of the guard.
    #[must_use]
    pub fn set(mut self, key: &'static str, val: &str) -> Self {
        self.saved.push((key, std::env::var(key).ok()));
        // SAFETY: callers serialize env access with `#[serial(env)]`.
        unsafe { std::env::set_var(key, val) };
        self
    }

    /// Unset `key` for the lifetime of the guard.
    #[must_use]
    pub fn remove(mut self, key: &'static str) -> Self {
        self.saved.push((key, std::env::var(key).ok()));
        // SAFETY: callers serialize env access with `#[serial(env)]`.
        unsafe { std::env::remove_var(key) };
        self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, prev) in self.saved.drain(..).rev() {
            match prev {
                // SAFETY: see `set`.
                Some(v) => unsafe { std::env::set_var(key, v) },
                // SAFETY: see `remove`.
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}
