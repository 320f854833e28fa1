//! Lazily computed values

use std::fmt;

use once_cell::sync::Lazy;

type Initializer<T> = Box<dyn FnOnce() -> T + Send>;

/// A value computed on first access and memoized afterwards.
///
/// The initializer runs at most once, even when several threads race on the
/// first read; the losers block until the winner has stored the value.
pub struct Deferred<T> {
    cell: Lazy<T, Initializer<T>>,
}

impl<T> Deferred<T> {
    pub fn new<F>(initializer: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let initializer: Initializer<T> = Box::new(initializer);
        Self {
            cell: Lazy::new(initializer),
        }
    }

    /// Value computed on first call
    pub fn get(&self) -> &T {
        Lazy::force(&self.cell)
    }

    pub fn is_initialized(&self) -> bool {
        Lazy::get(&self.cell).is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Lazy::get(&self.cell) {
            Some(value) => f.debug_tuple("Deferred").field(value).finish(),
            None => f.write_str("Deferred(<uninitialized>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_initializer_not_run_until_read() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let value = Deferred::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            42
        });

        assert!(!value.is_initialized());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(*value.get(), 42);
        assert_eq!(*value.get(), 42);
        assert!(value.is_initialized());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_debug_output() {
        let value = Deferred::new(|| "region");
        assert_eq!(format!("{:?}", value), "Deferred(<uninitialized>)");
        value.get();
        assert_eq!(format!("{:?}", value), "Deferred(\"region\")");
    }
}
