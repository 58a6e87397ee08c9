//! Error types for the cache
//!
//! Provides unified error handling using thiserror. A miss or an expired entry
//! is never an error; those surface as `None` from the read operations.

use std::sync::PoisonError;

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A type-erased value did not match the cache's value type
    #[error("Type mismatch: expected value of type {expected}")]
    TypeMismatch {
        /// Name of the value type the cache holds
        expected: &'static str,
    },

    /// Internal storage failure (poisoned lock)
    #[error("Store fault: {0}")]
    StoreFault(String),
}

impl<T> From<PoisonError<T>> for CacheError {
    fn from(err: PoisonError<T>) -> Self {
        tracing::warn!("Cache lock poisoned: {}", err);
        CacheError::StoreFault(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::thread;

    #[test]
    fn test_poisoned_lock_maps_to_store_fault() {
        let lock = Arc::new(Mutex::new(0));
        let cloned = Arc::clone(&lock);
        let _ = thread::spawn(move || {
            let _guard = cloned.lock().unwrap();
            panic!("poison");
        })
        .join();

        let err: CacheError = lock.lock().unwrap_err().into();
        assert!(matches!(err, CacheError::StoreFault(_)));
    }

    #[test]
    fn test_error_display() {
        let err = CacheError::TypeMismatch { expected: "String" };
        assert_eq!(err.to_string(), "Type mismatch: expected value of type String");
        assert_eq!(
            CacheError::StoreFault("poisoned".into()).to_string(),
            "Store fault: poisoned"
        );
    }
}
