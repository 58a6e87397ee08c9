//! Cache Traits
//!
//! The public call contract. `Cache` covers plain key-value access and
//! `TaggedCache` layers tag-scoped operations on the same key space.

use std::any::{type_name, Any};
use std::time::Duration;

use crate::error::{CacheError, Result};

// == Cache ==
/// Key-value access with lazy TTL expiration.
pub trait Cache {
    /// The single value type held by this instance.
    type Value: Clone + Send + Sync + 'static;

    /// Returns the value for `key`, or `None` if it was never set, was
    /// deleted, or has expired.
    fn get(&self, key: &str) -> Result<Option<Self::Value>>;

    /// Stores `value` under `key`, replacing any prior entry.
    ///
    /// A zero `ttl` never expires.
    fn set(&self, key: &str, value: Self::Value, ttl: Duration) -> Result<()>;

    /// Removes `key` if present. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;

    /// True iff `get(key)` would return a value.
    fn is_hit(&self, key: &str) -> Result<bool>;

    /// Removes every expired entry and returns how many were removed.
    fn clear_expired(&self) -> Result<usize>;

    /// Stores a type-erased value, failing with `TypeMismatch` if it is not
    /// `Self::Value`. Nothing is written on mismatch.
    fn set_any(&self, key: &str, value: Box<dyn Any + Send>, ttl: Duration) -> Result<()> {
        let value = downcast_value::<Self::Value>(value)?;
        self.set(key, value, ttl)
    }
}

// == Tagged Cache ==
/// Tag-scoped grouping and invalidation on top of [`Cache`].
///
/// A direct [`Cache::delete`] does not drop the key from the tags it was
/// stored under; `get_keys` keeps listing it until the tag is deleted or swept.
pub trait TaggedCache: Cache {
    /// Stores `value` under `key` and adds `key` to `tag` in one step.
    fn set_with_tag(
        &self,
        key: &str,
        tag: &str,
        value: Self::Value,
        ttl: Duration,
    ) -> Result<()>;

    /// Returns the member keys of `tag` in no particular order, without
    /// checking whether their values are still live.
    fn get_keys(&self, tag: &str) -> Result<Vec<String>>;

    /// Removes `tag` and deletes every key stored under it.
    fn delete_with_tag(&self, tag: &str) -> Result<()>;

    /// Removes every tag none of whose members is a hit, along with those
    /// members. Returns how many tags were removed.
    fn clear_tag(&self) -> Result<usize>;

    /// Type-erased variant of [`TaggedCache::set_with_tag`].
    fn set_any_with_tag(
        &self,
        key: &str,
        tag: &str,
        value: Box<dyn Any + Send>,
        ttl: Duration,
    ) -> Result<()> {
        let value = downcast_value::<Self::Value>(value)?;
        self.set_with_tag(key, tag, value, ttl)
    }
}

fn downcast_value<V: 'static>(value: Box<dyn Any + Send>) -> Result<V> {
    value
        .downcast::<V>()
        .map(|boxed| *boxed)
        .map_err(|_| CacheError::TypeMismatch {
            expected: type_name::<V>(),
        })
}
