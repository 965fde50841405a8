//! Ordered, typed key-value store populated during a parse.
//!
//! Entries live in a persistent vector, so snapshotting the whole context is
//! an O(1) clone. Combinators lean on this: every branch attempt is wrapped
//! in snapshot/attempt/restore, which makes the rewind-on-failure discipline
//! structural rather than a convention.

use std::sync::Arc;

use tradepost_foundation::{Error, ObjectId, Result, Value};

/// One named value bound during parsing.
type ContextEntry = (Arc<str>, Value);

/// An O(1) copy of a context's entries, used to rewind failed branches.
#[derive(Clone, Debug)]
pub struct ContextSnapshot {
    entries: im::Vector<ContextEntry>,
}

/// The typed key-value store a command's arguments parse into.
///
/// Keys are argument names, unique within one command's argument list.
/// Insertion order is preserved. Re-writing a key with a new value is
/// permitted (combinators may overwrite), but the type bound to a key never
/// changes within one command's schema.
#[derive(Clone, Debug, Default)]
pub struct CommandContext {
    entries: im::Vector<ContextEntry>,
}

impl CommandContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: im::Vector::new(),
        }
    }

    /// Returns the number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no key is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Binds `value` under `key`, overwriting any previous binding in place.
    pub fn put(&mut self, key: &str, value: Value) {
        if let Some(index) = self.index_of(key) {
            debug_assert_eq!(
                self.entries[index].1.value_type(),
                value.value_type(),
                "context key '{key}' re-bound with a different type"
            );
            self.entries.set(index, (Arc::from(key), value));
        } else {
            self.entries.push_back((Arc::from(key), value));
        }
    }

    /// Returns true if `key` is bound.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    /// Optional lookup: the value bound to `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index_of(key).map(|i| &self.entries[i].1)
    }

    /// Required lookup: the value bound to `key`.
    ///
    /// # Errors
    ///
    /// Returns a missing-value error if the key is absent. Only use this for
    /// keys the command's schema guarantees; optional-wrapped keys must go
    /// through [`Self::get`].
    pub fn require(&self, key: &str) -> Result<&Value> {
        self.get(key).ok_or_else(|| Error::missing_value(key))
    }

    /// Optional lookup of a boolean (e.g. a literal's presence flag).
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Optional lookup of an integer.
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_int)
    }

    /// Optional lookup of a string slice.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Optional lookup of an object reference.
    #[must_use]
    pub fn get_object(&self, key: &str) -> Option<ObjectId> {
        self.get(key).and_then(Value::as_object)
    }

    /// Required lookup of an integer.
    ///
    /// # Errors
    ///
    /// Returns a missing-value error if the key is absent, or a type
    /// mismatch if it is bound to something other than an integer.
    pub fn require_int(&self, key: &str) -> Result<i64> {
        let value = self.require(key)?;
        value.as_int().ok_or_else(|| {
            Error::type_mismatch(key, tradepost_foundation::Type::Int, value.value_type())
        })
    }

    /// Required lookup of a string slice.
    ///
    /// # Errors
    ///
    /// Returns a missing-value error if the key is absent, or a type
    /// mismatch if it is bound to something other than a string.
    pub fn require_str(&self, key: &str) -> Result<&str> {
        let value = self.require(key)?;
        value.as_str().ok_or_else(|| {
            Error::type_mismatch(key, tradepost_foundation::Type::String, value.value_type())
        })
    }

    /// Required lookup of an object reference.
    ///
    /// # Errors
    ///
    /// Returns a missing-value error if the key is absent, or a type
    /// mismatch if it is bound to something other than an object reference.
    pub fn require_object(&self, key: &str) -> Result<ObjectId> {
        let value = self.require(key)?;
        value.as_object().ok_or_else(|| {
            Error::type_mismatch(
                key,
                tradepost_foundation::Type::ObjectRef,
                value.value_type(),
            )
        })
    }

    /// Iterates bound entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Saves the current entries. O(1).
    #[must_use]
    pub fn snapshot(&self) -> ContextSnapshot {
        ContextSnapshot {
            entries: self.entries.clone(),
        }
    }

    /// Restores a previously saved snapshot. O(1).
    pub fn restore(&mut self, snapshot: &ContextSnapshot) {
        self.entries = snapshot.entries.clone();
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.as_ref() == key)
    }
}
