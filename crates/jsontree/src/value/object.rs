//! The object variant: an ordered, duplicate-key-tolerant sequence of
//! [`Member`]s.
//!
//! A [`std::collections::BTreeMap`] or [`std::collections::HashMap`] cannot
//! represent this data model: JSON objects preserve insertion order and the
//! grammar does not forbid repeated keys, and this library deliberately does
//! not reject them (see the crate-level docs on duplicate-key semantics).
//! `JsonObject` is therefore a thin, capacity-managed wrapper around
//! `Vec<Member>`.

use bstr::BString;

use crate::value::Value;

/// A single `(key, value)` pair inside a [`JsonObject`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Member {
    /// The member's key. Stored as raw bytes for the same reason string
    /// values are: JSON string content is not guaranteed to be valid UTF-8.
    pub key: BString,
    /// The member's value.
    pub value: Value,
}

impl Member {
    /// Creates a new member from a key convertible to [`BString`] and a
    /// value.
    pub fn new(key: impl Into<BString>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// An ordered, capacity-managed sequence of [`Member`]s.
///
/// Lookups ([`find_index`](Self::find_index), [`get`](Self::get)) are linear
/// scans that return the first matching key, matching the reference
/// implementation's duplicate-key semantics: a later member with the same
/// key as an earlier one is reachable only by index, never by key.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JsonObject {
    members: Vec<Member>,
}

impl JsonObject {
    /// Creates an empty object with no backing allocation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty object with room for `capacity` members before the
    /// next push reallocates.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    /// The number of members currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the object has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The number of members the backing storage can hold without
    /// reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.members.capacity()
    }

    /// Ensures room for at least `additional` more members without
    /// reallocating.
    pub fn reserve(&mut self, additional: usize) {
        self.members.reserve(additional);
    }

    /// Releases any excess capacity beyond what is currently used.
    pub fn shrink_to_fit(&mut self) {
        self.members.shrink_to_fit();
    }

    /// Removes every member, keeping the backing allocation (capacity is
    /// unaffected — it never shrinks implicitly).
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Iterates over members in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Member> {
        self.members.iter()
    }

    /// The member at `index`, by position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn member(&self, index: usize) -> &Member {
        &self.members[index]
    }

    /// The index of the first member whose key equals `key`, byte for byte.
    #[must_use]
    pub fn find_index(&self, key: &[u8]) -> Option<usize> {
        self.members.iter().position(|m| m.key.as_slice() == key)
    }

    /// The value of the first member whose key equals `key`.
    #[must_use]
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.find_index(key).map(|i| &self.members[i].value)
    }

    /// A mutable reference to the value of the first member whose key equals
    /// `key`.
    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut Value> {
        let index = self.find_index(key)?;
        Some(&mut self.members[index].value)
    }

    /// Returns a mutable reference to the existing value for `key` if
    /// present; otherwise appends a fresh `Member` with a freshly copied
    /// owned key and a `Value::Null` value, growing like
    /// [`JsonArray::push`](super::JsonArray::push), and returns that.
    pub fn set(&mut self, key: impl Into<BString>, value: Value) -> &mut Value {
        let key = key.into();
        if let Some(index) = self.find_index(&key) {
            self.members[index].value = value;
            &mut self.members[index].value
        } else {
            self.members.push(Member::new(key, value));
            &mut self.members.last_mut().expect("just pushed").value
        }
    }

    /// Removes and returns the member at `index`, shifting later members
    /// down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn remove_index(&mut self, index: usize) -> Member {
        self.members.remove(index)
    }

    /// Removes the first member whose key equals `key`, if any, returning
    /// it.
    pub fn remove(&mut self, key: &[u8]) -> Option<Member> {
        let index = self.find_index(key)?;
        Some(self.remove_index(index))
    }
}

impl PartialEq for JsonObject {
    /// Set-of-keys equality: for every key of `self`, `other` must contain at
    /// least one member with that key whose value is equal. Member order
    /// does not matter. This is deliberately not the positional `Vec`
    /// comparison `#[derive(PartialEq)]` would give: two objects built from
    /// the same members in different orders — or, per the data model's
    /// tolerance for duplicate keys, built with a different but
    /// first-match-equivalent set of duplicates — compare equal.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.members
            .iter()
            .all(|m| other.get(&m.key) == Some(&m.value))
    }
}

impl FromIterator<Member> for JsonObject {
    fn from_iter<T: IntoIterator<Item = Member>>(iter: T) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for JsonObject {
    type Item = Member;
    type IntoIter = std::vec::IntoIter<Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = &'a Member;
    type IntoIter = core::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
