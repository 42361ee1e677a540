use crate::key_value::KeyValue;
use serde::Serialize;

/// Chain of entries sharing one bucket index, oldest first.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Bucket(Vec<KeyValue>);

impl Bucket {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn entries(&self) -> &[KeyValue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyValue> {
        self.0.iter()
    }

    fn find_index(&self, key: &str) -> Option<usize> {
        for (index, key_value) in self.0.iter().enumerate() {
            if key_value.key() == key {
                return Some(index);
            }
        }

        None
    }

    /// Inserts an entry or overwrites the value of an existing one in place.
    /// Returns true if a new entry was appended.
    pub(crate) fn insert(&mut self, key: String, value: String) -> bool {
        match self.find_index(&key) {
            Some(index) => {
                self.0[index].set_value(value);
                false
            }
            None => {
                self.0.push(KeyValue::new(key, value));
                true
            }
        }
    }

    pub(crate) fn find(&self, key: &str) -> Option<&str> {
        self.find_index(key).map(|index| self.0[index].value())
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<KeyValue> {
        self.find_index(key).map(|index| self.0.remove(index))
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = KeyValue> {
        self.0.into_iter()
    }
}
