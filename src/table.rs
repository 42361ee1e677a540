use crate::{
    bucket::Bucket,
    error::{Error, Result},
    hash::hash_string,
    key_value::KeyValue,
};
use log::{debug, trace};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

pub const DEFAULT_SIZE: usize = 8;

/// Whether [`HashTable::set`] appended a new entry or overwrote an existing one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Inserted,
    Updated,
}

impl Display for Action {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Inserted => write!(formatter, "inserted"),
            Self::Updated => write!(formatter, "updated"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SetOutcome {
    pub bucket: usize,
    pub action: Action,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GetOutcome<'a> {
    pub bucket: usize,
    pub value: Option<&'a str>,
}

impl GetOutcome<'_> {
    pub fn found(&self) -> bool {
        self.value.is_some()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeleteOutcome {
    pub bucket: usize,
    pub deleted: bool,
}

/// Hash table from string keys to string values using separate chaining.
///
/// The bucket count only changes through [`HashTable::resize`]; no load
/// factor threshold ever grows the table behind the caller's back.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HashTable {
    buckets: Vec<Bucket>,
    count: usize,
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HashTable {
    /// Creates a table with [`DEFAULT_SIZE`] buckets.
    pub fn new() -> Self {
        Self {
            buckets: empty_buckets(DEFAULT_SIZE),
            count: 0,
        }
    }

    /// Creates a table with `size` buckets.
    pub fn with_size(size: usize) -> Result<Self> {
        check_size(size)?;

        Ok(Self {
            buckets: empty_buckets(size),
            count: 0,
        })
    }

    /// Returns a bucket count.
    pub fn size(&self) -> usize {
        self.buckets.len()
    }

    /// Returns a number of stored entries.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn bucket(&self, index: usize) -> Option<&Bucket> {
        self.buckets.get(index)
    }

    /// Returns the index of the bucket a key belongs to at the current size.
    pub fn bucket_index(&self, key: &str) -> usize {
        hash_string(key, self.size())
    }

    /// Iterates over entries in bucket order and then in chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.buckets
            .iter()
            .flat_map(Bucket::iter)
            .map(|key_value| (key_value.key(), key_value.value()))
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> SetOutcome {
        let key = key.into();
        let bucket = self.bucket_index(&key);
        debug!("set {key:?} in bucket {bucket}");

        let action = if self.buckets[bucket].insert(key, value.into()) {
            self.count += 1;
            Action::Inserted
        } else {
            Action::Updated
        };

        SetOutcome { bucket, action }
    }

    pub fn get(&self, key: &str) -> GetOutcome<'_> {
        let bucket = self.bucket_index(key);
        trace!("get {key:?} from bucket {bucket}");

        GetOutcome {
            bucket,
            value: self.buckets[bucket].find(key),
        }
    }

    pub fn delete(&mut self, key: &str) -> DeleteOutcome {
        let bucket = self.bucket_index(key);
        let deleted = self.buckets[bucket].remove(key).is_some();

        if deleted {
            self.count -= 1;
        }

        debug!("delete {key:?} from bucket {bucket}: {deleted}");

        DeleteOutcome { bucket, deleted }
    }

    /// Empties every bucket while keeping the bucket count.
    pub fn clear(&mut self) {
        debug!("clear {} entries", self.count);

        self.buckets = empty_buckets(self.size());
        self.count = 0;
    }

    /// Reallocates `size` buckets and rehashes every entry into them.
    ///
    /// A zero size is rejected and leaves the table untouched.
    pub fn resize(&mut self, size: usize) -> Result<()> {
        check_size(size)?;
        debug!("resize from {} to {size} buckets", self.size());

        let old = std::mem::replace(&mut self.buckets, empty_buckets(size));
        self.count = 0;

        for key_value in old.into_iter().flat_map(Bucket::into_entries) {
            let (key, value) = KeyValue::into_pair(key_value);
            self.set(key, value);
        }

        Ok(())
    }

    pub fn load_factor(&self) -> f64 {
        if self.size() == 0 {
            0.0
        } else {
            self.count as f64 / self.size() as f64
        }
    }
}

fn check_size(size: usize) -> Result<()> {
    if size == 0 {
        Err(Error::InvalidSize { size })
    } else {
        Ok(())
    }
}

fn empty_buckets(size: usize) -> Vec<Bucket> {
    (0..size).map(|_| Bucket::new()).collect()
}
