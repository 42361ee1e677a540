//! Separate-chaining hash table from string keys to string values.
//!
//! Buckets are plain ordered chains and the bucket count only changes when a
//! caller asks for it with [`HashTable::resize`], which rehashes every entry.
//! Keys are placed with a 31-multiplier hash over UTF-16 code units so that
//! bucket indices agree with other implementations of the same table.
//!
//! [`Session`] owns a table for an interactive front end and [`Snapshot`]
//! is the model a renderer draws buckets and chains from.

mod bucket;
mod config;
mod error;
mod hash;
mod key_value;
mod session;
mod table;
mod view;

pub use bucket::Bucket;
pub use config::Config;
pub use error::{Error, Result};
pub use hash::hash_string;
pub use key_value::KeyValue;
pub use session::{Report, Session};
pub use table::{Action, DeleteOutcome, GetOutcome, HashTable, SetOutcome, DEFAULT_SIZE};
pub use view::{BucketView, EntryView, Highlight, Snapshot};
