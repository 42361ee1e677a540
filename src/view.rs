//! Render model of a table.
//!
//! A renderer redraws from a [`Snapshot`] after every operation, marking the
//! bucket and key named by the operation's [`Highlight`].

use crate::table::HashTable;
use serde::Serialize;

/// Bucket and key touched by the latest operation.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Highlight {
    pub bucket: Option<usize>,
    pub key: Option<String>,
}

impl Highlight {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn bucket(bucket: usize) -> Self {
        Self {
            bucket: Some(bucket),
            key: None,
        }
    }

    pub fn key(bucket: usize, key: impl Into<String>) -> Self {
        Self {
            bucket: Some(bucket),
            key: Some(key.into()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub size: usize,
    pub count: usize,
    pub load_factor: f64,
    pub buckets: Vec<BucketView>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BucketView {
    pub index: usize,
    pub highlighted: bool,
    pub entries: Vec<EntryView>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EntryView {
    pub key: String,
    pub value: String,
    pub highlighted: bool,
}

impl Snapshot {
    pub fn new(table: &HashTable, highlight: &Highlight) -> Self {
        let buckets = table
            .buckets()
            .iter()
            .enumerate()
            .map(|(index, bucket)| BucketView {
                index,
                highlighted: highlight.bucket == Some(index),
                entries: bucket
                    .iter()
                    .map(|key_value| EntryView {
                        key: key_value.key().into(),
                        value: key_value.value().into(),
                        highlighted: highlight.key.as_deref() == Some(key_value.key()),
                    })
                    .collect(),
            })
            .collect();

        Self {
            size: table.size(),
            count: table.len(),
            load_factor: table.load_factor(),
            buckets,
        }
    }

    pub fn meta_line(&self) -> String {
        format!(
            "Buckets: {} | Pairs: {} | Load: {:.2}",
            self.size, self.count, self.load_factor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> HashTable {
        let mut table = HashTable::with_size(4).unwrap();

        table.set("name", "Sameer");
        table.set("school", "Laurier");

        table
    }

    #[test]
    fn snapshot() {
        let snapshot = Snapshot::new(&table(), &Highlight::key(3, "name"));

        assert_eq!(snapshot.size, 4);
        assert_eq!(snapshot.count, 2);
        assert_eq!(snapshot.buckets.len(), 4);
        assert!(snapshot.buckets[3].highlighted);
        assert!(!snapshot.buckets[0].highlighted);
        assert_eq!(
            snapshot.buckets[3].entries,
            [EntryView {
                key: "name".into(),
                value: "Sameer".into(),
                highlighted: true,
            }]
        );
        assert!(!snapshot.buckets[0].entries[0].highlighted);
    }

    #[test]
    fn no_highlight() {
        let snapshot = Snapshot::new(&table(), &Highlight::none());

        assert!(snapshot
            .buckets
            .iter()
            .all(|bucket| !bucket.highlighted
                && bucket.entries.iter().all(|entry| !entry.highlighted)));
    }

    #[test]
    fn meta_line() {
        assert_eq!(
            Snapshot::new(&table(), &Highlight::none()).meta_line(),
            "Buckets: 4 | Pairs: 2 | Load: 0.50"
        );
    }

    #[test]
    fn serialize() {
        let value = serde_json::to_value(Snapshot::new(&table(), &Highlight::bucket(0))).unwrap();

        assert_eq!(value["size"], json!(4));
        assert_eq!(value["load_factor"], json!(0.5));
        assert_eq!(
            value["buckets"][0],
            json!({
                "index": 0,
                "highlighted": true,
                "entries": [{ "key": "school", "value": "Laurier", "highlighted": false }],
            })
        );
        assert_eq!(value["buckets"][1]["entries"], json!([]));
    }
}
