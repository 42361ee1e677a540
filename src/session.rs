use crate::{
    config::Config,
    error::{Error, Result},
    table::{Action, HashTable},
    view::{Highlight, Snapshot},
};
use log::{debug, warn};

const DEMO_ENTRIES: [(&str, &str); 4] = [
    ("name", "Sameer"),
    ("city", "Waterloo"),
    ("school", "Laurier"),
    ("github", "Sameer-Abdullah"),
];

/// Human-readable summary of an operation plus the render hint it leaves.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub result: String,
    pub feedback: String,
    pub highlight: Highlight,
}

/// Owner of one table that sits between raw user input and the table.
///
/// Input is trimmed and empty keys or values are rejected before they reach
/// the table. Each operation returns a [`Report`] and remembers its highlight
/// for the next [`Session::snapshot`].
#[derive(Clone, Debug)]
pub struct Session {
    config: Config,
    table: HashTable,
    highlight: Highlight,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            table: HashTable::new(),
            highlight: Highlight::none(),
        }
    }

    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            table: HashTable::with_size(config.initial_size)?,
            config,
            highlight: Highlight::none(),
        })
    }

    /// Creates a session whose table holds a few sample entries.
    pub fn with_demo_entries() -> Self {
        let mut session = Self::new();

        for (key, value) in DEMO_ENTRIES {
            session.table.set(key, value);
        }

        session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn table(&self) -> &HashTable {
        &self.table
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.table, &self.highlight)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<Report> {
        let key = required(key, Error::EmptyKey)?;
        let value = required(value, Error::EmptyValue)?;
        let outcome = self.table.set(key, value);

        let feedback = match outcome.action {
            Action::Inserted => format!(
                "Inserted \"{key}\" into bucket [{}]. Avg O(1).",
                outcome.bucket
            ),
            Action::Updated => format!("Updated \"{key}\" in bucket [{}]. Avg O(1).", outcome.bucket),
        };

        Ok(self.report(
            format!("{key} → {value}"),
            feedback,
            Highlight::key(outcome.bucket, key),
        ))
    }

    pub fn get(&mut self, key: &str) -> Result<Report> {
        let key = required(key, Error::EmptyKey)?;
        let outcome = self.table.get(key);
        let bucket = outcome.bucket;

        let (result, feedback, highlight) = match outcome.value {
            Some(value) => (
                format!("{key} → {value}"),
                format!("Found \"{key}\" in bucket [{bucket}]. Avg O(1)."),
                Highlight::key(bucket, key),
            ),
            None => (
                "not found".into(),
                format!("\"{key}\" not found. Checked bucket [{bucket}]."),
                Highlight::bucket(bucket),
            ),
        };

        Ok(self.report(result, feedback, highlight))
    }

    pub fn delete(&mut self, key: &str) -> Result<Report> {
        let key = required(key, Error::EmptyKey)?;
        let outcome = self.table.delete(key);
        let bucket = outcome.bucket;

        let (result, feedback) = if outcome.deleted {
            (
                "deleted",
                format!("Deleted \"{key}\" from bucket [{bucket}]. Avg O(1)."),
            )
        } else {
            (
                "not found",
                format!("Can't delete \"{key}\": not found (bucket [{bucket}])."),
            )
        };

        Ok(self.report(result.into(), feedback, Highlight::bucket(bucket)))
    }

    pub fn resize(&mut self, size: usize) -> Result<Report> {
        if let Err(error) = self.config.check_resize(size) {
            warn!("rejected resize: {error}");
            return Err(error);
        }

        self.table.resize(size)?;

        Ok(self.report(
            format!("resized to {size}"),
            format!("Resized table to {size} buckets. Rehashed all keys."),
            Highlight::none(),
        ))
    }

    pub fn clear(&mut self) -> Report {
        self.table.clear();

        self.report(
            "-".into(),
            "Cleared the hash table.".into(),
            Highlight::none(),
        )
    }

    fn report(&mut self, result: String, feedback: String, highlight: Highlight) -> Report {
        debug!("{feedback}");
        self.highlight = highlight.clone();

        Report {
            result,
            feedback,
            highlight,
        }
    }
}

fn required(input: &str, error: Error) -> Result<&str> {
    let input = input.trim();

    if input.is_empty() {
        warn!("rejected input: {error}");
        Err(error)
    } else {
        Ok(input)
    }
}
