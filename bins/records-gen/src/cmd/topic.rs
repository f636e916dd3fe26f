use std::sync::LazyLock;

use regex::Regex;

use super::error::GenError;

/// Anchored at the start only; trailing topic segments are ignored.
pub const TOPIC_PATTERN: &str = r"^(?:db\.)?([-\w]+)\.([-\w]+)";

static TOPIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOPIC_PATTERN).expect("topic pattern is valid"));

/// Database and collection extracted from a topic name such as
/// `db.customers.addresses`.
#[derive(Debug, Clone)]
pub struct Topic {
    pub database: String,
    pub collection: String,
}

impl Topic {
    pub fn parse(raw: &str) -> Result<Self, GenError> {
        let caps = TOPIC_REGEX.captures(raw).ok_or_else(|| GenError::Topic {
            topic: raw.to_string(),
            pattern: TOPIC_PATTERN.to_string(),
        })?;
        Ok(Self {
            database: caps[1].to_string(),
            collection: caps[2].to_string(),
        })
    }

    /// `database.collection` — the stem of both output file names. The
    /// optional `db.` prefix never reaches the filesystem.
    pub fn file_stem(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }
}
