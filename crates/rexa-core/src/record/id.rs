//! Client-side record id generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

/// How new record ids are minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordIdFormat {
    /// Random v4 UUID.
    #[default]
    Uuid,
    /// `<unix millis>-<random hex>`, for platforms without a secure RNG.
    Timestamp,
}

impl RecordIdFormat {
    pub fn generate(self, now: DateTime<Utc>) -> String {
        match self {
            RecordIdFormat::Uuid => uuid::Uuid::new_v4().to_string(),
            RecordIdFormat::Timestamp => {
                // RandomState is keyed per instance, so each call yields a fresh suffix.
                let suffix = RandomState::new().hash_one(now.timestamp_nanos_opt());
                format!("{}-{:x}", now.timestamp_millis(), suffix)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_distinct() {
        let now = Utc::now();
        let a = RecordIdFormat::Uuid.generate(now);
        let b = RecordIdFormat::Uuid.generate(now);
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn timestamp_ids_carry_millis_prefix() {
        let now: DateTime<Utc> = "2024-02-01T10:00:00.123Z".parse().unwrap();
        let id = RecordIdFormat::Timestamp.generate(now);
        let (millis, suffix) = id.split_once('-').unwrap();
        assert_eq!(millis, now.timestamp_millis().to_string());
        assert!(!suffix.is_empty());
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
