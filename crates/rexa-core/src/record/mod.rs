//! Conversion records: one completed regex → automata conversion plus metadata.

mod date;
mod fields;
mod id;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::Resolver;

pub use fields::{ResourceField, Resources};
pub use id::RecordIdFormat;

/// What the conversion service returns: the six optional resource references.
///
/// The service also echoes its own `id` and `regex`; those are ignored and the
/// client-side values win.
pub type ConversionPayload = Resources;

/// A completed conversion as stored in the history.
///
/// Records are never mutated once built; "updating" one means writing a new
/// value into the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub id: String,
    pub regex: String,
    #[serde(serialize_with = "date::serialize")]
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub resources: Resources,
}

impl ConversionRecord {
    /// Builds a record; `date` is truncated to milliseconds so it survives a
    /// trip through the persisted ISO-8601 form unchanged.
    pub fn new(id: String, regex: String, date: DateTime<Utc>, resources: Resources) -> Self {
        Self {
            id,
            regex,
            date: date.trunc_subsecs(3),
            resources,
        }
    }

    /// Resolves every present resource field. Safe to repeat.
    pub fn normalize(self, resolver: &Resolver) -> Self {
        Self {
            resources: self.resources.normalize(resolver),
            ..self
        }
    }

    /// `(title, image URL)` for the NFA, DFA and minimized DFA panels.
    /// Empty references count as missing.
    pub fn visualizations(&self) -> Vec<(&'static str, Option<&str>)> {
        ResourceField::IMAGES
            .iter()
            .map(|f| (f.label(), self.resources.get(*f).filter(|s| !s.is_empty())))
            .collect()
    }

    /// `(label, URL)` for each downloadable JSON artifact that is present.
    pub fn download_links(&self) -> Vec<(&'static str, &str)> {
        ResourceField::ARTIFACTS
            .iter()
            .filter_map(|f| {
                self.resources
                    .get(*f)
                    .filter(|s| !s.is_empty())
                    .map(|href| (f.label(), href))
            })
            .collect()
    }
}
