//! The six resource fields carried by a conversion.

use serde::{Deserialize, Deserializer, Serialize};

use crate::resource::{ResourceKind, Resolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceField {
    NfaImg,
    DfaImg,
    MindfaImg,
    NfaJson,
    DfaJson,
    MindfaJson,
}

impl ResourceField {
    pub const IMAGES: [ResourceField; 3] = [Self::NfaImg, Self::DfaImg, Self::MindfaImg];
    pub const ARTIFACTS: [ResourceField; 3] = [Self::NfaJson, Self::DfaJson, Self::MindfaJson];
    pub const ALL: [ResourceField; 6] = [
        Self::NfaImg,
        Self::DfaImg,
        Self::MindfaImg,
        Self::NfaJson,
        Self::DfaJson,
        Self::MindfaJson,
    ];

    /// JSON key used by the service and the persisted history.
    pub fn key(self) -> &'static str {
        match self {
            Self::NfaImg => "nfa_img",
            Self::DfaImg => "dfa_img",
            Self::MindfaImg => "mindfa_img",
            Self::NfaJson => "nfa_json",
            Self::DfaJson => "dfa_json",
            Self::MindfaJson => "mindfa_json",
        }
    }

    pub fn kind(self) -> ResourceKind {
        match self {
            Self::NfaImg | Self::DfaImg | Self::MindfaImg => ResourceKind::Image,
            Self::NfaJson | Self::DfaJson | Self::MindfaJson => ResourceKind::Artifact,
        }
    }

    /// Panel title for images, link text for artifacts.
    pub fn label(self) -> &'static str {
        match self {
            Self::NfaImg => "NFA",
            Self::DfaImg => "DFA",
            Self::MindfaImg => "Minimized DFA",
            Self::NfaJson => "Download NFA JSON",
            Self::DfaJson => "Download DFA JSON",
            Self::MindfaJson => "Download Minimized DFA JSON",
        }
    }
}

/// Optional resource references, as received or as resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub nfa_img: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub dfa_img: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub mindfa_img: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub nfa_json: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub dfa_json: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub mindfa_json: Option<String>,
}

/// Non-string values (numbers, objects, null) are treated as missing.
fn lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Null) | None => Ok(None),
        Some(other) => {
            tracing::debug!("ignoring non-string resource reference: {}", other);
            Ok(None)
        }
    }
}

impl Resources {
    pub fn get(&self, field: ResourceField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    fn slot(&self, field: ResourceField) -> &Option<String> {
        match field {
            ResourceField::NfaImg => &self.nfa_img,
            ResourceField::DfaImg => &self.dfa_img,
            ResourceField::MindfaImg => &self.mindfa_img,
            ResourceField::NfaJson => &self.nfa_json,
            ResourceField::DfaJson => &self.dfa_json,
            ResourceField::MindfaJson => &self.mindfa_json,
        }
    }

    fn slot_mut(&mut self, field: ResourceField) -> &mut Option<String> {
        match field {
            ResourceField::NfaImg => &mut self.nfa_img,
            ResourceField::DfaImg => &mut self.dfa_img,
            ResourceField::MindfaImg => &mut self.mindfa_img,
            ResourceField::NfaJson => &mut self.nfa_json,
            ResourceField::DfaJson => &mut self.dfa_json,
            ResourceField::MindfaJson => &mut self.mindfa_json,
        }
    }

    /// Applies the resolver to each present field, images as images and
    /// JSON dumps as artifacts. Absent fields stay absent.
    pub fn normalize(mut self, resolver: &Resolver) -> Self {
        for field in ResourceField::ALL {
            let slot = self.slot_mut(field);
            if let Some(raw) = slot.take() {
                *slot = Some(resolver.resolve_str(&raw, field.kind()));
            }
        }
        self
    }
}
