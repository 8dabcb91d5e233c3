use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::profiles::Profile;

use super::phase::Phase;

/// Kind of wizard events that can be logged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WizardEventType {
    DestinationSelected,
    RevealStaged,
    RevealFinished,
    ProfessionApplied,
    ProfessionChangeRequested,
    ProfessionChangeCancelled,
    AiBuildStarted,
    AiBuildStaged,
    AiBuildCommitted,
    FieldRegenerated,
    FieldsUpdated,
    SocialLinkUpdated,
    BadgeUpdated,
    MediaAttached,
    RepUrlCopied,
    PhaseChanged,
    StartedOver,
}

/// Identifies one logical version of the profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileVersion {
    pub revision: u64,
    pub hash: String,
}

impl ProfileVersion {
    pub fn of(revision: u64, profile: &Profile) -> Self {
        Self {
            revision,
            hash: profile_hash(profile),
        }
    }
}

/// One entry in the session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardEvent {
    pub event_id: Uuid,
    pub event_type: WizardEventType,
    pub timestamp: DateTime<Utc>,
    pub phase: Phase,
    pub version: ProfileVersion,
    #[serde(default)]
    pub details: serde_json::Value,
}

/// In-memory, append-only history of one wizard session.
#[derive(Debug, Clone, Default)]
pub struct WizardEventLog {
    events: Vec<WizardEvent>,
}

impl WizardEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(
        &mut self,
        event_type: WizardEventType,
        phase: Phase,
        version: ProfileVersion,
        details: serde_json::Value,
    ) -> Uuid {
        let event = WizardEvent {
            event_id: Uuid::new_v4(),
            event_type,
            timestamp: Utc::now(),
            phase,
            version,
            details,
        };
        let event_id = event.event_id;
        self.events.push(event);
        event_id
    }

    pub fn events(&self) -> &[WizardEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&WizardEvent> {
        self.events.last()
    }

    pub fn of_type(&self, event_type: WizardEventType) -> impl Iterator<Item = &WizardEvent> {
        self.events
            .iter()
            .filter(move |event| event.event_type == event_type)
    }

    /// Serializes the history as JSON lines.
    pub fn to_jsonl(&self) -> serde_json::Result<String> {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&serde_json::to_string(event)?);
            out.push('\n');
        }
        Ok(out)
    }
}

/// Lowercase hex SHA-256 of the profile's JSON form.
pub fn profile_hash(profile: &Profile) -> String {
    // Struct fields serialize in declaration order, so the bytes are stable.
    let bytes = serde_json::to_vec(profile).unwrap_or_default();
    format!("{:x}", Sha256::digest(&bytes))
}
