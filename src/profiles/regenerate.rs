//! Canned "try another" variants offered on the review step.

use serde::{Deserialize, Serialize};

use super::model::{ProfessionType, ProfilePatch};

pub const ALTERNATE_TAGLINE: &str = "Positioned to create momentum from every introduction.";

pub const ALTERNATE_SHORT_BIO: &str = "I combine speed, clarity, and strategic communication to turn digital attention into high-quality conversations.";

pub const ALTERNATE_KEYWORDS: [&str; 4] = ["premium", "responsive", "strategy", "results"];

/// Review fields that offer a regenerate action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RegenerableField {
    Tagline,
    ShortBio,
    Keywords,
    PrimaryCtaLabel,
}

/// Replacement for a single field; the CTA label resets to the profession default.
pub fn regenerate_field(field: RegenerableField, profession: ProfessionType) -> ProfilePatch {
    match field {
        RegenerableField::Tagline => ProfilePatch {
            tagline: Some(ALTERNATE_TAGLINE.to_string()),
            ..Default::default()
        },
        RegenerableField::ShortBio => ProfilePatch {
            short_bio: Some(ALTERNATE_SHORT_BIO.to_string()),
            ..Default::default()
        },
        RegenerableField::Keywords => ProfilePatch {
            keywords: Some(ALTERNATE_KEYWORDS.iter().map(|k| k.to_string()).collect()),
            ..Default::default()
        },
        RegenerableField::PrimaryCtaLabel => ProfilePatch {
            primary_cta_label: Some(profession.config().default_cta_label.to_string()),
            ..Default::default()
        },
    }
}
