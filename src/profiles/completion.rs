//! Setup progress derived from the profile.
//!
//! The percentage is informational only; nothing in the wizard is gated on it.

use super::model::{is_blank, Profile};

/// One of the ten equally weighted setup checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionCheck {
    EnvironmentChosen,
    Name,
    Title,
    Company,
    ShortBio,
    CtaLabel,
    CtaValue,
    Photo,
    PublicEmail,
    TwoSocialLinks,
}

impl CompletionCheck {
    pub const ALL: [CompletionCheck; 10] = [
        CompletionCheck::EnvironmentChosen,
        CompletionCheck::Name,
        CompletionCheck::Title,
        CompletionCheck::Company,
        CompletionCheck::ShortBio,
        CompletionCheck::CtaLabel,
        CompletionCheck::CtaValue,
        CompletionCheck::Photo,
        CompletionCheck::PublicEmail,
        CompletionCheck::TwoSocialLinks,
    ];

    pub fn is_satisfied(self, profile: &Profile) -> bool {
        match self {
            CompletionCheck::EnvironmentChosen => profile.destination_environment.is_some(),
            CompletionCheck::Name => !is_blank(&profile.name),
            CompletionCheck::Title => !is_blank(&profile.title),
            CompletionCheck::Company => !is_blank(&profile.company),
            CompletionCheck::ShortBio => !is_blank(&profile.short_bio),
            CompletionCheck::CtaLabel => !is_blank(&profile.primary_cta_label),
            CompletionCheck::CtaValue => !is_blank(&profile.primary_cta_value),
            CompletionCheck::Photo => profile.profile_photo.is_some(),
            CompletionCheck::PublicEmail => !is_blank(&profile.public_email),
            // Custom link pairs do not count towards coverage.
            CompletionCheck::TwoSocialLinks => profile.social_links.connected_platforms().len() >= 2,
        }
    }
}

/// Checks that still fail, in display order.
pub fn missing_checks(profile: &Profile) -> Vec<CompletionCheck> {
    CompletionCheck::ALL
        .into_iter()
        .filter(|check| !check.is_satisfied(profile))
        .collect()
}

/// Share of satisfied checks, rounded to the nearest whole percent.
pub fn completion_percent(profile: &Profile) -> u8 {
    let total = CompletionCheck::ALL.len();
    let satisfied = total - missing_checks(profile).len();
    ((satisfied * 100 + total / 2) / total) as u8
}

/// Value shown on the progress bar: never below `floor`.
pub fn display_progress(profile: &Profile, floor: u8) -> u8 {
    completion_percent(profile).max(floor.min(100))
}
