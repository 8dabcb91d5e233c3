//! Static per-profession configuration and the rules for switching layouts.

use super::model::{Badge, CtaType, ProfessionType, Profile};

/// Copy and defaults attached to one profession layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfessionConfig {
    pub title: &'static str,
    pub descriptor: &'static str,
    pub default_cta_label: &'static str,
    pub default_cta_type: CtaType,
    pub badge_labels: &'static [&'static str],
}

/// Most badges any layout shows.
pub const MAX_BADGES: usize = 2;

static PERSONAL: ProfessionConfig = ProfessionConfig {
    title: "Personal",
    descriptor: "General creator and consultant layout.",
    default_cta_label: "Contact Me",
    default_cta_type: CtaType::Link,
    badge_labels: &[],
};

static REALTOR: ProfessionConfig = ProfessionConfig {
    title: "Realtor",
    descriptor: "Listings-first layout with conversion CTA.",
    default_cta_label: "Schedule Showing",
    default_cta_type: CtaType::Link,
    badge_labels: &["License #", "Years"],
};

static INSURANCE: ProfessionConfig = ProfessionConfig {
    title: "Insurance",
    descriptor: "Quote-forward layout for trust and clarity.",
    default_cta_label: "Get a Free Quote",
    default_cta_type: CtaType::Link,
    badge_labels: &["NPN #", "Years"],
};

static ATTORNEY: ProfessionConfig = ProfessionConfig {
    title: "Attorney",
    descriptor: "Credibility-led layout with consultation CTA.",
    default_cta_label: "Schedule Consultation",
    default_cta_type: CtaType::Link,
    badge_labels: &["Practice Area", "Jurisdiction"],
};

static FINANCIAL: ProfessionConfig = ProfessionConfig {
    title: "Financial Advisor",
    descriptor: "Authority layout focused on planning outcomes.",
    default_cta_label: "Schedule Consultation",
    default_cta_type: CtaType::Link,
    badge_labels: &["Credential", "Specialty"],
};

static HEALTHCARE: ProfessionConfig = ProfessionConfig {
    title: "Healthcare",
    descriptor: "Care-first layout with appointment pathway.",
    default_cta_label: "Book Appointment",
    default_cta_type: CtaType::Link,
    badge_labels: &["Specialty", "Practice Name"],
};

impl ProfessionType {
    pub fn config(self) -> &'static ProfessionConfig {
        match self {
            ProfessionType::Personal => &PERSONAL,
            ProfessionType::Realtor => &REALTOR,
            ProfessionType::Insurance => &INSURANCE,
            ProfessionType::Attorney => &ATTORNEY,
            ProfessionType::Financial => &FINANCIAL,
            ProfessionType::Healthcare => &HEALTHCARE,
        }
    }
}

/// Re-labels `current` for `profession`, keeping values by position.
///
/// Entries beyond the new label count are dropped; missing ones start empty.
pub fn badges_for_profession(profession: ProfessionType, current: &[Badge]) -> Vec<Badge> {
    profession
        .config()
        .badge_labels
        .iter()
        .take(MAX_BADGES)
        .enumerate()
        .map(|(index, label)| {
            let value = current
                .get(index)
                .map(|badge| badge.value.clone())
                .unwrap_or_default();
            Badge::new(*label, value)
        })
        .collect()
}

impl Profile {
    /// Returns a copy switched to `next`.
    ///
    /// Badges are re-labeled; CTA label and type reset to the profession
    /// defaults unless the user already customized them.
    pub fn with_profession(&self, next: ProfessionType) -> Profile {
        let defaults = next.config();
        let mut profile = self.clone();
        profile.profession_type = next;
        profile.badges = badges_for_profession(next, &self.badges);
        if !self.cta_customized {
            profile.primary_cta_label = defaults.default_cta_label.to_string();
            profile.primary_cta_type = defaults.default_cta_type;
        }
        profile
    }

    /// Returns a copy with the badge at `index` set, or `None` when the
    /// active profession has no label at that position.
    pub fn with_badge_value(&self, index: usize, value: impl Into<String>) -> Option<Profile> {
        let mut badges = badges_for_profession(self.profession_type, &self.badges);
        let badge = badges.get_mut(index)?;
        badge.value = value.into();
        let mut profile = self.clone();
        profile.badges = badges;
        Some(profile)
    }
}
