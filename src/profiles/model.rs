//! Data structures backing the public profile page.
//!
//! Field names serialize in camelCase so snapshots line up with the keys the
//! rendering layer already reads (`primaryCtaLabel`, `socialLinks`, ...).

use serde::{Deserialize, Serialize};

/// Where the finished page is published.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Scanrep,
    Repqr,
}

impl Environment {
    pub fn slug(self) -> &'static str {
        match self {
            Environment::Scanrep => "scanrep",
            Environment::Repqr => "repqr",
        }
    }
}

/// Voice used for generated copy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Bold,
    Premium,
    Energetic,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Friendly,
        Tone::Bold,
        Tone::Premium,
        Tone::Energetic,
    ];
}

/// Page layout category; drives default CTA copy and badge labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ProfessionType {
    Personal,
    Realtor,
    Insurance,
    Attorney,
    Financial,
    Healthcare,
}

impl ProfessionType {
    pub const ALL: [ProfessionType; 6] = [
        ProfessionType::Personal,
        ProfessionType::Realtor,
        ProfessionType::Insurance,
        ProfessionType::Attorney,
        ProfessionType::Financial,
        ProfessionType::Healthcare,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ProfessionType::Personal => "personal",
            ProfessionType::Realtor => "realtor",
            ProfessionType::Insurance => "insurance",
            ProfessionType::Attorney => "attorney",
            ProfessionType::Financial => "financial",
            ProfessionType::Healthcare => "healthcare",
        }
    }
}

/// Kind of destination behind the primary button.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CtaType {
    Book,
    Call,
    Text,
    Email,
    Link,
}

impl CtaType {
    pub const ALL: [CtaType; 5] = [
        CtaType::Book,
        CtaType::Call,
        CtaType::Text,
        CtaType::Email,
        CtaType::Link,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            CtaType::Book => "book",
            CtaType::Call => "call",
            CtaType::Text => "text",
            CtaType::Email => "email",
            CtaType::Link => "link",
        }
    }
}

/// The eight fixed social platforms, in preview order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Linkedin,
    Youtube,
    Tiktok,
    X,
    Venmo,
    Cashapp,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 8] = [
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Linkedin,
        SocialPlatform::Youtube,
        SocialPlatform::Tiktok,
        SocialPlatform::X,
        SocialPlatform::Venmo,
        SocialPlatform::Cashapp,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Tiktok => "tiktok",
            SocialPlatform::X => "x",
            SocialPlatform::Venmo => "venmo",
            SocialPlatform::Cashapp => "cashapp",
        }
    }
}

/// One of the two free-form custom link pairs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CustomSlot {
    First,
    Second,
}

/// Addresses a single string inside [`SocialLinks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialField {
    Platform(SocialPlatform),
    CustomLabel(CustomSlot),
    CustomUrl(CustomSlot),
}

impl SocialField {
    /// Key of the field in the serialized `socialLinks` object.
    pub fn key(self) -> &'static str {
        match self {
            SocialField::Platform(platform) => platform.slug(),
            SocialField::CustomLabel(CustomSlot::First) => "custom1Label",
            SocialField::CustomUrl(CustomSlot::First) => "custom1Url",
            SocialField::CustomLabel(CustomSlot::Second) => "custom2Label",
            SocialField::CustomUrl(CustomSlot::Second) => "custom2Url",
        }
    }
}

impl From<SocialPlatform> for SocialField {
    fn from(platform: SocialPlatform) -> Self {
        SocialField::Platform(platform)
    }
}

/// Social button targets. An empty string means "not set".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub linkedin: String,
    pub youtube: String,
    pub tiktok: String,
    pub x: String,
    pub venmo: String,
    pub cashapp: String,
    pub custom1_label: String,
    pub custom1_url: String,
    pub custom2_label: String,
    pub custom2_url: String,
}

impl SocialLinks {
    pub fn get(&self, field: SocialField) -> &str {
        match field {
            SocialField::Platform(SocialPlatform::Facebook) => &self.facebook,
            SocialField::Platform(SocialPlatform::Instagram) => &self.instagram,
            SocialField::Platform(SocialPlatform::Linkedin) => &self.linkedin,
            SocialField::Platform(SocialPlatform::Youtube) => &self.youtube,
            SocialField::Platform(SocialPlatform::Tiktok) => &self.tiktok,
            SocialField::Platform(SocialPlatform::X) => &self.x,
            SocialField::Platform(SocialPlatform::Venmo) => &self.venmo,
            SocialField::Platform(SocialPlatform::Cashapp) => &self.cashapp,
            SocialField::CustomLabel(CustomSlot::First) => &self.custom1_label,
            SocialField::CustomUrl(CustomSlot::First) => &self.custom1_url,
            SocialField::CustomLabel(CustomSlot::Second) => &self.custom2_label,
            SocialField::CustomUrl(CustomSlot::Second) => &self.custom2_url,
        }
    }

    /// Returns a copy with one field replaced.
    pub fn with_field(&self, field: SocialField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot_mut(field) = value.into();
        next
    }

    /// Platforms with a non-blank URL, in preview order.
    pub fn connected_platforms(&self) -> Vec<SocialPlatform> {
        SocialPlatform::ALL
            .into_iter()
            .filter(|platform| !is_blank(self.get(SocialField::Platform(*platform))))
            .collect()
    }

    /// Non-blank entries across all twelve fields, custom pairs included.
    pub fn filled_field_count(&self) -> usize {
        [
            &self.facebook,
            &self.instagram,
            &self.linkedin,
            &self.youtube,
            &self.tiktok,
            &self.x,
            &self.venmo,
            &self.cashapp,
            &self.custom1_label,
            &self.custom1_url,
            &self.custom2_label,
            &self.custom2_url,
        ]
        .into_iter()
        .filter(|value| !is_blank(value))
        .count()
    }

    fn slot_mut(&mut self, field: SocialField) -> &mut String {
        match field {
            SocialField::Platform(SocialPlatform::Facebook) => &mut self.facebook,
            SocialField::Platform(SocialPlatform::Instagram) => &mut self.instagram,
            SocialField::Platform(SocialPlatform::Linkedin) => &mut self.linkedin,
            SocialField::Platform(SocialPlatform::Youtube) => &mut self.youtube,
            SocialField::Platform(SocialPlatform::Tiktok) => &mut self.tiktok,
            SocialField::Platform(SocialPlatform::X) => &mut self.x,
            SocialField::Platform(SocialPlatform::Venmo) => &mut self.venmo,
            SocialField::Platform(SocialPlatform::Cashapp) => &mut self.cashapp,
            SocialField::CustomLabel(CustomSlot::First) => &mut self.custom1_label,
            SocialField::CustomUrl(CustomSlot::First) => &mut self.custom1_url,
            SocialField::CustomLabel(CustomSlot::Second) => &mut self.custom2_label,
            SocialField::CustomUrl(CustomSlot::Second) => &mut self.custom2_url,
        }
    }
}

/// Credential shown on the preview, e.g. `License #: 12345`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub value: String,
}

impl Badge {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Embeddable image reference (a `data:` URL).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn from_data_url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Full content of one public page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub destination_environment: Option<Environment>,
    pub name: String,
    pub email: String,
    pub rep_url: String,
    pub profession_type: ProfessionType,
    pub raw_input: String,
    pub title: String,
    pub company: String,
    pub tagline: String,
    pub short_bio: String,
    pub long_description: String,
    pub primary_cta_label: String,
    pub primary_cta_type: CtaType,
    pub primary_cta_value: String,
    pub tone: Tone,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub public_phone: String,
    pub public_email: String,
    pub website: String,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub badges: Vec<Badge>,
    pub profile_photo: Option<ImageRef>,
    pub logo: Option<ImageRef>,
    pub brand_color: String,
    pub cta_customized: bool,
}

/// Whole-field replacements to merge onto a [`Profile`].
///
/// `None` leaves a field untouched. Nullable profile fields use a nested
/// option so a patch can clear them (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub destination_environment: Option<Option<Environment>>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub rep_url: Option<String>,
    pub profession_type: Option<ProfessionType>,
    pub raw_input: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub tagline: Option<String>,
    pub short_bio: Option<String>,
    pub long_description: Option<String>,
    pub primary_cta_label: Option<String>,
    pub primary_cta_type: Option<CtaType>,
    pub primary_cta_value: Option<String>,
    pub tone: Option<Tone>,
    pub keywords: Option<Vec<String>>,
    pub public_phone: Option<String>,
    pub public_email: Option<String>,
    pub website: Option<String>,
    pub social_links: Option<SocialLinks>,
    pub badges: Option<Vec<Badge>>,
    pub profile_photo: Option<Option<ImageRef>>,
    pub logo: Option<Option<ImageRef>>,
    pub brand_color: Option<String>,
    pub cta_customized: Option<bool>,
}

macro_rules! for_each_patch_field {
    ($callback:ident) => {
        $callback!(
            destination_environment,
            name,
            email,
            rep_url,
            profession_type,
            raw_input,
            title,
            company,
            tagline,
            short_bio,
            long_description,
            primary_cta_label,
            primary_cta_type,
            primary_cta_value,
            tone,
            keywords,
            public_phone,
            public_email,
            website,
            social_links,
            badges,
            profile_photo,
            logo,
            brand_color,
            cta_customized
        )
    };
}

impl ProfilePatch {
    /// Names of the fields this patch replaces, in declaration order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        macro_rules! collect {
            ($($field:ident),*) => {
                $(
                    if self.$field.is_some() {
                        fields.push(stringify!($field));
                    }
                )*
            };
        }
        for_each_patch_field!(collect);
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }
}

impl Profile {
    /// Returns a new profile with every field set in `patch` replaced.
    pub fn with_changes(&self, patch: &ProfilePatch) -> Profile {
        let mut next = self.clone();
        macro_rules! apply {
            ($($field:ident),*) => {
                $(
                    if let Some(value) = &patch.$field {
                        next.$field = value.clone();
                    }
                )*
            };
        }
        for_each_patch_field!(apply);
        next
    }

    /// Returns a new profile with one social field replaced.
    pub fn with_social_link(&self, field: SocialField, value: impl Into<String>) -> Profile {
        let mut next = self.clone();
        next.social_links = self.social_links.with_field(field, value);
        next
    }
}

/// True when the value is empty after trimming whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Splits a comma-separated keyword list, trimming entries and dropping empties.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| item.to_string())
        .collect()
}
