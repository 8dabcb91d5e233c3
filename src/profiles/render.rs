//! Live-preview view model.
//!
//! Resolves placeholders and social ordering so the rendering layer only has
//! to lay the values out.

use serde::Serialize;

use super::model::{is_blank, Badge, ImageRef, ProfessionType, Profile, SocialPlatform};

const PRIMARY_SOCIAL_SLOTS: usize = 3;
const MIN_SOCIALS_FOR_COVERAGE: usize = 2;

/// Everything the phone preview displays.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewModel {
    pub template_title: &'static str,
    pub name: String,
    pub title_line: String,
    pub bio: String,
    pub badges: Vec<Badge>,
    pub cta_label: String,
    pub primary_socials: Vec<SocialLink>,
    pub secondary_socials: Vec<SocialLink>,
    pub contact_lines: [String; 3],
    pub photo: Option<ImageRef>,
    pub logo: Option<ImageRef>,
    pub brand_color: String,
    pub social_hint: &'static str,
    pub connected_social_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub label: String,
    pub url: String,
}

pub fn template_title(profession: ProfessionType) -> &'static str {
    match profession {
        ProfessionType::Personal => "Personal Profile",
        ProfessionType::Realtor => "Realtor Layout",
        ProfessionType::Insurance => "Insurance Layout",
        ProfessionType::Attorney => "Attorney Layout",
        ProfessionType::Financial => "Financial Advisor Layout",
        ProfessionType::Healthcare => "Healthcare Layout",
    }
}

impl PreviewModel {
    pub fn from_profile(profile: &Profile) -> Self {
        let mut socials: Vec<SocialLink> = profile
            .social_links
            .connected_platforms()
            .into_iter()
            .map(|platform| SocialLink {
                platform,
                label: platform.slug().to_uppercase(),
                url: profile.social_links.get(platform.into()).to_string(),
            })
            .collect();
        let secondary_socials = socials.split_off(socials.len().min(PRIMARY_SOCIAL_SLOTS));

        let title = if profile.title.is_empty() {
            "Professional"
        } else {
            profile.title.as_str()
        };
        let title_line = if profile.company.is_empty() {
            title.to_string()
        } else {
            format!("{title} • {}", profile.company)
        };

        let connected_social_count = profile.social_links.filled_field_count();
        Self {
            template_title: template_title(profile.profession_type),
            name: profile.name.clone(),
            title_line,
            bio: or_placeholder(&profile.short_bio, "Your short bio appears here."),
            badges: profile
                .badges
                .iter()
                .filter(|badge| !is_blank(&badge.value))
                .cloned()
                .collect(),
            cta_label: or_placeholder(&profile.primary_cta_label, "Contact Me"),
            primary_socials: socials,
            secondary_socials,
            contact_lines: [
                or_placeholder(&profile.public_phone, "Phone not added yet"),
                or_placeholder(&profile.public_email, "Email not added yet"),
                or_placeholder(&profile.website, "Website not added yet"),
            ],
            photo: profile.profile_photo.clone(),
            logo: profile.logo.clone(),
            brand_color: profile.brand_color.clone(),
            social_hint: if connected_social_count >= MIN_SOCIALS_FOR_COVERAGE {
                "Great social coverage"
            } else {
                "Add at least 2 socials"
            },
            connected_social_count,
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
