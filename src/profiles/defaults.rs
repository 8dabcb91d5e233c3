use super::model::{CtaType, ProfessionType, Profile, SocialLinks, Tone};

const SEED_LONG_DESCRIPTION: &str = "I help professionals turn attention into opportunity through better positioning, better clarity, and stronger calls to action. My approach combines practical strategy with human communication design. Clients use my frameworks to simplify messaging, improve response rates, and convert more conversations into outcomes. The work is collaborative, fast-moving, and focused on measurable progress.";

/// Demo profile the wizard starts from (and returns to on start over).
pub fn seed_profile() -> Profile {
    Profile {
        destination_environment: None,
        name: "Pretend Miles".into(),
        email: "pretend@brightlinestudio.com".into(),
        rep_url: "repqr.me/pretendmiles".into(),
        profession_type: ProfessionType::Personal,
        raw_input: String::new(),
        title: "Founder".into(),
        company: "Brightline Studio".into(),
        tagline: "Turn first impressions into lasting engagement.".into(),
        short_bio: "I help brands and professionals create stronger digital first impressions."
            .into(),
        long_description: SEED_LONG_DESCRIPTION.into(),
        primary_cta_label: "Contact Me".into(),
        primary_cta_type: CtaType::Link,
        primary_cta_value: "https://repqr.me/pretendmiles".into(),
        tone: Tone::Professional,
        keywords: vec![
            "identity".into(),
            "positioning".into(),
            "engagement".into(),
        ],
        public_phone: String::new(),
        public_email: "pretend@brightlinestudio.com".into(),
        website: String::new(),
        social_links: SocialLinks::default(),
        badges: Vec::new(),
        profile_photo: None,
        logo: None,
        brand_color: "#2563eb".into(),
        cta_customized: false,
    }
}
