//! Deterministic stand-in for AI-generated profile copy.
//!
//! Output depends only on the raw description, tone and profession so the
//! wizard behaves the same on every run.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use super::model::{CtaType, ProfessionType, ProfilePatch, Tone};

/// Used when the user leaves the positioning description blank.
pub const FALLBACK_DESCRIPTION: &str =
    "I help clients with personalized service and clear communication.";

/// Keywords used when no word in the description qualifies.
pub const FALLBACK_KEYWORDS: [&str; 3] = ["engagement", "growth", "trust"];

const MIN_KEYWORD_LEN: usize = 5;
const MAX_KEYWORDS: usize = 7;

const SHORT_BIO_SUFFIX: &str =
    "I simplify decisions and create a better experience from first click to final conversion.";

const LONG_DESCRIPTION_SUFFIX: &str = "I work with clients who value clear communication, practical planning, and measurable results. My approach combines strategy, execution, and consistent follow-through across each stage of engagement. I build trust quickly, reduce friction in decision-making, and keep momentum high. Every recommendation is tailored to goals, timing, and audience behavior.";

fn phone_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\+?\d[\d\s\-()]{7,}").ok())
        .as_ref()
}

/// Classifies free text into a CTA type.
///
/// Rules are checked in order: booking words, a phone-like number, the word
/// "email", then the `Link` fallback.
pub fn infer_cta_type(text: &str) -> CtaType {
    let input = text.to_lowercase();
    if input.contains("book") || input.contains("appointment") {
        return CtaType::Book;
    }
    if phone_pattern().is_some_and(|pattern| pattern.is_match(&input)) {
        return CtaType::Text;
    }
    if input.contains("email") {
        return CtaType::Email;
    }
    CtaType::Link
}

/// Title and company suggested for each profession.
pub fn generated_identity(profession: ProfessionType) -> (&'static str, &'static str) {
    match profession {
        ProfessionType::Personal => ("Consultant", "Brightline Studio"),
        ProfessionType::Realtor => ("Licensed Realtor", "Metro Realty Group"),
        ProfessionType::Insurance => ("Insurance Advisor", "ShieldPoint Advisors"),
        ProfessionType::Attorney => ("Attorney at Law", "Summit Legal"),
        ProfessionType::Financial => ("Financial Advisor", "NorthBridge Financial"),
        ProfessionType::Healthcare => ("Healthcare Professional", "Harbor Health Partners"),
    }
}

pub fn tagline_for_tone(tone: Tone) -> &'static str {
    match tone {
        Tone::Premium => "High-trust guidance designed for meaningful outcomes.",
        Tone::Energetic => "Fast communication. Smart execution. Real momentum.",
        Tone::Friendly => "Clear, human support from first message to final decision.",
        Tone::Professional | Tone::Bold => {
            "Strategic clarity that helps people take action confidently."
        }
    }
}

/// First non-empty segment before `.`, `!` or `?`, trimmed.
pub fn first_sentence(text: &str) -> &str {
    text.split(['.', '!', '?'])
        .find(|segment| !segment.is_empty())
        .map(str::trim)
        .unwrap_or(text)
}

/// Distinct lowercase words of five or more word characters, first
/// appearance order, at most seven.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| seen.insert(word.clone()))
        .filter(|word| word.chars().count() >= MIN_KEYWORD_LEN)
        .take(MAX_KEYWORDS)
        .collect()
}

/// Builds the fields the "Build My Rep" step writes onto the profile.
pub fn generate_ai_fields(raw_input: &str, tone: Tone, profession: ProfessionType) -> ProfilePatch {
    let trimmed = raw_input.trim();
    let text = if trimmed.is_empty() {
        FALLBACK_DESCRIPTION
    } else {
        trimmed
    };
    let sentence = first_sentence(text);
    let (title, company) = generated_identity(profession);

    let mut keywords = extract_keywords(text);
    if keywords.is_empty() {
        keywords = FALLBACK_KEYWORDS.iter().map(|k| k.to_string()).collect();
    }

    ProfilePatch {
        title: Some(title.to_string()),
        company: Some(company.to_string()),
        tagline: Some(tagline_for_tone(tone).to_string()),
        short_bio: Some(format!("{sentence}. {SHORT_BIO_SUFFIX}")),
        long_description: Some(format!("{sentence}. {LONG_DESCRIPTION_SUFFIX}")),
        keywords: Some(keywords),
        primary_cta_type: Some(infer_cta_type(text)),
        primary_cta_label: Some(profession.config().default_cta_label.to_string()),
        ..Default::default()
    }
}
