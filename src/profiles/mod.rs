//! Profile data model and its pure derivations.
//!
//! Nothing in this namespace has side effects: every function maps input
//! values to new values so the wizard controller can compose them freely.

pub mod completion;
pub mod defaults;
pub mod generate;
pub mod media;
pub mod model;
pub mod professions;
pub mod regenerate;
pub mod render;

pub use completion::{completion_percent, display_progress, CompletionCheck};
pub use defaults::seed_profile;
pub use generate::{generate_ai_fields, infer_cta_type};
pub use media::{embed_image, MediaSlot};
pub use model::{
    Badge, CtaType, CustomSlot, Environment, ImageRef, ProfessionType, Profile, ProfilePatch,
    SocialField, SocialLinks, SocialPlatform, Tone,
};
pub use professions::{badges_for_profession, ProfessionConfig};
pub use regenerate::{regenerate_field, RegenerableField};
pub use render::PreviewModel;
