pub mod config;
pub mod orchestration;
pub mod profiles;

// Re-export commonly used types for convenience.
pub use config::WizardSettings;
pub use orchestration::{Phase, WizardController, WizardView};
pub use profiles::{Profile, ProfilePatch};
