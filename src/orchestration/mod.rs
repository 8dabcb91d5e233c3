//! Wizard flow: phases, the profession confirmation gate, staged timers and
//! the controller that ties them to the profile.

pub mod confirmation;
pub mod events;
pub mod phase;
pub mod scheduler;
pub mod wizard;

pub use confirmation::{GateResolution, GateState, ProfessionGate, ProfessionRequest};
pub use events::{profile_hash, ProfileVersion, WizardEvent, WizardEventLog, WizardEventType};
pub use phase::Phase;
pub use scheduler::{Lane, SequenceToken, StagedScheduler};
pub use wizard::{
    CopyFeedback, CtaEdit, UiFlags, WizardController, WizardView, AI_BUILD_MESSAGES,
    REVEAL_MESSAGES,
};
