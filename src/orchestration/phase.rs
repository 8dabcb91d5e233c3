use serde::{Deserialize, Serialize};

/// Ordered wizard steps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Commitment,
    Reveal,
    Category,
    Positioning,
    Review,
    Presence,
    Completion,
}

impl Phase {
    pub const ALL: [Phase; 7] = [
        Phase::Commitment,
        Phase::Reveal,
        Phase::Category,
        Phase::Positioning,
        Phase::Review,
        Phase::Presence,
        Phase::Completion,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Phase> {
        Phase::ALL.get(index).copied()
    }

    /// Next step; the last step stays put.
    pub fn next(self) -> Phase {
        Phase::from_index(self.index() + 1).unwrap_or(Phase::Completion)
    }

    /// Previous step; the first step stays put.
    pub fn previous(self) -> Phase {
        self.index()
            .checked_sub(1)
            .and_then(Phase::from_index)
            .unwrap_or(Phase::Commitment)
    }

    /// Heading shown above each step.
    pub fn kicker(self) -> &'static str {
        match self {
            Phase::Commitment => "Commitment",
            Phase::Reveal => "Surprise",
            Phase::Category => "Clarity",
            Phase::Positioning => "Expression",
            Phase::Review => "Validation",
            Phase::Presence => "Strengthen Presence",
            Phase::Completion => "Completion",
        }
    }

    /// The progress bar is hidden on the first and last steps.
    pub fn shows_progress(self) -> bool {
        !matches!(self, Phase::Commitment | Phase::Completion)
    }
}
