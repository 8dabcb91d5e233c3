//! Confirmation gate for switching profession layouts.
//!
//! The first selection applies immediately. Once a profession has been
//! chosen, later switches wait for an explicit continue or cancel.

use serde::{Deserialize, Serialize};

use crate::profiles::ProfessionType;

/// Gate state; resolving always returns to `Idle`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GateState {
    #[default]
    Idle,
    Pending { candidate: ProfessionType },
}

/// What a selection request did.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProfessionRequest {
    /// Already the active profession.
    Unchanged,
    /// Applied without asking.
    Applied,
    /// Parked until the user confirms or cancels.
    ConfirmationRequired,
}

/// How a pending switch was resolved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GateResolution {
    Confirmed(ProfessionType),
    Cancelled(ProfessionType),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfessionGate {
    state: GateState,
    has_selected: bool,
}

impl ProfessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn pending(&self) -> Option<ProfessionType> {
        match self.state {
            GateState::Idle => None,
            GateState::Pending { candidate } => Some(candidate),
        }
    }

    /// True once any profession has been applied.
    pub fn has_selected(&self) -> bool {
        self.has_selected
    }

    /// Classifies a selection. On `Applied` the caller must apply `next`.
    pub fn request(&mut self, current: ProfessionType, next: ProfessionType) -> ProfessionRequest {
        if next == current {
            return ProfessionRequest::Unchanged;
        }
        if self.has_selected {
            self.state = GateState::Pending { candidate: next };
            return ProfessionRequest::ConfirmationRequired;
        }
        self.has_selected = true;
        ProfessionRequest::Applied
    }

    /// Accepts the pending switch. The caller applies the returned profession.
    pub fn confirm(&mut self) -> Option<GateResolution> {
        let candidate = self.pending()?;
        self.state = GateState::Idle;
        self.has_selected = true;
        Some(GateResolution::Confirmed(candidate))
    }

    /// Discards the pending switch.
    pub fn cancel(&mut self) -> Option<GateResolution> {
        let candidate = self.pending()?;
        self.state = GateState::Idle;
        Some(GateResolution::Cancelled(candidate))
    }

    /// Records a profession applied outside [`ProfessionGate::request`].
    pub fn mark_selected(&mut self) {
        self.has_selected = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
