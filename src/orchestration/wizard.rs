//! Wizard controller: owns the phase, the profile and every transient flag
//! the rendering layer reads.
//!
//! All operations are infallible. Simulated async work is queued on the
//! [`StagedScheduler`] and only takes effect when the host advances the clock.

use std::collections::BTreeSet;
use std::time::Duration;

use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use crate::config::WizardSettings;
use crate::profiles::model::split_keywords;
use crate::profiles::{
    badges_for_profession, completion_percent, display_progress, embed_image,
    generate_ai_fields, regenerate_field, seed_profile, CtaType, Environment, MediaSlot,
    PreviewModel, ProfessionType, Profile, ProfilePatch, RegenerableField, SocialField,
    SocialPlatform, Tone,
};

use super::confirmation::{GateResolution, ProfessionGate, ProfessionRequest};
use super::events::{ProfileVersion, WizardEvent, WizardEventLog, WizardEventType};
use super::phase::Phase;
use super::scheduler::{Lane, StagedScheduler};

/// Staged messages of the reveal loader, in display order.
pub const REVEAL_MESSAGES: [&str; 2] = [
    "Generating your Rep...",
    "Creating your digital identity...",
];

/// Staged messages of the AI build, in display order.
pub const AI_BUILD_MESSAGES: [&str; 4] = [
    "Extracting your details...",
    "Writing your bio...",
    "Crafting your positioning...",
    "Selecting your best call-to-action...",
];

/// Label on the copy-URL button.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
}

impl CopyFeedback {
    pub fn label(self) -> &'static str {
        match self {
            CopyFeedback::Idle => "Copy",
            CopyFeedback::Copied => "Copied",
        }
    }
}

/// Transient UI state that never becomes part of the profile.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct UiFlags {
    pub reveal_loading: bool,
    pub ai_building: bool,
    pub staged_text: Option<String>,
    pub copy_feedback: CopyFeedback,
    pub expanded_socials: BTreeSet<SocialPlatform>,
    pub fading: bool,
}

/// Direct edits to the call-to-action; any of them marks the CTA customized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CtaEdit {
    pub label: Option<String>,
    pub cta_type: Option<CtaType>,
    pub value: Option<String>,
}

/// Read-only snapshot handed to the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct WizardView<'a> {
    pub phase: Phase,
    /// Heading above the current step.
    pub kicker: &'static str,
    pub profile: &'a Profile,
    pub version: &'a ProfileVersion,
    pub ui: &'a UiFlags,
    pub pending_profession: Option<ProfessionType>,
    pub completion_percent: u8,
    /// `None` on steps that hide the progress bar.
    pub display_progress: Option<u8>,
    pub preview: PreviewModel,
}

impl WizardView<'_> {
    pub fn profession_prompt_visible(&self) -> bool {
        self.pending_profession.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AiBuildInputs {
    raw_input: String,
    tone: Tone,
    profession: ProfessionType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StagedTask {
    StagedText(&'static str),
    FinishReveal,
    CommitAiBuild(AiBuildInputs),
    ResetCopyFeedback,
    EndFade,
}

#[derive(Debug, Clone)]
pub struct WizardController {
    settings: WizardSettings,
    phase: Phase,
    profile: Profile,
    version: ProfileVersion,
    ui: UiFlags,
    gate: ProfessionGate,
    scheduler: StagedScheduler<StagedTask>,
    log: WizardEventLog,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(WizardSettings::default())
    }
}

impl WizardController {
    pub fn new(settings: WizardSettings) -> Self {
        let profile = seed_profile();
        let version = ProfileVersion::of(0, &profile);
        Self {
            settings,
            phase: Phase::Commitment,
            profile,
            version,
            ui: UiFlags::default(),
            gate: ProfessionGate::new(),
            scheduler: StagedScheduler::new(),
            log: WizardEventLog::new(),
        }
    }

    pub fn settings(&self) -> &WizardSettings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn version(&self) -> &ProfileVersion {
        &self.version
    }

    pub fn ui(&self) -> &UiFlags {
        &self.ui
    }

    pub fn pending_profession(&self) -> Option<ProfessionType> {
        self.gate.pending()
    }

    pub fn events(&self) -> &[WizardEvent] {
        self.log.events()
    }

    pub fn event_log(&self) -> &WizardEventLog {
        &self.log
    }

    pub fn view(&self) -> WizardView<'_> {
        let floor = self.settings.progress.display_floor_percent;
        WizardView {
            phase: self.phase,
            kicker: self.phase.kicker(),
            profile: &self.profile,
            version: &self.version,
            ui: &self.ui,
            pending_profession: self.gate.pending(),
            completion_percent: completion_percent(&self.profile),
            display_progress: self
                .phase
                .shows_progress()
                .then(|| display_progress(&self.profile, floor)),
            preview: PreviewModel::from_profile(&self.profile),
        }
    }

    // ---- simulated time -------------------------------------------------

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Moves the clock forward, running due staged tasks in deadline order.
    pub fn advance_clock(&mut self, elapsed: Duration) {
        let target = self.scheduler.now() + elapsed;
        while let Some((lane, task)) = self.scheduler.pop_due(target) {
            self.run_task(lane, task);
        }
        self.scheduler.settle_at(target);
    }

    /// Runs every queued task, jumping the clock from deadline to deadline.
    pub fn run_until_idle(&mut self) {
        while let Some(deadline) = self.scheduler.next_deadline() {
            let elapsed = deadline.saturating_sub(self.scheduler.now());
            self.advance_clock(elapsed);
        }
    }

    // ---- phase 0/1 ------------------------------------------------------

    /// Records the destination, moves to the reveal step and starts its loader.
    pub fn select_destination(&mut self, environment: Environment) {
        let profile = self.profile.with_changes(&ProfilePatch {
            destination_environment: Some(Some(environment)),
            ..Default::default()
        });
        self.commit(
            profile,
            WizardEventType::DestinationSelected,
            json!({ "environment": environment.slug() }),
        );
        self.set_phase(Phase::Reveal);

        let timings = &self.settings.timings;
        let (stage, total) = (timings.reveal_stage(), timings.reveal_total());
        let token = self.scheduler.start(Lane::Reveal);
        self.ui.reveal_loading = true;
        self.ui.staged_text = Some(REVEAL_MESSAGES[0].to_string());
        self.scheduler
            .schedule(token, stage, StagedTask::StagedText(REVEAL_MESSAGES[1]));
        self.scheduler.schedule(token, total, StagedTask::FinishReveal);
        debug!(environment = environment.slug(), "reveal sequence started");
    }

    /// Copies the public URL; the button reads "Copied" for a moment.
    pub fn copy_rep_url(&mut self) -> String {
        let delay = self.settings.timings.copy_feedback();
        let token = self.scheduler.start(Lane::CopyFeedback);
        self.ui.copy_feedback = CopyFeedback::Copied;
        self.scheduler
            .schedule(token, delay, StagedTask::ResetCopyFeedback);
        self.record(WizardEventType::RepUrlCopied, json!({}));
        self.profile.rep_url.clone()
    }

    // ---- phase 2 --------------------------------------------------------

    /// Requests a profession switch; see [`ProfessionGate`] for the rules.
    pub fn select_profession(&mut self, next: ProfessionType) -> ProfessionRequest {
        let current = self.profile.profession_type;
        let outcome = self.gate.request(current, next);
        match outcome {
            ProfessionRequest::Unchanged => {}
            ProfessionRequest::Applied => self.apply_profession(next),
            ProfessionRequest::ConfirmationRequired => {
                debug!(from = current.slug(), to = next.slug(), "profession change awaiting confirmation");
                self.record(
                    WizardEventType::ProfessionChangeRequested,
                    json!({ "from": current.slug(), "candidate": next.slug() }),
                );
            }
        }
        outcome
    }

    /// Commits the pending profession, if any.
    pub fn confirm_profession_change(&mut self) -> Option<ProfessionType> {
        match self.gate.confirm()? {
            GateResolution::Confirmed(profession) => {
                self.apply_profession(profession);
                Some(profession)
            }
            GateResolution::Cancelled(_) => None,
        }
    }

    /// Drops the pending profession, if any, leaving the profile untouched.
    pub fn cancel_profession_change(&mut self) -> Option<ProfessionType> {
        match self.gate.cancel()? {
            GateResolution::Cancelled(candidate) => {
                self.record(
                    WizardEventType::ProfessionChangeCancelled,
                    json!({ "candidate": candidate.slug() }),
                );
                Some(candidate)
            }
            GateResolution::Confirmed(_) => None,
        }
    }

    fn apply_profession(&mut self, next: ProfessionType) {
        let from = self.profile.profession_type;
        let kept_cta = self.profile.cta_customized;
        let profile = self.profile.with_profession(next);
        info!(from = from.slug(), to = next.slug(), kept_cta, "profession applied");
        self.commit(
            profile,
            WizardEventType::ProfessionApplied,
            json!({ "from": from.slug(), "to": next.slug(), "kept_cta": kept_cta }),
        );
    }

    // ---- phase 3/4 ------------------------------------------------------

    /// Starts the staged AI build. Inputs are captured now; the generated
    /// fields replace the current ones when the build commits.
    pub fn build_with_ai(&mut self) {
        let timings = &self.settings.timings;
        let offsets: Vec<Duration> = (1..AI_BUILD_MESSAGES.len())
            .map(|index| timings.ai_stage_offset(index))
            .collect();
        let total = timings.ai_build_total();
        let inputs = AiBuildInputs {
            raw_input: self.profile.raw_input.clone(),
            tone: self.profile.tone,
            profession: self.profile.profession_type,
        };

        let token = self.scheduler.start(Lane::AiBuild);
        self.ui.ai_building = true;
        self.ui.staged_text = Some(AI_BUILD_MESSAGES[0].to_string());
        for (offset, message) in offsets.into_iter().zip(AI_BUILD_MESSAGES.into_iter().skip(1)) {
            self.scheduler
                .schedule(token, offset, StagedTask::StagedText(message));
        }
        self.scheduler
            .schedule(token, total, StagedTask::CommitAiBuild(inputs));
        debug!("ai build started");
        self.record(WizardEventType::AiBuildStarted, json!({}));
    }

    /// Swaps one review field for its canned alternative.
    pub fn regenerate_field(&mut self, field: RegenerableField) {
        let patch = regenerate_field(field, self.profile.profession_type);
        let profile = self.profile.with_changes(&patch);
        self.commit(
            profile,
            WizardEventType::FieldRegenerated,
            json!({ "field": field }),
        );
    }

    // ---- generic edits --------------------------------------------------

    /// Shallow merge of any profile fields.
    ///
    /// A profession in the patch is applied first, like a confirmed
    /// selection, so CTA defaults and badge labels follow it before the
    /// remaining fields land. Badges set directly are re-labelled for the
    /// active profession.
    pub fn update_fields(&mut self, patch: ProfilePatch) {
        if let Some(next) = patch
            .profession_type
            .filter(|next| *next != self.profile.profession_type)
        {
            self.gate.mark_selected();
            self.apply_profession(next);
        }
        let fields = ProfilePatch {
            profession_type: None,
            ..patch
        };
        if fields.is_empty() {
            return;
        }
        let mut profile = self.profile.with_changes(&fields);
        if fields.badges.is_some() {
            profile.badges = badges_for_profession(profile.profession_type, &profile.badges);
        }
        self.commit(
            profile,
            WizardEventType::FieldsUpdated,
            json!({ "fields": fields.changed_fields() }),
        );
    }

    /// CTA form edits; freezes label and type against profession defaults.
    pub fn edit_cta(&mut self, edit: CtaEdit) {
        self.update_fields(ProfilePatch {
            primary_cta_label: edit.label,
            primary_cta_type: edit.cta_type,
            primary_cta_value: edit.value,
            cta_customized: Some(true),
            ..Default::default()
        });
    }

    /// Replaces the keyword list from comma-separated text.
    pub fn set_keywords_text(&mut self, text: &str) {
        self.update_fields(ProfilePatch {
            keywords: Some(split_keywords(text)),
            ..Default::default()
        });
    }

    pub fn update_social_link(&mut self, field: SocialField, value: impl Into<String>) {
        let profile = self.profile.with_social_link(field, value);
        self.commit(
            profile,
            WizardEventType::SocialLinkUpdated,
            json!({ "field": field.key() }),
        );
    }

    /// Shows or hides the URL input of one platform.
    pub fn toggle_social_input(&mut self, platform: SocialPlatform) {
        if !self.ui.expanded_socials.remove(&platform) {
            self.ui.expanded_socials.insert(platform);
        }
    }

    /// Inputs stay visible while their link is set.
    pub fn is_social_input_visible(&self, platform: SocialPlatform) -> bool {
        self.ui.expanded_socials.contains(&platform)
            || !self.profile.social_links.get(platform.into()).is_empty()
    }

    /// Sets one badge value. Positions without a label are ignored.
    pub fn set_badge_value(&mut self, index: usize, value: impl Into<String>) -> bool {
        let Some(profile) = self.profile.with_badge_value(index, value) else {
            return false;
        };
        self.commit(
            profile,
            WizardEventType::BadgeUpdated,
            json!({ "index": index }),
        );
        true
    }

    /// Embeds uploaded bytes into the photo or logo slot.
    pub fn attach_image(&mut self, slot: MediaSlot, bytes: &[u8]) {
        let image = embed_image(bytes);
        let profile = self.profile.with_changes(&slot.patch(image));
        self.commit(
            profile,
            WizardEventType::MediaAttached,
            json!({ "slot": slot, "bytes": bytes.len() }),
        );
    }

    // ---- navigation -----------------------------------------------------

    /// Continue to the next step.
    pub fn advance(&mut self) {
        self.set_phase(self.phase.next());
    }

    /// Skip is a plain continue.
    pub fn skip(&mut self) {
        self.advance();
    }

    pub fn back(&mut self) {
        self.set_phase(self.phase.previous());
    }

    /// Returns to the category step to pick another layout.
    pub fn change_layout(&mut self) {
        self.set_phase(Phase::Category);
    }

    /// Back to the first step with the seed profile and no transient state.
    pub fn start_over(&mut self) {
        let dropped = self.scheduler.cancel_all();
        self.phase = Phase::Commitment;
        self.ui = UiFlags::default();
        self.gate.reset();
        info!(dropped_tasks = dropped, "wizard restarted");
        self.commit(
            seed_profile(),
            WizardEventType::StartedOver,
            json!({ "dropped_tasks": dropped }),
        );
    }

    // ---- internals ------------------------------------------------------

    fn set_phase(&mut self, next: Phase) {
        let from = self.phase;
        if next == from {
            return;
        }
        self.leave_phase(from);
        self.phase = next;

        let fade = self.settings.timings.phase_fade();
        let token = self.scheduler.start(Lane::PhaseFade);
        self.ui.fading = true;
        self.scheduler.schedule(token, fade, StagedTask::EndFade);

        debug!(from = ?from, to = ?next, "phase changed");
        self.record(
            WizardEventType::PhaseChanged,
            json!({ "from": from, "to": next }),
        );
    }

    /// Cancels the sequence owned by the step being left.
    fn leave_phase(&mut self, from: Phase) {
        match from {
            Phase::Reveal => {
                if self.scheduler.cancel(Lane::Reveal) > 0 || self.ui.reveal_loading {
                    self.ui.reveal_loading = false;
                    self.ui.staged_text = None;
                }
            }
            Phase::Positioning => {
                if self.scheduler.cancel(Lane::AiBuild) > 0 || self.ui.ai_building {
                    self.ui.ai_building = false;
                    self.ui.staged_text = None;
                }
            }
            _ => {}
        }
    }

    fn run_task(&mut self, lane: Lane, task: StagedTask) {
        match task {
            StagedTask::StagedText(text) => {
                self.ui.staged_text = Some(text.to_string());
                let event_type = if lane == Lane::Reveal {
                    WizardEventType::RevealStaged
                } else {
                    WizardEventType::AiBuildStaged
                };
                self.record(event_type, json!({ "text": text }));
            }
            StagedTask::FinishReveal => {
                self.ui.reveal_loading = false;
                self.ui.staged_text = None;
                self.record(WizardEventType::RevealFinished, json!({}));
            }
            StagedTask::CommitAiBuild(inputs) => {
                let patch = generate_ai_fields(&inputs.raw_input, inputs.tone, inputs.profession);
                let profile = self.profile.with_changes(&patch);
                self.ui.ai_building = false;
                self.ui.staged_text = None;
                info!(profession = inputs.profession.slug(), "ai build committed");
                self.commit(
                    profile,
                    WizardEventType::AiBuildCommitted,
                    json!({ "fields": patch.changed_fields() }),
                );
                self.set_phase(Phase::Review);
            }
            StagedTask::ResetCopyFeedback => {
                self.ui.copy_feedback = CopyFeedback::Idle;
            }
            StagedTask::EndFade => {
                self.ui.fading = false;
            }
        }
    }

    /// Installs a new profile value, bumping the revision when content changed.
    fn commit(&mut self, profile: Profile, event_type: WizardEventType, details: serde_json::Value) {
        if profile != self.profile {
            self.profile = profile;
            self.version = ProfileVersion::of(self.version.revision + 1, &self.profile);
        }
        self.record(event_type, details);
    }

    fn record(&mut self, event_type: WizardEventType, details: serde_json::Value) {
        self.log
            .append(event_type, self.phase, self.version.clone(), details);
    }
}
