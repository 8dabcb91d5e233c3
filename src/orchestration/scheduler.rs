//! Cancellable staged tasks on a virtual clock.
//!
//! The wizard simulates asynchronous work (loaders, staged status messages,
//! transient labels) by scheduling payloads at offsets from "now". The host
//! drives time forward explicitly, so every sequence is deterministic.
//!
//! Tasks belong to a [`Lane`]. Each lane carries a generation counter;
//! restarting or cancelling a lane bumps it, and tasks stamped with an older
//! generation are discarded instead of applied.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Independent family of staged tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    Reveal,
    AiBuild,
    CopyFeedback,
    PhaseFade,
}

impl Lane {
    pub const ALL: [Lane; 4] = [Lane::Reveal, Lane::AiBuild, Lane::CopyFeedback, Lane::PhaseFade];
}

/// Proof that a sequence is the current one on its lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceToken {
    lane: Lane,
    generation: u64,
}

impl SequenceToken {
    pub fn lane(&self) -> Lane {
        self.lane
    }
}

#[derive(Debug, Clone)]
struct ScheduledTask<T> {
    due: Duration,
    order: u64,
    token: SequenceToken,
    payload: T,
}

#[derive(Debug, Clone)]
pub struct StagedScheduler<T> {
    now: Duration,
    next_order: u64,
    generations: HashMap<Lane, u64>,
    pending: Vec<ScheduledTask<T>>,
}

impl<T> Default for StagedScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StagedScheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_order: 0,
            generations: HashMap::new(),
            pending: Vec::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Invalidates whatever runs on `lane` and returns a fresh token for it.
    pub fn start(&mut self, lane: Lane) -> SequenceToken {
        self.cancel(lane);
        SequenceToken {
            lane,
            generation: self.generation(lane),
        }
    }

    /// Drops every pending task on `lane`. Returns how many were dropped.
    pub fn cancel(&mut self, lane: Lane) -> usize {
        *self.generations.entry(lane).or_insert(0) += 1;
        let before = self.pending.len();
        self.pending.retain(|task| task.token.lane != lane);
        before - self.pending.len()
    }

    pub fn cancel_all(&mut self) -> usize {
        Lane::ALL.into_iter().map(|lane| self.cancel(lane)).sum()
    }

    /// True when `token` still belongs to the live sequence on its lane.
    pub fn is_current(&self, token: SequenceToken) -> bool {
        self.generation(token.lane) == token.generation
    }

    /// True when the lane has pending tasks.
    pub fn is_active(&self, lane: Lane) -> bool {
        self.pending.iter().any(|task| task.token.lane == lane)
    }

    /// Queues `payload` to run `delay` after now. Stale tokens are ignored.
    pub fn schedule(&mut self, token: SequenceToken, delay: Duration, payload: T) -> bool {
        if !self.is_current(token) {
            return false;
        }
        let order = self.next_order;
        self.next_order += 1;
        self.pending.push(ScheduledTask {
            due: self.now + delay,
            order,
            token,
            payload,
        });
        true
    }

    /// Earliest deadline among live tasks.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .iter()
            .filter(|task| self.is_current(task.token))
            .map(|task| task.due)
            .min()
    }

    /// Removes and returns the next live task due at or before `until`,
    /// moving the clock to its deadline. Ties run in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<(Lane, T)> {
        let generations = &self.generations;
        self.pending.retain(|task| {
            generations.get(&task.token.lane).copied().unwrap_or(0) == task.token.generation
        });
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= until)
            .min_by_key(|(_, task)| (task.due, task.order))
            .map(|(index, _)| index)?;
        let task = self.pending.remove(index);
        self.now = self.now.max(task.due);
        Some((task.token.lane, task.payload))
    }

    /// Moves the clock forward without running anything.
    pub fn settle_at(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    fn generation(&self, lane: Lane) -> u64 {
        self.generations.get(&lane).copied().unwrap_or(0)
    }
}
