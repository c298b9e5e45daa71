use serde::Serialize;

use super::phase::Phase;

/// One translation that needs machine translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkItem {
    pub key_id: u64,
    pub language_iso: String,
    pub translation_id: u64,
    pub source_text: String,
}

/// What happened to a single [`WorkItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ItemOutcome {
    Updated {
        language_iso: String,
        translation_id: u64,
        text: String,
    },
    Failed {
        language_iso: String,
        translation_id: u64,
        reason: String,
    },
}

impl ItemOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, ItemOutcome::Updated { .. })
    }
}

/// Summary of one sync run, built up by the orchestrator as it goes.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub keys_fetched: usize,
    pub outcomes: Vec<ItemOutcome>,
    pub phases: Vec<Phase>,
}

impl Default for SyncReport {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncReport {
    pub fn new() -> Self {
        Self {
            keys_fetched: 0,
            outcomes: Vec::new(),
            phases: vec![Phase::Init],
        }
    }

    pub fn phase(&self) -> Phase {
        self.phases.last().copied().unwrap_or(Phase::Init)
    }

    /// Move to `next`, recording it unless the run is already there.
    pub fn advance(&mut self, next: Phase) {
        let current = self.phase();
        if current == next {
            return;
        }
        debug_assert!(
            current.can_advance_to(next),
            "illegal phase change {current} -> {next}"
        );
        self.phases.push(next);
    }

    pub fn record(&mut self, outcome: ItemOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn updated(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_updated()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.updated()
    }
}
