//! Level progression
//!
//! Levels are numbered from 1. The unlocked set only ever grows, always holds
//! level 1, and never holds anything past `total_levels`.

use std::collections::BTreeSet;

use crate::consts::FIRST_LEVEL;

/// Raw progression data as stored in the player data document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionRecord {
    pub unlocked_levels: BTreeSet<u32>,
    /// Level last started or selected
    pub current_level: u32,
}

impl Default for ProgressionRecord {
    fn default() -> Self {
        Self {
            unlocked_levels: BTreeSet::from([FIRST_LEVEL]),
            current_level: FIRST_LEVEL,
        }
    }
}

/// Unlocked levels plus the current level pointer
#[derive(Debug, Clone)]
pub struct ProgressionModel {
    record: ProgressionRecord,
    total_levels: u32,
}

impl ProgressionModel {
    /// Fresh progression: only level 1 unlocked. A level count of 0 is treated as 1.
    pub fn new(total_levels: u32) -> Self {
        Self {
            record: ProgressionRecord::default(),
            total_levels: total_levels.max(FIRST_LEVEL),
        }
    }

    /// Restore from a loaded record, repairing anything outside the invariants
    pub fn from_record(record: ProgressionRecord, total_levels: u32) -> Self {
        let total_levels = total_levels.max(FIRST_LEVEL);
        let ProgressionRecord {
            unlocked_levels,
            current_level,
        } = record;

        let (mut unlocked, dropped): (BTreeSet<u32>, BTreeSet<u32>) = unlocked_levels
            .into_iter()
            .partition(|level| (FIRST_LEVEL..=total_levels).contains(level));
        if !dropped.is_empty() {
            log::warn!(
                "Ignoring unlocked levels outside 1..={}: {:?}",
                total_levels,
                dropped
            );
        }
        unlocked.insert(FIRST_LEVEL);

        let clamped = current_level.clamp(FIRST_LEVEL, total_levels);
        if clamped != current_level {
            log::warn!("Current level {current_level} out of range, using {clamped}");
        }

        Self {
            record: ProgressionRecord {
                unlocked_levels: unlocked,
                current_level: clamped,
            },
            total_levels,
        }
    }

    pub fn is_level_unlocked(&self, level: u32) -> bool {
        self.record.unlocked_levels.contains(&level)
    }

    /// Unlock the level after the current one.
    /// Returns true if the set changed and needs persisting.
    pub fn unlock_next_level(&mut self) -> bool {
        let Some(next) = self.record.current_level.checked_add(1) else {
            return false;
        };
        if next > self.total_levels || self.is_level_unlocked(next) {
            return false;
        }
        self.record.unlocked_levels.insert(next)
    }

    /// Point at a level. No unlock check here; callers decide.
    pub fn set_current_level(&mut self, level: u32) {
        self.record.current_level = level;
    }

    pub fn current_level(&self) -> u32 {
        self.record.current_level
    }

    pub fn total_levels(&self) -> u32 {
        self.total_levels
    }

    /// Unlocked levels in ascending order
    pub fn unlocked_levels(&self) -> Vec<u32> {
        self.record.unlocked_levels.iter().copied().collect()
    }

    pub fn highest_unlocked(&self) -> u32 {
        self.record
            .unlocked_levels
            .last()
            .copied()
            .unwrap_or(FIRST_LEVEL)
    }

    pub fn record(&self) -> &ProgressionRecord {
        &self.record
    }
}
