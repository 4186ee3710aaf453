//! Run leaderboard
//!
//! Tracks the top 10 finished runs of the current process. Nothing is
//! persisted between sessions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Maximum number of runs to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Largest mass reached during the run
    pub peak_mass: f32,
    /// Ticks survived
    pub ticks: u64,
}

/// Leaderboard, best run first
///
/// Runs are ranked by score, then by peak mass, then by fewer ticks taken.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScoreEntry {
    /// Ordering where `Less` means `self` ranks above `other`
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.peak_mass.total_cmp(&self.peak_mass))
            .then_with(|| self.ticks.cmp(&other.ticks))
    }
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a run; returns the rank achieved (1-indexed) if it made the board
    ///
    /// Scoreless runs are never recorded. A run that exactly ties an entry
    /// ranks below it.
    pub fn add_run(&mut self, score: u64, peak_mass: f32, ticks: u64) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let entry = HighScoreEntry {
            score,
            peak_mass,
            ticks,
        };

        let index = self
            .entries
            .partition_point(|e| e.rank_cmp(&entry) != Ordering::Greater);
        if index >= MAX_HIGH_SCORES {
            return None;
        }

        self.entries.insert(index, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        log::info!("Run recorded at rank {} (score {})", index + 1, score);
        Some(index + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
