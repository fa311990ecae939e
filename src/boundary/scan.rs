/// Single-pass reduction of gap records into boundary candidates
use super::{GapRecord, ScoredColumn, SelectorConfig};

/// Boundary candidates accumulated over one scan of the report.
///
/// `None` means the field has not been observed yet. Records must be fed
/// in ascending position order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanState {
    /// Number of records consumed
    pub total_positions: u64,
    /// First threshold-passing column with gaps (set once)
    pub confirmed_left: Option<ScoredColumn>,
    /// Last threshold-passing column with gaps after `confirmed_left`
    pub confirmed_right: Option<ScoredColumn>,
    /// Leftmost no-gap column (set once)
    pub first_no_gap: Option<u64>,
    /// Rightmost no-gap column
    pub last_no_gap: Option<u64>,
    /// Best-effort left candidate, tracked until `confirmed_left` is set
    pub fallback_left: Option<ScoredColumn>,
    /// Candidate run ended by a drop; only a x2 jump restarts it
    pub fallback_frozen: bool,
    /// Highest-scoring column below the threshold
    pub fallback_right: Option<ScoredColumn>,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a whole record stream into a fresh state.
    pub fn scan<I>(records: I, config: &SelectorConfig) -> Self
    where
        I: IntoIterator<Item = GapRecord>,
    {
        let mut state = Self::new();
        for record in records {
            state.update(record, config);
        }
        state
    }

    /// Apply one record.
    pub fn update(&mut self, record: GapRecord, config: &SelectorConfig) {
        self.total_positions += 1;

        if config.passes(record.gap_score) {
            self.update_passing(record);
        } else {
            self.update_below_threshold(record);
        }
    }

    fn update_passing(&mut self, record: GapRecord) {
        if !record.is_no_gap() {
            if self.confirmed_left.is_some() {
                self.confirmed_right = Some(record.into());
            } else {
                self.confirmed_left = Some(record.into());
            }
            return;
        }

        self.last_no_gap = Some(record.position);
        if self.first_no_gap.is_none() {
            self.first_no_gap = Some(record.position);
        }
    }

    fn update_below_threshold(&mut self, record: GapRecord) {
        let best_right = self.fallback_right.map_or(0.0, |c| c.score);
        if record.gap_score > best_right {
            self.fallback_right = Some(record.into());
        }

        if self.confirmed_left.is_some() {
            return;
        }

        let candidate = self.fallback_left.map_or(0.0, |c| c.score);
        if record.gap_score > 2.0 * candidate {
            // sharp jump starts a new run
            self.fallback_left = Some(record.into());
            self.fallback_frozen = false;
        } else if !self.fallback_frozen && record.gap_score >= candidate {
            self.fallback_left = Some(record.into());
        } else {
            self.fallback_frozen = true;
        }
    }
}
