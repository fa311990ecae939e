/// Boundary selection from per-column gap scores
///
/// A single left-to-right pass folds the report into a `ScanState`, then a
/// priority policy picks the (left, right) columns the trimmer must keep.
pub mod scan;
pub mod select;

pub use scan::ScanState;
pub use select::{output_position, select, Boundaries, Tier};

use crate::error::Error;

/// Default minimum gap score for a column to be a confirmed boundary.
pub const DEFAULT_MIN_GAP_SCORE: f64 = 0.8;

/// Printed position of a boundary end the scan never observed.
pub const UNSET_POSITION: i64 = -1;

/// One alignment column from the gap statistics report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapRecord {
    /// Column index in the alignment
    pub position: u64,
    /// Fraction of non-gap residues (1.0 = no gaps)
    pub gap_score: f64,
}

impl GapRecord {
    pub fn new(position: u64, gap_score: f64) -> Self {
        Self {
            position,
            gap_score,
        }
    }

    /// True for a column without any gap.
    pub fn is_no_gap(&self) -> bool {
        self.gap_score == 1.0
    }
}

/// A column position together with the gap score it was chosen with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredColumn {
    pub position: u64,
    pub score: f64,
}

impl ScoredColumn {
    pub fn new(position: u64, score: f64) -> Self {
        Self { position, score }
    }

    /// Position as a fraction of the alignment length.
    pub fn ratio(&self, total_positions: u64) -> f64 {
        if total_positions == 0 {
            0.0
        } else {
            self.position as f64 / total_positions as f64
        }
    }
}

impl From<GapRecord> for ScoredColumn {
    fn from(record: GapRecord) -> Self {
        Self::new(record.position, record.gap_score)
    }
}

/// Settings consumed by the scan and the selection policy.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorConfig {
    /// Inclusive threshold for confirmed boundary columns
    pub min_gap_score: f64,
    /// Skip the no-gap tier (no-gap columns still override confirmed ends)
    pub discard_no_gap_columns: bool,
    /// Report best-effort boundaries when nothing passes the threshold
    pub best_effort_fallback: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_gap_score: DEFAULT_MIN_GAP_SCORE,
            discard_no_gap_columns: false,
            best_effort_fallback: false,
        }
    }
}

impl SelectorConfig {
    pub fn new(
        min_gap_score: f64,
        discard_no_gap_columns: bool,
        best_effort_fallback: bool,
    ) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&min_gap_score) {
            return Err(Error::Parameter(format!(
                "--min_gapscore_allowed should be defined in the range [0,1], got {min_gap_score}"
            )));
        }
        Ok(Self {
            min_gap_score,
            discard_no_gap_columns,
            best_effort_fallback,
        })
    }

    /// True if the column is eligible as a confirmed boundary.
    pub fn passes(&self, gap_score: f64) -> bool {
        gap_score >= self.min_gap_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let cfg = SelectorConfig::default();
        assert!((cfg.min_gap_score - 0.8).abs() < f64::EPSILON);
        assert!(!cfg.discard_no_gap_columns);
        assert!(!cfg.best_effort_fallback);
    }

    #[test]
    fn test_config_rejects_out_of_range() {
        assert!(SelectorConfig::new(-0.01, false, false).is_err());
        assert!(SelectorConfig::new(1.01, false, false).is_err());
        assert!(SelectorConfig::new(f64::NAN, false, false).is_err());
        assert!(SelectorConfig::new(0.0, false, false).is_ok());
        assert!(SelectorConfig::new(1.0, true, true).is_ok());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let cfg = SelectorConfig::new(0.75, false, false).unwrap();
        assert!(cfg.passes(0.75));
        assert!(cfg.passes(1.0));
        assert!(!cfg.passes(0.7499));
    }

    #[test]
    fn test_ratio() {
        let col = ScoredColumn::new(25, 0.9);
        assert!((col.ratio(100) - 0.25).abs() < 1e-12);
        assert_eq!(col.ratio(0), 0.0);
    }
}
