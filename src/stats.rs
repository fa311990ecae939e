/// Report reading and column classification statistics
use log::info;

use crate::boundary::{GapRecord, SelectorConfig};
use crate::io::gapstats::LineKind;

/// Tracks what was seen while reading a gap statistics report
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ReportStats {
    /// Total number of lines read
    pub lines_read: u64,
    /// Lines parsed as column records
    pub records: u64,
    /// Table decoration and comment lines (`#`, `|`, `+`)
    pub annotation_lines: u64,
    /// Lines without any field
    pub blank_lines: u64,
    /// Lines that looked like data but could not be parsed
    pub malformed_lines: u64,
    /// Columns without any gap
    pub no_gap_columns: u64,
    /// Columns with gaps passing the gap score threshold
    pub passing_columns: u64,
    /// Columns below the gap score threshold
    pub below_threshold_columns: u64,
}

impl ReportStats {
    /// Create new statistics tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified line
    pub fn record_line(&mut self, kind: &LineKind) {
        self.lines_read += 1;
        match kind {
            LineKind::Annotation => self.annotation_lines += 1,
            LineKind::Blank => self.blank_lines += 1,
            LineKind::Malformed(_) => self.malformed_lines += 1,
            LineKind::Record(_) => self.records += 1,
        }
    }

    /// Record which class a column falls into under `config`
    pub fn record_column(&mut self, record: &GapRecord, config: &SelectorConfig) {
        if record.is_no_gap() {
            self.no_gap_columns += 1;
        } else if config.passes(record.gap_score) {
            self.passing_columns += 1;
        } else {
            self.below_threshold_columns += 1;
        }
    }

    /// Percentage of records in a column class
    fn percent(&self, count: u64) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            100.0 * count as f64 / self.records as f64
        }
    }

    /// Print summary statistics to log
    pub fn print_summary(&self) {
        info!("=== Gap Statistics Summary ===");
        info!(
            "Lines read: {} ({} annotation, {} blank, {} malformed)",
            self.lines_read, self.annotation_lines, self.blank_lines, self.malformed_lines
        );

        if self.records == 0 {
            info!("No alignment columns found");
            return;
        }

        info!("Alignment columns: {}", self.records);
        info!(
            "Columns without gaps: {} ({:.2}%)",
            self.no_gap_columns,
            self.percent(self.no_gap_columns)
        );
        info!(
            "Columns passing threshold: {} ({:.2}%)",
            self.passing_columns,
            self.percent(self.passing_columns)
        );
        info!(
            "Columns below threshold: {} ({:.2}%)",
            self.below_threshold_columns,
            self.percent(self.below_threshold_columns)
        );
    }
}
