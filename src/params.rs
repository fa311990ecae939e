use std::path::PathBuf;

use clap::Parser;

use crate::boundary::{SelectorConfig, DEFAULT_MIN_GAP_SCORE};

// ---------------------------------------------------------------------------
// Parameters struct
// ---------------------------------------------------------------------------

/// gapbounds command-line parameters.
///
/// Option names follow the companion script of the trimming tool so existing
/// pipelines keep working.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gapbounds",
    about = "Choose alignment columns that must survive trimming, from per-column gap statistics",
    version
)]
pub struct Parameters {
    // ── Input ───────────────────────────────────────────────────────────
    /// Gap statistics report produced by the trimmer (plain or .gz)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    // ── Selection ───────────────────────────────────────────────────────
    /// Minimum gap score (1 - fraction of gaps) for boundary columns when
    /// there are not two columns without gaps
    #[arg(long = "min_gapscore_allowed", default_value_t = DEFAULT_MIN_GAP_SCORE, allow_hyphen_values = true)]
    pub min_gap_score_allowed: f64,

    /// Report the best possible boundaries when no column passes the threshold
    #[arg(long = "get_best_boundaries")]
    pub get_best_boundaries: bool,

    /// Do not prefer columns without gaps as boundaries; they are still used
    /// when they lie outside the threshold-passing columns
    #[arg(long = "discard_nogaps_columns")]
    pub discard_no_gaps_columns: bool,

    // ── Output ──────────────────────────────────────────────────────────
    /// Print only "left,right" for direct use by the trimmer
    #[arg(long = "one_line")]
    pub one_line: bool,
}

impl Parameters {
    /// Build the selector configuration from the command line.
    pub fn selector_config(&self) -> Result<SelectorConfig, crate::error::Error> {
        SelectorConfig::new(
            self.min_gap_score_allowed,
            self.discard_no_gaps_columns,
            self.get_best_boundaries,
        )
    }

    /// Validate parameter combinations that clap alone cannot enforce.
    pub fn validate(&self) -> Result<(), crate::error::Error> {
        if !self.input.is_file() {
            return Err(crate::error::Error::Parameter(format!(
                "--input '{}' is not an existing file",
                self.input.display()
            )));
        }

        self.selector_config()?;

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
