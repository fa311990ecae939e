pub mod error;
pub mod params;

pub mod boundary;
pub mod io;
pub mod stats;

use std::io::Write;

use log::{info, warn};

use crate::boundary::{select, Boundaries, ScanState, SelectorConfig};
use crate::error::Error;
use crate::io::gapstats::GapStatsReader;
use crate::params::Parameters;
use crate::stats::ReportStats;

/// Outcome of one pass over a gap statistics report.
#[derive(Debug, Clone)]
pub struct Selection {
    pub state: ScanState,
    pub boundaries: Option<Boundaries>,
    pub stats: ReportStats,
}

impl Selection {
    /// Output text for this selection (no trailing newline).
    pub fn render(&self, one_line: bool) -> String {
        io::report::render(
            self.boundaries.as_ref(),
            self.state.total_positions,
            one_line,
        )
    }
}

/// Scan every record from `reader` and apply the selection policy.
pub fn select_boundaries(
    mut reader: GapStatsReader,
    config: &SelectorConfig,
) -> Result<Selection, Error> {
    let mut state = ScanState::new();

    while let Some(record) = reader.next() {
        let record = record?;
        reader.stats_mut().record_column(&record, config);
        state.update(record, config);
    }

    let boundaries = select(&state, config);

    Ok(Selection {
        state,
        boundaries,
        stats: reader.into_stats(),
    })
}

/// Top-level dispatcher. Called from `main()` after CLI parsing.
pub fn run(params: &Parameters) -> anyhow::Result<()> {
    params.validate()?;
    let config = params.selector_config()?;

    info!("gapbounds v{}", env!("CARGO_PKG_VERSION"));
    info!("input: {}", params.input.display());
    info!("min_gapscore_allowed: {}", config.min_gap_score);
    info!("discard_nogaps_columns: {}", config.discard_no_gap_columns);
    info!("get_best_boundaries: {}", config.best_effort_fallback);

    let reader = GapStatsReader::open(&params.input)?;
    let selection = select_boundaries(reader, &config)?;
    selection.stats.print_summary();

    match &selection.boundaries {
        Some(b) => info!(
            "Selected {} boundaries: {} - {}",
            b.tier,
            b.left_position(),
            b.right_position()
        ),
        None => warn!("No boundaries could be determined"),
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", selection.render(params.one_line)).map_err(Error::from)?;
    Ok(())
}
