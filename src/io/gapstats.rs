/// Reader for per-column gap statistics reports
///
/// Rows are tab-separated; after dropping empty fields:
/// 1. column position (0-based integer)
/// 2. (ignored)
/// 3. gap score (fraction of non-gap residues, in [0,1])
///
/// Lines starting with `#`, `|` or `+` are table decoration, and blank or
/// malformed lines are skipped.
use crate::boundary::GapRecord;
use crate::error::Error;
use crate::stats::ReportStats;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

const POSITION_FIELD: usize = 0;
const GAP_SCORE_FIELD: usize = 2;

/// What a single report line holds.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    Annotation,
    Blank,
    Malformed(String),
    Record(GapRecord),
}

/// Classify one report line (without its line terminator).
pub fn classify_line(line: &str) -> LineKind {
    if line.starts_with(['#', '|', '+']) {
        return LineKind::Annotation;
    }

    let fields: Vec<&str> = line
        .split('\t')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();

    if fields.is_empty() {
        return LineKind::Blank;
    }

    if fields.len() <= GAP_SCORE_FIELD {
        return LineKind::Malformed(format!(
            "{} fields, expected at least {}",
            fields.len(),
            GAP_SCORE_FIELD + 1
        ));
    }

    let position = match fields[POSITION_FIELD].parse::<u64>() {
        Ok(p) => p,
        Err(e) => return LineKind::Malformed(format!("invalid position: {}", e)),
    };

    let gap_score = match fields[GAP_SCORE_FIELD].parse::<f64>() {
        Ok(s) if (0.0..=1.0).contains(&s) => s,
        Ok(s) => return LineKind::Malformed(format!("gap score {} outside [0,1]", s)),
        Err(e) => return LineKind::Malformed(format!("invalid gap score: {}", e)),
    };

    LineKind::Record(GapRecord::new(position, gap_score))
}

/// Streaming reader yielding gap records in file order.
pub struct GapStatsReader {
    lines: Lines<Box<dyn BufRead>>,
    line_num: usize,
    stats: ReportStats,
}

impl GapStatsReader {
    /// Open a report, decompressing `.gz`/`.gzip` files on the fly.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let path_str = path.to_string_lossy();
        let is_gzipped = path_str.ends_with(".gz") || path_str.ends_with(".gzip");

        let file = File::open(path).map_err(|e| Error::io(e, path))?;

        let reader: Box<dyn BufRead> = if is_gzipped {
            Box::new(BufReader::new(GzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        Ok(Self::new(reader))
    }

    pub fn new(reader: Box<dyn BufRead>) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
            stats: ReportStats::new(),
        }
    }

    /// Counters for the lines read so far; callers add column classes.
    pub fn stats_mut(&mut self) -> &mut ReportStats {
        &mut self.stats
    }

    pub fn into_stats(self) -> ReportStats {
        self.stats
    }
}

impl Iterator for GapStatsReader {
    type Item = Result<GapRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_num += 1;

            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    return Some(Err(Error::Report(format!(
                        "failed to read line {}: {}",
                        self.line_num, e
                    ))))
                }
            };

            let kind = classify_line(&line);
            self.stats.record_line(&kind);

            match kind {
                LineKind::Record(record) => return Some(Ok(record)),
                LineKind::Malformed(reason) => {
                    log::debug!("Skipping malformed line {}: {}", self.line_num, reason);
                }
                LineKind::Annotation | LineKind::Blank => {}
            }
        }
    }
}
