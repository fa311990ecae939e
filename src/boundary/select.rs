/// Boundary selection policy
///
/// Tiers, first match wins:
/// 1. two distinct no-gap columns (unless discarded)
/// 2. confirmed threshold-passing columns, widened to outer no-gap columns
/// 3. best-effort columns below the threshold (if requested)
/// 4. nothing
use super::{ScanState, ScoredColumn, SelectorConfig, UNSET_POSITION};

/// Which rule produced the boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    NoGap,
    Confirmed,
    BestEffort,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoGap => write!(f, "no-gap"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::BestEffort => write!(f, "best-effort"),
        }
    }
}

/// Left and right columns protected from trimming.
///
/// An end is `None` when the scan never observed it; it is printed as the
/// `-1` position with score 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    pub tier: Tier,
    pub left: Option<ScoredColumn>,
    pub right: Option<ScoredColumn>,
}

impl Boundaries {
    pub fn left_position(&self) -> i64 {
        output_position(self.left.as_ref())
    }

    pub fn right_position(&self) -> i64 {
        output_position(self.right.as_ref())
    }
}

/// Position for output, `UNSET_POSITION` for an unobserved end.
pub fn output_position(end: Option<&ScoredColumn>) -> i64 {
    end.map_or(UNSET_POSITION, |c| c.position as i64)
}

/// Pick the boundaries from a finished scan. `None` means no decision.
pub fn select(state: &ScanState, config: &SelectorConfig) -> Option<Boundaries> {
    if !config.discard_no_gap_columns {
        if let Some(boundaries) = no_gap_tier(state) {
            return Some(boundaries);
        }
    }

    if let Some(boundaries) = confirmed_tier(state) {
        return Some(boundaries);
    }

    if config.best_effort_fallback {
        return Some(best_effort_tier(state));
    }

    None
}

fn no_gap_tier(state: &ScanState) -> Option<Boundaries> {
    match (state.first_no_gap, state.last_no_gap) {
        (Some(left), Some(right)) if left != right => Some(Boundaries {
            tier: Tier::NoGap,
            left: Some(ScoredColumn::new(left, 1.0)),
            right: Some(ScoredColumn::new(right, 1.0)),
        }),
        _ => None,
    }
}

/// Fires once a confirmed left exists; the right end may stay unobserved.
fn confirmed_tier(state: &ScanState) -> Option<Boundaries> {
    let mut left = state.confirmed_left?;
    if let Some(pos) = state.first_no_gap {
        if pos < left.position {
            left = ScoredColumn::new(pos, 1.0);
        }
    }

    // an unset confirmed right is overridden by any no-gap column
    let right = match (state.confirmed_right, state.last_no_gap) {
        (Some(right), Some(pos)) if pos > right.position => Some(ScoredColumn::new(pos, 1.0)),
        (None, Some(pos)) => Some(ScoredColumn::new(pos, 1.0)),
        (right, _) => right,
    };

    Some(Boundaries {
        tier: Tier::Confirmed,
        left: Some(left),
        right,
    })
}

fn best_effort_tier(state: &ScanState) -> Boundaries {
    Boundaries {
        tier: Tier::BestEffort,
        left: state.fallback_left,
        right: state.fallback_right,
    }
}
