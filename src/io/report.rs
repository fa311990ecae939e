/// Boundary report output
///
/// Annotated mode prints two `## `-prefixed lines that can be appended to
/// the gap statistics report:
///
/// `## <label>\t<score>\tpos\t<position>\t%alig\t<position/total>`
///
/// One-line mode prints `<left>,<right>`, which the trimmer reads as-is.
/// Unobserved ends print as position `-1` with score 0.
use crate::boundary::{output_position, Boundaries, ScoredColumn, Tier, UNSET_POSITION};

/// Printed when no tier produced boundaries.
pub const NO_OUTPUT: &str = "WARNING: OUTPUT NOT AVAILABLE";

fn labels(tier: Tier) -> (&'static str, &'static str) {
    match tier {
        Tier::NoGap => ("NO Gaps Left Boundary", "NO Gaps Right Boundary"),
        Tier::Confirmed => (
            "Best Gaps_Score Left Boundary",
            "Best Gaps_Score Right Boundary",
        ),
        Tier::BestEffort => (
            "Best_found Gaps_Score Left Boundary",
            "Best_found Gaps_Score Right Boundary",
        ),
    }
}

fn format_line(label: &str, end: Option<&ScoredColumn>, total_positions: u64) -> String {
    let (score, ratio) = match end {
        Some(column) => (column.score, column.ratio(total_positions)),
        None if total_positions > 0 => (0.0, UNSET_POSITION as f64 / total_positions as f64),
        None => (0.0, 0.0),
    };
    format!(
        "## {:<30}\t{:.4}\tpos\t{}\t%alig\t{:.4}",
        label,
        score,
        output_position(end),
        ratio
    )
}

/// Render the selection result as a single output string (no trailing newline).
pub fn render(result: Option<&Boundaries>, total_positions: u64, one_line: bool) -> String {
    let Some(b) = result else {
        return NO_OUTPUT.to_string();
    };

    if one_line {
        return format!("{},{}", b.left_position(), b.right_position());
    }

    let (left_label, right_label) = labels(b.tier);
    format!(
        "{}\n{}",
        format_line(left_label, b.left.as_ref(), total_positions),
        format_line(right_label, b.right.as_ref(), total_positions)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundaries(tier: Tier, left: (u64, f64), right: (u64, f64)) -> Boundaries {
        Boundaries {
            tier,
            left: Some(ScoredColumn::new(left.0, left.1)),
            right: Some(ScoredColumn::new(right.0, right.1)),
        }
    }

    #[test]
    fn test_one_line() {
        let b = boundaries(Tier::Confirmed, (12, 0.85), (340, 0.9));
        assert_eq!(render(Some(&b), 400, true), "12,340");
    }

    #[test]
    fn test_no_output() {
        assert_eq!(render(None, 10, false), NO_OUTPUT);
        assert_eq!(render(None, 10, true), NO_OUTPUT);
    }

    #[test]
    fn test_no_gap_report() {
        let b = boundaries(Tier::NoGap, (2, 1.0), (3, 1.0));
        let out = render(Some(&b), 4, false);
        assert_eq!(
            out,
            "## NO Gaps Left Boundary         \t1.0000\tpos\t2\t%alig\t0.5000\n\
             ## NO Gaps Right Boundary        \t1.0000\tpos\t3\t%alig\t0.7500"
        );
    }

    #[test]
    fn test_confirmed_report() {
        let b = boundaries(Tier::Confirmed, (1, 0.85), (4, 0.95));
        let out = render(Some(&b), 8, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "## Best Gaps_Score Left Boundary \t0.8500\tpos\t1\t%alig\t0.1250"
        );
        assert_eq!(
            lines[1],
            "## Best Gaps_Score Right Boundary\t0.9500\tpos\t4\t%alig\t0.5000"
        );
    }

    #[test]
    fn test_best_effort_labels_overflow_padding() {
        let b = boundaries(Tier::BestEffort, (3, 0.35), (6, 0.6));
        let out = render(Some(&b), 7, false);
        assert!(out.starts_with("## Best_found Gaps_Score Left Boundary\t0.3500\tpos\t3\t"));
        assert!(out.contains("## Best_found Gaps_Score Right Boundary\t0.6000\tpos\t6\t"));
    }

    #[test]
    fn test_ratio_column() {
        let b = boundaries(Tier::Confirmed, (1, 0.9), (2, 0.9));
        let out = render(Some(&b), 3, false);
        assert!(out.contains("%alig\t0.3333\n"));
        assert!(out.ends_with("%alig\t0.6667"));
    }

    #[test]
    fn test_unobserved_end() {
        let b = Boundaries {
            tier: Tier::Confirmed,
            left: Some(ScoredColumn::new(2, 0.9)),
            right: None,
        };
        assert_eq!(render(Some(&b), 4, true), "2,-1");

        let out = render(Some(&b), 4, false);
        assert!(out.ends_with(
            "## Best Gaps_Score Right Boundary\t0.0000\tpos\t-1\t%alig\t-0.2500"
        ));
    }

    #[test]
    fn test_unobserved_ends_without_columns() {
        let b = Boundaries {
            tier: Tier::BestEffort,
            left: None,
            right: None,
        };
        assert_eq!(render(Some(&b), 0, true), "-1,-1");
        assert!(render(Some(&b), 0, false).contains("\tpos\t-1\t%alig\t0.0000\n"));
    }
}
