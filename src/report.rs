//! Plain-text rendering of analysis reports.

use rust_decimal::Decimal;

use crate::config::RuleConfig;
use crate::models::{AnalysisReport, RuleResult};
use crate::rules::minutes_to_hours;

/// Renders a report as one section per rule, each listing the flagged
/// employees followed by a total line.
///
/// Section labels follow the thresholds in `rules`.
///
/// # Examples
///
/// ```
/// use attendance_audit::config::RuleConfig;
/// use attendance_audit::models::{AnalysisOutcome, AnalysisReport};
/// use attendance_audit::report::render_text;
///
/// let report = AnalysisReport::new("empty.csv", 0, 0, vec![], AnalysisOutcome::empty());
/// let text = render_text(&report, &RuleConfig::default());
/// assert!(text.starts_with("a) Who has worked for 7 consecutive days.\n"));
/// ```
pub fn render_text(report: &AnalysisReport, rules: &RuleConfig) -> String {
    let days = rules.consecutive_days.threshold_days;
    let min_gap = hours_label(minutes_to_hours(rules.shift_gap.min_minutes));
    let max_gap = hours_label(minutes_to_hours(rules.shift_gap.max_minutes));
    let max_shift = hours_label(minutes_to_hours(rules.long_shift.max_minutes));

    let mut lines = Vec::new();

    push_section(
        &mut lines,
        &format!("a) Who has worked for {} consecutive days.", days),
        &report.results.consecutive_days,
        &format!("Total Employees worked for {} consecutive days", days),
    );
    push_section(
        &mut lines,
        &format!(
            "b) Who has less than {} of time between shifts but greater than {}",
            max_gap, min_gap
        ),
        &report.results.shift_gap,
        &format!(
            "Total Employees have less than {} between shifts but greater than {}",
            max_gap, min_gap
        ),
    );
    push_section(
        &mut lines,
        &format!("c) Who has worked for more than {} in a single shift", max_shift),
        &report.results.long_shift,
        &format!(
            "Total Employees who has worked for more than {} in a single shift",
            max_shift
        ),
    );

    if !report.skipped_rows.is_empty() {
        lines.push(format!("Skipped rows: {}", report.skipped_rows.len()));
    }

    lines.into_iter().map(|line| line + "\n").collect()
}

fn push_section(lines: &mut Vec<String>, heading: &str, result: &RuleResult, total_label: &str) {
    lines.push(heading.to_string());
    lines.extend(
        result
            .employees()
            .iter()
            .map(|name| format!("{} satisfied the condition.", name)),
    );
    lines.push(format!("{}: {}", total_label, result.count()));
}

fn hours_label(hours: Decimal) -> String {
    if hours == Decimal::ONE {
        "1 hour".to_string()
    } else {
        format!("{} hours", hours)
    }
}
