//! Rule result models.
//!
//! This module contains the [`RuleResult`] type produced per compliance rule
//! and the [`AnalysisOutcome`] that groups the three of them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The compliance rules evaluated for every employee.
///
/// # Example
///
/// ```
/// use attendance_audit::models::Rule;
///
/// assert_eq!(Rule::ShiftGap.id(), "shift_gap");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Worked a run of consecutive days.
    ConsecutiveDays,
    /// Short rest between two consecutive shifts.
    ShiftGap,
    /// A single shift over the maximum length.
    LongShift,
}

impl Rule {
    /// Stable identifier used in logs and serialized output.
    pub fn id(&self) -> &'static str {
        match self {
            Rule::ConsecutiveDays => "consecutive_days",
            Rule::ShiftGap => "shift_gap",
            Rule::LongShift => "long_shift",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::ConsecutiveDays => write!(f, "Consecutive Days"),
            Rule::ShiftGap => write!(f, "Shift Gap"),
            Rule::LongShift => write!(f, "Long Shift"),
        }
    }
}

/// The evidence that put an employee into a rule's result set.
///
/// Mirrors an audit step: the raw facts that were compared and a
/// human-readable explanation of the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleFinding {
    /// The rule that matched.
    pub rule: Rule,
    /// The employee that matched.
    pub employee_name: String,
    /// Structured facts behind the match.
    pub evidence: serde_json::Value,
    /// Human-readable explanation.
    pub reasoning: String,
}

/// Employees satisfying one rule.
///
/// Names are kept in a set, so recording the same employee twice never
/// changes the count. The set is ordered, which keeps reports stable between
/// runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    rule: Rule,
    employees: BTreeSet<String>,
    count: usize,
    findings: Vec<RuleFinding>,
}

impl RuleResult {
    /// Creates an empty result for `rule`.
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            employees: BTreeSet::new(),
            count: 0,
            findings: Vec::new(),
        }
    }

    /// Records a finding. Returns false (and keeps the first finding) if the
    /// employee was already recorded.
    pub fn record(&mut self, finding: RuleFinding) -> bool {
        if !self.employees.insert(finding.employee_name.clone()) {
            return false;
        }
        self.count = self.employees.len();
        self.findings.push(finding);
        true
    }

    /// The rule this result belongs to.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Employee names satisfying the rule, in name order.
    pub fn employees(&self) -> &BTreeSet<String> {
        &self.employees
    }

    /// Number of distinct employees satisfying the rule.
    pub fn count(&self) -> usize {
        self.count
    }

    /// One finding per employee, in discovery order.
    pub fn findings(&self) -> &[RuleFinding] {
        &self.findings
    }

    /// Returns true if `employee` satisfies the rule.
    pub fn contains(&self, employee: &str) -> bool {
        self.employees.contains(employee)
    }
}

/// The three rule results of one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    /// Employees with a run of consecutive working days.
    pub consecutive_days: RuleResult,
    /// Employees with a short rest between consecutive shifts.
    pub shift_gap: RuleResult,
    /// Employees with an over-long single shift.
    pub long_shift: RuleResult,
}

impl AnalysisOutcome {
    /// Creates an outcome with three empty results.
    pub fn empty() -> Self {
        Self {
            consecutive_days: RuleResult::new(Rule::ConsecutiveDays),
            shift_gap: RuleResult::new(Rule::ShiftGap),
            long_shift: RuleResult::new(Rule::LongShift),
        }
    }

    /// The results in report order.
    pub fn results(&self) -> [&RuleResult; 3] {
        [&self.consecutive_days, &self.shift_gap, &self.long_shift]
    }
}

impl Default for AnalysisOutcome {
    fn default() -> Self {
        Self::empty()
    }
}
