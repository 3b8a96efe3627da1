// SPDX-License-Identifier: AGPL-3.0-only

//! Validation harness for the `validate_*` binaries.
//!
//! Every validation binary follows the same pattern:
//!   - Expected values come from `provenance` with their citation
//!   - Explicit pass/fail checks against documented tolerances
//!   - Exit code 0 (all checks pass) or 1 (any check fails)
//!   - Human-readable summary on stdout, JSON summary with `--json`

use std::fmt::Write as _;
use std::process;

use serde::Serialize;

use crate::provenance::ReferenceValue;

/// A single validation check with result tracking.
#[derive(Debug, Clone, Serialize)]
pub struct Check {
    /// Human-readable label
    pub label: String,
    /// Whether this check passed
    pub passed: bool,
    /// Observed value
    pub observed: f64,
    /// Expected value
    pub expected: f64,
    /// Tolerance used
    pub tolerance: f64,
    /// How the tolerance was applied
    pub mode: ToleranceMode,
}

/// How a tolerance threshold is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceMode {
    /// |observed - expected| < tolerance
    Absolute,
    /// |observed - expected| / |expected| < tolerance
    Relative,
    /// observed < threshold
    UpperBound,
    /// observed > threshold
    LowerBound,
    /// pass/fail predicate
    Boolean,
}

impl std::fmt::Display for ToleranceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absolute => write!(f, "abs"),
            Self::Relative => write!(f, "rel"),
            Self::UpperBound => write!(f, "<"),
            Self::LowerBound => write!(f, ">"),
            Self::Boolean => write!(f, "bool"),
        }
    }
}

/// Accumulates validation checks and produces a summary with exit code.
#[derive(Debug, Default, Serialize)]
#[must_use]
pub struct ValidationHarness {
    /// Name of the validation binary
    pub name: String,
    /// All checks performed
    pub checks: Vec<Check>,
}

impl ValidationHarness {
    /// Create a new harness for a named validation binary.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            checks: Vec::new(),
        }
    }

    fn push(
        &mut self,
        label: &str,
        passed: bool,
        (observed, expected, tolerance): (f64, f64, f64),
        mode: ToleranceMode,
    ) {
        self.checks.push(Check {
            label: label.to_string(),
            passed,
            observed,
            expected,
            tolerance,
            mode,
        });
    }

    /// Absolute check: |observed - expected| < tolerance.
    ///
    /// NaN observations always fail.
    pub fn check_abs(&mut self, label: &str, observed: f64, expected: f64, tolerance: f64) {
        let passed = (observed - expected).abs() < tolerance;
        self.push(
            label,
            passed,
            (observed, expected, tolerance),
            ToleranceMode::Absolute,
        );
    }

    /// Relative check: |observed - expected| / |expected| < tolerance.
    ///
    /// Falls back to |observed| < tolerance when `expected` is effectively zero.
    pub fn check_rel(&mut self, label: &str, observed: f64, expected: f64, tolerance: f64) {
        let passed = if expected.abs() > crate::tolerances::NEAR_ZERO_EXPECTED {
            ((observed - expected) / expected).abs() < tolerance
        } else {
            observed.abs() < tolerance
        };
        self.push(
            label,
            passed,
            (observed, expected, tolerance),
            ToleranceMode::Relative,
        );
    }

    /// Upper-bound check: observed < threshold.
    pub fn check_upper(&mut self, label: &str, observed: f64, threshold: f64) {
        self.push(
            label,
            observed < threshold,
            (observed, threshold, threshold),
            ToleranceMode::UpperBound,
        );
    }

    /// Lower-bound check: observed > threshold.
    pub fn check_lower(&mut self, label: &str, observed: f64, threshold: f64) {
        self.push(
            label,
            observed > threshold,
            (observed, threshold, threshold),
            ToleranceMode::LowerBound,
        );
    }

    /// Boolean pass/fail check.
    pub fn check_bool(&mut self, label: &str, passed: bool) {
        self.push(
            label,
            passed,
            (f64::from(u8::from(passed)), 1.0, 0.0),
            ToleranceMode::Boolean,
        );
    }

    /// Absolute check of `observed` against a published reference value.
    pub fn check_reference(&mut self, reference: &ReferenceValue, observed: f64, tolerance: f64) {
        self.check_abs(reference.label, observed, reference.value, tolerance);
    }

    /// Print the provenance block for the references a binary checks.
    pub fn print_provenance(&self, references: &[&ReferenceValue]) {
        println!("  Provenance:");
        for r in references {
            println!("    {}", r.describe());
        }
        println!();
    }

    /// Number of checks that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Total number of checks.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.checks.len()
    }

    /// Whether all checks passed (vacuously true when empty).
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Labels of the failed checks, in insertion order.
    #[must_use]
    pub fn failed_labels(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.label.as_str())
            .collect()
    }

    /// Format the validation summary.
    #[must_use]
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        let _ = writeln!(
            s,
            "═══ {} validation: {}/{} checks passed ═══",
            self.name,
            self.passed_count(),
            self.total_count()
        );
        for check in &self.checks {
            let icon = if check.passed { "✓" } else { "✗" };
            let _ = writeln!(
                s,
                "  {icon} {}: observed={:.6e}, expected={:.6e}, tol={:.2e} ({})",
                check.label, check.observed, check.expected, check.tolerance, check.mode
            );
        }
        if self.all_passed() {
            let _ = writeln!(s, "ALL CHECKS PASSED");
        } else {
            let _ = writeln!(s, "FAILED CHECKS: {}", self.failed_labels().join(", "));
        }
        s
    }

    /// Print summary and exit with the appropriate code.
    ///
    /// `json` switches stdout to a machine-readable summary.
    /// Exit 0 if all checks pass, exit 1 if any fails.
    pub fn finish(&self, json: bool) -> ! {
        if json {
            match serde_json::to_string_pretty(self) {
                Ok(out) => println!("{out}"),
                Err(e) => eprintln!("failed to serialize summary: {e}"),
            }
        } else {
            println!();
            print!("{}", self.format_summary());
        }
        process::exit(i32::from(!self.all_passed()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provenance;

    #[test]
    fn harness_tracks_pass_fail() {
        let mut h = ValidationHarness::new("test");
        h.check_abs("exact", 1.0, 1.0, 1e-10);
        h.check_abs("close", 1.0001, 1.0, 1e-3);
        h.check_abs("far", 2.0, 1.0, 1e-3);
        assert_eq!(h.passed_count(), 2);
        assert_eq!(h.total_count(), 3);
        assert!(!h.all_passed());
        assert_eq!(h.failed_labels(), vec!["far"]);
    }

    #[test]
    fn abs_check_fails_on_nan() {
        let mut h = ValidationHarness::new("test");
        h.check_abs("nan", f64::NAN, 1.0, 1.0);
        assert!(!h.checks[0].passed);
    }

    #[test]
    fn relative_check_handles_zero() {
        let mut h = ValidationHarness::new("test");
        h.check_rel("near_zero", 1e-15, 0.0, 1e-10);
        assert!(h.checks[0].passed);
    }

    #[test]
    fn relative_check_negative_values() {
        let mut h = ValidationHarness::new("test");
        h.check_rel("neg_close", -47.9, -48.0, 0.01);
        h.check_rel("neg_sign_diff", 48.0, -48.0, 0.1);
        assert!(h.checks[0].passed);
        assert!(!h.checks[1].passed);
    }

    #[test]
    fn bounds_are_strict() {
        let mut h = ValidationHarness::new("test");
        h.check_upper("at", 1.0, 1.0);
        h.check_lower("at", 1.0, 1.0);
        h.check_upper("below", 0.5, 1.0);
        h.check_lower("above", 1.5, 1.0);
        assert_eq!(h.passed_count(), 2);
    }

    #[test]
    fn reference_check_uses_published_value() {
        let mut h = ValidationHarness::new("test");
        h.check_reference(&provenance::B_VALUE, 3.8913, 0.01);
        assert!(h.checks[0].passed);
        assert_eq!(h.checks[0].label, provenance::B_VALUE.label);
        assert!((h.checks[0].expected - 3.89).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_lists_failures() {
        let mut h = ValidationHarness::new("soil");
        h.check_bool("ok", true);
        h.check_bool("broken", false);
        let s = h.format_summary();
        assert!(s.contains("soil validation: 1/2"));
        assert!(s.contains("FAILED CHECKS: broken"));
    }

    #[test]
    fn summary_serializes_to_json() {
        let mut h = ValidationHarness::new("gas");
        h.check_abs("a", 1.0, 1.0, 1e-10);
        let v: serde_json::Value = serde_json::to_value(&h).unwrap_or_default();
        assert_eq!(v["name"], "gas");
        assert_eq!(v["checks"][0]["mode"], "absolute");
    }

    #[test]
    fn harness_zero_checks() {
        let h = ValidationHarness::new("empty");
        assert_eq!(h.total_count(), 0);
        assert!(h.all_passed());
    }

    #[test]
    fn tolerance_mode_display_all_variants() {
        assert_eq!(ToleranceMode::Absolute.to_string(), "abs");
        assert_eq!(ToleranceMode::Relative.to_string(), "rel");
        assert_eq!(ToleranceMode::UpperBound.to_string(), "<");
        assert_eq!(ToleranceMode::LowerBound.to_string(), ">");
        assert_eq!(ToleranceMode::Boolean.to_string(), "bool");
    }
}
