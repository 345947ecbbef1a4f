use super::Cents;

/// How depleted the remaining balance is relative to the total budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// At least half of the budget is left
    Healthy,
    /// Less than half of the budget is left
    Warning,
    /// Less than a quarter of the budget is left (or overspent)
    Critical,
}

impl Severity {
    /// Classify a balance. First match wins:
    /// critical if `remaining < total / 4`, warning if `remaining < total / 2`,
    /// healthy otherwise. Exact boundaries fall into the milder level.
    pub fn classify(total_budget: Cents, remaining: Cents) -> Self {
        // Compare as `remaining * n < total` so the thresholds are never rounded.
        let total = total_budget as i128;
        let remaining = remaining as i128;

        if remaining * 4 < total {
            Severity::Critical
        } else if remaining * 2 < total {
            Severity::Warning
        } else {
            Severity::Healthy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Healthy => "healthy",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
