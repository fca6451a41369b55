use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Exit labels an activity can route the workflow along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    Done,
    Valid,
    Invalid,
}

/// Every outcome a validation activity can produce, in declaration order.
pub const POSSIBLE_OUTCOMES: [Outcome; 3] = [Outcome::Done, Outcome::Valid, Outcome::Invalid];

impl Outcome {
    /// Stable label used for graph wiring and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Done => "Done",
            Self::Valid => "Valid",
            Self::Invalid => "Invalid",
        }
    }

    /// Catalog key of the localized label.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::Done => "workflow.outcome.done",
            Self::Valid => "workflow.outcome.valid",
            Self::Invalid => "workflow.outcome.invalid",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown outcome '{0}'")]
pub struct UnknownOutcome(pub String);

impl FromStr for Outcome {
    type Err = UnknownOutcome;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        POSSIBLE_OUTCOMES
            .into_iter()
            .find(|outcome| outcome.as_str() == raw)
            .ok_or_else(|| UnknownOutcome(raw.to_string()))
    }
}

/// Severity half of an evaluation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Valid,
    Invalid,
}

impl From<Verdict> for Outcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Valid => Outcome::Valid,
            Verdict::Invalid => Outcome::Invalid,
        }
    }
}

/// Result of one activity execution: `Done` paired with exactly one verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    verdict: Verdict,
}

impl ExecutionResult {
    pub fn valid() -> Self {
        Self {
            verdict: Verdict::Valid,
        }
    }

    pub fn invalid() -> Self {
        Self {
            verdict: Verdict::Invalid,
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn is_valid(&self) -> bool {
        self.verdict == Verdict::Valid
    }

    /// The two labels the host routes on.
    pub fn outcomes(&self) -> [Outcome; 2] {
        [Outcome::Done, self.verdict.into()]
    }

    pub fn contains(&self, outcome: Outcome) -> bool {
        self.outcomes().contains(&outcome)
    }
}

impl From<Verdict> for ExecutionResult {
    fn from(verdict: Verdict) -> Self {
        Self { verdict }
    }
}
