//! Verdicts and reports.
//!
//! The outcome of a run is one of three states:
//! 1. `Accepted` → token `AC`
//! 2. `Rejected` → token `WA`
//! 3. `Fatal` → no token; the caller aborts with a diagnostic

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{ErrorKind, JudgeFault, Rejection, ValidationError};

pub const ACCEPT_TOKEN: &str = "AC";
pub const REJECT_TOKEN: &str = "WA";

/// Counts gathered by a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub vertices: usize,
    pub edges: usize,
    pub claimed_cells: u64,
}

/// Terminal state of a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(Summary),
    Rejected(Rejection),
    Fatal(JudgeFault),
}

impl Verdict {
    /// The contestant-facing token, or `None` for a judge fault.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Verdict::Accepted(_) => Some(ACCEPT_TOKEN),
            Verdict::Rejected(_) => Some(REJECT_TOKEN),
            Verdict::Fatal(_) => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    /// Error family, if the run did not accept.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Verdict::Accepted(_) => None,
            Verdict::Rejected(_) => Some(ErrorKind::Reject),
            Verdict::Fatal(_) => Some(ErrorKind::Fatal),
        }
    }

    /// Human-readable reason for a non-accepting verdict.
    pub fn reason(&self) -> Option<String> {
        match self {
            Verdict::Accepted(_) => None,
            Verdict::Rejected(rejection) => Some(rejection.to_string()),
            Verdict::Fatal(fault) => Some(fault.to_string()),
        }
    }
}

impl From<Result<Summary, ValidationError>> for Verdict {
    fn from(result: Result<Summary, ValidationError>) -> Self {
        match result {
            Ok(summary) => Verdict::Accepted(summary),
            Err(ValidationError::Rejected(rejection)) => Verdict::Rejected(rejection),
            Err(ValidationError::Fatal(fault)) => Verdict::Fatal(fault),
        }
    }
}

/// Serializable record of a verdict, written alongside the token on request.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// `AC`, `WA`, or absent for a judge fault
    pub verdict: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,

    pub checked_at: DateTime<Utc>,
}

impl Report {
    pub fn new(verdict: &Verdict) -> Self {
        let summary = match verdict {
            Verdict::Accepted(summary) => Some(*summary),
            _ => None,
        };
        Self {
            verdict: verdict.token(),
            kind: verdict.error_kind(),
            reason: verdict.reason(),
            summary,
            checked_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
