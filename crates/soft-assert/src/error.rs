// crates/soft-assert/src/error.rs
// ============================================================================
// Module: Failure Signals
// Description: Structured assertion failures and captured block outcomes.
// Purpose: Give every reporting path one failure type to buffer, combine, and raise.
// Dependencies: serde::{Deserialize, Serialize}, thiserror
// ============================================================================

//! ## Overview
//! A [`Failure`] is the signal produced when an assertion does not hold. Soft
//! scopes buffer them and combine two or more into [`Failure::Multiple`].
//! [`Thrown`] is what a block produced instead of returning: either one of our
//! own failures or an unrelated panic reduced to its message.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Failure Signal
// ============================================================================

/// Failure raised when one or more assertions did not hold.
///
/// # Invariants
/// - `Multiple` built by [`Failure::combine`] or by deserialization holds at
///   least two entries, in occurrence order.
/// - `Display` of `Assertion` is exactly its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(try_from = "FailureRepr")]
pub enum Failure {
    /// A single predicate did not hold
    #[error("{message}")]
    Assertion {
        /// Human-readable description of the failed predicate
        message: String,
        /// Rendered expected value, when the predicate compared against one
        expected: Option<String>,
        /// Rendered actual value, when the predicate compared against one
        actual: Option<String>,
    },

    /// Several failures collected by one soft scope
    #[error("{}", combined_message(.failures))]
    Multiple {
        /// Collected failures in occurrence order
        failures: Vec<Failure>,
    },
}

impl Failure {
    /// Creates an assertion failure carrying only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self::Assertion {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Creates an assertion failure with rendered expected and actual values
    pub fn with_values(
        message: impl Into<String>,
        expected: Option<String>,
        actual: Option<String>,
    ) -> Self {
        Self::Assertion {
            message: message.into(),
            expected,
            actual,
        }
    }

    /// Resolves collected failures into the signal a scope raises
    ///
    /// Zero failures resolve to `None`, a single failure is returned
    /// unchanged, and anything more is wrapped in [`Failure::Multiple`].
    #[must_use]
    pub fn combine(mut failures: Vec<Self>) -> Option<Self> {
        match failures.len() {
            0 => None,
            1 => failures.pop(),
            _ => Some(Self::Multiple {
                failures,
            }),
        }
    }

    /// Returns the individual failures this signal stands for
    #[must_use]
    pub fn failures(&self) -> &[Self] {
        match self {
            Self::Assertion {
                ..
            } => std::slice::from_ref(self),
            Self::Multiple {
                failures,
            } => failures,
        }
    }

    /// Returns the rendered expected value of a single assertion failure
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        match self {
            Self::Assertion {
                expected, ..
            } => expected.as_deref(),
            Self::Multiple {
                ..
            } => None,
        }
    }

    /// Returns the rendered actual value of a single assertion failure
    #[must_use]
    pub fn actual(&self) -> Option<&str> {
        match self {
            Self::Assertion {
                actual, ..
            } => actual.as_deref(),
            Self::Multiple {
                ..
            } => None,
        }
    }
}

// ============================================================================
// SECTION: Report Validation
// ============================================================================

/// Wire shape of [`Failure`], checked before it becomes one.
#[derive(Deserialize)]
enum FailureRepr {
    /// Single assertion failure
    Assertion {
        /// Failure message
        message: String,
        /// Rendered expected value
        expected: Option<String>,
        /// Rendered actual value
        actual: Option<String>,
    },
    /// Combined failure
    Multiple {
        /// Entries, each already validated
        failures: Vec<Failure>,
    },
}

/// Reasons a structured report does not describe a valid failure.
#[derive(Debug, Error)]
enum InvalidFailure {
    /// A combined failure with fewer than two entries
    #[error("combined failure needs at least two entries, got {0}")]
    TooFewEntries(usize),
}

impl TryFrom<FailureRepr> for Failure {
    type Error = InvalidFailure;

    fn try_from(repr: FailureRepr) -> Result<Self, Self::Error> {
        match repr {
            FailureRepr::Assertion {
                message,
                expected,
                actual,
            } => Ok(Self::Assertion {
                message,
                expected,
                actual,
            }),
            FailureRepr::Multiple {
                failures,
            } if failures.len() < 2 => Err(InvalidFailure::TooFewEntries(failures.len())),
            FailureRepr::Multiple {
                failures,
            } => Ok(Self::Multiple {
                failures,
            }),
        }
    }
}

// ============================================================================
// SECTION: Message Rendering
// ============================================================================

/// Renders the message of a combined failure.
fn combined_message(failures: &[Failure]) -> String {
    let mut message = format!("The following assertions failed ({} failures)", failures.len());
    for failure in failures {
        message.push_str("\n\t- ");
        message.push_str(&failure.to_string().replace('\n', "\n\t  "));
    }
    message
}

// ============================================================================
// SECTION: Captured Block Outcome
// ============================================================================

/// What a block produced when it did not return a value.
///
/// # Invariants
/// - `Failure` holds our own signal, never a re-rendered copy of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum Thrown {
    /// The block's assertions failed or it unwound with an assertion failure
    #[error(transparent)]
    Failure(#[from] Failure),

    /// The block panicked for a reason unrelated to assertions
    #[error("{message}")]
    Panic {
        /// Rendered panic payload
        message: String,
    },
}

impl Thrown {
    /// Returns the assertion failure, if this outcome was one
    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Panic {
                ..
            } => None,
        }
    }
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Result of a predicate body; `Err` is the failure to report
pub type FailureResult<T = ()> = Result<T, Failure>;
