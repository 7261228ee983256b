// crates/soft-assert/src/carrier.rs
// ============================================================================
// Module: Assertion Carrier
// Description: The value-or-failure holder every assertion chains from.
// Purpose: Let chains continue in poisoned form once a step has failed.
// Dependencies: crate::{context, error, show}, std::sync::Arc
// ============================================================================

//! ## Overview
//! [`Assert`] wraps either the actual value under test or the failure that
//! stopped an earlier step, plus an optional display name and an optional
//! rendered context (the parent value a derived value was taken from).
//!
//! A failing carrier never runs predicate bodies. Everything derived from it
//! fails with the same shared [`Failure`], re-labeled with the new name.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Debug;
use std::sync::Arc;

use crate::context::report;
use crate::context::soft_scope;
use crate::error::Failure;
use crate::error::FailureResult;
use crate::show::render;

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// Carrier state: the value under test or the failure that replaced it.
#[derive(Debug, Clone)]
enum Outcome<T> {
    /// Holds the actual value
    Value(T),
    /// Holds the failure of an earlier step
    Failing(Arc<Failure>),
}

// ============================================================================
// SECTION: Carrier
// ============================================================================

/// Fluent assertion carrier over an actual value.
///
/// # Invariants
/// - Once failing, every carrier derived from it is failing with the same
///   `Arc<Failure>`.
/// - `context` is only used to word failure messages.
#[derive(Debug, Clone)]
#[must_use]
pub struct Assert<T> {
    /// Current state
    outcome: Outcome<T>,
    /// Display label, e.g. a property path
    name: Option<String>,
    /// Rendered parent value this one was derived from
    context: Option<String>,
}

impl<T> Assert<T> {
    /// Wraps an actual value
    pub(crate) const fn new(value: T, name: Option<String>) -> Self {
        Self {
            outcome: Outcome::Value(value),
            name,
            context: None,
        }
    }

    /// Builds a failing carrier around a shared failure
    const fn failing(error: Arc<Failure>, name: Option<String>, context: Option<String>) -> Self {
        Self {
            outcome: Outcome::Failing(error),
            name,
            context,
        }
    }

    /// Returns the display label
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the rendered parent value, if one was recorded
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Returns true when an earlier step failed
    #[must_use]
    pub const fn is_failing(&self) -> bool {
        matches!(self.outcome, Outcome::Failing(_))
    }

    /// Returns the failure carried forward, if any
    #[must_use]
    pub const fn error(&self) -> Option<&Arc<Failure>> {
        match &self.outcome {
            Outcome::Value(_) => None,
            Outcome::Failing(error) => Some(error),
        }
    }

    /// Borrows the actual value
    ///
    /// # Errors
    ///
    /// Returns the carried [`Failure`] when an earlier step failed.
    pub fn value(&self) -> Result<&T, &Failure> {
        match &self.outcome {
            Outcome::Value(value) => Ok(value),
            Outcome::Failing(error) => Err(error),
        }
    }

    /// Takes the actual value out of the carrier
    ///
    /// # Errors
    ///
    /// Returns the carried [`Failure`] when an earlier step failed.
    pub fn into_value(self) -> Result<T, Arc<Failure>> {
        match self.outcome {
            Outcome::Value(value) => Ok(value),
            Outcome::Failing(error) => Err(error),
        }
    }

    /// Runs an assertion body against the value
    ///
    /// A returned failure is reported; in a soft scope it is buffered and the
    /// chain continues. On a failing carrier the body is not run.
    pub fn given(&self, assertion: impl FnOnce(&T) -> FailureResult) -> &Self {
        let outcome = match &self.outcome {
            Outcome::Value(value) => assertion(value),
            Outcome::Failing(_) => Ok(()),
        };
        if let Err(failure) = outcome {
            report(failure);
        }
        self
    }

    /// Runs several assertions against this carrier and reports them together
    pub fn all(&self, assertions: impl FnOnce(&Self)) {
        soft_scope(|| assertions(self));
    }

    /// Words a failure about this carrier
    ///
    /// Produces `expected [name] <message> (<context>)`, leaving out the parts
    /// that are not set. A message starting with `:` attaches directly.
    pub fn expected(
        &self,
        message: impl AsRef<str>,
        expected: Option<String>,
        actual: Option<String>,
    ) -> Failure {
        let message = message.as_ref();
        let mut text = String::from("expected");
        if let Some(name) = self.name.as_deref().filter(|name| !name.is_empty()) {
            text.push_str(" [");
            text.push_str(name);
            text.push(']');
        }
        if !message.starts_with(':') {
            text.push(' ');
        }
        text.push_str(message);
        if let Some(context) = &self.context {
            text.push_str(" (");
            text.push_str(context);
            text.push(')');
        }
        Failure::with_values(text, expected, actual)
    }

    /// Resolves the name a derived carrier gets
    fn derived_name(&self, name: Option<&str>) -> Option<String> {
        name.map(str::to_string).or_else(|| self.name.clone())
    }
}

impl<T: Debug> Assert<T> {
    /// Re-wraps a value derived from this one
    ///
    /// `name` defaults to this carrier's name. A failing carrier yields a
    /// failing carrier holding the same failure.
    pub fn assert_that<R: Debug>(&self, value: R, name: Option<&str>) -> Assert<R> {
        let name = self.derived_name(name);
        match &self.outcome {
            Outcome::Value(previous) => {
                let context = self.context.clone().or_else(|| {
                    let parent = render(previous);
                    (parent != render(&value)).then_some(parent)
                });
                Assert {
                    outcome: Outcome::Value(value),
                    name,
                    context,
                }
            }
            Outcome::Failing(error) => {
                Assert::failing(Arc::clone(error), name, self.context.clone())
            }
        }
    }

    /// Maps the value into a new carrier
    ///
    /// When `mapper` fails, the failure is reported and the returned carrier
    /// is failing. On a failing carrier `mapper` is not run.
    pub fn transform<R: Debug>(
        &self,
        name: Option<&str>,
        mapper: impl FnOnce(&T) -> FailureResult<R>,
    ) -> Assert<R> {
        match &self.outcome {
            Outcome::Value(value) => match mapper(value) {
                Ok(mapped) => self.assert_that(mapped, name),
                Err(failure) => {
                    let error = Arc::new(failure);
                    report(Failure::clone(&error));
                    Assert::failing(error, self.derived_name(name), self.context.clone())
                }
            },
            Outcome::Failing(error) => {
                Assert::failing(Arc::clone(error), self.derived_name(name), self.context.clone())
            }
        }
    }
}
