// crates/soft-assert/src/block.rs
// ============================================================================
// Module: Block Assertions
// Description: Assertions over the outcome of running a block of code once.
// Purpose: Assert on a returned value or on what was thrown instead.
// Dependencies: crate::{carrier, context, error, show}
// ============================================================================

//! ## Overview
//! An [`AssertBlock`] records whether a block returned or threw. Exactly one
//! of its handlers is called, which consumes the wrapper; asking for the
//! outcome that did not happen reports one failure describing what did.
//! Handlers run in their own soft scope, so several assertions inside one
//! handler are reported together.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Debug;
use std::fmt::Display;

use crate::carrier::Assert;
use crate::context::report;
use crate::context::soft_scope;
use crate::error::Failure;
use crate::error::Thrown;
use crate::show::show;

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// How the block finished.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BlockOutcome<T, E> {
    /// The block returned a value
    Returned(T),
    /// The block threw instead of returning
    Threw(E),
}

// ============================================================================
// SECTION: Block Wrapper
// ============================================================================

/// Outcome of a block, awaiting one assertion on it.
///
/// # Invariants
/// - Built once from a single run of the block; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a block outcome does nothing until one of its handlers is called"]
pub struct AssertBlock<T, E = Thrown> {
    /// Recorded outcome
    outcome: BlockOutcome<T, E>,
}

impl<T, E> AssertBlock<T, E> {
    /// Records a returned value
    pub const fn returned(value: T) -> Self {
        Self {
            outcome: BlockOutcome::Returned(value),
        }
    }

    /// Records a thrown error
    pub const fn threw(error: E) -> Self {
        Self {
            outcome: BlockOutcome::Threw(error),
        }
    }

    /// Records the outcome of code that reports errors through `Result`
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::returned(value),
            Err(error) => Self::threw(error),
        }
    }

    /// Returns true when the block returned a value
    #[must_use]
    pub const fn has_returned(&self) -> bool {
        matches!(self.outcome, BlockOutcome::Returned(_))
    }
}

impl<T: Debug, E: Display> AssertBlock<T, E> {
    /// Asserts on the thrown error
    ///
    /// Reports `expected exception but got value:<...>` if the block returned.
    pub fn thrown_error(self, assertions: impl FnOnce(&Assert<E>)) {
        match self.outcome {
            BlockOutcome::Threw(error) => {
                soft_scope(|| assertions(&Assert::new(error, None)));
            }
            BlockOutcome::Returned(value) => report(Failure::with_values(
                format!("expected exception but got value:{}", show(&value)),
                None,
                Some(show(&value)),
            )),
        }
    }

    /// Asserts on the returned value
    ///
    /// Reports `expected value but got exception:<...>` if the block threw.
    pub fn returned_value(self, assertions: impl FnOnce(&Assert<T>)) {
        match self.outcome {
            BlockOutcome::Returned(value) => {
                soft_scope(|| assertions(&Assert::new(value, None)));
            }
            BlockOutcome::Threw(error) => report(Failure::with_values(
                format!("expected value but got exception:<{error}>"),
                None,
                Some(error.to_string()),
            )),
        }
    }

    /// Asserts the block returned, whatever the value
    pub fn does_not_throw_any_exception(self) {
        let outcome = match self.outcome {
            BlockOutcome::Returned(_) => Ok(()),
            BlockOutcome::Threw(error) => Err(Failure::with_values(
                format!("expected to not throw an exception but got exception:<{error}>"),
                None,
                Some(error.to_string()),
            )),
        };
        if let Err(failure) = outcome {
            report(failure);
        }
    }
}
