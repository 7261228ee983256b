// crates/soft-assert/src/entry.rs
// ============================================================================
// Module: Entry Points
// Description: Boundary functions for starting assertions.
// Purpose: Wrap values and blocks, open soft scopes, and capture panics.
// Dependencies: crate::{block, carrier, context, error}
// ============================================================================

//! ## Overview
//! `assert_that` wraps a value; `assert_block` runs code once and records
//! whether it returned or threw; `assert_all` reports every failure in a
//! block together; `catch` captures a panic for later assertion.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::block::AssertBlock;
use crate::carrier::Assert;
use crate::context::SoftScope;
use crate::context::capture;
use crate::context::report;
use crate::context::soft_scope;
use crate::error::Failure;
use crate::error::Thrown;

// ============================================================================
// SECTION: Value Entry Points
// ============================================================================

/// Starts an assertion chain on a value
pub const fn assert_that<T>(actual: T) -> Assert<T> {
    Assert::new(actual, None)
}

/// Starts an assertion chain on a value with a display name
pub fn assert_that_named<T>(actual: T, name: impl Into<String>) -> Assert<T> {
    Assert::new(actual, Some(name.into()))
}

// ============================================================================
// SECTION: Block Entry Points
// ============================================================================

/// Runs `block` once and records whether it returned or threw
///
/// The block runs in its own soft scope. A panic is recorded as thrown; so
/// are failures the block's own assertions reported, resolved the same way
/// [`assert_all`] resolves them.
pub fn assert_block<T>(block: impl FnOnce() -> T) -> AssertBlock<T> {
    let scope = SoftScope::enter();
    let outcome = capture(block);
    let collected = scope.finish();
    match outcome {
        Ok(value) => match collected.resolve() {
            Some(failure) => AssertBlock::threw(Thrown::Failure(failure)),
            None => AssertBlock::returned(value),
        },
        Err(thrown) => AssertBlock::threw(thrown),
    }
}

/// Records the outcome of code that reports errors through `Result`
pub fn assert_result<T, E>(result: Result<T, E>) -> AssertBlock<T, E> {
    AssertBlock::from_result(result)
}

/// Runs `block` and reports all of its failures together
///
/// One failure is reported unchanged; several are reported as a single
/// [`Failure::Multiple`]. A panic unrelated to assertions propagates as is
/// and the failures collected so far are dropped.
pub fn assert_all(block: impl FnOnce()) {
    soft_scope(block);
}

/// Runs `block` and returns what it threw, if anything
///
/// Does not open a soft scope: failures `block` reports go wherever they
/// would have gone without the call.
#[must_use]
pub fn catch(block: impl FnOnce()) -> Option<Thrown> {
    capture(block).err()
}

/// Reports a failure with the given message
pub fn fail(message: impl Into<String>) {
    report(Failure::new(message));
}
