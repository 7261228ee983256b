// crates/soft-assert/tests/block.rs
// ============================================================================
// Module: Block Assertion Tests
// Description: Tests for `assert_block`, `assert_result`, and `catch`.
// ============================================================================
//! ## Overview
//! Validates that blocks run exactly once, that each handler asserts on the
//! matching outcome, and that asking for the other outcome reports one failure.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

mod support;

use std::cell::Cell;
use std::fmt;

use soft_assert::AssertBlock;
use soft_assert::Failure;
use soft_assert::Thrown;
use soft_assert::assert_all;
use soft_assert::assert_block;
use soft_assert::assert_result;
use soft_assert::assert_that;
use soft_assert::catch;
use soft_assert::fail;
use support::TestResult;
use support::ensure;
use support::init_tracing;
use support::thrown_failure;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Error returned by fallible fixture code
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParseError {
    /// Offending input
    input: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "cannot parse {:?}", self.input)
    }
}

impl std::error::Error for ParseError {}

/// Parses a number, failing with `ParseError`
fn parse(input: &str) -> Result<i64, ParseError> {
    input.parse().map_err(|_| ParseError {
        input: input.to_string(),
    })
}

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Tests block runs exactly once.
#[test]
fn block_runs_exactly_once() -> TestResult {
    init_tracing();
    let runs = Cell::new(0);
    let block = assert_block(|| {
        runs.set(runs.get() + 1);
        2
    });
    ensure(block.has_returned(), "Expected a returned outcome")?;
    block.returned_value(|value| {
        value.is_equal_to(2);
    });
    ensure(runs.get() == 1, "Expected the block to run once")?;
    Ok(())
}

/// Tests block panic is recorded as thrown.
#[test]
fn block_panic_is_recorded_as_thrown() -> TestResult {
    let block = assert_block(|| -> i32 { panic!("x") });
    let expected: AssertBlock<i32> = AssertBlock::threw(Thrown::Panic {
        message: "x".to_string(),
    });
    ensure(block == expected, "Expected the panic message to be captured")?;
    Ok(())
}

/// Tests block assertion failures are recorded as thrown.
#[test]
fn block_assertion_failures_are_recorded_as_thrown() -> TestResult {
    let block = assert_block(|| {
        fail("inside");
        fail("block");
        5
    });
    ensure(!block.has_returned(), "Expected collected failures to count as thrown")?;
    block.thrown_error(|error| {
        error.message_contains("inside").message_contains("block");
    });
    Ok(())
}

// ============================================================================
// SECTION: Returned Value
// ============================================================================

/// Tests returned value asserts on value.
#[test]
fn returned_value_asserts_on_value() -> TestResult {
    let thrown = catch(|| {
        assert_block(|| 1 + 1).returned_value(|value| {
            value.is_equal_to(2);
        });
    });
    ensure(thrown.is_none(), "Expected the returned value to satisfy the assertion")?;
    Ok(())
}

/// Tests returned value reports thrown outcome.
#[test]
fn returned_value_reports_thrown_outcome() -> TestResult {
    let ran = Cell::new(false);
    let failure = thrown_failure(catch(|| {
        assert_block(|| -> i32 { panic!("x") }).returned_value(|_| ran.set(true));
    }))?;
    ensure(!ran.get(), "Expected the handler not to run")?;
    ensure(
        failure.to_string() == "expected value but got exception:<x>",
        failure.to_string(),
    )?;
    Ok(())
}

/// Tests returned value handler aggregates.
#[test]
fn returned_value_handler_aggregates() -> TestResult {
    let failure = thrown_failure(catch(|| {
        assert_block(|| 4).returned_value(|value| {
            value.is_equal_to(5);
            value.is_not_equal_to(4);
        });
    }))?;
    ensure(failure.failures().len() == 2, "Expected both handler failures together")?;
    Ok(())
}

// ============================================================================
// SECTION: Thrown Error
// ============================================================================

/// Tests thrown error asserts on error.
#[test]
fn thrown_error_asserts_on_error() -> TestResult {
    let thrown = catch(|| {
        assert_block(|| -> i32 { panic!("x") }).thrown_error(|error| {
            error.has_message("x");
        });
    });
    ensure(thrown.is_none(), "Expected the thrown message to match")?;
    Ok(())
}

/// Tests thrown error reports returned outcome.
#[test]
fn thrown_error_reports_returned_outcome() -> TestResult {
    let failure = thrown_failure(catch(|| {
        assert_block(|| 1 + 1).thrown_error(|_| {});
    }))?;
    ensure(failure.to_string() == "expected exception but got value:<2>", failure.to_string())?;
    ensure(failure.actual() == Some("<2>"), "Expected the value as actual")?;
    Ok(())
}

// ============================================================================
// SECTION: Does Not Throw
// ============================================================================

/// Tests does not throw passes on return.
#[test]
fn does_not_throw_passes_on_return() -> TestResult {
    let thrown = catch(|| assert_block(|| "fine").does_not_throw_any_exception());
    ensure(thrown.is_none(), "Expected a returning block to pass")?;
    Ok(())
}

/// Tests does not throw reports exception.
#[test]
fn does_not_throw_reports_exception() -> TestResult {
    let failure = thrown_failure(catch(|| {
        assert_block(|| -> u8 { panic!("kaput") }).does_not_throw_any_exception();
    }))?;
    ensure(
        failure.to_string() == "expected to not throw an exception but got exception:<kaput>",
        failure.to_string(),
    )?;
    Ok(())
}

/// Tests wrong handler in soft scope is collected.
#[test]
fn wrong_handler_in_soft_scope_is_collected() -> TestResult {
    let failure = thrown_failure(catch(|| {
        assert_all(|| {
            assert_block(|| 1).thrown_error(|_| {});
            assert_block(|| -> i32 { panic!("y") }).returned_value(|_| {});
        });
    }))?;
    ensure(failure.failures().len() == 2, "Expected one failure per mismatched handler")?;
    Ok(())
}

// ============================================================================
// SECTION: Result Blocks
// ============================================================================

/// Tests assert result classifies ok and err.
#[test]
fn assert_result_classifies_ok_and_err() -> TestResult {
    let thrown = catch(|| {
        assert_result(parse("42")).returned_value(|value| {
            value.is_equal_to(42);
        });
        assert_result(parse("forty-two")).thrown_error(|error| {
            error.has_message("cannot parse \"forty-two\"");
            error.prop("input", |error| error.input.clone()).is_equal_to("forty-two");
        });
    });
    ensure(thrown.is_none(), "Expected both result blocks to satisfy their handlers")?;
    Ok(())
}

/// Tests assert result wrong handler reports.
#[test]
fn assert_result_wrong_handler_reports() -> TestResult {
    let failure = thrown_failure(catch(|| {
        assert_result(parse("nope")).returned_value(|_| {});
    }))?;
    ensure(
        failure.to_string() == "expected value but got exception:<cannot parse \"nope\">",
        failure.to_string(),
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Catch
// ============================================================================

/// Tests catch returns thrown or none.
#[test]
fn catch_returns_thrown_or_none() -> TestResult {
    let thrown = catch(|| panic!("x"));
    ensure(
        thrown
            == Some(Thrown::Panic {
                message: "x".to_string(),
            }),
        "Expected the panic to be returned",
    )?;
    ensure(catch(|| {}).is_none(), "Expected nothing for a quiet block")?;

    let failure = thrown_failure(catch(|| fail("typed")))?;
    ensure(failure == Failure::new("typed"), "Expected the failure to stay typed")?;

    assert_that(catch(|| panic!("boxed"))).is_some().has_message("boxed");
    Ok(())
}

/// Tests catch renders a non-text panic payload as opaque.
#[test]
fn catch_renders_opaque_payload() -> TestResult {
    let thrown = catch(|| std::panic::panic_any(42_u8));
    ensure(
        thrown
            == Some(Thrown::Panic {
                message: "Box<dyn Any>".to_string(),
            }),
        format!("Expected the opaque placeholder, got {thrown:?}"),
    )?;
    Ok(())
}
