// crates/soft-assert/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers for soft-assert integration tests.
// ============================================================================
//! ## Overview
//! Shared test helpers for consistent Result-based checks and log capture.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::error::Error;
use std::fmt;

use soft_assert::Failure;
use soft_assert::Thrown;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across soft-assert integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test checks.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

/// Extracts the assertion failure from a captured outcome.
///
/// # Errors
/// Returns a `TestError` when nothing was thrown or the panic was unrelated.
pub fn thrown_failure(thrown: Option<Thrown>) -> TestResult<Failure> {
    match thrown {
        Some(Thrown::Failure(failure)) => Ok(failure),
        Some(Thrown::Panic {
            message,
        }) => Err(Box::new(TestError::new(format!("unrelated panic: {message}")))),
        None => Err(Box::new(TestError::new("expected a failure, nothing was thrown"))),
    }
}

// ========================================================================
// Log Capture
// ========================================================================

/// Routes library trace events to the test writer; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
