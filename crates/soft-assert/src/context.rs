// crates/soft-assert/src/context.rs
// ============================================================================
// Module: Failure Context
// Description: Per-thread soft-failure collector stack and the reporting rule.
// Purpose: Decide whether a reported failure is buffered or raised immediately.
// Dependencies: crate::{error, show}, std::{cell, panic}, tracing
// ============================================================================

//! ## Overview
//! Each thread has at most one active [`Collector`]. [`soft_scope`] installs
//! a fresh one and remembers the previous; leaving the scope restores it on
//! every exit path, unwinding included. While a collector is active,
//! [`report`] buffers failures; otherwise it raises. The guard behind it is
//! crate-private so scopes always close in reverse order of entry.
//!
//! Raising unwinds with a panic whose message is the failure text, which is
//! what host test harnesses print. The raised failure is also parked on the
//! thread so [`capture`] can recover it intact. Each capture clears the slot
//! before running its block, so a failure swallowed by some other
//! `catch_unwind` is never attributed to a later panic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::any::Any;
use std::cell::RefCell;
use std::panic::AssertUnwindSafe;
use std::panic::catch_unwind;

use tracing::debug;
use tracing::trace;

use crate::error::Failure;
use crate::error::Thrown;
use crate::show::show_error;

// ============================================================================
// SECTION: Thread State
// ============================================================================

thread_local! {
    /// Collector of the innermost soft scope on this thread, if any
    static ACTIVE: RefCell<Option<Collector>> = const { RefCell::new(None) };

    /// Failure most recently raised on this thread and not yet captured
    static IN_FLIGHT: RefCell<Option<Failure>> = const { RefCell::new(None) };
}

// ============================================================================
// SECTION: Collector
// ============================================================================

/// Ordered buffer of failures reported inside one soft scope.
///
/// # Invariants
/// - Entries are kept in the order they were reported.
/// - Only the scope that installed the collector appends to it.
#[derive(Debug, Default)]
pub struct Collector {
    /// Buffered failures
    failures: Vec<Failure>,
}

impl Collector {
    /// Creates an empty collector
    #[must_use]
    pub const fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// Appends a failure
    pub fn push(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    /// Returns the buffered failures in occurrence order
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Returns the number of buffered failures
    #[must_use]
    pub const fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns true when nothing was buffered
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Resolves the buffer: none, the single failure, or a combined failure
    #[must_use]
    pub fn resolve(self) -> Option<Failure> {
        Failure::combine(self.failures)
    }
}

// ============================================================================
// SECTION: Soft Scope Guard
// ============================================================================

/// Guard that keeps a fresh collector active for its lifetime.
///
/// Dropping the guard without calling [`SoftScope::finish`] restores the
/// previous collector and discards whatever was buffered.
///
/// # Invariants
/// - Guards are finished or dropped in reverse order of entry; only
///   closure-shaped helpers in this crate create them.
#[derive(Debug)]
#[must_use = "dropping the scope immediately discards its collector"]
pub(crate) struct SoftScope {
    /// Collector that was active before entry; `None` once restored
    previous: Option<Option<Collector>>,
}

impl SoftScope {
    /// Installs a fresh collector for the current thread
    pub(crate) fn enter() -> Self {
        let previous = ACTIVE.with(|slot| slot.replace(Some(Collector::new())));
        debug!(nested = previous.is_some(), "soft scope entered");
        Self {
            previous: Some(previous),
        }
    }

    /// Leaves the scope and hands back everything it collected
    pub(crate) fn finish(mut self) -> Collector {
        let collector = self.restore().unwrap_or_default();
        debug!(collected = collector.len(), "soft scope finished");
        collector
    }

    /// Puts the previous collector back and returns this scope's collector
    fn restore(&mut self) -> Option<Collector> {
        let previous = self.previous.take()?;
        ACTIVE.with(|slot| slot.replace(previous))
    }
}

impl Drop for SoftScope {
    fn drop(&mut self) {
        if let Some(discarded) = self.restore() {
            debug!(discarded = discarded.len(), "soft scope abandoned");
        }
    }
}

// ============================================================================
// SECTION: Reporting
// ============================================================================

/// Returns true when a soft scope is active on the current thread
#[must_use]
pub fn is_soft() -> bool {
    ACTIVE.with(|slot| slot.borrow().is_some())
}

/// Reports a failure: buffered when a soft scope is active, raised otherwise
pub fn report(failure: Failure) {
    let unbuffered = ACTIVE.with(|slot| match slot.borrow_mut().as_mut() {
        Some(collector) => {
            trace!(%failure, "failure buffered");
            collector.push(failure);
            None
        }
        None => Some(failure),
    });
    if let Some(failure) = unbuffered {
        raise(failure);
    }
}

/// Unwinds with the failure, bypassing any active collector
#[allow(clippy::panic, reason = "Hard-mode assertion failures unwind to the test harness.")]
pub fn raise(failure: Failure) -> ! {
    let message = failure.to_string();
    trace!(%message, "failure raised");
    IN_FLIGHT.with(|slot| slot.replace(Some(failure)));
    panic!("{message}");
}

/// Runs `body` inside a fresh soft scope and reports what it collected
///
/// Collected failures resolve as none, the single failure unchanged, or one
/// combined failure, and that result goes through [`report`] so an enclosing
/// scope buffers it as a single entry.
pub fn soft_scope<R>(body: impl FnOnce() -> R) -> R {
    let scope = SoftScope::enter();
    let value = body();
    if let Some(failure) = scope.finish().resolve() {
        report(failure);
    }
    value
}

// ============================================================================
// SECTION: Panic Capture
// ============================================================================

/// Runs `block`, returning its value or what it threw instead
///
/// Failures raised while no collector is active come back as
/// [`Thrown::Failure`]; any other panic as [`Thrown::Panic`].
///
/// # Errors
///
/// Returns the [`Thrown`] outcome when `block` unwinds.
pub fn capture<R>(block: impl FnOnce() -> R) -> Result<R, Thrown> {
    IN_FLIGHT.with(|slot| *slot.borrow_mut() = None);
    catch_unwind(AssertUnwindSafe(block)).map_err(classify_panic)
}

/// Maps a caught panic payload back to a [`Thrown`] outcome
///
/// A payload produced by [`raise`] yields the original [`Failure`]; anything
/// else is an unrelated panic rendered to its message.
fn classify_panic(payload: Box<dyn Any + Send>) -> Thrown {
    let in_flight = IN_FLIGHT.with(|slot| slot.borrow_mut().take());
    if let Some(failure) = payload.downcast_ref::<Failure>() {
        return Thrown::Failure(failure.clone());
    }
    let message = show_error(payload.as_ref());
    match in_flight {
        Some(failure) if failure.to_string() == message => Thrown::Failure(failure),
        _ => Thrown::Panic {
            message,
        },
    }
}
