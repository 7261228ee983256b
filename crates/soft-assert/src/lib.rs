// crates/soft-assert/src/lib.rs
// ============================================================================
// Module: Soft Assert Root
// Description: Public API surface for fluent, aggregating assertions.
// Purpose: Wire together the carrier, block wrapper, failure context, and entry points.
// Dependencies: crate::{assertions, block, carrier, context, entry, error, show}
// ============================================================================

//! ## Overview
//! Wrap an actual value with [`assert_that`] (or a block with
//! [`assert_block`]) and chain assertions against it. Outside a soft scope the
//! first failure unwinds; inside [`assert_all`] or [`Assert::all`] failures
//! are collected and reported together when the scope ends.
//!
//! ```
//! use soft_assert::assert_all;
//! use soft_assert::assert_that;
//!
//! assert_all(|| {
//!     assert_that(2 + 2).is_equal_to(4);
//!     assert_that("fluent").is_not_equal_to("brittle");
//! });
//! ```
//!
//! Assertion authors build on [`Assert::given`] for checks and
//! [`Assert::transform`] for derived values; a body signals failure by
//! returning `Err(Failure)`, usually worded with [`Assert::expected`].

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod assertions;
pub mod block;
pub mod carrier;
pub mod context;
pub mod entry;
pub mod error;
pub mod show;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use block::AssertBlock;
pub use carrier::Assert;
pub use context::Collector;
pub use context::capture;
pub use context::is_soft;
pub use context::report;
pub use context::soft_scope;
pub use entry::assert_all;
pub use entry::assert_block;
pub use entry::assert_result;
pub use entry::assert_that;
pub use entry::assert_that_named;
pub use entry::catch;
pub use entry::fail;
pub use error::Failure;
pub use error::FailureResult;
pub use error::Thrown;
pub use show::show;
pub use show::show_error;
