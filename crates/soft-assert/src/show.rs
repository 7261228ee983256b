// crates/soft-assert/src/show.rs
// ============================================================================
// Module: Value Rendering
// Description: Renders actual values and panic payloads for failure messages.
// Purpose: Keep message formatting side-effect free and in one place.
// Dependencies: crate::error, std::{any, fmt}
// ============================================================================

//! ## Overview
//! Failure messages quote values as `<value>` using their `Debug` form, so
//! strings appear with their quotes: `<"text">`. Panic payloads are rendered
//! the way the standard panic hook would print them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::any::Any;
use std::fmt::Debug;

use crate::error::Failure;

// ============================================================================
// SECTION: Values
// ============================================================================

/// Renders a value for inclusion in a failure message, e.g. `<42>`
#[allow(clippy::use_debug, reason = "Debug is the rendering contract for asserted values.")]
pub fn show<T: Debug + ?Sized>(value: &T) -> String {
    format!("<{value:?}>")
}

/// Renders a value without the surrounding brackets
#[allow(clippy::use_debug, reason = "Debug is the rendering contract for asserted values.")]
pub fn render<T: Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}

// ============================================================================
// SECTION: Panic Payloads
// ============================================================================

/// Placeholder used when a payload carries no printable message
const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

/// Renders a panic payload as text
#[must_use]
pub fn show_error(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    if let Some(failure) = payload.downcast_ref::<Failure>() {
        return failure.to_string();
    }
    OPAQUE_PAYLOAD.to_string()
}
