// crates/soft-assert/src/assertions.rs
// ============================================================================
// Module: Built-In Assertions
// Description: A small set of predicates built on `given` and `transform`.
// Purpose: Cover everyday checks and show how assertion authors compose.
// Dependencies: crate::{carrier, error, show}
// ============================================================================

//! ## Overview
//! Each predicate here is a thin composition over [`Assert::given`] or
//! [`Assert::transform`] and words its failure through [`Assert::expected`].
//! Predicates that check return the carrier for chaining; predicates that
//! unwrap return a carrier over the inner value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::error::Error;
use std::fmt::Debug;

use crate::carrier::Assert;
use crate::show::show;

// ============================================================================
// SECTION: Equality
// ============================================================================

impl<T: Debug> Assert<T> {
    /// Asserts the value equals `expected`
    pub fn is_equal_to<E: Debug>(&self, expected: E) -> &Self
    where
        T: PartialEq<E>,
    {
        self.given(|actual| {
            if *actual == expected {
                Ok(())
            } else {
                Err(self.expected(
                    format!(":{} but was:{}", show(&expected), show(actual)),
                    Some(show(&expected)),
                    Some(show(actual)),
                ))
            }
        })
    }

    /// Asserts the value does not equal `unexpected`
    pub fn is_not_equal_to<E: Debug>(&self, unexpected: E) -> &Self
    where
        T: PartialEq<E>,
    {
        self.given(|actual| {
            if *actual == unexpected {
                Err(self.expected(format!("to not be equal to:{}", show(&unexpected)), None, None))
            } else {
                Ok(())
            }
        })
    }

    /// Derives a named property of the value
    ///
    /// The property name is appended to this carrier's name with a `.`.
    pub fn prop<R: Debug>(&self, name: &str, extract: impl FnOnce(&T) -> R) -> Assert<R> {
        let path = match self.name() {
            Some(parent) => format!("{parent}.{name}"),
            None => name.to_string(),
        };
        self.transform(Some(path.as_str()), |value| Ok(extract(value)))
    }
}

// ============================================================================
// SECTION: Booleans
// ============================================================================

impl Assert<bool> {
    /// Asserts the value is `true`
    pub fn is_true(&self) -> &Self {
        self.given(|actual| {
            if *actual { Ok(()) } else { Err(self.expected("to be true", None, None)) }
        })
    }

    /// Asserts the value is `false`
    pub fn is_false(&self) -> &Self {
        self.given(|actual| {
            if *actual { Err(self.expected("to be false", None, None)) } else { Ok(()) }
        })
    }
}

// ============================================================================
// SECTION: Options
// ============================================================================

impl<V: Clone + Debug> Assert<Option<V>> {
    /// Asserts the option holds a value and continues with it
    pub fn is_some(&self) -> Assert<V> {
        self.transform(None, |actual| {
            actual.clone().ok_or_else(|| self.expected("to have a value but was none", None, None))
        })
    }

    /// Asserts the option is empty
    pub fn is_none(&self) -> &Self {
        self.given(|actual| match actual {
            None => Ok(()),
            Some(value) => {
                Err(self.expected(format!("to be none but was:{}", show(value)), None, None))
            }
        })
    }
}

// ============================================================================
// SECTION: Results
// ============================================================================

impl<V: Clone + Debug, E: Clone + Debug> Assert<Result<V, E>> {
    /// Asserts the result is `Ok` and continues with its value
    pub fn is_ok(&self) -> Assert<V> {
        self.transform(None, |actual| match actual {
            Ok(value) => Ok(value.clone()),
            Err(error) => Err(self.expected(
                format!("to be ok but was error:{}", show(error)),
                None,
                Some(show(error)),
            )),
        })
    }

    /// Asserts the result is `Err` and continues with its error
    pub fn is_err(&self) -> Assert<E> {
        self.transform(None, |actual| match actual {
            Err(error) => Ok(error.clone()),
            Ok(value) => Err(self.expected(
                format!("to be error but was ok:{}", show(value)),
                None,
                Some(show(value)),
            )),
        })
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

impl<T: Error> Assert<T> {
    /// Continues with the error's message
    pub fn message(&self) -> Assert<String> {
        self.transform(Some("message"), |error| Ok(error.to_string()))
    }

    /// Asserts the error's message is exactly `expected`
    pub fn has_message(&self, expected: &str) -> &Self {
        self.given(|error| {
            let actual = error.to_string();
            if actual == expected {
                Ok(())
            } else {
                Err(self.expected(
                    format!("message:{} but was:{}", show(expected), show(&actual)),
                    Some(show(expected)),
                    Some(show(&actual)),
                ))
            }
        })
    }

    /// Asserts the error's message contains `fragment`
    pub fn message_contains(&self, fragment: &str) -> &Self {
        self.given(|error| {
            let actual = error.to_string();
            if actual.contains(fragment) {
                Ok(())
            } else {
                Err(self.expected(
                    format!("message to contain:{} but was:{}", show(fragment), show(&actual)),
                    None,
                    Some(show(&actual)),
                ))
            }
        })
    }
}
