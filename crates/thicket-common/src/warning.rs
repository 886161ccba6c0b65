//! Diagnostics with colored terminal output.
//!
//! Provides deduplication so a query run over thousands of nodes reports a
//! given condition once. Used by the selector crate to report selector parts
//! that were accepted but have no effect.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Every `[component] message` key printed so far.
static WARNED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

fn registry() -> MutexGuard<'static, BTreeSet<String>> {
    // The set stays consistent even if a holder panicked.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about a condition once per unique `(component, message)` pair.
///
/// # Example
/// ```
/// use thicket_common::warning::{warn_once, warnings};
///
/// warn_once("Selector", "combinator alternative `a > b` ignored by `parent`");
/// warn_once("Selector", "combinator alternative `a > b` ignored by `parent`");
/// assert_eq!(
///     warnings(),
///     ["[Selector] combinator alternative `a > b` ignored by `parent`"]
/// );
/// ```
pub fn warn_once(component: &str, message: &str) {
    if registry().insert(format!("[{component}] {message}")) {
        eprintln!("{}", format!("[Thicket {component}] ⚠ {message}").yellow());
    }
}

/// Warnings recorded since the last [`clear_warnings`], sorted.
#[must_use]
pub fn warnings() -> Vec<String> {
    registry().iter().cloned().collect()
}

/// Forget all recorded warnings (call before starting an unrelated batch of
/// queries) so they are reported again.
pub fn clear_warnings() {
    registry().clear();
}
