//! Common utilities for the Thicket selector engine.
//!
//! - **Warning System** - deduplicated, colored stderr diagnostics

pub mod warning;
