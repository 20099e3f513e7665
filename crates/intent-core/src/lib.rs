//! # intent-core
//!
//! The classification domain for the mock intent service.
//!
//! This crate is pure and synchronous: no I/O, no async, no state.
//! It defines the closed set of intent labels, the keyword tables,
//! and the `classify` function that maps free text to a label.
//!
//! ## Architecture Rules
//!
//! - This crate may not depend on the HTTP layer (`intent-server`
//!   imports from here, never the reverse).
//! - Classification is infallible: every input maps to exactly one
//!   [`Intent`].

pub mod intent;

pub use intent::{classify, Intent, CONFIDENCE};
