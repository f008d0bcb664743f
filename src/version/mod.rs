//! Version gating for proposed release tags
//!
//! This module decides whether a candidate `MAJOR.MINOR.PATCH` version may be
//! published next to a list of already-published versions.
//!
//! # Modules
//!
//! - [`semver`]: Strict version parsing, ordering and direct-successor rules
//! - [`checker`]: Single-pass evaluation producing a [`checker::Verdict`]
//! - [`diagnostics`]: Human-readable report lines for each verdict
//! - [`error`]: Error type for malformed candidates

pub mod checker;
pub mod diagnostics;
pub mod error;
pub mod semver;
