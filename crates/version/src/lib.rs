#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
//!
//! # Overview
//!
//! `version` answers three questions for the rest of the Lark runtime: what
//! build is this (a human-readable identity string), what snapshot format
//! hash does this build expect, and which snapshot ABI version should be
//! used when serializing programs. The facts themselves are baked in at
//! compile time by the [`buildinfo`] crate; this crate adds the two pieces
//! with behavioral contracts — the once-computed display string and the ABI
//! window negotiation.
//!
//! # Design
//!
//! - [`display_string`] composes `<label> on "<os>_<arch>"` on first use,
//!   caches it in a process-wide [`std::sync::OnceLock`], and hands out the
//!   same `&'static str` forever after.
//! - [`AbiVersion`] is a newtype over the raw integer revision;
//!   [`target_abi_version`] resolves an externally configured request
//!   against the compiled support window, substituting
//!   [`AbiVersion::CURRENT`] for any out-of-window request.
//! - [`abi_version_flag`] describes the `use-abi-version` setting (name,
//!   default, documented window) so configuration front-ends register it
//!   consistently, with help text that embeds the concrete bounds.
//! - [`VersionReport`] aggregates everything for `--version`-style output.
//!
//! # Invariants
//!
//! - The resolved ABI version always lies inside
//!   `[AbiVersion::OLDEST_SUPPORTED, AbiVersion::CURRENT]`; the window
//!   ordering is asserted at compile time.
//! - [`display_string`] is idempotent: the host providers are queried at
//!   most once per process and the returned string never changes.
//! - Every accessor in this crate is total; out-of-window ABI requests are
//!   silent substitutions, not errors.
//!
//! # Errors
//!
//! The only fallible surface is parsing an [`AbiVersion`] from text, which
//! yields [`ParseAbiVersionError`] for non-numeric input. Numeric input is
//! always accepted and resolved against the window.
//!
//! # Examples
//!
//! ```
//! use version::{AbiVersion, target_abi_version};
//!
//! assert_eq!(target_abi_version(None), AbiVersion::CURRENT);
//! assert_eq!(version::snapshot_hash(), buildinfo::SNAPSHOT_HASH);
//! assert!(version::display_string().contains(" on \""));
//! ```

/// Snapshot ABI version negotiation.
pub mod abi;
/// Lazily-composed display string for diagnostics and banners.
pub mod display;
/// Descriptor for the externally registered ABI selection setting.
pub mod flag;
/// Host operating-system and CPU-architecture identification.
pub mod host;
/// Aggregated version report for banners and diagnostics.
pub mod report;

pub use abi::{
    AbiVersion, ParseAbiVersionError, current_abi_version, oldest_supported_abi_version,
    target_abi_version,
};
pub use display::display_string;
pub use flag::{AbiVersionFlag, abi_version_flag};
pub use report::{AbiReport, VersionReport};

/// Returns the hash identifying the snapshot format this build expects.
///
/// The value is the build-injected literal, returned verbatim on every call.
#[must_use]
pub const fn snapshot_hash() -> &'static str {
    buildinfo::SNAPSHOT_HASH
}

/// Returns the commit label of this build, verbatim.
///
/// The label is the git commit hash captured at build time, or `unknown`
/// when the workspace was compiled outside a git checkout.
#[must_use]
pub const fn commit_string() -> &'static str {
    buildinfo::COMMIT_HASH
}

/// Returns the human-readable version label of this build.
#[must_use]
pub const fn version_label() -> &'static str {
    buildinfo::VERSION_LABEL
}

#[cfg(test)]
mod tests {
    #[test]
    fn snapshot_hash_returns_the_injected_literal() {
        assert_eq!(crate::snapshot_hash(), buildinfo::SNAPSHOT_HASH);
        assert_eq!(crate::snapshot_hash(), crate::snapshot_hash());
    }

    #[test]
    fn commit_string_returns_the_injected_literal() {
        assert_eq!(crate::commit_string(), buildinfo::COMMIT_HASH);
        assert!(!crate::commit_string().is_empty());
    }

    #[test]
    fn version_label_returns_the_injected_literal() {
        assert_eq!(crate::version_label(), buildinfo::VERSION_LABEL);
    }
}
