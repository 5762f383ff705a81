//! Snapshot ABI version negotiation.
//!
//! A snapshot ABI version is an integer identifying a binary-compatible
//! serialization format revision. Each build compiles in a support window:
//! the version it produces ([`AbiVersion::CURRENT`]) and the oldest version
//! it still accepts ([`AbiVersion::OLDEST_SUPPORTED`]). Embedders may request
//! a specific version inside that window, typically through the
//! `use-abi-version` flag; [`target_abi_version`] resolves the request
//! against the window.
//!
//! Requests outside the window resolve to the current version on both sides,
//! not to the nearest bound. The substitution is silent: negotiation is total
//! and callers never observe an out-of-window version.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

const _: () = {
    if buildinfo::OLDEST_SUPPORTED_ABI_VERSION > buildinfo::ABI_VERSION {
        panic!("oldest supported ABI version must not exceed the current ABI version");
    }
};

/// A snapshot ABI version inside the support window of this build.
///
/// Values of this type are only ever constructed through the window
/// constants or through [`AbiVersion::from_requested`], so a materialized
/// `AbiVersion` always lies in
/// `[OLDEST_SUPPORTED, CURRENT]`.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AbiVersion(u32);

impl AbiVersion {
    /// The ABI version written by snapshots this build produces.
    pub const CURRENT: AbiVersion = AbiVersion(buildinfo::ABI_VERSION);

    /// The oldest ABI version this build still reads.
    pub const OLDEST_SUPPORTED: AbiVersion = AbiVersion(buildinfo::OLDEST_SUPPORTED_ABI_VERSION);

    /// Returns the raw numeric value represented by this version.
    #[must_use]
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Reports whether the provided value lies inside the support window.
    ///
    /// # Examples
    ///
    /// ```
    /// use version::AbiVersion;
    ///
    /// assert!(AbiVersion::is_supported(AbiVersion::CURRENT.as_u32() as i64));
    /// assert!(!AbiVersion::is_supported(-1));
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_supported(value: i64) -> bool {
        value >= Self::OLDEST_SUPPORTED.0 as i64 && value <= Self::CURRENT.0 as i64
    }

    /// Resolves a requested ABI version against the support window.
    ///
    /// Requests inside the window are honoured exactly. Requests outside the
    /// window — older than [`AbiVersion::OLDEST_SUPPORTED`] or newer than
    /// [`AbiVersion::CURRENT`], including negative values — resolve to
    /// [`AbiVersion::CURRENT`] rather than the nearest bound. No error is
    /// reported for an out-of-window request.
    ///
    /// # Examples
    ///
    /// ```
    /// use version::AbiVersion;
    ///
    /// let oldest = AbiVersion::OLDEST_SUPPORTED;
    /// assert_eq!(AbiVersion::from_requested(oldest.as_u32() as i64), oldest);
    /// assert_eq!(AbiVersion::from_requested(-3), AbiVersion::CURRENT);
    /// ```
    #[must_use]
    pub const fn from_requested(requested: i64) -> Self {
        Self(resolve_in_window(
            requested,
            Self::OLDEST_SUPPORTED.0,
            Self::CURRENT.0,
        ))
    }
}

/// Resolves `requested` against an inclusive `[oldest, current]` window,
/// substituting `current` for any request outside it.
const fn resolve_in_window(requested: i64, oldest: u32, current: u32) -> u32 {
    if requested < oldest as i64 || requested > current as i64 {
        current
    } else {
        // In-window requests fit in u32 because `oldest` does.
        requested as u32
    }
}

/// Returns the ABI version written by snapshots this build produces.
#[must_use]
pub const fn current_abi_version() -> AbiVersion {
    AbiVersion::CURRENT
}

/// Returns the oldest ABI version this build still reads.
#[must_use]
pub const fn oldest_supported_abi_version() -> AbiVersion {
    AbiVersion::OLDEST_SUPPORTED
}

/// Resolves the ABI version to use for snapshot serialization.
///
/// `requested` carries the externally configured `use-abi-version` setting;
/// `None` means the setting was left at its default and resolves to
/// [`AbiVersion::CURRENT`]. Out-of-window requests silently resolve to
/// [`AbiVersion::CURRENT`] as described on [`AbiVersion::from_requested`];
/// the returned version is always inside the support window.
///
/// # Examples
///
/// ```
/// use version::{AbiVersion, target_abi_version};
///
/// assert_eq!(target_abi_version(None), AbiVersion::CURRENT);
/// assert_eq!(
///     target_abi_version(Some(AbiVersion::OLDEST_SUPPORTED.as_u32() as i64)),
///     AbiVersion::OLDEST_SUPPORTED,
/// );
/// ```
#[must_use]
pub const fn target_abi_version(requested: Option<i64>) -> AbiVersion {
    match requested {
        Some(value) => AbiVersion::from_requested(value),
        None => AbiVersion::CURRENT,
    }
}

/// Error returned when parsing an [`AbiVersion`] from non-numeric text fails.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("invalid ABI version; expected an integer")]
pub struct ParseAbiVersionError;

impl FromStr for AbiVersion {
    type Err = ParseAbiVersionError;

    /// Parses a decimal integer and resolves it against the support window.
    ///
    /// Only non-numeric input fails; numeric input outside the window is a
    /// silent substitution, matching [`AbiVersion::from_requested`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let requested: i64 = s.trim().parse().map_err(|_| ParseAbiVersionError)?;
        Ok(Self::from_requested(requested))
    }
}

impl fmt::Display for AbiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AbiVersion> for u32 {
    fn from(value: AbiVersion) -> Self {
        value.as_u32()
    }
}

impl PartialEq<u32> for AbiVersion {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<AbiVersion> for u32 {
    fn eq(&self, other: &AbiVersion) -> bool {
        *self == other.0
    }
}
