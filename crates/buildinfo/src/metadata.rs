//! Metadata snapshot over the build-time identity constants.
//!
//! The values originate from the workspace manifest and the git checkout and
//! are compiled into the crate by the build script. Bundling them into a
//! [`Metadata`] snapshot lets higher layers pass the whole identity around as
//! one `Copy` value instead of importing individual constants, while the
//! `const` accessors keep everything usable in constant contexts such as
//! compile-time assertions.

use crate::generated;

/// Returns the product name advertised by version banners.
///
/// # Examples
///
/// ```
/// assert_eq!(buildinfo::metadata::product(), buildinfo::PRODUCT);
/// ```
#[must_use]
pub const fn product() -> &'static str {
    generated::PRODUCT
}

/// Returns the release version of this build.
#[must_use]
pub const fn release_version() -> &'static str {
    generated::RELEASE_VERSION
}

/// Returns the human-readable version label (`<release> (<commit date>)`).
#[must_use]
pub const fn version_label() -> &'static str {
    generated::VERSION_LABEL
}

/// Returns the git commit hash this build was produced from.
///
/// The build script substitutes `unknown` when the workspace is compiled
/// outside a git checkout, so the value is always non-empty.
#[must_use]
pub const fn commit_hash() -> &'static str {
    generated::COMMIT_HASH
}

/// Returns the snapshot format hash expected by this build.
#[must_use]
pub const fn snapshot_hash() -> &'static str {
    generated::SNAPSHOT_HASH
}

/// Returns the snapshot ABI version produced by this build.
#[must_use]
pub const fn abi_version() -> u32 {
    generated::ABI_VERSION
}

/// Returns the oldest snapshot ABI version this build still accepts.
#[must_use]
pub const fn oldest_supported_abi_version() -> u32 {
    generated::OLDEST_SUPPORTED_ABI_VERSION
}

/// Immutable snapshot of the build-time identity values.
///
/// The struct is intentionally lightweight and `Copy` so it can be embedded
/// in reports, rustdoc examples, and compile-time assertions without
/// indirection. All fields are `&'static str` or plain integers baked in at
/// compile time; the snapshot never changes for the lifetime of the process.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Metadata {
    product: &'static str,
    release_version: &'static str,
    version_label: &'static str,
    commit_hash: &'static str,
    commit_date: &'static str,
    snapshot_hash: &'static str,
    abi_version: u32,
    oldest_supported_abi_version: u32,
    source_url: &'static str,
}

impl Metadata {
    /// Returns the product name advertised by version banners.
    #[must_use]
    pub const fn product(&self) -> &'static str {
        self.product
    }

    /// Returns the release version of this build.
    #[must_use]
    pub const fn release_version(&self) -> &'static str {
        self.release_version
    }

    /// Returns the human-readable version label.
    #[must_use]
    pub const fn version_label(&self) -> &'static str {
        self.version_label
    }

    /// Returns the git commit hash this build was produced from.
    #[must_use]
    pub const fn commit_hash(&self) -> &'static str {
        self.commit_hash
    }

    /// Returns the commit date of this build.
    #[must_use]
    pub const fn commit_date(&self) -> &'static str {
        self.commit_date
    }

    /// Returns the snapshot format hash expected by this build.
    #[must_use]
    pub const fn snapshot_hash(&self) -> &'static str {
        self.snapshot_hash
    }

    /// Returns the snapshot ABI version produced by this build.
    #[must_use]
    pub const fn abi_version(&self) -> u32 {
        self.abi_version
    }

    /// Returns the oldest snapshot ABI version this build still accepts.
    #[must_use]
    pub const fn oldest_supported_abi_version(&self) -> u32 {
        self.oldest_supported_abi_version
    }

    /// Returns the canonical source repository URL.
    #[must_use]
    pub const fn source_url(&self) -> &'static str {
        self.source_url
    }
}

/// Returns the metadata snapshot describing this build.
///
/// # Examples
///
/// ```
/// let metadata = buildinfo::metadata();
///
/// assert_eq!(metadata.snapshot_hash(), buildinfo::SNAPSHOT_HASH);
/// assert!(metadata.oldest_supported_abi_version() <= metadata.abi_version());
/// ```
#[must_use]
pub const fn metadata() -> Metadata {
    Metadata {
        product: generated::PRODUCT,
        release_version: generated::RELEASE_VERSION,
        version_label: generated::VERSION_LABEL,
        commit_hash: generated::COMMIT_HASH,
        commit_date: generated::COMMIT_DATE,
        snapshot_hash: generated::SNAPSHOT_HASH,
        abi_version: generated::ABI_VERSION,
        oldest_supported_abi_version: generated::OLDEST_SUPPORTED_ABI_VERSION,
        source_url: generated::SOURCE_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_is_non_empty() {
        assert!(!metadata().product().is_empty());
    }

    #[test]
    fn release_version_is_non_empty() {
        assert!(!metadata().release_version().is_empty());
    }

    #[test]
    fn version_label_embeds_release_version() {
        let metadata = metadata();
        assert!(metadata.version_label().starts_with(metadata.release_version()));
    }

    #[test]
    fn commit_hash_has_no_whitespace() {
        assert!(!metadata().commit_hash().chars().any(char::is_whitespace));
    }

    #[test]
    fn snapshot_hash_is_non_empty() {
        assert!(!metadata().snapshot_hash().is_empty());
    }

    #[test]
    fn abi_window_is_ordered() {
        let metadata = metadata();
        assert!(metadata.oldest_supported_abi_version() <= metadata.abi_version());
    }

    #[test]
    fn accessors_match_constants() {
        assert_eq!(product(), crate::PRODUCT);
        assert_eq!(release_version(), crate::RELEASE_VERSION);
        assert_eq!(version_label(), crate::VERSION_LABEL);
        assert_eq!(commit_hash(), crate::COMMIT_HASH);
        assert_eq!(snapshot_hash(), crate::SNAPSHOT_HASH);
        assert_eq!(abi_version(), crate::ABI_VERSION);
        assert_eq!(
            oldest_supported_abi_version(),
            crate::OLDEST_SUPPORTED_ABI_VERSION
        );
    }

    #[test]
    fn source_url_starts_with_https() {
        assert!(metadata().source_url().starts_with("https://"));
    }
}
