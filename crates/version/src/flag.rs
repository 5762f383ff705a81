//! Descriptor for the externally registered ABI selection setting.
//!
//! The setting itself is owned by the configuration layer (command-line
//! front-end or embedder); this module only describes it so every consumer
//! registers the same name, default, and operator-visible help text. The
//! help text embeds the concrete window bounds, formatted from the compiled
//! constants, so operators always see real numbers instead of placeholders.

use crate::abi::AbiVersion;

/// Describes the `use-abi-version` configuration setting.
///
/// The descriptor is `Copy` so front-ends can hold it in constant contexts
/// while registering arguments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AbiVersionFlag {
    name: &'static str,
    default: AbiVersion,
    oldest: AbiVersion,
    newest: AbiVersion,
}

impl AbiVersionFlag {
    /// Returns the long option name under which the setting is registered.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the value used when the setting is left unset.
    #[must_use]
    pub const fn default_value(&self) -> AbiVersion {
        self.default
    }

    /// Returns the oldest value documented as valid.
    #[must_use]
    pub const fn oldest(&self) -> AbiVersion {
        self.oldest
    }

    /// Returns the newest value documented as valid.
    #[must_use]
    pub const fn newest(&self) -> AbiVersion {
        self.newest
    }

    /// Renders the operator-visible help text with both window bounds
    /// formatted in.
    ///
    /// # Examples
    ///
    /// ```
    /// use version::{AbiVersion, abi_version_flag};
    ///
    /// let help = abi_version_flag().help_text();
    ///
    /// assert!(help.contains(&AbiVersion::OLDEST_SUPPORTED.to_string()));
    /// assert!(help.contains(&AbiVersion::CURRENT.to_string()));
    /// ```
    #[must_use]
    pub fn help_text(&self) -> String {
        format!(
            "ABI version to use for program snapshots. Valid values are {} to {}.",
            self.oldest, self.newest
        )
    }
}

/// Returns the descriptor for the `use-abi-version` setting.
///
/// # Examples
///
/// ```
/// use version::{AbiVersion, abi_version_flag};
///
/// let flag = abi_version_flag();
///
/// assert_eq!(flag.name(), "use-abi-version");
/// assert_eq!(flag.default_value(), AbiVersion::CURRENT);
/// ```
#[must_use]
pub const fn abi_version_flag() -> AbiVersionFlag {
    AbiVersionFlag {
        name: "use-abi-version",
        default: AbiVersion::CURRENT,
        oldest: AbiVersion::OLDEST_SUPPORTED,
        newest: AbiVersion::CURRENT,
    }
}
