//! Aggregated version report for banners and diagnostics.
//!
//! [`VersionReport`] gathers the build identity, the host identity, and the
//! resolved ABI window into one value so front-ends can render a banner or a
//! structured document without re-assembling the facts at every call site.

use core::fmt::{self, Write as FmtWrite};

use crate::abi::{AbiVersion, target_abi_version};
use crate::display::display_string;
use crate::host;

/// Snapshot ABI window together with the resolved target version.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AbiReport {
    /// ABI version written by snapshots this build produces.
    pub current: AbiVersion,
    /// Oldest ABI version this build still reads.
    pub oldest_supported: AbiVersion,
    /// Version resolved from the external setting; always inside the window.
    pub target: AbiVersion,
}

/// Full identity report rendered by `--version`-style surfaces.
///
/// Every field is a compile-time constant or derived from one, so the report
/// is `Copy` and building it performs no I/O.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VersionReport {
    /// Product name advertised by banners.
    pub product: &'static str,
    /// Human-readable version label.
    pub version_label: &'static str,
    /// Git commit hash of this build, or `unknown`.
    pub commit: &'static str,
    /// Hash identifying the expected snapshot format.
    pub snapshot_hash: &'static str,
    /// Canonical host operating-system name.
    pub os: &'static str,
    /// Canonical CPU-architecture identifier.
    pub arch: &'static str,
    /// Snapshot ABI window and resolved target.
    pub abi: AbiReport,
}

impl VersionReport {
    /// Builds a report, resolving the ABI target from the external setting.
    ///
    /// `requested` carries the configured `use-abi-version` value; `None`
    /// means the setting was left at its default.
    #[must_use]
    pub fn new(requested: Option<i64>) -> Self {
        Self {
            product: buildinfo::PRODUCT,
            version_label: buildinfo::VERSION_LABEL,
            commit: buildinfo::COMMIT_HASH,
            snapshot_hash: buildinfo::SNAPSHOT_HASH,
            os: host::os_name(),
            arch: host::arch_id(),
            abi: AbiReport {
                current: AbiVersion::CURRENT,
                oldest_supported: AbiVersion::OLDEST_SUPPORTED,
                target: target_abi_version(requested),
            },
        }
    }

    /// Builds a report with the ABI setting left at its default.
    #[must_use]
    pub fn current() -> Self {
        Self::new(None)
    }

    /// Writes the human-readable banner into the provided [`fmt::Write`]
    /// sink.
    ///
    /// Callers that require an owned [`String`] can use
    /// [`VersionReport::human_readable`] instead.
    pub fn write_human_readable<W: FmtWrite>(&self, writer: &mut W) -> fmt::Result {
        writeln!(writer, "{} runtime version {}", self.product, display_string())?;
        writeln!(writer, "commit: {}", self.commit)?;
        writeln!(writer, "snapshot hash: {}", self.snapshot_hash)?;
        writeln!(
            writer,
            "snapshot ABI version: target {} (supported {} to {})",
            self.abi.target, self.abi.oldest_supported, self.abi.current
        )
    }

    /// Returns the human-readable banner rendered into an owned [`String`].
    ///
    /// # Examples
    ///
    /// ```
    /// use version::VersionReport;
    ///
    /// let banner = VersionReport::current().human_readable();
    ///
    /// assert!(banner.starts_with(buildinfo::PRODUCT));
    /// assert!(banner.ends_with('\n'));
    /// ```
    #[must_use]
    pub fn human_readable(&self) -> String {
        let mut banner = String::new();
        self.write_human_readable(&mut banner)
            .expect("writing to String cannot fail");
        banner
    }
}

impl Default for VersionReport {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_report_targets_the_current_version() {
        let report = VersionReport::current();
        assert_eq!(report.abi.target, AbiVersion::CURRENT);
    }

    #[test]
    fn report_honours_in_window_requests() {
        let oldest = i64::from(AbiVersion::OLDEST_SUPPORTED.as_u32());
        let report = VersionReport::new(Some(oldest));
        assert_eq!(report.abi.target, AbiVersion::OLDEST_SUPPORTED);
    }

    #[test]
    fn report_substitutes_current_for_out_of_window_requests() {
        let report = VersionReport::new(Some(-7));
        assert_eq!(report.abi.target, AbiVersion::CURRENT);
    }

    #[test]
    fn banner_embeds_the_display_string() {
        let banner = VersionReport::current().human_readable();
        assert!(banner.contains(display_string()));
    }

    #[test]
    fn banner_lists_identity_facts() {
        let banner = VersionReport::current().human_readable();

        assert!(banner.contains(buildinfo::SNAPSHOT_HASH));
        assert!(banner.contains(buildinfo::COMMIT_HASH));
        assert!(banner.contains(&AbiVersion::CURRENT.to_string()));
    }

    #[test]
    fn banner_is_newline_terminated() {
        assert!(VersionReport::current().human_readable().ends_with('\n'));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn report_serializes_to_json_with_numeric_abi_values() {
        let report = VersionReport::current();
        let json = serde_json::to_value(report).expect("report serializes");

        assert_eq!(json["snapshot_hash"], buildinfo::SNAPSHOT_HASH);
        assert_eq!(
            json["abi"]["target"],
            u64::from(AbiVersion::CURRENT.as_u32())
        );
    }
}
