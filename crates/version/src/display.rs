//! Lazily-composed display string for diagnostics and banners.

use std::sync::OnceLock;

use crate::host;

fn compose(label: &str, os: &str, arch: &str) -> String {
    format!("{label} on \"{os}_{arch}\"")
}

/// Returns the human-readable identity string for this build.
///
/// The string combines the version label with the host operating-system name
/// and CPU-architecture identifier, rendered as
/// `<label> on "<os>_<arch>"`. It is composed on the first call, cached for
/// the lifetime of the process, and returned unchanged on every later call;
/// the host providers are queried at most once. The accessor cannot fail and
/// never returns an empty string, so banner code may print it
/// unconditionally.
///
/// # Examples
///
/// ```
/// let display = version::display_string();
///
/// assert!(display.starts_with(buildinfo::VERSION_LABEL));
/// assert!(display.contains(" on \""));
/// ```
#[must_use]
pub fn display_string() -> &'static str {
    static DISPLAY: OnceLock<String> = OnceLock::new();
    DISPLAY
        .get_or_init(|| compose(buildinfo::VERSION_LABEL, host::os_name(), host::arch_id()))
        .as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_renders_label_host_and_arch() {
        let rendered = compose("2.1.0 (abcd)", "Linux", "X64");
        assert_eq!(rendered, "2.1.0 (abcd) on \"Linux_X64\"");
    }

    #[test]
    fn display_string_is_stable_across_calls() {
        let first = display_string();
        let second = display_string();

        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn display_string_embeds_the_version_label() {
        assert!(display_string().starts_with(buildinfo::VERSION_LABEL));
    }

    #[test]
    fn display_string_embeds_the_host_identity() {
        let expected = format!("\"{}_{}\"", host::os_name(), host::arch_id());
        assert!(display_string().ends_with(&expected));
    }
}
