//! Host operating-system and CPU-architecture identification.
//!
//! The providers map the compile-time target identifiers onto the canonical
//! names used in version banners. Both functions are total: targets without a
//! canonical spelling fall back to the raw identifier so callers always
//! receive a non-empty string.

/// Returns the canonical name of the operating system this build runs on.
///
/// # Examples
///
/// ```
/// assert!(!version::host::os_name().is_empty());
/// ```
#[must_use]
pub fn os_name() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "macOS",
        "windows" => "Windows",
        "android" => "Android",
        "ios" => "iOS",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        "fuchsia" => "Fuchsia",
        other => other,
    }
}

/// Returns the canonical identifier of the CPU architecture this build
/// targets.
///
/// # Examples
///
/// ```
/// assert!(!version::host::arch_id().is_empty());
/// ```
#[must_use]
pub fn arch_id() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "X64",
        "x86" => "IA32",
        "aarch64" => "ARM64",
        "arm" => "ARM",
        "riscv64" => "RV64",
        "riscv32" => "RV32",
        "powerpc64" => "PPC64",
        "s390x" => "S390X",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_name_is_non_empty() {
        assert!(!os_name().is_empty());
    }

    #[test]
    fn arch_id_is_non_empty() {
        assert!(!arch_id().is_empty());
    }

    #[test]
    fn identifiers_contain_no_whitespace() {
        assert!(!os_name().chars().any(char::is_whitespace));
        assert!(!arch_id().chars().any(char::is_whitespace));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_reports_canonical_name() {
        assert_eq!(os_name(), "Linux");
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn x86_64_reports_canonical_id() {
        assert_eq!(arch_id(), "X64");
    }

    #[cfg(target_arch = "aarch64")]
    #[test]
    fn aarch64_reports_canonical_id() {
        assert_eq!(arch_id(), "ARM64");
    }
}
