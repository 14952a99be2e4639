//! Host platform checks.

/// Whether the host looks like an Arch Linux system.
///
/// Same probe the installer scripts use: the presence of
/// `/etc/arch-release`.
#[must_use]
pub fn is_arch_linux() -> bool {
    std::path::Path::new("/etc/arch-release").exists()
}
