//! Fixed catalogs of packages and applications this tool provisions.
//!
//! These are literal lists, deliberately: there is no config file to parse
//! and no desired-state reconciliation. `pacman --needed` is the only thing
//! keeping reinstalls cheap.

/// Package pulled in by `--keyring` so signature checks succeed on a stale
/// install before the real work starts.
pub const KEYRING_PKG: &str = "archlinux-keyring";

/// Official repository packages installed by `--pacman-pkgs`.
pub const PACMAN_PKGS: &[&str] = &[
    "wayland",
    "wayland-protocols",
    "libinput",
    "xorg-xwayland",
    "pipewire",
    "pipewire-audio",
    "pipewire-pulse",
    "wireplumber",
    "seatd",
    "dbus",
    "niri",
    "ly",
    "alacritty",
    "flatpak",
    "git",
    "base-devel",
    "acpi",
    "ttf-meslo-nerd",
    "podman",
    "podman-compose",
    "distrobox",
    "cava",
    "pcmanfm-qt",
    "lxqt-archiver",
    "unzip",
    "unrar",
    "lxqt-policykit",
    "man-pages",
    "man-db",
    "wget",
    "papirus-icon-theme",
    "swaybg",
    "fastfetch",
    "bottom",
    "imv",
    "mpv",
    "vlc",
    "openssh",
    "wl-clipboard",
];

/// Flathub application IDs installed by `--flatpak-apps`.
pub const FLATPAK_APPS: &[&str] = &[
    "com.brave.Browser",
    "com.github.tchx84.Flatseal",
    "app.zen_browser.zen",
    "com.sayonara_player.Sayonara",
    "org.qbittorrent.qBittorrent",
    "org.telegram.desktop",
    "io.github.kolunmi.Bazaar",
    "org.gimp.GIMP",
    "org.kde.krita",
    "org.inkscape.Inkscape",
    "io.gitlab.theevilskeleton.Upscaler",
    "org.localsend.localsend_app",
];

/// AUR packages installed by `--paru-pkgs`.
pub const PARU_PKGS: &[&str] = &[
    "visual-studio-code-bin",
    "spotify",
    "ventoy-bin",
    "downgrade",
    "pacseek",
];

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Every catalog the tool installs from.
    fn all_catalogs() -> [(&'static str, &'static [&'static str]); 3] {
        [
            ("pacman", PACMAN_PKGS),
            ("flatpak", FLATPAK_APPS),
            ("paru", PARU_PKGS),
        ]
    }

    #[test]
    fn catalogs_are_non_empty() {
        for (name, list) in all_catalogs() {
            assert!(!list.is_empty(), "{name} catalog is empty");
        }
        assert!(!KEYRING_PKG.is_empty());
    }

    #[test]
    fn entries_contain_no_blanks_or_whitespace() {
        for (name, list) in all_catalogs() {
            for entry in list {
                assert!(!entry.trim().is_empty(), "{name} catalog has a blank entry");
                assert!(
                    !entry.chars().any(char::is_whitespace),
                    "{name} catalog entry '{entry}' contains whitespace"
                );
            }
        }
    }

    #[test]
    fn entries_are_deduplicated() {
        for (name, list) in all_catalogs() {
            let unique: HashSet<&str> = list.iter().copied().collect();
            assert_eq!(
                unique.len(),
                list.len(),
                "{name} catalog contains duplicate entries"
            );
        }
    }

    #[test]
    fn flatpak_ids_are_reverse_dns() {
        for app in FLATPAK_APPS {
            assert!(
                app.split('.').count() >= 3,
                "'{app}' does not look like a Flatpak application ID"
            );
        }
    }
}
