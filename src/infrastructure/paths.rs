//! Platform path resolution for the favorites slot.
//!
//! This module decides where the favorites file lives when the user does not
//! override the data directory: the platform data directory (XDG data home on
//! Linux, the equivalent on macOS and Windows) under an `animark` folder.

use std::path::PathBuf;

/// File name of the favorites slot inside the data directory.
pub const FAVORITES_FILE: &str = "favorites.json";

/// Returns the default data directory for animark.
///
/// Falls back to the current directory when the platform reports no data
/// directory, which only happens in stripped-down environments.
///
/// # Examples
///
/// ```
/// use animark::infrastructure::paths::default_data_dir;
///
/// let dir = default_data_dir();
/// assert!(dir.ends_with("animark"));
/// ```
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("animark")
}
