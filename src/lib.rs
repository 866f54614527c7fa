//! Animark: a terminal client for the Jikan anime catalog with persistent favorites.
//!
//! Animark lets a user search a remote anime catalog, inspect item details,
//! and mark items as favorites that persist across sessions in a local JSON
//! file. The interesting machinery is the favorites synchronization and
//! list-state reconciliation: keeping the displayed list, the latest search
//! result, and the durable favorites set mutually consistent while tolerating
//! storage and network failures.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Interactive Shell (main.rs)                        │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← List reconciliation
//! │  - Stale-response suppression                       │
//! │  - Display list computation                         │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Favorites     │   │ Storage Layer │   │ Catalog Layer │
//! │ (favorites/)  │   │ (storage/)    │   │ (catalog/)    │
//! │ - Owned set   │   │ - Slot trait  │   │ - Client trait│
//! │ - Hydration   │   │ - Atomic file │   │ - HTTP impl   │
//! │ - Toggle+save │   │ - Payload fmt │   │ - Wire decode │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Item models (domain/item)                        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Remote catalog client trait, HTTP implementation, decoding
//! - [`domain`]: Core domain types (items, errors)
//! - [`favorites`]: The favorites set and its synchronizer
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Durable single-slot store with atomic file writes
//! - `observability`: Tracing subscriber setup for the binary
//!
//! # Consistency Guarantees
//!
//! - The in-memory favorites set is the most recent truth within a session;
//!   a failed save keeps the change and the durable copy self-corrects on the
//!   next successful mutation.
//! - A corrupt or unreadable favorites slot hydrates as an empty set and
//!   never crashes the client.
//! - Only the most recently issued search may update the displayed list;
//!   results of superseded queries are discarded at resolution time.
//!
//! # Example
//!
//! ```no_run
//! use animark::app::{handle_event, Action, Event};
//! use animark::{initialize, Config};
//!
//! let config = Config::default();
//! let mut state = initialize(&config)?;
//!
//! let actions = handle_event(&mut state, Event::SubmitQuery("cowboy".to_string()))?;
//! for action in actions {
//!     if let Action::FetchCatalog { seq, query } = action {
//!         // run the search, then feed Event::SearchCompleted { seq, outcome }
//!     }
//! }
//! # Ok::<(), animark::domain::AnimarkError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod favorites;
pub mod infrastructure;
pub mod storage;

pub mod observability;

pub use app::{handle_event, Action, AppState, DisplayList, Event, ListStatus, ViewMode};
pub use domain::{AnimarkError, ItemDetail, ItemSummary, Result};
pub use favorites::{FavoriteSet, FavoritesSynchronizer};

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Client configuration.
///
/// Values are read from an optional TOML file and fall back to defaults that
/// match the public Jikan API. The blank-input fallback query and the SFW
/// filter mirror the catalog queries the client was built around.
///
/// # File Format
///
/// ```toml
/// # ~/.local/share/animark/config.toml
/// api_base_url = "https://api.jikan.moe/v4"
/// default_query = "kids"
/// sfw_only = true
/// request_timeout_secs = 10
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the catalog API, without a trailing slash.
    pub api_base_url: String,

    /// Query issued when the user submits blank input, and at startup.
    pub default_query: String,

    /// Whether to ask the catalog to filter adult entries.
    pub sfw_only: bool,

    /// Bound on every catalog request, in seconds.
    pub request_timeout_secs: u64,

    /// Override for the directory holding the favorites file.
    ///
    /// Defaults to the platform data directory under `animark`.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.jikan.moe/v4".to_string(),
            default_query: "kids".to_string(),
            sfw_only: true,
            request_timeout_secs: 10,
            data_dir: None,
        }
    }
}

/// On-disk configuration shape; every field optional, merged over defaults.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_base_url: Option<String>,
    default_query: Option<String>,
    sfw_only: Option<bool>,
    request_timeout_secs: Option<u64>,
    data_dir: Option<PathBuf>,
}

impl Config {
    /// Loads configuration, merging an optional TOML file over defaults.
    ///
    /// With an explicit `path`, the file must exist and parse. With `None`,
    /// the default location (`config.toml` in the data directory) is tried
    /// and silently skipped if absent.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if an explicitly given file cannot be read,
    /// or if any present file fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (contents, source) = match path {
            Some(explicit) => {
                let contents = std::fs::read_to_string(explicit).map_err(|e| {
                    AnimarkError::Config(format!("cannot read {}: {e}", explicit.display()))
                })?;
                (contents, explicit.to_path_buf())
            }
            None => {
                let default_path = infrastructure::default_data_dir().join("config.toml");
                match std::fs::read_to_string(&default_path) {
                    Ok(contents) => (contents, default_path),
                    Err(_) => {
                        tracing::debug!("no config file, using defaults");
                        return Ok(Self::default());
                    }
                }
            }
        };

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| {
            AnimarkError::Config(format!("invalid config {}: {e}", source.display()))
        })?;

        tracing::debug!(path = %source.display(), "configuration loaded");

        let defaults = Self::default();
        Ok(Self {
            api_base_url: file.api_base_url.unwrap_or(defaults.api_base_url),
            default_query: file.default_query.unwrap_or(defaults.default_query),
            sfw_only: file.sfw_only.unwrap_or(defaults.sfw_only),
            request_timeout_secs: file
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
            data_dir: file.data_dir,
        })
    }

    /// Path of the favorites slot file.
    #[must_use]
    pub fn favorites_path(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(infrastructure::default_data_dir)
            .join(infrastructure::FAVORITES_FILE)
    }
}

/// Initializes application state from configuration.
///
/// Opens the favorites store, hydrates the favorites set (corruption degrades
/// to an empty set), and returns state ready for event processing. Hydration
/// happens here, exactly once, before any toggle can be accepted.
///
/// # Errors
///
/// Returns an error if the favorites store location cannot be prepared.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing animark");

    let store = storage::JsonFileStore::new(config.favorites_path())?;
    let favorites = FavoritesSynchronizer::hydrate(Box::new(store));

    Ok(AppState::new(favorites, config.default_query.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_config_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "default_query = \"mecha\"\nrequest_timeout_secs = 3").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.default_query, "mecha");
        assert_eq!(config.request_timeout_secs, 3);
        // Untouched fields keep their defaults.
        assert_eq!(config.api_base_url, "https://api.jikan.moe/v4");
        assert!(config.sfw_only);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(AnimarkError::Config(_))
        ));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_query = [broken").unwrap();
        assert!(matches!(
            Config::load(Some(&path)),
            Err(AnimarkError::Config(_))
        ));
    }

    #[test]
    fn favorites_path_honors_data_dir_override() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/elsewhere")),
            ..Default::default()
        };
        assert_eq!(
            config.favorites_path(),
            PathBuf::from("/tmp/elsewhere/favorites.json")
        );
    }
}
