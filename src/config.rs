use std::env;
use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Enrichment constants
// =============================================================================

/// Compatibility threshold: a mod is flagged when its highest supported
/// Minecraft version is at least this (major, minor). Patch is ignored.
pub const FLAG_MAJOR_MINOR: (u64, u64) = (1, 21);

/// Fixed pause between catalog rows, to stay clear of provider rate limits.
pub const SLEEP_BETWEEN_MODS: Duration = Duration::from_millis(350);

/// Per-request timeout for search calls.
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Per-request timeout for file/version list calls.
pub const LIST_TIMEOUT: Duration = Duration::from_secs(25);

const DEFAULT_INPUT: &str = "data/mods_database.csv";
const DEFAULT_OUTPUT: &str = "data/mods_database_updated.csv";

/// Runtime configuration, resolved from the environment once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// CurseForge API key. `None` disables the CurseForge provider
    /// entirely; resolution then goes straight to Modrinth.
    pub curseforge_api_key: Option<String>,
}

impl Config {
    /// Reads `MODS_DB_INPUT`, `MODS_DB_OUTPUT` and `CURSEFORGE_API_KEY`.
    /// A missing or blank API key is a disablement, not an error.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("MODS_DB_INPUT").ok(),
            env::var("MODS_DB_OUTPUT").ok(),
            env::var("CURSEFORGE_API_KEY").ok(),
        )
    }

    fn from_vars(
        input: Option<String>,
        output: Option<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            input_path: input
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output_path: output
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            curseforge_api_key: api_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
        }
    }
}
