//! Runtime configuration from environment variables.
//!
//! - `CONNECT_FOUR_LOG_PATH`: append a JSON-lines event journal to this file
//! - `CONNECT_FOUR_CELL_WIDTH`: terminal columns per board cell (1-8, default 4)
//! - `CONNECT_FOUR_CELL_HEIGHT`: terminal rows per board cell (1-4, default 2)
//! - `CONNECT_FOUR_STATIC_REDRAW_MS`: repaint interval for an unchanged screen (default 250)
//!
//! Unparseable values fall back to the default. Blank values count as unset.

use std::path::PathBuf;

pub const ENV_LOG_PATH: &str = "CONNECT_FOUR_LOG_PATH";
pub const ENV_CELL_WIDTH: &str = "CONNECT_FOUR_CELL_WIDTH";
pub const ENV_CELL_HEIGHT: &str = "CONNECT_FOUR_CELL_HEIGHT";
pub const ENV_STATIC_REDRAW_MS: &str = "CONNECT_FOUR_STATIC_REDRAW_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_path: Option<PathBuf>,
    pub cell_width: u16,
    pub cell_height: u16,
    pub static_redraw_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            cell_width: 4,
            cell_height: 2,
            static_redraw_ms: 250,
        }
    }
}

impl AppConfig {
    /// Create from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let log_path = get(ENV_LOG_PATH).map(PathBuf::from);
        let cell_width = get(ENV_CELL_WIDTH)
            .and_then(|s| s.parse::<u16>().ok())
            .map(|v| v.clamp(1, 8))
            .unwrap_or(defaults.cell_width);
        let cell_height = get(ENV_CELL_HEIGHT)
            .and_then(|s| s.parse::<u16>().ok())
            .map(|v| v.clamp(1, 4))
            .unwrap_or(defaults.cell_height);
        let static_redraw_ms = get(ENV_STATIC_REDRAW_MS)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.static_redraw_ms);

        Self {
            log_path,
            cell_width,
            cell_height,
            static_redraw_ms,
        }
    }
}
