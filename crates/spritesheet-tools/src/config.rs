//! Tool configuration.
//!
//! Provides the canvas the replay starts from, invariant checking, logging
//! and output settings. Configuration can be loaded from and saved to a TOML
//! file.

use serde::{Deserialize, Serialize};
use spritesheet_state::state::{EditorState, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{info, warn};

/// Configuration file name.
pub const CONFIG_FILE: &str = "sprite-replay.toml";

/// Largest canvas side accepted from a config file.
const MAX_CANVAS_SIDE: i64 = 16_384;

/// Replay tool configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    // === Canvas ===
    /// Canvas width of the starting state
    pub canvas_width: i64,
    /// Canvas height of the starting state
    pub canvas_height: i64,

    // === Validation ===
    /// Check state invariants after every applied action
    pub check_invariants: bool,

    // === Output ===
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Pretty-print the resulting snapshot
    pub pretty: bool,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            check_invariants: true,
            log_filter: "info".to_string(),
            pretty: true,
        }
    }
}

impl ToolsConfig {
    /// Load configuration from the working directory.
    /// Returns default config if file doesn't exist.
    pub fn load() -> Self {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match fs::File::open(path) {
            Ok(mut file) => {
                let mut contents = String::new();
                if let Err(e) = file.read_to_string(&mut contents) {
                    warn!("Failed to read config file: {e}");
                    return Self::default();
                }

                match toml::from_str::<Self>(&contents) {
                    Ok(mut config) => {
                        config.validate();
                        info!("Loaded config from {}", path.display());
                        config
                    },
                    Err(e) => {
                        warn!("Failed to parse config file: {e}");
                        Self::default()
                    },
                }
            },
            Err(e) => {
                warn!("Failed to open config file: {e}");
                Self::default()
            },
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Clamp values to sensible ranges.
    pub fn validate(&mut self) {
        self.canvas_width = self.canvas_width.clamp(1, MAX_CANVAS_SIDE);
        self.canvas_height = self.canvas_height.clamp(1, MAX_CANVAS_SIDE);
        if self.log_filter.trim().is_empty() {
            self.log_filter = "info".to_string();
        }
    }

    /// The empty state replays start from.
    #[must_use]
    pub fn initial_state(&self) -> EditorState {
        EditorState::with_canvas(self.canvas_width, self.canvas_height)
    }
}
