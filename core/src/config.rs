//! Engine configuration.
//!
//! Tunables are named here instead of living as literals inside the matching
//! logic, so ranking policy can be adjusted without touching the engine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum row-identifier gap before a lower (more curated) row is
    /// promoted past an equally ranked one. Smaller gaps keep store order.
    pub rank_promotion_gap: i64,

    /// Maximum rows returned by a shortcut/acronym lookup.
    pub shortcut_limit: usize,

    /// How many leading head matches qualify for tail stitching.
    pub stitch_head_window: usize,

    /// Cap on stitched head × tail concatenations.
    pub stitch_combine_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rank_promotion_gap: 50_000,
            shortcut_limit: 100,
            stitch_head_window: 3,
            stitch_combine_cap: 4,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
