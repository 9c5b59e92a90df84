use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub avatars: AvatarConfig,
}

/// Presentation and ambient knobs.
///
/// Structural rules (slot and roster ceilings, the counter floor) are
/// constants in the feature modules, not configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event-loop tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Delay between the visual clear and the structural board reset.
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
    /// Default tracing filter; `--log-filter` and `RUST_LOG` take
    /// precedence.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

/// Avatar presets cycled through as players join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarConfig {
    #[serde(default = "default_avatar_presets")]
    pub presets: Vec<String>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_reset_delay_ms() -> u64 {
    800
}

fn default_log_filter() -> String {
    "duelcalc=info".to_string()
}

fn default_avatar_presets() -> Vec<String> {
    (1..=5).map(|i| format!("avatars/avatar{}.png", i)).collect()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            reset_delay_ms: default_reset_delay_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            presets: default_avatar_presets(),
        }
    }
}
