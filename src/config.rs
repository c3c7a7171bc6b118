//! Runtime configuration from `TETRIS_*` environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::audio::{AudioSettings, DEFAULT_MUSIC_URL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub sound: bool,
    pub music: bool,
    pub music_url: String,
    pub audio_disabled: bool,
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            sound: true,
            music: false,
            music_url: DEFAULT_MUSIC_URL.to_string(),
            audio_disabled: false,
            log_path: None,
        }
    }
}

impl Config {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] over any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let flag = |key: &str, default: bool| {
            non_empty(key)
                .and_then(|s| parse_bool(&s))
                .unwrap_or(default)
        };

        let seed = non_empty("TETRIS_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        Self {
            seed,
            sound: flag("TETRIS_SOUND", defaults.sound),
            music: flag("TETRIS_MUSIC", defaults.music),
            music_url: non_empty("TETRIS_MUSIC_URL").unwrap_or(defaults.music_url),
            audio_disabled: flag("TETRIS_AUDIO_DISABLED", defaults.audio_disabled),
            log_path: non_empty("TETRIS_LOG_PATH"),
        }
    }

    pub fn audio_settings(&self) -> AudioSettings {
        AudioSettings {
            sound: self.sound,
            music: self.music,
            music_url: self.music_url.clone(),
            device: !self.audio_disabled,
        }
    }
}

/// `1/true/on/yes` and `0/false/off/no`, any case. Anything else is `None`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
