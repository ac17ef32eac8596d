use serde::{Deserialize, Serialize};

fn default_settle_delay_ms() -> u64 {
    50
}

fn default_min_word_chars() -> usize {
    2
}

fn default_double_press_interval_ms() -> u64 {
    500
}

fn default_toggle_key() -> String {
    "Escape".to_string()
}

fn default_toast_duration_ms() -> u64 {
    2000
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HoverConfig {
    /// Quiet period after the last pointer movement before word
    /// resolution runs.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Shorter candidates are dropped without a lookup.
    #[serde(default = "default_min_word_chars")]
    pub min_word_chars: usize,
    #[serde(default = "default_double_press_interval_ms")]
    pub double_press_interval_ms: u64,
    #[serde(default = "default_toggle_key")]
    pub toggle_key: String,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            min_word_chars: default_min_word_chars(),
            double_press_interval_ms: default_double_press_interval_ms(),
            toggle_key: default_toggle_key(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}
