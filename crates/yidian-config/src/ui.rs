use serde::{Deserialize, Serialize};

fn default_popup_max_width_px() -> f64 {
    320.0
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Popup text wraps past this width.
    #[serde(default = "default_popup_max_width_px")]
    pub popup_max_width_px: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            popup_max_width_px: default_popup_max_width_px(),
        }
    }
}
