use serde::{Deserialize, Serialize};

pub use self::hover::HoverConfig;
pub use self::network::NetworkConfig;
pub use self::translator::TranslatorConfig;
pub use self::ui::UiConfig;

pub mod hover;
pub mod network;
pub mod translator;
pub mod ui;

#[derive(Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub translator: TranslatorConfig,
    pub hover: HoverConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            network: NetworkConfig::new(),
            translator: TranslatorConfig::default(),
            hover: HoverConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.translator.provider, "google");
        assert_eq!(config.translator.target_lang, "zh-CN");
        assert!(config.translator.deepl_api_key.is_empty());
        assert_eq!(config.hover.settle_delay_ms, 50);
        assert_eq!(config.hover.min_word_chars, 2);
        assert_eq!(config.hover.double_press_interval_ms, 500);
        assert_eq!(config.hover.toggle_key, "Escape");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"translator":{"provider":"deepl"}}"#).unwrap();
        assert_eq!(config.translator.provider, "deepl");
        assert_eq!(config.translator.target_lang, "zh-CN");
        assert_eq!(config.hover.toast_duration_ms, 2000);
    }
}
