use serde::{Deserialize, Serialize};

fn default_provider() -> String {
    "google".to_string()
}

fn default_target_lang() -> String {
    "zh-CN".to_string()
}

/// Backend selection and credentials. Keys default to empty; backends
/// that need them reject at construction time.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    #[serde(default)]
    pub deepl_api_key: String,
    #[serde(default)]
    pub youdao_app_id: String,
    #[serde(default)]
    pub youdao_app_secret: String,
    #[serde(default)]
    pub baidu_app_id: String,
    #[serde(default)]
    pub baidu_secret_key: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            target_lang: default_target_lang(),
            deepl_api_key: String::new(),
            youdao_app_id: String::new(),
            youdao_app_secret: String::new(),
            baidu_app_id: String::new(),
            baidu_secret_key: String::new(),
        }
    }
}
