use std::time::{Duration, SystemTime, UNIX_EPOCH};

use yidian_config::TranslatorConfig;

pub mod baidu;
pub mod deepl;
pub mod google;
pub mod sign;
pub mod youdao;

pub use baidu::BaiduTranslator;
pub use deepl::DeepLTranslator;
pub use google::GoogleTranslator;
pub use youdao::YoudaoTranslator;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text into the provider's configured target language
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("missing credentials: {0}")]
    MissingCredentials(&'static str),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}

/// Select and construct the configured backend. Missing credentials are
/// reported per lookup, not here, so a misconfigured backend degrades to
/// failure strings instead of refusing to start.
pub fn from_config(config: &TranslatorConfig) -> Result<Box<dyn Translator>, TranslateError> {
    match config.provider.as_str() {
        "google" => Ok(Box::new(GoogleTranslator::new(config.target_lang.clone()))),
        "deepl" => Ok(Box::new(DeepLTranslator::new(
            config.deepl_api_key.clone(),
            config.target_lang.clone(),
        ))),
        "youdao" => Ok(Box::new(YoudaoTranslator::new(
            config.youdao_app_id.clone(),
            config.youdao_app_secret.clone(),
        ))),
        "baidu" => Ok(Box::new(BaiduTranslator::new(
            config.baidu_app_id.clone(),
            config.baidu_secret_key.clone(),
        ))),
        other => Err(TranslateError::UnknownProvider(other.to_string())),
    }
}

pub(crate) fn unix_time() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_needs_no_credentials() {
        let config = TranslatorConfig::default();
        let translator = from_config(&config).unwrap();
        assert_eq!(translator.metadata().name, "Google Translate");
        assert!(!translator.metadata().requires_api_key);
    }

    #[tokio::test]
    async fn keyed_backends_reject_empty_credentials_per_lookup() {
        for provider in ["deepl", "youdao", "baidu"] {
            let config = TranslatorConfig {
                provider: provider.to_string(),
                ..TranslatorConfig::default()
            };
            let translator = from_config(&config).unwrap();
            let err = translator.translate("hello").await.unwrap_err();
            assert!(
                matches!(err, TranslateError::MissingCredentials(_)),
                "{provider}: {err}"
            );
        }
    }

    #[tokio::test]
    async fn youdao_needs_both_id_and_secret() {
        let translator = YoudaoTranslator::new("id".into(), String::new());
        let err = translator.translate("hello").await.unwrap_err();
        assert!(matches!(err, TranslateError::MissingCredentials(_)));
    }

    #[test]
    fn unknown_provider_is_an_error() {
        let config = TranslatorConfig {
            provider: "bing".into(),
            ..TranslatorConfig::default()
        };
        assert!(matches!(
            from_config(&config),
            Err(TranslateError::UnknownProvider(p)) if p == "bing"
        ));
    }
}
