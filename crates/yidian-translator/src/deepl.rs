use serde::Deserialize;
use serde_json::json;

use crate::{ProviderMetadata, TranslateError, Translation, Translator};

const API_URL: &str = "https://api-free.deepl.com/v2/translate";

pub struct DeepLTranslator {
    client: reqwest::Client,
    api_key: String,
    target_lang: String,
}

impl DeepLTranslator {
    pub fn new(api_key: String, target_lang: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            target_lang: deepl_target(&target_lang),
        }
    }
}

/// DeepL takes an uppercase primary subtag: "zh-CN" -> "ZH".
fn deepl_target(lang: &str) -> String {
    lang.split('-').next().unwrap_or(lang).to_ascii_uppercase()
}

#[derive(Deserialize)]
struct DeepLResponse {
    #[serde(default)]
    translations: Vec<DeepLItem>,
}

#[derive(Deserialize)]
struct DeepLItem {
    text: String,
}

impl DeepLResponse {
    fn into_result(self) -> Result<String, TranslateError> {
        self.translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| TranslateError::InvalidResponse("no translations in response".into()))
    }
}

#[async_trait::async_trait]
impl Translator for DeepLTranslator {
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::MissingCredentials("DeepL API key"));
        }

        let response: DeepLResponse = self
            .client
            .post(API_URL)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .json(&json!({
                "text": [text],
                "target_lang": self.target_lang,
            }))
            .send()
            .await?
            .json()
            .await?;

        Ok(Translation {
            text: response.into_result()?,
            provider: "deepl".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "DeepL".to_string(),
            requires_api_key: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_lang_is_primary_subtag_uppercased() {
        assert_eq!(deepl_target("zh-CN"), "ZH");
        assert_eq!(deepl_target("en"), "EN");
    }

    #[test]
    fn parses_first_translation() {
        let response: DeepLResponse = serde_json::from_str(
            r#"{"translations":[{"detected_source_language":"EN","text":"你好"}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_result().unwrap(), "你好");
    }

    #[test]
    fn empty_or_missing_translations_is_invalid() {
        for body in [r#"{"translations":[]}"#, r#"{"message":"Wrong endpoint"}"#] {
            let response: DeepLResponse = serde_json::from_str(body).unwrap();
            assert!(
                matches!(
                    response.into_result(),
                    Err(TranslateError::InvalidResponse(_))
                ),
                "{body}"
            );
        }
    }
}
