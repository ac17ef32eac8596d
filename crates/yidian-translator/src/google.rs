use serde_json::Value;

use crate::{ProviderMetadata, TranslateError, Translation, Translator};

/// Unofficial web endpoint; keyless.
const API_URL: &str = "https://translate.googleapis.com/translate_a/single";

pub struct GoogleTranslator {
    client: reqwest::Client,
    target_lang: String,
}

impl GoogleTranslator {
    pub fn new(target_lang: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            target_lang,
        }
    }
}

/// First segment of the nested sentence array: `data[0][0][0]`.
fn extract_translation(data: &Value) -> Option<String> {
    data.get(0)?.get(0)?.get(0)?.as_str().map(str::to_string)
}

#[async_trait::async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError> {
        let url = format!(
            "{API_URL}?client=gtx&sl=auto&tl={}&dt=t&q={}",
            self.target_lang,
            urlencoding::encode(text)
        );

        let data: Value = self.client.get(&url).send().await?.json().await?;

        let text = extract_translation(&data).ok_or_else(|| {
            TranslateError::InvalidResponse("missing sentence segments".to_string())
        })?;

        Ok(Translation {
            text,
            provider: "google".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
            requires_api_key: false,
        }
    }
}
