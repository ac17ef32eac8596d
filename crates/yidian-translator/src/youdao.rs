use serde::Deserialize;

use crate::{ProviderMetadata, TranslateError, Translation, Translator, sign, unix_time};

const API_URL: &str = "https://openapi.youdao.com/api";
const TARGET_LANG: &str = "zh-CHS";

pub struct YoudaoTranslator {
    client: reqwest::Client,
    app_id: String,
    app_secret: String,
}

impl YoudaoTranslator {
    pub fn new(app_id: String, app_secret: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            app_id,
            app_secret,
        }
    }
}

#[derive(Deserialize)]
struct YoudaoResponse {
    #[serde(rename = "errorCode")]
    error_code: String,
    #[serde(default)]
    translation: Vec<String>,
}

impl YoudaoResponse {
    fn into_result(self) -> Result<String, TranslateError> {
        if self.error_code != "0" {
            return Err(TranslateError::Api(format!(
                "youdao errorCode={}",
                self.error_code
            )));
        }

        self.translation
            .into_iter()
            .next()
            .ok_or_else(|| TranslateError::InvalidResponse("empty translation list".into()))
    }
}

#[async_trait::async_trait]
impl Translator for YoudaoTranslator {
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError> {
        if self.app_id.is_empty() || self.app_secret.is_empty() {
            return Err(TranslateError::MissingCredentials(
                "Youdao app id and secret",
            ));
        }

        let now = unix_time();
        let salt = now.as_millis().to_string();
        let curtime = now.as_secs().to_string();
        let signature = sign::youdao_sign(&self.app_id, text, &salt, &curtime, &self.app_secret);

        let response: YoudaoResponse = self
            .client
            .post(API_URL)
            .form(&[
                ("q", text),
                ("from", "auto"),
                ("to", TARGET_LANG),
                ("appKey", self.app_id.as_str()),
                ("salt", salt.as_str()),
                ("sign", signature.as_str()),
                ("signType", "v3"),
                ("curtime", curtime.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        Ok(Translation {
            text: response.into_result()?,
            provider: "youdao".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Youdao".to_string(),
            requires_api_key: true,
        }
    }
}
