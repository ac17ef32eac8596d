use serde::Deserialize;

use crate::{ProviderMetadata, TranslateError, Translation, Translator, sign, unix_time};

const API_URL: &str = "https://fanyi-api.baidu.com/api/trans/vip/translate";
const TARGET_LANG: &str = "zh";

pub struct BaiduTranslator {
    client: reqwest::Client,
    app_id: String,
    secret_key: String,
}

impl BaiduTranslator {
    pub fn new(app_id: String, secret_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            app_id,
            secret_key,
        }
    }
}

#[derive(Deserialize)]
struct BaiduResponse {
    #[serde(default)]
    trans_result: Vec<BaiduItem>,
    error_code: Option<String>,
}

#[derive(Deserialize)]
struct BaiduItem {
    dst: String,
}

impl BaiduResponse {
    fn into_result(self) -> Result<String, TranslateError> {
        if let Some(first) = self.trans_result.into_iter().next() {
            return Ok(first.dst);
        }

        Err(TranslateError::Api(format!(
            "baidu error_code={}",
            self.error_code.unwrap_or_else(|| "unknown".to_string())
        )))
    }
}

#[async_trait::async_trait]
impl Translator for BaiduTranslator {
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError> {
        if self.app_id.is_empty() || self.secret_key.is_empty() {
            return Err(TranslateError::MissingCredentials(
                "Baidu app id and secret key",
            ));
        }

        let salt = unix_time().as_millis().to_string();
        let signature = sign::baidu_sign(&self.app_id, text, &salt, &self.secret_key);

        let response: BaiduResponse = self
            .client
            .get(API_URL)
            .query(&[
                ("q", text),
                ("from", "auto"),
                ("to", TARGET_LANG),
                ("appid", self.app_id.as_str()),
                ("salt", salt.as_str()),
                ("sign", signature.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        Ok(Translation {
            text: response.into_result()?,
            provider: "baidu".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Baidu Fanyi".to_string(),
            requires_api_key: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_result() {
        let response: BaiduResponse = serde_json::from_str(
            r#"{"from":"en","to":"zh","trans_result":[{"src":"hello","dst":"你好"}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_result().unwrap(), "你好");
    }

    #[test]
    fn error_code_surfaces_when_no_result() {
        let response: BaiduResponse = serde_json::from_str(
            r#"{"error_code":"54001","error_msg":"Invalid Sign"}"#,
        )
        .unwrap();
        assert!(matches!(
            response.into_result(),
            Err(TranslateError::Api(msg)) if msg.contains("54001")
        ));
    }

    #[test]
    fn missing_error_code_still_errors() {
        let response: BaiduResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            response.into_result(),
            Err(TranslateError::Api(msg)) if msg.contains("unknown")
        ));
    }
}
