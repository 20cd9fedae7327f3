//! Baidu fanyi provider: signed form POST, JSON response.

use std::time::Duration;

use rand::Rng;
use serde::Deserialize;

use crate::{TranslateError, Translation, Translator, lang};

const API_URL: &str = "https://api.fanyi.baidu.com/api/trans/vip/translate";

/// Request integrity: md5 over appid + raw text + salt + secret. The raw,
/// unnormalized text is signed and submitted; normalization applies to
/// language codes only.
pub fn sign(app_id: &str, query: &str, salt: &str, secret: &str) -> String {
    let payload = format!("{app_id}{query}{salt}{secret}");
    format!("{:x}", md5::compute(payload.as_bytes()))
}

#[derive(Debug, Deserialize)]
pub struct BaiduResponse {
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_msg: Option<String>,
    #[serde(default)]
    pub data: Option<BaiduErrorData>,
    #[serde(default)]
    pub client_ip: Option<String>,
    #[serde(default)]
    pub trans_result: Option<Vec<TransResultItem>>,
}

#[derive(Debug, Deserialize)]
pub struct BaiduErrorData {
    #[serde(default)]
    pub client_ip: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TransResultItem {
    pub dst: String,
}

/// Map a decoded provider response to translated text or a typed failure.
///
/// Known error codes get remediation detail appended: 52003 points at the
/// account/authorization, 58000 and 54003 carry the caller's visible IP
/// when the provider reports it.
pub fn classify_response(response: BaiduResponse) -> Result<String, TranslateError> {
    if let Some(code) = response.error_code {
        let base = response.error_msg.unwrap_or_default();
        let message = match code.as_str() {
            "58001" => format!("{base}. Check that the target language is in the supported set."),
            "52003" => format!(
                "{base}. Check the app's service authorization, source restrictions and account status in the provider console."
            ),
            "58000" | "54003" => {
                let client_ip = response
                    .data
                    .and_then(|d| d.client_ip)
                    .or(response.client_ip)
                    .unwrap_or_else(|| "unknown".to_string());
                format!("{base}. client_ip={client_ip}")
            }
            _ => base,
        };
        return Err(TranslateError::Api { code, message });
    }

    response
        .trans_result
        .and_then(|mut items| {
            if items.is_empty() {
                None
            } else {
                Some(items.remove(0).dst)
            }
        })
        .ok_or_else(|| TranslateError::MalformedResponse("missing trans_result".to_string()))
}

pub struct BaiduTranslator {
    app_id: String,
    secret_key: String,
    default_target: String,
    client: reqwest::Client,
}

impl BaiduTranslator {
    pub fn new(
        app_id: String,
        secret_key: String,
        default_target: String,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            app_id,
            secret_key,
            default_target,
            client,
        }
    }
}

#[async_trait::async_trait]
impl Translator for BaiduTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyQuery);
        }
        if self.app_id.is_empty() || self.secret_key.is_empty() {
            return Err(TranslateError::MissingCredentials);
        }

        let from_code = lang::normalize_from(from);
        let to_code = lang::normalize_to(to, &self.default_target);

        // Target validation happens before any network traffic.
        if to_code == "auto" || !lang::is_supported(&to_code) {
            return Err(TranslateError::InvalidTarget {
                requested: to.to_string(),
                supported: lang::SUPPORTED.join(","),
            });
        }

        let salt = rand::thread_rng().gen_range(100_000..=999_999).to_string();
        let sign = sign(&self.app_id, text, &salt, &self.secret_key);

        let form = [
            ("q", text),
            ("from", from_code.as_str()),
            ("to", to_code.as_str()),
            ("appid", self.app_id.as_str()),
            ("salt", salt.as_str()),
            ("sign", sign.as_str()),
        ];

        let response: BaiduResponse = self
            .client
            .post(API_URL)
            .form(&form)
            .send()
            .await?
            .json()
            .await?;

        let translated = classify_response(response)?;

        Ok(Translation {
            text: translated,
            from: from_code,
            to: to_code,
            provider: self.name().to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "baidu"
    }
}
