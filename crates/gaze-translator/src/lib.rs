pub mod baidu;
pub mod lang;

pub use baidu::BaiduTranslator;

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language. `from` and `to` are
    /// normalized by the provider; the text itself is passed through raw.
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError>;

    /// Provider name for logs and history records
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
}

/// Per-run recoverable failures. Display text is written for direct
/// display in the result popup.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("translation provider error (code {code}): {message}")]
    Api { code: String, message: String },

    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error(
        "invalid target language '{requested}': choose one of {supported} (auto is not a valid target)"
    )]
    InvalidTarget { requested: String, supported: String },

    #[error("nothing to translate")]
    EmptyQuery,

    #[error("translation credentials missing: set BAIDU_APP_ID and BAIDU_SECRET_KEY")]
    MissingCredentials,

    #[error("could not parse provider response: {0}")]
    MalformedResponse(String),
}
