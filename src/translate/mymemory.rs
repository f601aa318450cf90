use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::TargetLanguage;

pub const MYMEMORY_API_URL: &str = "https://api.mymemory.translated.net/get";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    translated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Response {
    response_data: ResponseData,
}

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Nothing to translate")]
    EmptyInput,
    #[error("A translation is already in flight")]
    Busy,
    #[error("Failed to make request")]
    NetworkFailure(#[from] reqwest::Error),
    #[error("Failed to parse response")]
    DecodeFailure(#[from] serde_json::Error),
}

/// MyMemory can return several alternatives joined by commas; only the
/// first one is kept. A comma inside a real translation is cut as well.
pub fn first_alternative(raw: &str) -> String {
    raw.split(',').next().unwrap_or_default().trim().to_string()
}

#[derive(Clone)]
pub struct MyMemoryTranslate {
    client: reqwest::Client,
    api_url: String,
}

impl MyMemoryTranslate {
    pub fn new(api_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.to_string(),
        }
    }

    pub fn build_request(
        &self,
        text: &str,
        to: TargetLanguage,
    ) -> Result<reqwest::Request, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::EmptyInput);
        }
        let langpair = to.langpair();
        let params = [("q", text), ("langpair", langpair.as_str())];
        let request = self.client.get(&self.api_url).query(&params).build()?;
        Ok(request)
    }

    pub async fn translate(&self, text: &str, to: TargetLanguage) -> Result<String, TranslationError> {
        let request = self.build_request(text, to)?;
        debug!("MyMemory request: {}", request.url());

        let body = self.client.execute(request).await?.text().await?;
        debug!("MyMemory response: {}", body);

        let res = match serde_json::from_str::<Response>(&body) {
            Ok(res) => res,
            Err(e) => {
                warn!("Decoding error: {:?}", e);
                return Err(e.into());
            }
        };

        Ok(first_alternative(&res.response_data.translated_text))
    }
}
