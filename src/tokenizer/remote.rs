use super::{Morpheme, Tokenize};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct TokenizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenizeResponse {
    tokens: Vec<Morpheme>,
}

/// Client for a resident analyser service.
///
/// Sends `{"text": "..."}` as JSON and expects `{"tokens": [{"surface": "...", "reading": "..."}]}`
/// back. Connection problems and timeouts are reported as [`Error::TokenizerUnavailable`].
#[derive(Debug, Clone)]
pub struct RemoteTokenizer {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl RemoteTokenizer {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into();
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|source| Error::TokenizerUnavailable {
                endpoint: endpoint.clone(),
                source,
            })?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn unavailable(&self, source: reqwest::Error) -> Error {
        Error::TokenizerUnavailable {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

impl Tokenize for RemoteTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&TokenizeRequest { text })
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|source| self.unavailable(source))?;
        let body = response.text().map_err(|source| self.unavailable(source))?;
        let TokenizeResponse { tokens } = serde_json::from_str(&body)
            .map_err(|err| Error::TokenizerResponse(err.to_string()))?;
        debug!(text, morphemes = tokens.len(), endpoint = %self.endpoint, "tokenized remotely");
        Ok(tokens)
    }
}
