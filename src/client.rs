//! Typed invoker for the studio proxy endpoint
//!
//! One method per studio tool. Each call builds the `{action, payload}`
//! envelope, performs a single POST, and parses the JSON reply into the
//! action's result shape. Failures surface as one generic error per call;
//! retries and timeouts are deliberately the caller's concern.

use crate::data_uri;
use crate::models::{
    AnalyzeImagePayload, ChatPayload, EditImagePayload, Envelope, GeneratePosterPayload,
    ImageResult, NearbyCharitiesPayload, PlacesResult, QuickSummaryPayload, SearchPayload,
    SearchResult, TextResult,
};
use crate::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct StudioClient {
    client: Client,
    endpoint: String,
}

impl StudioClient {
    /// `endpoint` is the full proxy URL, e.g. `https://host/api/gemini`.
    pub fn new(endpoint: String) -> Self {
        Self::new_with_client(endpoint, Client::new())
    }

    pub fn new_with_client(endpoint: String, client: Client) -> Self {
        Self { client, endpoint }
    }

    async fn call<P: Serialize, T: DeserializeOwned>(&self, action: &str, payload: P) -> Result<T> {
        let envelope = Envelope {
            action: action.to_string(),
            payload: serde_json::to_value(payload)?,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&envelope)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("[{}] Failed to reach AI Studio proxy: {}", action, e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("[{}] AI Studio proxy returned status {}", action, status);
            return Err(Error::Proxy(format!(
                "Gemini API failed (status {})",
                status
            )));
        }

        Ok(response.json().await?)
    }

    pub async fn quick_summary(&self, topic: &str) -> Result<TextResult> {
        self.call(
            "quickSummary",
            QuickSummaryPayload {
                topic: topic.to_string(),
            },
        )
        .await
    }

    pub async fn chat(&self, message: &str) -> Result<TextResult> {
        self.call(
            "chat",
            ChatPayload {
                message: message.to_string(),
            },
        )
        .await
    }

    pub async fn search_trends(&self, query: &str) -> Result<SearchResult> {
        self.call(
            "search",
            SearchPayload {
                query: query.to_string(),
            },
        )
        .await
    }

    pub async fn nearby_charities(&self, lat: f64, lng: f64) -> Result<PlacesResult> {
        self.call("nearbyCharities", NearbyCharitiesPayload { lat, lng })
            .await
    }

    pub async fn generate_poster(&self, prompt: &str, size: &str) -> Result<ImageResult> {
        self.call(
            "generatePoster",
            GeneratePosterPayload {
                prompt: prompt.to_string(),
                size: size.to_string(),
            },
        )
        .await
    }

    /// Submit raw photo bytes for editing; the bytes are encoded into the
    /// same JPEG data-URI the browser UI produces from a file upload.
    pub async fn edit_photo(&self, image: &[u8], instruction: &str) -> Result<ImageResult> {
        self.call(
            "editImage",
            EditImagePayload {
                base64: data_uri::from_jpeg_bytes(image),
                instruction: instruction.to_string(),
            },
        )
        .await
    }

    pub async fn analyze_photo(&self, image: &[u8]) -> Result<TextResult> {
        self.call(
            "analyzeImage",
            AnalyzeImagePayload {
                base64: data_uri::from_jpeg_bytes(image),
            },
        )
        .await
    }
}
