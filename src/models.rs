//! Wire-contract data models
//!
//! Defines the `{action, payload}` envelope the studio UI sends, the closed
//! set of action tags it may carry, and the normalized result shapes returned
//! to it.

use serde::{Deserialize, Serialize};

/// The `{action, payload}` wrapper every studio request arrives in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub action: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickSummaryPayload {
    pub topic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPayload {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPayload {
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyCharitiesPayload {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePosterPayload {
    pub prompt: String,
    /// Target image size label forwarded to the provider, e.g. "1K" or "2K".
    pub size: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditImagePayload {
    /// Uploaded photo as a data-URI; the prefix is stripped before dispatch.
    pub base64: String,
    pub instruction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeImagePayload {
    pub base64: String,
}

/// A studio request with its payload parsed into the tag's typed shape.
#[derive(Debug, Clone)]
pub enum Action {
    QuickSummary(QuickSummaryPayload),
    Chat(ChatPayload),
    Search(SearchPayload),
    NearbyCharities(NearbyCharitiesPayload),
    GeneratePoster(GeneratePosterPayload),
    EditImage(EditImagePayload),
    AnalyzeImage(AnalyzeImagePayload),
}

impl Action {
    /// The wire tag this action was parsed from.
    pub fn tag(&self) -> &'static str {
        match self {
            Action::QuickSummary(_) => "quickSummary",
            Action::Chat(_) => "chat",
            Action::Search(_) => "search",
            Action::NearbyCharities(_) => "nearbyCharities",
            Action::GeneratePoster(_) => "generatePoster",
            Action::EditImage(_) => "editImage",
            Action::AnalyzeImage(_) => "analyzeImage",
        }
    }

    /// Parse an envelope into a typed action.
    ///
    /// The tag is matched against the closed set before the payload is
    /// touched, so an unrecognized tag never reaches payload deserialization.
    pub fn from_envelope(envelope: Envelope) -> crate::Result<Self> {
        fn payload<T: serde::de::DeserializeOwned>(
            action: &'static str,
            value: serde_json::Value,
        ) -> crate::Result<T> {
            serde_json::from_value(value)
                .map_err(|source| crate::Error::InvalidPayload { action, source })
        }

        match envelope.action.as_str() {
            "quickSummary" => Ok(Self::QuickSummary(payload(
                "quickSummary",
                envelope.payload,
            )?)),
            "chat" => Ok(Self::Chat(payload("chat", envelope.payload)?)),
            "search" => Ok(Self::Search(payload("search", envelope.payload)?)),
            "nearbyCharities" => Ok(Self::NearbyCharities(payload(
                "nearbyCharities",
                envelope.payload,
            )?)),
            "generatePoster" => Ok(Self::GeneratePoster(payload(
                "generatePoster",
                envelope.payload,
            )?)),
            "editImage" => Ok(Self::EditImage(payload("editImage", envelope.payload)?)),
            "analyzeImage" => Ok(Self::AnalyzeImage(payload(
                "analyzeImage",
                envelope.payload,
            )?)),
            other => Err(crate::Error::InvalidAction(other.to_string())),
        }
    }
}

/// Web citation extracted from search grounding metadata and passed through
/// to the caller unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Place entry extracted from maps grounding metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

// Normalized per-action result bodies.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextResult {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    pub sources: Vec<WebSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesResult {
    pub text: String,
    pub places: Vec<Place>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResult {
    /// Data-URI of the first inline image part, or `null` when the provider
    /// produced none. Absence is a soft result, not a failure.
    pub image: Option<String>,
}

/// Union of the result bodies, serialized without a tag so each action's
/// shape reaches the wire exactly as the UI expects.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ActionOutcome {
    Text(TextResult),
    Search(SearchResult),
    Places(PlacesResult),
    Image(ImageResult),
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub bind: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| crate::Error::Config("GEMINI_API_KEY not set".to_string()))?,
            bind: std::env::var("STUDIO_BIND").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("STUDIO_PORT")
                .ok()
                .map(|port| {
                    port.parse().map_err(|_| {
                        crate::Error::Config("STUDIO_PORT must be a port number".to_string())
                    })
                })
                .transpose()?
                .unwrap_or(8788),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn envelope(action: &str, payload: serde_json::Value) -> Envelope {
        Envelope {
            action: action.to_string(),
            payload,
        }
    }

    #[test]
    fn test_envelope_deserializes_with_payload() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"action":"quickSummary","payload":{"topic":"clean water access"}}"#,
        )
        .unwrap();

        assert_eq!(envelope.action, "quickSummary");
        assert_eq!(envelope.payload["topic"], "clean water access");
    }

    #[test]
    fn test_envelope_defaults_missing_payload_to_null() {
        let envelope: Envelope = serde_json::from_str(r#"{"action":"chat"}"#).unwrap();
        assert!(envelope.payload.is_null());
    }

    #[test]
    fn test_from_envelope_parses_every_tag() {
        let cases = vec![
            ("quickSummary", serde_json::json!({"topic": "t"})),
            ("chat", serde_json::json!({"message": "m"})),
            ("search", serde_json::json!({"query": "q"})),
            ("nearbyCharities", serde_json::json!({"lat": 1.0, "lng": 2.0})),
            (
                "generatePoster",
                serde_json::json!({"prompt": "p", "size": "1K"}),
            ),
            (
                "editImage",
                serde_json::json!({"base64": "data:image/jpeg;base64,AA==", "instruction": "i"}),
            ),
            (
                "analyzeImage",
                serde_json::json!({"base64": "data:image/jpeg;base64,AA=="}),
            ),
        ];

        for (tag, payload) in cases {
            let action = Action::from_envelope(envelope(tag, payload)).unwrap();
            assert_eq!(action.tag(), tag);
        }
    }

    #[test]
    fn test_from_envelope_rejects_unknown_tag() {
        let err = Action::from_envelope(envelope("bogus", serde_json::json!({}))).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidAction(_)));
        assert_eq!(err.to_string(), "Invalid action");
    }

    #[test]
    fn test_from_envelope_rejects_malformed_payload() {
        let err =
            Action::from_envelope(envelope("quickSummary", serde_json::json!({}))).unwrap_err();
        match err {
            crate::Error::InvalidPayload { action, .. } => assert_eq!(action, "quickSummary"),
            other => panic!("expected InvalidPayload, got {:?}", other),
        }
    }

    #[test]
    fn test_from_envelope_rejects_null_payload() {
        let err = Action::from_envelope(envelope("search", serde_json::Value::Null)).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidPayload { .. }));
    }

    #[test]
    fn test_text_outcome_serializes_flat() {
        let outcome = ActionOutcome::Text(TextResult {
            text: "two sentences".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({"text": "two sentences"})
        );
    }

    #[test]
    fn test_search_outcome_serializes_sources() {
        let outcome = ActionOutcome::Search(SearchResult {
            text: "answer".to_string(),
            sources: vec![WebSource {
                title: Some("Charity Navigator".to_string()),
                uri: Some("https://example.com".to_string()),
            }],
        });
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({
                "text": "answer",
                "sources": [{"title": "Charity Navigator", "uri": "https://example.com"}]
            })
        );
    }

    #[test]
    fn test_empty_image_outcome_serializes_null() {
        let outcome = ActionOutcome::Image(ImageResult { image: None });
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({"image": null})
        );
    }
}
