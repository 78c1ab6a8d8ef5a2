//! Gemini `generateContent` payload types shared by the client and dispatcher.

use crate::models::WebSource;
use serde::{Deserialize, Serialize};

/// Content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Untagged union of text and inline media content parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64 inline payload used for image requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Request body for `generateContent`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(rename = "toolConfig", skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Grounding tool toggle, serialized as `{"googleSearch": {}}` or
/// `{"googleMaps": {}}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Tool {
    #[serde(rename = "googleSearch", skip_serializing_if = "Option::is_none")]
    pub google_search: Option<EmptyConfig>,
    #[serde(rename = "googleMaps", skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<EmptyConfig>,
}

impl Tool {
    pub fn search() -> Self {
        Self {
            google_search: Some(EmptyConfig {}),
            ..Default::default()
        }
    }

    pub fn maps() -> Self {
        Self {
            google_maps: Some(EmptyConfig {}),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmptyConfig {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub retrieval_config: RetrievalConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    pub lat_lng: LatLng,
}

#[derive(Debug, Clone, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub aspect_ratio: String,
    pub image_size: String,
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(rename = "groundingMetadata")]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Citation block attached to a grounded candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// One grounding source; carries a web citation, a maps place, or neither.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingChunk {
    pub web: Option<WebSource>,
    pub maps: Option<MapsPlace>,
}

/// Maps grounding payload; only the fields the studio surfaces.
#[derive(Debug, Clone, Deserialize)]
pub struct MapsPlace {
    pub title: Option<String>,
    pub uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_deserializes_text_and_inline_data() {
        let parts: Vec<Part> = serde_json::from_str(
            r#"[{"text": "hello"}, {"inlineData": {"mimeType": "image/png", "data": "AA=="}}]"#,
        )
        .unwrap();

        assert!(matches!(&parts[0], Part::Text { text } if text == "hello"));
        assert!(
            matches!(&parts[1], Part::InlineData { inline_data } if inline_data.mime_type == "image/png")
        );
    }

    #[test]
    fn test_request_serializes_camel_case_configs() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part::Text {
                    text: "poster".to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: "3:4".to_string(),
                    image_size: "1K".to_string(),
                }),
            }),
            ..Default::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["generationConfig"]["imageConfig"]["aspectRatio"],
            "3:4"
        );
        assert_eq!(json["generationConfig"]["imageConfig"]["imageSize"], "1K");
        assert!(json.get("tools").is_none());
    }

    #[test]
    fn test_tool_toggles_serialize_as_empty_objects() {
        assert_eq!(
            serde_json::to_value(Tool::search()).unwrap(),
            serde_json::json!({"googleSearch": {}})
        );
        assert_eq!(
            serde_json::to_value(Tool::maps()).unwrap(),
            serde_json::json!({"googleMaps": {}})
        );
    }

    #[test]
    fn test_tool_config_serializes_lat_lng() {
        let config = ToolConfig {
            retrieval_config: RetrievalConfig {
                lat_lng: LatLng {
                    latitude: 12.9,
                    longitude: 77.5,
                },
            },
        };
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            serde_json::json!({
                "retrievalConfig": {"latLng": {"latitude": 12.9, "longitude": 77.5}}
            })
        );
    }

    #[test]
    fn test_response_tolerates_missing_candidates_and_content() {
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.candidates.is_empty());

        let bare: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{}]}"#).unwrap();
        assert!(bare.candidates[0].content.is_none());
        assert!(bare.candidates[0].grounding_metadata.is_none());
    }

    #[test]
    fn test_response_parses_grounding_chunks() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {"parts": [{"text": "answer"}]},
                    "groundingMetadata": {
                        "groundingChunks": [
                            {"web": {"title": "Site", "uri": "https://example.com"}},
                            {"maps": {"title": "Shelter", "uri": "https://maps.example.com"}},
                            {}
                        ]
                    }
                }]
            }"#,
        )
        .unwrap();

        let chunks = &response.candidates[0]
            .grounding_metadata
            .as_ref()
            .unwrap()
            .grounding_chunks;
        assert_eq!(chunks.len(), 3);
        assert!(chunks[0].web.is_some());
        assert!(chunks[1].maps.is_some());
        assert!(chunks[2].web.is_none() && chunks[2].maps.is_none());
    }
}
