//! Action dispatch: one upstream call per action tag, reshaped into the
//! studio's normalized JSON contract.

use crate::ai::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
    InlineData, LatLng, Part, RetrievalConfig, Tool, ToolConfig,
};
use crate::ai::GenerativeService;
use crate::data_uri;
use crate::models::{
    Action, ActionOutcome, AnalyzeImagePayload, ChatPayload, EditImagePayload,
    GeneratePosterPayload, ImageResult, NearbyCharitiesPayload, Place, PlacesResult,
    QuickSummaryPayload, SearchPayload, SearchResult, TextResult,
};
use crate::prompts;
use crate::Result;

// Per-action model table. Fixed by the studio's hosted setup.
const QUICK_SUMMARY_MODEL: &str = "gemini-flash-lite-latest";
const CHAT_MODEL: &str = "gemini-3-pro-preview";
const SEARCH_MODEL: &str = "gemini-3-flash-preview";
const NEARBY_CHARITIES_MODEL: &str = "gemini-2.5-flash";
const POSTER_MODEL: &str = "gemini-3-pro-image-preview";
const EDIT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
const ANALYZE_IMAGE_MODEL: &str = "gemini-3-pro-preview";

const POSTER_ASPECT_RATIO: &str = "3:4";

/// Mime type assumed for uploaded photos once the data-URI prefix is gone.
const UPLOAD_MIME_TYPE: &str = "image/jpeg";

/// Route one parsed action to its upstream call and reshape the result.
///
/// Exactly one `generate_content` call happens per invocation; validation
/// failures are rejected before this point.
pub async fn dispatch(ai: &dyn GenerativeService, action: Action) -> Result<ActionOutcome> {
    match action {
        Action::QuickSummary(payload) => quick_summary(ai, payload).await,
        Action::Chat(payload) => chat(ai, payload).await,
        Action::Search(payload) => search(ai, payload).await,
        Action::NearbyCharities(payload) => nearby_charities(ai, payload).await,
        Action::GeneratePoster(payload) => generate_poster(ai, payload).await,
        Action::EditImage(payload) => edit_image(ai, payload).await,
        Action::AnalyzeImage(payload) => analyze_image(ai, payload).await,
    }
}

async fn quick_summary(
    ai: &dyn GenerativeService,
    payload: QuickSummaryPayload,
) -> Result<ActionOutcome> {
    let request = GenerateContentRequest {
        contents: vec![user_text(prompts::render(
            prompts::QUICK_SUMMARY,
            &[("topic", &payload.topic)],
        ))],
        ..Default::default()
    };

    let response = ai.generate_content(QUICK_SUMMARY_MODEL, request).await?;

    Ok(ActionOutcome::Text(TextResult {
        text: extract_text(&response),
    }))
}

/// Single-turn assistant exchange under a fixed system instruction. Every
/// request is a fresh session; no history is kept server-side.
async fn chat(ai: &dyn GenerativeService, payload: ChatPayload) -> Result<ActionOutcome> {
    let request = GenerateContentRequest {
        system_instruction: Some(Content {
            role: None,
            parts: vec![Part::Text {
                text: prompts::CHAT_SYSTEM.to_string(),
            }],
        }),
        contents: vec![user_text(payload.message)],
        ..Default::default()
    };

    let response = ai.generate_content(CHAT_MODEL, request).await?;

    Ok(ActionOutcome::Text(TextResult {
        text: extract_text(&response),
    }))
}

async fn search(ai: &dyn GenerativeService, payload: SearchPayload) -> Result<ActionOutcome> {
    let request = GenerateContentRequest {
        contents: vec![user_text(payload.query)],
        tools: vec![Tool::search()],
        ..Default::default()
    };

    let response = ai.generate_content(SEARCH_MODEL, request).await?;

    let sources = grounding_chunks(&response)
        .iter()
        .filter_map(|chunk| chunk.web.clone())
        .collect();

    Ok(ActionOutcome::Search(SearchResult {
        text: extract_text(&response),
        sources,
    }))
}

async fn nearby_charities(
    ai: &dyn GenerativeService,
    payload: NearbyCharitiesPayload,
) -> Result<ActionOutcome> {
    let rendered = prompts::render(
        prompts::NEARBY_CHARITIES,
        &[
            ("lat", &payload.lat.to_string()),
            ("lng", &payload.lng.to_string()),
        ],
    );

    let request = GenerateContentRequest {
        contents: vec![user_text(rendered)],
        tools: vec![Tool::maps()],
        tool_config: Some(ToolConfig {
            retrieval_config: RetrievalConfig {
                lat_lng: LatLng {
                    latitude: payload.lat,
                    longitude: payload.lng,
                },
            },
        }),
        ..Default::default()
    };

    let response = ai.generate_content(NEARBY_CHARITIES_MODEL, request).await?;

    let places = grounding_chunks(&response)
        .iter()
        .filter_map(|chunk| chunk.maps.as_ref())
        .map(|maps| Place {
            title: maps.title.clone(),
            uri: maps.uri.clone(),
        })
        .collect();

    Ok(ActionOutcome::Places(PlacesResult {
        text: extract_text(&response),
        places,
    }))
}

async fn generate_poster(
    ai: &dyn GenerativeService,
    payload: GeneratePosterPayload,
) -> Result<ActionOutcome> {
    let request = GenerateContentRequest {
        contents: vec![Content {
            role: None,
            parts: vec![Part::Text {
                text: prompts::render(prompts::POSTER, &[("prompt", &payload.prompt)]),
            }],
        }],
        generation_config: Some(GenerationConfig {
            image_config: Some(ImageConfig {
                aspect_ratio: POSTER_ASPECT_RATIO.to_string(),
                image_size: payload.size,
            }),
        }),
        ..Default::default()
    };

    let response = ai.generate_content(POSTER_MODEL, request).await?;

    Ok(ActionOutcome::Image(ImageResult {
        image: extract_image(&response),
    }))
}

async fn edit_image(ai: &dyn GenerativeService, payload: EditImagePayload) -> Result<ActionOutcome> {
    let request = GenerateContentRequest {
        contents: vec![Content {
            role: None,
            parts: vec![
                upload_part(&payload.base64),
                Part::Text {
                    text: payload.instruction,
                },
            ],
        }],
        ..Default::default()
    };

    let response = ai.generate_content(EDIT_IMAGE_MODEL, request).await?;

    Ok(ActionOutcome::Image(ImageResult {
        image: extract_image(&response),
    }))
}

async fn analyze_image(
    ai: &dyn GenerativeService,
    payload: AnalyzeImagePayload,
) -> Result<ActionOutcome> {
    let request = GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![
                upload_part(&payload.base64),
                Part::Text {
                    text: prompts::ANALYZE_PHOTO.to_string(),
                },
            ],
        }],
        ..Default::default()
    };

    let response = ai.generate_content(ANALYZE_IMAGE_MODEL, request).await?;

    Ok(ActionOutcome::Text(TextResult {
        text: extract_text(&response),
    }))
}

fn user_text(text: String) -> Content {
    Content {
        role: Some("user".to_string()),
        parts: vec![Part::Text { text }],
    }
}

/// Inline-data part for an uploaded photo, data-URI prefix stripped.
fn upload_part(base64: &str) -> Part {
    Part::InlineData {
        inline_data: InlineData {
            mime_type: UPLOAD_MIME_TYPE.to_string(),
            data: data_uri::strip_prefix(base64).to_string(),
        },
    }
}

/// Text of the first candidate, all text parts joined; empty when absent.
fn extract_text(response: &GenerateContentResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| match part {
                    Part::Text { text } => Some(text.as_str()),
                    Part::InlineData { .. } => None,
                })
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

/// First inline image part of the first candidate as a data-URI; `None` when
/// the provider produced no image, which the contract surfaces as a soft
/// `image: null`.
fn extract_image(response: &GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .find_map(|part| match part {
            Part::InlineData { inline_data } => Some(data_uri::from_base64(
                &inline_data.mime_type,
                &inline_data.data,
            )),
            Part::Text { .. } => None,
        })
}

fn grounding_chunks(
    response: &GenerateContentResponse,
) -> &[crate::ai::types::GroundingChunk] {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.grounding_metadata.as_ref())
        .map(|metadata| metadata.grounding_chunks.as_slice())
        .unwrap_or_default()
}
