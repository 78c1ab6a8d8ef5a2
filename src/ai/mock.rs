use crate::ai::types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, InlineData, Part,
};
use crate::ai::GenerativeService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// A `generate_content` invocation as the mock observed it.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub request: GenerateContentRequest,
}

/// In-process substitute for the Gemini client.
///
/// Queued responses are served in order and cycle when exhausted; with no
/// queue a plain text response is returned. Calls are recorded so tests can
/// assert on the model id and request shape.
#[derive(Clone)]
pub struct MockGenerativeClient {
    responses: Arc<Mutex<Vec<GenerateContentResponse>>>,
    error_message: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockGenerativeClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            error_message: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_text_response(self, text: &str) -> Self {
        let response = text_response(text);
        self.with_response(response)
    }

    /// Make every call fail with an `AiProvider` error.
    pub fn with_error(self, message: &str) -> Self {
        *self.error_message.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl Default for MockGenerativeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeService for MockGenerativeClient {
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(RecordedCall {
            model: model.to_string(),
            request,
        });
        let count = calls.len();
        drop(calls);

        if let Some(message) = self.error_message.lock().unwrap().clone() {
            return Err(Error::AiProvider(message));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(text_response("Mock Gemini response"))
        } else {
            let index = (count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

/// Response with a single text part, the common happy-path shape.
pub fn text_response(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content {
                role: Some("model".to_string()),
                parts: vec![Part::Text {
                    text: text.to_string(),
                }],
            }),
            grounding_metadata: None,
        }],
    }
}

/// Response whose first candidate carries one inline image part.
pub fn inline_image_response(mime_type: &str, data: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content {
                role: Some("model".to_string()),
                parts: vec![Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: data.to_string(),
                    },
                }],
            }),
            grounding_metadata: None,
        }],
    }
}
