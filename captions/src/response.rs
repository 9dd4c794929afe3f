use serde::{Deserialize, Serialize};

use crate::GenerateError;

/// Structured body the caption service may answer with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionResponse {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    Text,
}

impl ContentKind {
    pub fn from_header(content_type: Option<&str>) -> Self {
        match content_type {
            Some(value) if value.to_ascii_lowercase().contains("application/json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Splits `text` on runs of blank lines. Whitespace-only lines count as blank
/// and fragments that end up empty are dropped.
pub fn split_captions(text: &str) -> Vec<String> {
    let mut captions = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                captions.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        captions.push(current.join("\n"));
    }
    captions
}

/// Turns a successful response body into the caption list to render.
pub fn extract_captions(kind: ContentKind, body: &str) -> Result<Vec<String>, GenerateError> {
    let captions = match kind {
        ContentKind::Json => {
            let response: CaptionResponse =
                serde_json::from_str(body).map_err(|e| GenerateError::Decode(e.to_string()))?;
            response
                .text
                .as_deref()
                .map(split_captions)
                .unwrap_or_default()
        }
        ContentKind::Text => split_captions(body),
    };

    if captions.is_empty() {
        return Err(GenerateError::EmptyResult);
    }
    Ok(captions)
}
