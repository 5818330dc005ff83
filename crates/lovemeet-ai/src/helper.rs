use std::sync::Arc;

use serde_json::{Value, json};
use tracing::{debug, warn};

use lovemeet_types::{Theme, Venue};

use crate::error::AiError;
use crate::{GenerateRequest, TextModel};

/// Shown when the model answers with nothing.
pub const FALLBACK_EMPTY: &str = "You are the light in my life. Will you be my Valentine?";
/// Shown when the call itself fails.
pub const FALLBACK_ERROR: &str =
    "I've been meaning to tell you how much you mean to me. Will you be mine?";

const DEFAULT_RECIPIENT: &str = "someone special";
const MAX_MESSAGE_CHARS: usize = 300;

pub fn love_message_prompt(mood: &str, crush_name: &str, theme: Theme) -> String {
    let name = match crush_name.trim() {
        "" => DEFAULT_RECIPIENT,
        name => name,
    };
    format!(
        "Generate a short, heartfelt Valentine's proposal message for {name}. \
         Tone: {mood}. Theme context: {theme}. \
         Make it creative and emotional, maximum {MAX_MESSAGE_CHARS} characters."
    )
}

pub fn venue_prompt(city: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "List the top 4 highly rated (4+ stars) romantic restaurants and venues near {city}, \
         Sri Lanka (coordinates: {latitude}, {longitude}). \
         Return the data in JSON format with properties: name, address, rating, url (Google Maps link)."
    )
}

pub fn venue_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "address": { "type": "STRING" },
                "rating": { "type": "NUMBER" },
                "url": { "type": "STRING" }
            },
            "required": ["name", "address", "rating", "url"],
            "propertyOrdering": ["name", "address", "rating", "url"]
        }
    })
}

/// Models sometimes wrap JSON in a markdown fence despite the mime type.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn parse_venues(text: &str) -> Result<Vec<Venue>, AiError> {
    let body = match strip_code_fence(text) {
        "" => "[]",
        body => body,
    };
    serde_json::from_str(body).map_err(|e| AiError::Malformed(e.to_string()))
}

/// Drafting helpers over any [`TextModel`]. Never fails: errors are logged
/// and replaced with fixed fallbacks.
#[derive(Clone)]
pub struct MessageHelper {
    model: Arc<dyn TextModel>,
}

impl MessageHelper {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// A proposal message for `crush_name` in the given mood.
    pub async fn generate(&self, mood: &str, crush_name: &str, theme: Theme) -> String {
        let request = GenerateRequest::text(love_message_prompt(mood, crush_name, theme));
        match self.model.generate(&request).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                debug!("Model returned no text, using fallback message");
                FALLBACK_EMPTY.to_string()
            }
            Err(e) => {
                warn!("Love message generation failed: {}", e);
                FALLBACK_ERROR.to_string()
            }
        }
    }

    /// Up to a handful of romantic venues near a city. Empty on any failure.
    pub async fn venue_recommendations(&self, city: &str, latitude: f64, longitude: f64) -> Vec<Venue> {
        let request = GenerateRequest::json(venue_prompt(city, latitude, longitude), venue_schema());
        let result = match self.model.generate(&request).await {
            Ok(text) => parse_venues(&text),
            Err(e) => Err(e),
        };
        match result {
            Ok(venues) => {
                debug!(city, count = venues.len(), "Venue recommendations received");
                venues
            }
            Err(e) => {
                warn!(city, "Venue search failed: {}", e);
                Vec::new()
            }
        }
    }
}
