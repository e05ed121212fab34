use askama::Template;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::deck::types::{Deck, Slide, Theme};

/// The slideshow page. Boots with the current deck embedded as JSON so the
/// first paint doesn't wait for the WebSocket; `deck_json` is `null` when no
/// deck has been generated yet.
#[derive(Template)]
#[template(path = "viewer.html")]
pub struct ViewerTemplate {
    pub deck_json: String,
}

/// Outbound deck snapshot: the structured result of every operation and the
/// payload pushed to connected viewers. Field names match the viewer's wire
/// shape (`companyName`, `type` on slides). `theme` travels as a string so the
/// viewer's defensive parse is meaningful.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DeckSnapshot {
    pub id: String,
    pub company_name: String,
    pub tagline: String,
    pub theme: String,
    pub slides: Vec<Slide>,
    pub created_at: DateTime<Utc>,
}

impl From<&Deck> for DeckSnapshot {
    fn from(deck: &Deck) -> Self {
        DeckSnapshot {
            id: deck.id.clone(),
            company_name: deck.company_name.clone(),
            tagline: deck.tagline.clone(),
            theme: deck.theme.name().to_string(),
            slides: deck.slides.clone(),
            created_at: deck.created_at,
        }
    }
}

/// Successful operation result: the snapshot plus a text rendering of the
/// same deck for non-interactive consumers.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeckResponse {
    pub deck: DeckSnapshot,
    pub summary: String,
}

/// Generate a new deck from a company description.
#[derive(Deserialize, Debug)]
pub struct GenerateDeckRequest {
    pub company_name: String,
    pub description: String,
    pub industry: Option<String>,
    pub stage: Option<String>,
    pub ask_amount: Option<String>,
    pub traction: Option<String>,
}

/// Partial update for one slide. Omitted fields are left untouched.
#[derive(Deserialize, Debug)]
pub struct UpdateSlideRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub bullets: Option<Vec<String>>,
}

/// Insert a new slide. `position` is a hint: out-of-range values append.
#[derive(Deserialize, Debug)]
pub struct AddSlideRequest {
    pub title: String,
    pub content: String,
    #[serde(default = "default_slide_type")]
    pub slide_type: String,
    pub position: Option<i64>,
    pub bullets: Option<Vec<String>>,
}

fn default_slide_type() -> String {
    "custom".to_string()
}

/// Change the deck theme. Deserializing into [`Theme`] rejects names outside
/// the fixed set before any deck is touched.
#[derive(Deserialize, Debug)]
pub struct ChangeThemeRequest {
    pub theme: Theme,
}

/// API error response.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
