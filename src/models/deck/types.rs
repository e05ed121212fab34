use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single figure shown on a metric panel (e.g. TAM on a market slide).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One addressable unit of content within a deck.
///
/// `slide_type` is a free-form tag. The nine generator archetypes plus
/// "custom" are the conventional values, but any string is accepted so new
/// slide kinds don't require a schema change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    #[serde(rename = "type")]
    pub slide_type: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<Metric>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Visual palette selector. A closed set: anything else is rejected at the
/// request boundary by deserialization, before any deck is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Midnight,
    Clean,
    Sunset,
    Forest,
    Electric,
}

impl Theme {
    /// All themes in display order. The first one is the generator default.
    pub const ALL: [Theme; 5] = [
        Theme::Midnight,
        Theme::Clean,
        Theme::Sunset,
        Theme::Forest,
        Theme::Electric,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Midnight => "midnight",
            Theme::Clean => "clean",
            Theme::Sunset => "sunset",
            Theme::Forest => "forest",
            Theme::Electric => "electric",
        }
    }

    /// Parse a theme name, for values arriving outside the typed boundary
    /// (viewer messages, embedded snapshots). Unknown names yield None.
    pub fn parse(name: &str) -> Option<Theme> {
        Theme::ALL.iter().copied().find(|t| t.name() == name)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Midnight
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The full ordered document: company metadata, theme, and slide sequence.
/// `slides` order is presentation order; slide ids are unique within the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    pub id: String,
    pub company_name: String,
    pub tagline: String,
    pub theme: Theme,
    pub slides: Vec<Slide>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parse_roundtrip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.name()), Some(theme));
        }
        assert_eq!(Theme::parse("neon"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn theme_default_is_first() {
        assert_eq!(Theme::default(), Theme::ALL[0]);
        assert_eq!(Theme::default().name(), "midnight");
    }

    #[test]
    fn theme_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Theme::Forest).unwrap();
        assert_eq!(json, "\"forest\"");
        let back: Theme = serde_json::from_str("\"electric\"").unwrap();
        assert_eq!(back, Theme::Electric);
        assert!(serde_json::from_str::<Theme>("\"solar\"").is_err());
    }

    #[test]
    fn slide_serializes_type_tag_and_skips_empty_fields() {
        let slide = Slide {
            id: "ab12cd34".to_string(),
            slide_type: "custom".to_string(),
            title: "Appendix".to_string(),
            subtitle: None,
            content: None,
            bullets: None,
            metrics: None,
            icon: None,
        };
        let json = serde_json::to_value(&slide).unwrap();
        assert_eq!(json["type"], "custom");
        assert!(json.get("subtitle").is_none());
        assert!(json.get("bullets").is_none());
    }
}
