use rand::Rng;

use super::types::Slide;

/// Short random id used for decks and slides: 4 random bytes, hex-encoded.
/// 32 bits is enough that collisions within one deck are treated as
/// negligible rather than formally prevented.
pub fn id_token() -> String {
    let bytes: [u8; 4] = rand::rng().random();
    hex::encode(bytes)
}

/// Build a slide with a fresh id and no optional fields set.
///
/// Any type tag is accepted. Callers attach subtitle, content, bullets,
/// metrics or icon via struct update syntax:
///
/// ```
/// use deckhand::models::deck::factory::make_slide;
/// use deckhand::models::deck::types::Slide;
///
/// let slide = Slide {
///     content: Some("Extra material".to_string()),
///     ..make_slide("custom", "Appendix")
/// };
/// ```
pub fn make_slide(slide_type: &str, title: &str) -> Slide {
    Slide {
        id: id_token(),
        slide_type: slide_type.to_string(),
        title: title.to_string(),
        subtitle: None,
        content: None,
        bullets: None,
        metrics: None,
        icon: None,
    }
}
