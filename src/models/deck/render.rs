use std::fmt::Write;

use super::types::{Deck, Slide};

/// Render a deck as a multi-line text summary: a header block followed by one
/// block per slide in presentation order.
///
/// This is the human-auditable echo returned alongside every operation. The
/// deck snapshot, not this text, is the system of record.
pub fn render_deck(deck: &Deck) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {} Pitch Deck", deck.company_name);
    let _ = writeln!(out, "Tagline: {}", deck.tagline);
    let _ = writeln!(out, "Theme: {}", deck.theme);
    let _ = writeln!(out, "Slides: {}", deck.slides.len());

    for (i, slide) in deck.slides.iter().enumerate() {
        out.push('\n');
        render_slide(&mut out, i + 1, slide);
    }
    out
}

fn render_slide(out: &mut String, number: usize, slide: &Slide) {
    match &slide.icon {
        Some(icon) => {
            let _ = writeln!(out, "{number}. {icon} {}", slide.title);
        }
        None => {
            let _ = writeln!(out, "{number}. {}", slide.title);
        }
    }
    if let Some(subtitle) = &slide.subtitle {
        let _ = writeln!(out, "   {subtitle}");
    }
    if let Some(content) = &slide.content {
        let _ = writeln!(out, "   {content}");
    }
    if let Some(bullets) = &slide.bullets {
        for bullet in bullets {
            let _ = writeln!(out, "   - {bullet}");
        }
    }
    if let Some(metrics) = &slide.metrics {
        for metric in metrics {
            match &metric.description {
                Some(desc) => {
                    let _ = writeln!(out, "   - **{}**: {} ({desc})", metric.label, metric.value);
                }
                None => {
                    let _ = writeln!(out, "   - **{}**: {}", metric.label, metric.value);
                }
            }
        }
    }
}
