use chrono::Utc;

use super::factory::{id_token, make_slide};
use super::types::{Deck, Metric, Slide, Theme};

/// Caller-supplied parameters for deck generation. Only the company name and
/// description are required by the request boundary; the rest fall back to
/// fixed defaults.
#[derive(Debug, Clone)]
pub struct DeckParams {
    pub company_name: String,
    pub description: String,
    pub industry: Option<String>,
    pub stage: Option<String>,
    pub ask_amount: Option<String>,
    pub traction: Option<String>,
}

fn metric(label: &str, value: &str, description: &str) -> Metric {
    Metric {
        label: label.to_string(),
        value: value.to_string(),
        description: Some(description.to_string()),
    }
}

fn bullets(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

/// Compose a new deck from the fixed nine-slide investor narrative:
/// title, problem, solution, market, product, business_model, traction,
/// team, ask. Input parameters are substituted into canned prose; the
/// market and business-model figures are static illustrative placeholders,
/// not derived from input.
pub fn generate(params: &DeckParams) -> Deck {
    let company = params.company_name.as_str();
    let description = params.description.as_str();
    let industry = params.industry.as_deref().unwrap_or("technology");
    let stage = params.stage.as_deref().unwrap_or("Seed");
    let ask = params.ask_amount.as_deref().unwrap_or("$2M");
    let traction = params.traction.as_deref().unwrap_or("Growing rapidly");

    let slides = vec![
        Slide {
            subtitle: Some(description.to_string()),
            icon: Some("🚀".to_string()),
            ..make_slide("title", company)
        },
        Slide {
            content: Some(format!(
                "The {industry} industry faces critical challenges that existing solutions fail to address."
            )),
            bullets: bullets(&[
                "Current solutions are fragmented and outdated",
                "Users waste significant time on manual processes",
                "No unified platform addresses the full workflow",
            ]),
            icon: Some("🔥".to_string()),
            ..make_slide("problem", "The Problem")
        },
        Slide {
            content: Some(format!(
                "{company} {description}. We provide a seamless, integrated platform that transforms how people work."
            )),
            bullets: bullets(&[
                "AI-powered automation eliminates manual work",
                "Unified platform replaces 5+ point solutions",
                "Real-time insights drive better decisions",
            ]),
            icon: Some("💡".to_string()),
            ..make_slide("solution", "Our Solution")
        },
        Slide {
            content: Some(format!("The {industry} market is massive and growing rapidly.")),
            metrics: Some(vec![
                metric("TAM", "$50B+", "Total addressable market"),
                metric("SAM", "$8B", "Serviceable addressable market"),
                metric("SOM", "$500M", "Serviceable obtainable market"),
            ]),
            icon: Some("📊".to_string()),
            ..make_slide("market", "Market Opportunity")
        },
        Slide {
            content: Some(format!(
                "A brief walkthrough of {company}'s core product experience."
            )),
            bullets: bullets(&[
                "Intuitive onboarding — get started in under 2 minutes",
                "AI-powered core workflow that saves 10+ hours/week",
                "Dashboard with real-time analytics and insights",
                "Integrations with the tools teams already use",
            ]),
            icon: Some("📱".to_string()),
            ..make_slide("product", "The Product")
        },
        Slide {
            content: Some("SaaS subscription model with strong unit economics.".to_string()),
            metrics: Some(vec![
                metric("ACV", "$12K", "Average contract value"),
                metric("Gross Margin", "85%", "Software margins"),
                metric("LTV:CAC", "5:1", "Efficient growth"),
            ]),
            icon: Some("💰".to_string()),
            ..make_slide("business_model", "Business Model")
        },
        Slide {
            content: Some(traction.to_string()),
            metrics: Some(vec![
                metric("Users", "10K+", "Active monthly users"),
                metric("Revenue", "$500K ARR", "Annual recurring revenue"),
                metric("Growth", "3x YoY", "Year-over-year growth"),
            ]),
            icon: Some("📈".to_string()),
            ..make_slide("traction", "Traction")
        },
        Slide {
            content: Some("Experienced founders with deep domain expertise.".to_string()),
            bullets: bullets(&[
                "CEO — 10+ years in the industry, ex-FAANG",
                "CTO — ML/AI expert, PhD Stanford",
                "VP Sales — Built $50M pipeline at previous startup",
            ]),
            icon: Some("👥".to_string()),
            ..make_slide("team", "The Team")
        },
        Slide {
            content: Some(format!("Raising {ask} {stage} round to accelerate growth.")),
            metrics: Some(vec![
                metric("Raising", ask, &format!("{stage} round")),
                metric("Use: Product", "40%", "Engineering & product"),
                metric("Use: Growth", "35%", "Sales & marketing"),
                metric("Use: Ops", "25%", "Team & operations"),
            ]),
            icon: Some("🎯".to_string()),
            ..make_slide("ask", "The Ask")
        },
    ];

    Deck {
        id: id_token(),
        company_name: company.to_string(),
        tagline: description.to_string(),
        theme: Theme::default(),
        slides,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DeckParams {
        DeckParams {
            company_name: "Acme".to_string(),
            description: "sells widgets".to_string(),
            industry: None,
            stage: None,
            ask_amount: None,
            traction: None,
        }
    }

    #[test]
    fn generates_nine_slides_in_fixed_order() {
        let deck = generate(&params());
        let order: Vec<&str> = deck.slides.iter().map(|s| s.slide_type.as_str()).collect();
        assert_eq!(
            order,
            [
                "title",
                "problem",
                "solution",
                "market",
                "product",
                "business_model",
                "traction",
                "team",
                "ask"
            ]
        );
    }

    #[test]
    fn title_slide_carries_company_and_tagline() {
        let deck = generate(&params());
        assert_eq!(deck.slides[0].title, "Acme");
        assert_eq!(deck.slides[0].subtitle.as_deref(), Some("sells widgets"));
        assert_eq!(deck.theme, Theme::Midnight);
        assert_eq!(deck.company_name, "Acme");
        assert_eq!(deck.tagline, "sells widgets");
    }

    #[test]
    fn optional_params_fall_back_to_fixed_defaults() {
        let deck = generate(&params());
        let problem = &deck.slides[1];
        assert!(
            problem
                .content
                .as_deref()
                .unwrap_or_default()
                .contains("technology")
        );
        let ask = &deck.slides[8];
        let content = ask.content.as_deref().unwrap_or_default();
        assert!(content.contains("$2M"));
        assert!(content.contains("Seed"));
        let traction = &deck.slides[6];
        assert_eq!(traction.content.as_deref(), Some("Growing rapidly"));
    }

    #[test]
    fn explicit_params_are_substituted() {
        let deck = generate(&DeckParams {
            industry: Some("fintech".to_string()),
            stage: Some("Series A".to_string()),
            ask_amount: Some("$10M".to_string()),
            traction: Some("50K users, $1M ARR".to_string()),
            ..params()
        });
        assert!(
            deck.slides[3]
                .content
                .as_deref()
                .unwrap_or_default()
                .contains("fintech")
        );
        assert_eq!(
            deck.slides[8].content.as_deref(),
            Some("Raising $10M Series A round to accelerate growth.")
        );
        assert_eq!(
            deck.slides[6].content.as_deref(),
            Some("50K users, $1M ARR")
        );
    }

    #[test]
    fn market_figures_are_static_placeholders() {
        let deck = generate(&params());
        let metrics = deck.slides[3].metrics.as_ref().unwrap();
        assert_eq!(metrics[0].value, "$50B+");
        assert_eq!(metrics[1].value, "$8B");
        assert_eq!(metrics[2].value, "$500M");
    }

    #[test]
    fn slide_ids_are_unique_within_the_deck() {
        let deck = generate(&params());
        let mut ids: Vec<&str> = deck.slides.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), deck.slides.len());
    }
}
