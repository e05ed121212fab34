use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web,
};

use crate::errors::AppError;
use crate::handlers::viewer_handlers::ws::{self, ViewerHub};
use crate::models::deck::generator::{self, DeckParams};
use crate::models::deck::render::render_deck;
use crate::models::deck::store::{DeckStore, NewSlide, SlidePatch};
use crate::models::deck::types::Deck;
use crate::templates_structs::{
    AddSlideRequest, ApiErrorResponse, ChangeThemeRequest, DeckResponse, DeckSnapshot,
    GenerateDeckRequest, UpdateSlideRequest,
};
use crate::validate;

fn deck_response(deck: &Deck) -> DeckResponse {
    DeckResponse {
        deck: DeckSnapshot::from(deck),
        summary: render_deck(deck),
    }
}

fn validation_failed(errors: Vec<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiErrorResponse {
        error: "Validation failed".to_string(),
        details: Some(errors.join("; ")),
    })
}

/// POST /api/v1/deck - Generate a pitch deck from a company description.
///
/// Composes the fixed nine-slide narrative, registers the deck as current,
/// and pushes the fresh snapshot to every connected viewer.
pub async fn generate(
    store: web::Data<DeckStore>,
    hub: web::Data<ViewerHub>,
    body: web::Json<GenerateDeckRequest>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.company_name, "Company name", 120));
    errors.extend(validate::validate_required(&body.description, "Description", 500));
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let body = body.into_inner();
    let deck = store.insert(generator::generate(&DeckParams {
        company_name: body.company_name,
        description: body.description,
        industry: body.industry,
        stage: body.stage,
        ask_amount: body.ask_amount,
        traction: body.traction,
    }));
    log::info!(
        "generated deck {} for {} ({} slides)",
        deck.id,
        deck.company_name,
        deck.slides.len()
    );

    ws::broadcast_deck(&hub, &deck);
    Ok(HttpResponse::Created().json(deck_response(&deck)))
}

/// GET /api/v1/deck - Snapshot of the current deck.
pub async fn current(store: web::Data<DeckStore>) -> Result<HttpResponse, AppError> {
    let deck = store.current()?;
    Ok(HttpResponse::Ok().json(deck_response(&deck)))
}

/// PUT /api/v1/deck/slides/{index} - Partial update of one slide.
pub async fn update_slide(
    store: web::Data<DeckStore>,
    hub: web::Data<ViewerHub>,
    path: web::Path<i64>,
    body: web::Json<UpdateSlideRequest>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    if let Some(title) = &body.title {
        errors.extend(validate::validate_required(title, "Title", 200));
    }
    if let Some(content) = &body.content {
        errors.extend(validate::validate_required(content, "Content", 2000));
    }
    if let Some(bullets) = &body.bullets {
        errors.extend(validate::validate_bullets(bullets));
    }
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let index = path.into_inner();
    let body = body.into_inner();
    let deck = store.update_slide(
        index,
        SlidePatch {
            title: body.title,
            content: body.content,
            bullets: body.bullets,
        },
    )?;
    log::debug!("updated slide {index} of deck {}", deck.id);

    ws::broadcast_deck(&hub, &deck);
    Ok(HttpResponse::Ok().json(deck_response(&deck)))
}

/// POST /api/v1/deck/slides - Insert a new slide.
pub async fn add_slide(
    store: web::Data<DeckStore>,
    hub: web::Data<ViewerHub>,
    body: web::Json<AddSlideRequest>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.title, "Title", 200));
    errors.extend(validate::validate_required(&body.content, "Content", 2000));
    if let Some(bullets) = &body.bullets {
        errors.extend(validate::validate_bullets(bullets));
    }
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let body = body.into_inner();
    let deck = store.add_slide(
        NewSlide {
            slide_type: body.slide_type,
            title: body.title,
            content: body.content,
            bullets: body.bullets,
        },
        body.position,
    )?;
    log::debug!("added slide to deck {} ({} slides)", deck.id, deck.slides.len());

    ws::broadcast_deck(&hub, &deck);
    Ok(HttpResponse::Created().json(deck_response(&deck)))
}

/// DELETE /api/v1/deck/slides/{index} - Remove one slide.
pub async fn remove_slide(
    store: web::Data<DeckStore>,
    hub: web::Data<ViewerHub>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let index = path.into_inner();
    let deck = store.remove_slide(index)?;
    log::debug!("removed slide {index} from deck {} ({} left)", deck.id, deck.slides.len());

    ws::broadcast_deck(&hub, &deck);
    Ok(HttpResponse::Ok().json(deck_response(&deck)))
}

/// PUT /api/v1/deck/theme - Change the deck theme.
///
/// Names outside the fixed set never reach this handler; deserialization into
/// [`crate::models::deck::types::Theme`] rejects them with a 400.
pub async fn change_theme(
    store: web::Data<DeckStore>,
    hub: web::Data<ViewerHub>,
    body: web::Json<ChangeThemeRequest>,
) -> Result<HttpResponse, AppError> {
    let deck = store.change_theme(body.theme)?;
    log::debug!("deck {} theme set to {}", deck.id, deck.theme);

    ws::broadcast_deck(&hub, &deck);
    Ok(HttpResponse::Ok().json(deck_response(&deck)))
}

/// CSRF protection for REST API mutation endpoints.
///
/// Rejects POST/PUT/DELETE requests that don't have Content-Type: application/json.
/// Browsers cannot send cross-origin JSON with cookies via simple form POST —
/// the Content-Type check acts as a CSRF guard without requiring tokens.
/// GET requests are exempt (read-only, no state changes).
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let method = req.method().clone();

    if method == actix_web::http::Method::POST
        || method == actix_web::http::Method::PUT
        || method == actix_web::http::Method::DELETE
    {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let body = serde_json::json!({
                "error": "Content-Type must be application/json for mutation requests"
            });
            let response = HttpResponse::BadRequest().json(body);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// Configure deck API routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/deck")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::post().to(generate))
            .route("", web::get().to(current))
            .route("/slides", web::post().to(add_slide))
            .route("/slides/{index}", web::put().to(update_slide))
            .route("/slides/{index}", web::delete().to(remove_slide))
            .route("/theme", web::put().to(change_theme)),
    );
}
