use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::templates_structs::ApiErrorResponse;

#[derive(Debug)]
pub enum AppError {
    /// A mutation or read was invoked before any deck was generated.
    NoCurrentDeck,
    /// Slide index outside `0..slide_count` for update/remove.
    InvalidSlideIndex { index: i64, slide_count: usize },
    Template(askama::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NoCurrentDeck => {
                write!(f, "No deck found. Generate a pitch deck first.")
            }
            AppError::InvalidSlideIndex { index, slide_count } => {
                if *slide_count == 0 {
                    write!(f, "Invalid slide index {index}. The deck has no slides.")
                } else {
                    write!(
                        f,
                        "Invalid slide index {index}. Deck has {slide_count} slides (0-{}).",
                        slide_count - 1
                    )
                }
            }
            AppError::Template(e) => write!(f, "Template error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NoCurrentDeck => HttpResponse::NotFound().json(ApiErrorResponse {
                error: self.to_string(),
                details: None,
            }),
            AppError::InvalidSlideIndex { .. } => {
                HttpResponse::BadRequest().json(ApiErrorResponse {
                    error: self.to_string(),
                    details: None,
                })
            }
            AppError::Template(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().json(ApiErrorResponse {
                    error: "Internal Server Error".to_string(),
                    details: None,
                })
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an Askama template into an HTML response.
pub fn render<T: askama::Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
