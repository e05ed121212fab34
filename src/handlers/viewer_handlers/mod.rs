pub mod ws;

use actix_web::{HttpResponse, web};

use crate::errors::{AppError, render};
use crate::models::deck::store::DeckStore;
use crate::templates_structs::{DeckSnapshot, ViewerTemplate};

/// GET / - The slideshow page.
///
/// Boots with the current deck embedded when one exists; before the first
/// generation the shell shows a placeholder and reconciles on the first
/// pushed snapshot.
pub async fn index(store: web::Data<DeckStore>) -> Result<HttpResponse, AppError> {
    let deck_json = match store.current() {
        Ok(deck) => serde_json::to_string(&DeckSnapshot::from(&deck))
            .unwrap_or_else(|_| "null".to_string()),
        Err(_) => "null".to_string(),
    };
    render(ViewerTemplate { deck_json })
}
