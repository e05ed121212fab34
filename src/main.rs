use actix_web::{App, HttpServer, middleware, web};

use deckhand::handlers;
use deckhand::handlers::viewer_handlers::ws;
use deckhand::models::deck::store::DeckStore;
use deckhand::templates_structs::ApiErrorResponse;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // One store and one viewer hub per process; every worker shares them.
    let store = web::Data::new(DeckStore::new());
    let hub = web::Data::new(ws::new_viewer_hub());

    let bind_addr = match std::env::var("BIND_ADDR") {
        Ok(addr) => addr,
        Err(_) => {
            log::info!("No BIND_ADDR set, using 127.0.0.1:8080");
            "127.0.0.1:8080".to_string()
        }
    };

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(hub.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Viewer
            .route("/", web::get().to(handlers::viewer_handlers::index))
            .route("/ws", web::get().to(ws::ws_connect))
            // JSON API
            .service(web::scope("/api/v1").configure(handlers::deck_handlers::configure))
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                actix_web::HttpResponse::NotFound().json(ApiErrorResponse {
                    error: "Not Found".to_string(),
                    details: None,
                })
            }))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
