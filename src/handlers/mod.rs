pub mod deck_handlers;
pub mod viewer_handlers;
