//! Shared builders for deck model tests.

use deckhand::models::deck::generator::{self, DeckParams};
use deckhand::models::deck::store::DeckStore;
use deckhand::models::deck::types::Deck;

/// The canonical generator input used across test files.
pub fn acme_params() -> DeckParams {
    DeckParams {
        company_name: "Acme".to_string(),
        description: "sells widgets".to_string(),
        industry: None,
        stage: None,
        ask_amount: None,
        traction: None,
    }
}

/// A store holding one freshly generated (current) deck.
pub fn store_with_deck() -> (DeckStore, Deck) {
    let store = DeckStore::new();
    let deck = store.insert(generator::generate(&acme_params()));
    (store, deck)
}
