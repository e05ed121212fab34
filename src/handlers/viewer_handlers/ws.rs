use actix_web::{HttpRequest, HttpResponse, web};
use actix_ws::Message;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

use crate::models::deck::store::DeckStore;
use crate::models::deck::types::{Deck, Theme};
use crate::templates_structs::DeckSnapshot;
use crate::viewer::state::{NavInput, ViewerState};

pub type ViewerHub = std::sync::Arc<RwLock<HashMap<u64, mpsc::UnboundedSender<String>>>>;

static NEXT_CONN_ID: AtomicU64 = AtomicU64::new(1);

pub fn new_viewer_hub() -> ViewerHub {
    std::sync::Arc::new(RwLock::new(HashMap::new()))
}

/// Push a fresh deck snapshot to every connected viewer. Each connection
/// task reconciles its own presentation state and answers with a frame.
pub fn broadcast_deck(hub: &ViewerHub, deck: &Deck) {
    let snapshot = match serde_json::to_string(&DeckSnapshot::from(deck)) {
        Ok(s) => s,
        Err(e) => {
            log::error!("failed to serialize deck snapshot: {e}");
            return;
        }
    };
    let map = match hub.read() {
        Ok(m) => m,
        Err(_) => return,
    };
    for sender in map.values() {
        let _ = sender.send(snapshot.clone());
    }
}

/// Input events forwarded by the browser shell.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ClientMessage {
    Next,
    Prev,
    Goto { index: usize },
    SelectTheme { theme: String },
}

fn frame_json(state: &ViewerState, deck: &DeckSnapshot) -> String {
    serde_json::json!({
        "type": "frame",
        "slideIndex": state.slide_index(),
        "theme": state.theme().name(),
        "deck": deck,
    })
    .to_string()
}

async fn send_frame(
    ws_session: &mut actix_ws::Session,
    state: &ViewerState,
    deck: &Option<DeckSnapshot>,
) -> Result<(), actix_ws::Closed> {
    if let Some(deck) = deck {
        ws_session.text(frame_json(state, deck)).await?;
    }
    Ok(())
}

async fn handle_client_message(
    text: &str,
    state: &mut ViewerState,
    deck: &mut Option<DeckSnapshot>,
    store: &DeckStore,
    ws_session: &mut actix_ws::Session,
) -> Result<(), actix_ws::Closed> {
    let msg: ClientMessage = match serde_json::from_str(text) {
        Ok(m) => m,
        Err(e) => {
            log::debug!("ignoring malformed viewer message: {e}");
            return Ok(());
        }
    };

    match msg {
        ClientMessage::Next => {
            if state.navigate(NavInput::Next) {
                send_frame(ws_session, state, deck).await?;
            }
        }
        ClientMessage::Prev => {
            if state.navigate(NavInput::Prev) {
                send_frame(ws_session, state, deck).await?;
            }
        }
        ClientMessage::Goto { index } => {
            if state.navigate(NavInput::Goto(index)) {
                send_frame(ws_session, state, deck).await?;
            }
        }
        ClientMessage::SelectTheme { theme } => match Theme::parse(&theme) {
            Some(theme) => {
                // Adopt locally first; the store write below is best-effort
                // persistence, never a gate on what this viewer displays.
                state.select_theme(theme);
                if let Some(deck) = deck.as_mut() {
                    deck.theme = theme.name().to_string();
                }
                send_frame(ws_session, state, deck).await?;
                if let Err(e) = store.change_theme(theme) {
                    log::debug!("theme selection not persisted: {e}");
                }
            }
            None => log::debug!("ignoring unknown theme {theme:?}"),
        },
    }
    Ok(())
}

/// WebSocket upgrade handler. Each connection owns one [`ViewerState`] and a
/// copy of the latest deck snapshot, driving both from client input and from
/// hub broadcasts.
pub async fn ws_connect(
    req: HttpRequest,
    body: web::Payload,
    store: web::Data<DeckStore>,
    hub: web::Data<ViewerHub>,
) -> Result<HttpResponse, actix_web::Error> {
    let (response, mut ws_session, mut msg_stream) = actix_ws::handle(&req, body)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let conn_id = NEXT_CONN_ID.fetch_add(1, Ordering::Relaxed);

    // Register this connection
    {
        let mut map = hub.write().unwrap();
        map.insert(conn_id, tx);
    }

    let hub_clone = hub.into_inner().clone();
    let store = store.into_inner();

    actix_web::rt::spawn(async move {
        let mut state = ViewerState::new();
        let mut deck: Option<DeckSnapshot> = None;

        // Initial frame when a deck already exists.
        if let Ok(current) = store.current() {
            let snapshot = DeckSnapshot::from(&current);
            state.reconcile(snapshot.slides.len(), &snapshot.theme);
            deck = Some(snapshot);
            let _ = send_frame(&mut ws_session, &state, &deck).await;
        }

        loop {
            tokio::select! {
                Some(msg) = rx.recv() => {
                    // Authoritative snapshot from a mutation: full reconciliation.
                    match serde_json::from_str::<DeckSnapshot>(&msg) {
                        Ok(snapshot) => {
                            state.reconcile(snapshot.slides.len(), &snapshot.theme);
                            deck = Some(snapshot);
                            if send_frame(&mut ws_session, &state, &deck).await.is_err() {
                                break;
                            }
                        }
                        Err(e) => log::debug!("discarding malformed broadcast: {e}"),
                    }
                }
                Some(Ok(msg)) = msg_stream.recv() => {
                    match msg {
                        Message::Text(text) => {
                            if handle_client_message(&text, &mut state, &mut deck, &store, &mut ws_session)
                                .await
                                .is_err()
                            {
                                break;
                            }
                        }
                        Message::Ping(bytes) => {
                            if ws_session.pong(&bytes).await.is_err() {
                                break;
                            }
                        }
                        Message::Close(_) => break,
                        _ => {}
                    }
                }
                else => break,
            }
        }

        // Clean up on disconnect
        if let Ok(mut map) = hub_clone.write() {
            map.remove(&conn_id);
        }
    });

    Ok(response)
}
