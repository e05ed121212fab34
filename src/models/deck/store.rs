use std::collections::HashMap;
use std::sync::RwLock;

use crate::errors::AppError;

use super::factory::make_slide;
use super::types::{Deck, Slide, Theme};

/// Fields accepted for a new slide; the factory assigns its id.
#[derive(Debug, Clone)]
pub struct NewSlide {
    pub slide_type: String,
    pub title: String,
    pub content: String,
    pub bullets: Option<Vec<String>>,
}

/// Partial update for an existing slide. A `None` field is left untouched;
/// there is no way to clear a field through this type, only to overwrite it.
#[derive(Debug, Clone, Default)]
pub struct SlidePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub bullets: Option<Vec<String>>,
}

struct Inner {
    decks: HashMap<String, Deck>,
    current: Option<String>,
}

/// Process-wide deck registry with a single "current deck" pointer.
///
/// Decks are only ever added (by generation) and mutated in place; nothing
/// removes a deck for the lifetime of the process. Mutation operations target
/// whichever deck is current. One instance lives in `web::Data` and is shared
/// across workers, so the map and the pointer sit behind a single lock and
/// every operation runs to completion while holding it.
pub struct DeckStore {
    inner: RwLock<Inner>,
}

impl DeckStore {
    pub fn new() -> Self {
        DeckStore {
            inner: RwLock::new(Inner {
                decks: HashMap::new(),
                current: None,
            }),
        }
    }

    /// Register a freshly generated deck and make it current.
    /// Returns a snapshot of the stored deck.
    pub fn insert(&self, deck: Deck) -> Deck {
        let mut inner = self.inner.write().unwrap();
        let copy = deck.clone();
        inner.current = Some(deck.id.clone());
        inner.decks.insert(deck.id.clone(), deck);
        copy
    }

    /// Snapshot of the current deck, or `NoCurrentDeck` when the pointer is
    /// unset. Never panics on a dangling pointer; that also reports absence.
    pub fn current(&self) -> Result<Deck, AppError> {
        let inner = self.inner.read().unwrap();
        inner
            .current
            .as_ref()
            .and_then(|id| inner.decks.get(id))
            .cloned()
            .ok_or(AppError::NoCurrentDeck)
    }

    pub fn deck_count(&self) -> usize {
        self.inner.read().unwrap().decks.len()
    }

    fn mutate_current<R>(
        &self,
        op: impl FnOnce(&mut Deck) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut inner = self.inner.write().unwrap();
        let Inner { decks, current } = &mut *inner;
        let deck = current
            .as_ref()
            .and_then(|id| decks.get_mut(id))
            .ok_or(AppError::NoCurrentDeck)?;
        op(deck)
    }

    /// Overwrite the provided fields of the slide at `index` in place.
    pub fn update_slide(&self, index: i64, patch: SlidePatch) -> Result<Deck, AppError> {
        self.mutate_current(|deck| {
            let idx = checked_index(index, deck.slides.len())?;
            let slide = &mut deck.slides[idx];
            if let Some(title) = patch.title {
                slide.title = title;
            }
            if let Some(content) = patch.content {
                slide.content = Some(content);
            }
            if let Some(bullets) = patch.bullets {
                slide.bullets = Some(bullets);
            }
            Ok(deck.clone())
        })
    }

    /// Insert a new slide at `position`, or append when the position is
    /// omitted or out of range. Position is a hint, not a strict contract.
    pub fn add_slide(&self, new: NewSlide, position: Option<i64>) -> Result<Deck, AppError> {
        self.mutate_current(|deck| {
            let slide = Slide {
                content: Some(new.content),
                bullets: new.bullets,
                ..make_slide(&new.slide_type, &new.title)
            };
            match position {
                Some(p) if p >= 0 && (p as usize) <= deck.slides.len() => {
                    deck.slides.insert(p as usize, slide);
                }
                _ => deck.slides.push(slide),
            }
            Ok(deck.clone())
        })
    }

    /// Remove the slide at `index`; later slides shift down by one.
    /// A deck may be reduced to zero slides.
    pub fn remove_slide(&self, index: i64) -> Result<Deck, AppError> {
        self.mutate_current(|deck| {
            let idx = checked_index(index, deck.slides.len())?;
            deck.slides.remove(idx);
            Ok(deck.clone())
        })
    }

    pub fn change_theme(&self, theme: Theme) -> Result<Deck, AppError> {
        self.mutate_current(|deck| {
            deck.theme = theme;
            Ok(deck.clone())
        })
    }
}

impl Default for DeckStore {
    fn default() -> Self {
        Self::new()
    }
}

fn checked_index(index: i64, slide_count: usize) -> Result<usize, AppError> {
    if index < 0 || index as usize >= slide_count {
        return Err(AppError::InvalidSlideIndex { index, slide_count });
    }
    Ok(index as usize)
}
