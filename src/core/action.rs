//! # Actions
//!
//! Everything that can happen in the reader becomes an `Action`.
//! User presses →? That's `Action::Navigate(NavEvent::Next)`.
//! User picks chapter 2 from the selector? That's
//! `Action::Navigate(NavEvent::SelectChapter("2"))`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` for the adapter to carry out.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, warn};

use crate::core::navigation::{self, NavEvent};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(NavEvent),
    Quit,
}

/// Side effects requested by `update`, carried out by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Quit => Effect::Quit,
        Action::Navigate(event) => {
            match navigation::transition(&app.document, &app.selection, &event) {
                Ok(next) => {
                    let moved = next != app.selection;
                    app.selection = next;
                    app.error = None;
                    app.status_message = status_for(app, &event, moved);
                }
                Err(e) => {
                    warn!("Refusing {:?}: {}", event, e);
                    app.error = Some(e.to_string());
                }
            }
            Effect::None
        }
    }
}

fn status_for(app: &App, event: &NavEvent, moved: bool) -> String {
    match (event, moved) {
        (NavEvent::Previous, false) => "Already at the first verse".to_string(),
        (NavEvent::Next, false) => "Already at the last verse".to_string(),
        _ => match app.current_chapter() {
            Some(chapter) => format!(
                "{} {}:{}",
                chapter.name, app.selection.chapter_id, app.selection.verse_id
            ),
            None => String::new(),
        },
    }
}
