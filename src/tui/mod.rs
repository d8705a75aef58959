//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Single-threaded request/response: poll one terminal event, run it through
//! `dispatch` to completion, redraw. Nothing animates, so the loop only
//! redraws after an event or a resize.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::navigation::NavEvent;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{PickerEvent, PickerState, Translations, VerseViewState};
use crate::tui::event::{TuiEvent, poll_event_timeout};

/// TUI-specific presentation state (not part of core reader logic)
pub struct TuiState {
    pub verse_view: VerseViewState,
    pub translations: Translations,
    // Selector overlay (None = hidden)
    pub picker: Option<PickerState>,
}

impl TuiState {
    pub fn new(translations: Translations) -> Self {
        Self {
            verse_view: VerseViewState::default(),
            translations,
            picker: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Apply one terminal event to the session. Returns `Effect::Quit` when the
/// loop should exit.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    // ForceQuit (Ctrl+C) always quits, even with a picker open
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }

    // When a picker is open, route all events to it
    if let Some(ref mut picker) = tui.picker {
        match picker.handle_event(event) {
            Some(PickerEvent::Select(nav)) => {
                tui.picker = None;
                return navigate(app, tui, nav);
            }
            Some(PickerEvent::Dismiss) => tui.picker = None,
            None => {}
        }
        return Effect::None;
    }

    match event {
        TuiEvent::Quit | TuiEvent::Escape => update(app, Action::Quit),
        TuiEvent::Previous => navigate(app, tui, NavEvent::Previous),
        TuiEvent::Next => navigate(app, tui, NavEvent::Next),
        TuiEvent::OpenChapterPicker => {
            tui.picker = Some(PickerState::chapters(
                &app.document,
                &app.selection.chapter_id,
            ));
            Effect::None
        }
        TuiEvent::OpenVersePicker => {
            tui.picker = Some(PickerState::verses(
                &app.document,
                &app.selection.chapter_id,
                &app.selection.verse_id,
            ));
            Effect::None
        }
        TuiEvent::ToggleEnglish => {
            tui.translations.english = !tui.translations.english;
            Effect::None
        }
        TuiEvent::ToggleUrdu => {
            tui.translations.urdu = !tui.translations.urdu;
            Effect::None
        }
        TuiEvent::CursorUp
        | TuiEvent::CursorDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.verse_view.handle_event(event);
            Effect::None
        }
        TuiEvent::Submit | TuiEvent::Resize | TuiEvent::ForceQuit => Effect::None,
    }
}

fn navigate(app: &mut App, tui: &mut TuiState, nav: NavEvent) -> Effect {
    let before = app.selection.clone();
    let effect = update(app, Action::Navigate(nav));
    if app.selection != before {
        tui.verse_view.reset();
    }
    effect
}

pub fn run(mut app: App, translations: Translations) -> std::io::Result<()> {
    let mut tui = TuiState::new(translations);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(event) = poll_event_timeout(Duration::from_millis(500))? else {
            continue;
        };
        needs_redraw = true;
        debug!("TUI event: {:?}", event);

        if dispatch(app, tui, &event) == Effect::Quit {
            info!(
                "Quitting at {}:{}",
                app.selection.chapter_id, app.selection.verse_id
            );
            return Ok(());
        }
    }
}
