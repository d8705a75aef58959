//! # Picker Component
//!
//! Full-screen overlay for choosing a chapter or a verse. Opened with `c`
//! (chapters) or `v` (verses of the current chapter), dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PickerState` lives in `TuiState`
//! - `Picker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::document::Document;
use crate::core::navigation::NavEvent;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// What the picker chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Chapter,
    Verse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerItem {
    pub id: String,
    pub label: String,
}

/// Persistent state for the picker overlay.
pub struct PickerState {
    pub kind: PickerKind,
    pub items: Vec<PickerItem>,
    pub selected: usize,
    pub list_state: ListState,
}

impl PickerState {
    /// Chapters of `document`, with `current` highlighted.
    pub fn chapters(document: &Document, current: &str) -> Self {
        let items = document
            .chapter_entries()
            .into_iter()
            .map(|entry| PickerItem {
                label: entry.label(),
                id: entry.id,
            })
            .collect();
        Self::new(PickerKind::Chapter, items, current)
    }

    /// Verses of `chapter_id`, with `current` highlighted. Empty for an
    /// unknown chapter.
    pub fn verses(document: &Document, chapter_id: &str, current: &str) -> Self {
        let items = document
            .verse_ids(chapter_id)
            .unwrap_or_default()
            .into_iter()
            .map(|id| PickerItem {
                id: id.to_string(),
                label: format!("Ayah {id}"),
            })
            .collect();
        Self::new(PickerKind::Verse, items, current)
    }

    fn new(kind: PickerKind, items: Vec<PickerItem>, current: &str) -> Self {
        let selected = items.iter().position(|i| i.id == current).unwrap_or(0);
        let mut list_state = ListState::default();
        if !items.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            kind,
            items,
            selected,
            list_state,
        }
    }

    fn title(&self) -> &'static str {
        match self.kind {
            PickerKind::Chapter => " Select Surah ",
            PickerKind::Verse => " Select Ayah ",
        }
    }
}

/// Events emitted by the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Select(NavEvent),
    Dismiss,
}

impl EventHandler for PickerState {
    type Event = PickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PickerEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Quit => Some(PickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.items.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.items.is_empty() {
                    self.selected = (self.selected + 1).min(self.items.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self.items.get(self.selected).map(|item| {
                let event = match self.kind {
                    PickerKind::Chapter => NavEvent::SelectChapter(item.id.clone()),
                    PickerKind::Verse => NavEvent::SelectVerse(item.id.clone()),
                };
                PickerEvent::Select(event)
            }),
            _ => None,
        }
    }
}

/// Transient render wrapper for the picker overlay.
pub struct Picker<'a> {
    state: &'a mut PickerState,
    current_id: &'a str,
}

impl<'a> Picker<'a> {
    pub fn new(state: &'a mut PickerState, current_id: &'a str) -> Self {
        Self { state, current_id }
    }
}

impl Component for Picker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(self.state.title())
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Move  Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let inner_width = overlay.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .state
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_current = item.id == self.current_id;
                let marker = if is_current { " *" } else { "" };
                let label = truncate_str(&item.label, inner_width.saturating_sub(marker.len()));

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_current {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(label, style),
                    Span::styled(marker, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
