//! # VerseView Component
//!
//! The main reading pane: the Arabic text, then the English and Urdu
//! translations, each in its own bordered panel. Long verses scroll.
//!
//! Arabic and Urdu are right-aligned. The terminal still lays glyphs out
//! left-to-right, so shaping and bidi are up to the terminal emulator.
//!
//! ```text
//! ┌ Al-Fatihah 1:1 ───────────────────────┐
//! │        بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ │
//! └───────────────────────────────────────┘
//! ┌ English ──────────────────────────────┐
//! │ In the name of Allah, ...             │
//! └───────────────────────────────────────┘
//! ┌ Urdu ─────────────────────────────────┐
//! │          اللہ کے نام سے جو بڑا مہربان ... │
//! └───────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::document::Verse;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll state for the reading pane. Persisted in `TuiState`, reset on
/// every selection change.
#[derive(Default)]
pub struct VerseViewState {
    pub scroll_state: ScrollViewState,
}

impl VerseViewState {
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for VerseViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
        None
    }
}

/// Which translations to show. Arabic is always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub english: bool,
    pub urdu: bool,
}

/// Transient render wrapper for the reading pane.
pub struct VerseView<'a> {
    pub state: &'a mut VerseViewState,
    pub verse: &'a Verse,
    /// Panel title for the Arabic text, e.g. "Al-Fatihah 1:1".
    pub heading: String,
    pub translations: Translations,
}

struct Panel<'a> {
    paragraph: Paragraph<'a>,
    height: u16,
}

impl<'a> Panel<'a> {
    fn new(title: String, text: &'a str, style: Style, alignment: Alignment, width: u16) -> Self {
        let border_style = style.add_modifier(Modifier::DIM);
        let paragraph = Paragraph::new(text.trim())
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(border_style)
                    .title_style(border_style),
            )
            .style(style)
            .alignment(alignment)
            .wrap(Wrap { trim: true });
        let height = u16::try_from(paragraph.line_count(width)).unwrap_or(u16::MAX);
        Panel { paragraph, height }
    }
}

impl Component for VerseView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Leave one column for the scrollbar
        let content_width = area.width.saturating_sub(1);

        let mut panels = vec![Panel::new(
            self.heading.clone(),
            &self.verse.arabic,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Alignment::Right,
            content_width,
        )];
        if self.translations.english {
            panels.push(Panel::new(
                "English".to_string(),
                &self.verse.english,
                Style::default().fg(Color::White),
                Alignment::Left,
                content_width,
            ));
        }
        if self.translations.urdu {
            panels.push(Panel::new(
                "Urdu".to_string(),
                &self.verse.urdu,
                Style::default().fg(Color::Cyan),
                Alignment::Right,
                content_width,
            ));
        }

        let total_height = panels
            .iter()
            .fold(0u16, |acc, p| acc.saturating_add(p.height));
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for panel in panels {
            let rect = Rect::new(0, y_offset, content_width, panel.height);
            y_offset = y_offset.saturating_add(panel.height);
            scroll_view.render_widget(panel.paragraph, rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
