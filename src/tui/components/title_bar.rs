//! # TitleBar Component
//!
//! Top status bar showing where the text came from and the latest status.
//!
//! Stateless: it receives all data as props and renders a single line.
//!
//! 1. **Error**: `"Quran Reader (quran.json) | invalid selection: chapter 9"` in red
//! 2. **Status message**: `"Quran Reader (quran.json) | Al-Fatihah 1:2"`
//! 3. **Default**: `"Quran Reader (quran.json)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Data source label, e.g. a file path or "built-in sample"
    pub source: String,
    pub status_message: String,
    /// Last refused action, shown instead of the status when present
    pub error: Option<String>,
}

impl TitleBar {
    pub fn new(source: String, status_message: String, error: Option<String>) -> Self {
        Self {
            source,
            status_message,
            error,
        }
    }

    fn text(&self) -> String {
        let base = format!("Quran Reader ({})", self.source);
        match (&self.error, self.status_message.is_empty()) {
            (Some(error), _) => format!("{base} | {error}"),
            (None, true) => base,
            (None, false) => format!("{base} | {}", self.status_message),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.error.is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}
