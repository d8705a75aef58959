//! # NavBar Component
//!
//! Bottom bar with the previous/next controls and the verse counter.
//! A control at a chapter boundary is drawn dimmed, the terminal
//! equivalent of a disabled button.
//!
//! ```text
//! ◀ Prev          Ayah 2 of 7          Next ▶
//!  c Surah  v Ayah  e English  u Urdu  q Quit
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct NavBar {
    pub has_previous: bool,
    pub has_next: bool,
    /// `(1-based verse number, verse count)`
    pub progress: Option<(usize, usize)>,
}

pub const NAV_BAR_HEIGHT: u16 = 2;

fn control_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [controls_area, help_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
        let [prev_area, counter_area, next_area] = Layout::horizontal([
            Constraint::Length(10),
            Constraint::Min(0),
            Constraint::Length(10),
        ])
        .areas(controls_area);

        frame.render_widget(
            Span::styled("◀ Prev", control_style(self.has_previous)),
            prev_area,
        );

        let counter = match self.progress {
            Some((n, total)) => format!("Ayah {n} of {total}"),
            None => String::new(),
        };
        frame.render_widget(
            Paragraph::new(counter).alignment(Alignment::Center),
            counter_area,
        );

        frame.render_widget(
            Paragraph::new(Span::styled("Next ▶", control_style(self.has_next)))
                .alignment(Alignment::Right),
            next_area,
        );

        let help = Line::from(" ←/→ Prev/Next  c Surah  v Ayah  e English  u Urdu  q Quit ")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help, help_area);
    }
}
