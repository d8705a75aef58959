use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{NAV_BAR_HEIGHT, NavBar, Picker, PickerKind, TitleBar, VerseView};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(NAV_BAR_HEIGHT)]);
    let [title_area, main_area, nav_area] = layout.areas(frame.area());

    TitleBar::new(
        app.source.to_string(),
        app.status_message.clone(),
        app.error.clone(),
    )
    .render(frame, title_area);

    match (app.current_chapter(), app.current_verse()) {
        (Some(chapter), Some(verse)) => {
            VerseView {
                state: &mut tui.verse_view,
                verse,
                heading: format!(
                    "{} {}:{}",
                    chapter.name, app.selection.chapter_id, app.selection.verse_id
                ),
                translations: tui.translations,
            }
            .render(frame, main_area);
        }
        _ => draw_error_view(
            frame,
            main_area,
            &format!(
                "Nothing to show for {}:{}",
                app.selection.chapter_id, app.selection.verse_id
            ),
        ),
    }

    NavBar {
        has_previous: app.has_previous(),
        has_next: app.has_next(),
        progress: app.progress(),
    }
    .render(frame, nav_area);

    if let Some(picker) = tui.picker.as_mut() {
        let current = match picker.kind {
            PickerKind::Chapter => app.selection.chapter_id.as_str(),
            PickerKind::Verse => app.selection.verse_id.as_str(),
        };
        Picker::new(picker, current).render(frame, main_area);
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}
