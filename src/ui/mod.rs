mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::session::Phase;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.phase() {
        Phase::Answering | Phase::Reviewing => quiz::render(frame, area, app),
        Phase::Finished => result::render(frame, area, app),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::data::builtin_questions;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn answer(app: &mut App, option_id: &str) {
        app.select_option(option_id);
        app.submit_answer();
        app.advance();
    }

    #[test]
    fn test_render_question_screen() {
        let app = App::new(builtin_questions().unwrap());
        let screen = draw(&app);
        assert!(screen.contains("School"));
        assert!(screen.contains("1 / 3"));
    }

    #[test]
    fn test_render_after_submit() {
        let mut app = App::new(builtin_questions().unwrap());
        app.select_option("2");
        app.submit_answer();
        let screen = draw(&app);
        assert!(screen.contains("✓"));
    }

    #[test]
    fn test_render_results_screen() {
        let mut app = App::new(builtin_questions().unwrap());
        answer(&mut app, "2");
        answer(&mut app, "1");
        answer(&mut app, "4");
        let screen = draw(&app);
        assert!(screen.contains("2 / 3"));
        assert!(screen.contains("67%"));
    }
}
