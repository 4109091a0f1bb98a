use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::{App, OptionHighlight};
use crate::models::Question;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let question = app.current_question();

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .padding(Padding::horizontal(1));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(inner);

    render_header(frame, chunks[0], app);
    render_description(frame, chunks[1]);
    render_progress(frame, chunks[2], app);
    render_question_text(frame, chunks[4], &question.text);
    render_options(frame, chunks[5], app, question);

    if app.session().is_submitted() {
        render_feedback(frame, chunks[6], app, question);
    }

    render_action(frame, chunks[7], app);
    render_controls(frame, chunks[8]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let [title_area, counter_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).areas(area);

    let title = Paragraph::new("แบบสอบถาม").fg(Color::Cyan).bold();
    frame.render_widget(title, title_area);

    let counter = format!(
        "ข้อ {} / {}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(counter)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, counter_area);
}

fn render_description(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("ทดสอบความรู้ภาษาอังกฤษ").fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(app.progress_fraction())
        .label("");
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn highlight_style(highlight: OptionHighlight) -> (Style, &'static str) {
    match highlight {
        OptionHighlight::Neutral => (Style::default().fg(Color::Gray), " "),
        OptionHighlight::Selected => (Style::default().fg(Color::Cyan).bold(), ">"),
        OptionHighlight::Correct => (Style::default().fg(Color::Green).bold(), "✓"),
        OptionHighlight::Incorrect => (Style::default().fg(Color::Red).bold(), "✗"),
    }
}

fn render_options(frame: &mut Frame, area: Rect, app: &App, question: &Question) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);
    let locked = !app.can_select();

    for option in &question.options {
        let (mut style, marker) = highlight_style(app.option_highlight(option));
        if locked && app.option_highlight(option) == OptionHighlight::Neutral {
            style = style.fg(Color::DarkGray);
        }

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option.id), style),
            Span::styled(option.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App, question: &Question) {
    let (text, color) = if app.current_is_correct() {
        ("✓ ถูกต้อง!".to_string(), Color::Green)
    } else {
        let correct = question
            .correct_option()
            .map(|option| option.text.as_str())
            .unwrap_or_default();
        (
            format!("✗ ไม่ถูกต้อง คำตอบที่ถูกคือ \"{}\"", correct),
            Color::Red,
        )
    };

    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

fn render_action(frame: &mut Frame, area: Rect, app: &App) {
    let (label, style) = if !app.session().is_submitted() {
        let style = if app.can_submit() {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        ("ส่งคำตอบ", style)
    } else if app.is_last_question() {
        ("ดูผลคะแนน", Style::default().fg(Color::Black).bg(Color::Cyan).bold())
    } else {
        ("ข้อถัดไป ›", Style::default().fg(Color::Black).bg(Color::Cyan).bold())
    };

    let widget = Paragraph::new(Span::styled(format!("  {}  ", label), style))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k choose  ·  1-9 pick  ·  enter confirm  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
