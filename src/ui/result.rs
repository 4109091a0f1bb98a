use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, REVIEW_LINES_PER_ENTRY};
use crate::scoring::{GradeBand, ReviewEntry};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(results) = app.results() else {
        return;
    };
    let grade_color = get_grade_color(results.grade);

    let chunks = Layout::vertical([
        Constraint::Length(9),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    let summary = vec![
        Line::from(Span::styled(
            "ผลการทำแบบทดสอบ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("คุณทำแบบทดสอบเสร็จสิ้นแล้ว".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(results.grade.emoji()),
        Line::from(Span::styled(
            format!("{} / {}", results.score, results.total),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(
            format!("คะแนนที่ได้ {}%", results.rounded_percentage()).fg(Color::Gray),
        ),
        Line::from(""),
        Line::from(Span::styled(
            results.grade.message(),
            Style::default().fg(grade_color).bold(),
        )),
    ];
    let widget = Paragraph::new(summary).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[0]);

    let heading = Paragraph::new("สรุปคำตอบ")
        .fg(Color::White)
        .bold()
        .block(Block::default().padding(Padding::new(1, 1, 1, 0)));
    frame.render_widget(heading, chunks[1]);

    render_review(frame, chunks[2], &results.entries, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn get_grade_color(grade: GradeBand) -> Color {
    match grade {
        GradeBand::Excellent => Color::Green,
        GradeBand::Good => Color::Yellow,
        GradeBand::NeedsImprovement => Color::Red,
    }
}

fn review_lines(index: usize, entry: &ReviewEntry) -> [Line<'_>; REVIEW_LINES_PER_ENTRY] {
    let (symbol, color) = if entry.is_correct {
        ("✓", Color::Green)
    } else {
        ("✗", Color::Red)
    };

    let mut answer = vec![
        Span::raw("     "),
        Span::styled("คำตอบของคุณ: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            entry.user_option_text.as_deref().unwrap_or("-"),
            Style::default().fg(color),
        ),
    ];
    if !entry.is_correct {
        answer.push(Span::styled(
            format!(" (ถูกต้อง: {})", entry.correct_option_text),
            Style::default().fg(Color::Green),
        ));
    }

    [
        Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color).bold()),
            Span::styled(
                format!("ข้อ {}: ", index + 1),
                Style::default().fg(Color::Gray).bold(),
            ),
            Span::styled(entry.question_text.as_str(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(answer),
        Line::from(""),
    ]
}

fn render_review(frame: &mut Frame, area: Rect, entries: &[ReviewEntry], scroll: usize) {
    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .flat_map(|(index, entry)| review_lines(index, entry))
        .collect();

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r ทำแบบทดสอบใหม่  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
