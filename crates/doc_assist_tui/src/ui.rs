//! Presentation layer: pure rendering of [`App`] state into ratatui widgets.

use ratatui::prelude::*;
use ratatui::widgets::{Block, List, ListItem, Paragraph, Wrap};

use crate::app::{App, Focus, ToastKind};

pub fn draw(frame: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, outer[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(outer[1]);
    draw_upload_card(frame, cards[0], app);
    draw_documents_card(frame, cards[1], app);
    draw_ask_card(frame, outer[2], app);
    draw_toast(frame, outer[3], app);
}

fn card(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::bordered().title(title).border_style(border_style)
}

fn dim(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().add_modifier(Modifier::DIM))
}

fn button(label: &str, busy: bool) -> Line<'_> {
    let style = if busy {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(label, style))
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "📄 RAG Document Assistant",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(dim("Ask questions strictly from your uploaded documents")),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

fn draw_upload_card(frame: &mut Frame, area: Rect, app: &App) {
    let block = card("Upload Document", app.focus == Focus::File);
    let file_line = if app.file.is_empty() {
        Line::from(dim("Choose PDF file"))
    } else {
        Line::from(app.file.as_str())
    };
    let label = if app.loading.upload {
        "[ Uploading... ]"
    } else {
        "[ Upload ]"
    };
    let text = vec![
        file_line,
        Line::default(),
        button(label, app.loading.upload),
    ];
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_documents_card(frame: &mut Frame, area: Rect, app: &App) {
    let block = card("Uploaded Documents", false);
    if app.documents.is_empty() {
        let text = vec![
            Line::from("📂 No documents found"),
            Line::from(dim("Upload a PDF to get started")),
        ];
        frame.render_widget(Paragraph::new(text).block(block), area);
    } else {
        let items: Vec<ListItem> = app
            .documents
            .iter()
            .map(|doc| ListItem::new(format!("📘 {}", doc.filename)))
            .collect();
        frame.render_widget(List::new(items).block(block), area);
    }
}

fn draw_ask_card(frame: &mut Frame, area: Rect, app: &App) {
    let block = card("Ask a Question", app.focus == Focus::Question);
    let question_line = if app.question.is_empty() {
        Line::from(dim("Ask something from the documents..."))
    } else {
        Line::from(app.question.as_str())
    };
    let label = if app.loading.ask {
        "[ Thinking... ]"
    } else {
        "[ Ask Question ]"
    };

    let mut text = vec![
        question_line,
        Line::default(),
        button(label, app.loading.ask),
    ];

    if let Some(answer) = &app.answer {
        text.push(Line::default());
        text.push(Line::from(Span::styled(
            "Answer",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push(Line::from(answer.answer.as_str()));
        if !answer.sources.is_empty() {
            text.push(Line::default());
            text.push(Line::from(Span::styled(
                "Sources",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for src in &answer.sources {
                text.push(Line::from(format!("  {}", src.source)));
            }
        }
    }

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_toast(frame: &mut Frame, area: Rect, app: &App) {
    let Some(toast) = &app.toast else {
        return;
    };
    let color = match toast.kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    };
    let line = Line::from(Span::styled(
        toast.message.as_str(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
