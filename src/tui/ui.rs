//! UI rendering for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::features::navigation::Section;
use crate::features::notes::{NotesStore, NotesView, ENTRY_DELIMITER};
use crate::features::timer::format::render_progress_bar;
use crate::tui::app::App;

const HELP: &str =
    "space:start/pause | r:reset | f/s/l:mode | Tab:section | i:write | ?:help | q:quit";

/// The scrollable page body.
pub struct Page {
    /// Every line of the page, top to bottom.
    pub lines: Vec<Line<'static>>,
    /// First line of each section, in page order.
    pub section_starts: [u16; 3],
}

/// Render the application UI.
///
/// Also records the page layout on `app` so section jumps know where to go.
pub fn render<S: NotesStore>(frame: &mut Frame<'_>, app: &mut App<S>) {
    // Create layout: header, page, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let page = build_page(app);
    // Borders take two rows
    let visible = chunks[1].height.saturating_sub(2);
    let total = u16::try_from(page.lines.len()).unwrap_or(u16::MAX);
    app.set_layout(page.section_starts, total.saturating_sub(visible));

    render_header(frame, app, chunks[0]);
    render_page(frame, app, page, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Render the header with one link per section.
fn render_header<S: NotesStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let mut spans = vec![Span::styled(
        " dawn ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == app.section {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("  {}:{}", i + 1, section.anchor()),
            style,
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

/// Render the page, scrolled to the navigator's offset.
fn render_page<S: NotesStore>(frame: &mut Frame<'_>, app: &App<S>, page: Page, area: Rect) {
    let paragraph = Paragraph::new(page.lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .scroll((app.navigator.offset(), 0));

    frame.render_widget(paragraph, area);
}

/// Render the status bar.
fn render_status_bar<S: NotesStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Lay out every section of the page.
pub fn build_page<S: NotesStore>(app: &App<S>) -> Page {
    let mut lines = Vec::new();
    let mut section_starts = [0; 3];

    for section in Section::ALL {
        section_starts[section.index()] = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        lines.push(title(section));
        lines.push(Line::default());
        match section {
            Section::Notes => notes_lines(app, &mut lines),
            Section::Timer => timer_lines(app, &mut lines),
            Section::Motivation => motivation_lines(app, &mut lines),
        }
        lines.push(Line::default());
    }

    Page {
        lines,
        section_starts,
    }
}

fn title(section: Section) -> Line<'static> {
    Line::from(Span::styled(
        format!("{}  {}", section.title(), section.anchor()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn notes_lines<S: NotesStore>(app: &App<S>, lines: &mut Vec<Line<'static>>) {
    if app.editing {
        let draft: Vec<&str> = app.draft.split('\n').collect();
        let last = draft.len() - 1;
        for (i, text) in draft.into_iter().enumerate() {
            let cursor = if i == last { "▏" } else { "" };
            lines.push(Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Yellow)),
                Span::raw(format!("{text}{cursor}")),
            ]));
        }
    } else if app.draft.is_empty() {
        lines.push(Line::from(Span::styled(
            "Press i to write a note.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("Draft: {} (press i to keep writing)", app.draft.replace('\n', " ")),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::default());

    let placeholder = !matches!(app.notes, NotesView::Saved(_));
    for (i, entry) in app.notes.text().split(ENTRY_DELIMITER).enumerate() {
        if i > 0 {
            lines.push(Line::from(Span::styled(
                "───",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for text in entry.lines() {
            let style = if placeholder {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(text.to_string(), style)));
        }
    }
}

fn timer_lines<S: NotesStore>(app: &App<S>, lines: &mut Vec<Line<'static>>) {
    let panel = app.timer.observer();
    let mode_color = if app.timer.mode().is_break() {
        Color::Green
    } else {
        Color::Magenta
    };

    lines.push(Line::from(Span::styled(
        panel.mode_label.clone(),
        Style::default().fg(mode_color).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        panel.display.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(render_progress_bar(app.timer.progress(), 40)));
    lines.push(Line::from(vec![
        Span::styled(
            format!("[ {} ]", panel.button_label),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(
                "  focus sessions this round: {}/{}",
                app.timer.completed_focus_cycles(),
                app.timer.settings().long_break_every
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        panel.message.clone(),
        Style::default().add_modifier(Modifier::ITALIC),
    )));
}

fn motivation_lines<S: NotesStore>(app: &App<S>, lines: &mut Vec<Line<'static>>) {
    for card in &app.cards {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", card.index), Style::default().fg(Color::Yellow)),
            Span::raw(card.text.clone()),
        ]));
    }
}
