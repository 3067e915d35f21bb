use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use fenbook_domain::{validate_fen, ColorValue};

use crate::app::{App, AppMode};
use crate::drag::RowBounds;

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[0]);

    render_diagram_list(app, frame, panes[0]);
    render_options_pane(app, frame, panes[1]);
    render_footer(app, frame, chunks[1]);
}

fn render_diagram_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let title = if app.is_submitting() {
        " Diagrams (generating...) "
    } else {
        " Diagrams "
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let selected = app.selection.get().unwrap_or(0);
    let offset = selected.saturating_sub(visible.saturating_sub(1));

    app.list_rows.clear();
    let mut lines: Vec<Line> = Vec::new();

    for (slot, (index, record)) in app
        .collection
        .records()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let top = inner.y + slot as u16;
        app.list_rows.push(RowBounds {
            id: record.id,
            top,
            height: 1,
        });

        let (marker, marker_style) = if record.fen.trim().is_empty() {
            ("·", Style::default().fg(Color::DarkGray))
        } else if validate_fen(&record.fen).is_ok() {
            ("✓", Style::default().fg(Color::Green))
        } else {
            ("✗", Style::default().fg(Color::Red))
        };

        let mut style = Style::default();
        if app.selection.is_selected(index) {
            style = style.add_modifier(Modifier::BOLD).bg(Color::DarkGray);
        }
        if app.drag.candidate() == Some(record.id) {
            style = style.add_modifier(Modifier::UNDERLINED).fg(Color::Cyan);
        }
        if app.drag.source() == Some(record.id) {
            style = style.add_modifier(Modifier::DIM);
        }

        let mut spans = vec![
            Span::styled(format!(" {marker} "), marker_style),
            Span::styled(format!("{:>2}. ", index + 1), Style::default().fg(Color::DarkGray)),
            Span::raw(truncate(&record.fen, 48)),
        ];
        if !record.description.is_empty() {
            spans.push(Span::styled(
                format!("  // {}", truncate(&record.description, 24)),
                Style::default().fg(Color::Blue),
            ));
        }
        lines.push(Line::from(spans).style(style));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_options_pane(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(if app.mode == AppMode::Options {
            " Options (editing) "
        } else {
            " Options "
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let toggle = |on: bool| if on { "on" } else { "off" };
    let lines = vec![
        Line::from(format!("Title: {}", app.options.title)),
        Line::from(format!("Output: {}", app.output_path.display())),
        Line::from(""),
        Line::from(format!("Diagrams per page (+/-): {}", app.options.diagrams_per_page)),
        Line::from(format!("Padding (p/P): {}", app.options.padding)),
        Line::from(format!(
            "Columns ([/] {{/}}): 1-col <= {}, 2-col <= {}",
            app.options.single_column_max, app.options.two_column_max
        )),
        Line::from(format!("Board colors (b): {} / {}", color_label(&app.options.light_squares), color_label(&app.options.dark_squares))),
        Line::from(""),
        Line::from(format!("[1] Turn indicator: {}", toggle(app.options.show_turn_indicator))),
        Line::from(format!("[2] Page numbers: {}", toggle(app.options.show_page_numbers))),
        Line::from(format!("[3] Coordinates: {}", toggle(app.options.show_coordinates))),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn color_label(color: &ColorValue) -> String {
    match color {
        ColorValue::Raw(value) => value.clone(),
        ColorValue::Rich(rich) => rich.to_hex(),
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let prompt = match app.mode {
        AppMode::Normal => None,
        AppMode::EditFen => Some("FEN"),
        AppMode::EditCaption => Some("Caption"),
        AppMode::EditTitle => Some("Title"),
        AppMode::Import => Some("Import (Ctrl-S to apply)"),
        AppMode::Options => None,
    };
    if let Some(prompt) = prompt {
        let text = if app.mode == AppMode::Import {
            let count = app.input.as_str().lines().filter(|l| !l.trim().is_empty()).count();
            format!("{prompt} [{count} line(s)]> {}", last_line(app.input.as_str()))
        } else {
            format!("{prompt}> {}", app.input.as_str())
        };
        frame.render_widget(Paragraph::new(text), rows[0]);
    }

    let help = match app.mode {
        AppMode::Normal => {
            "a add | d delete | e fen | c caption | t title | i import | o options | J/K or drag to reorder | g generate | q quit"
        }
        AppMode::Options => "+/- per page | p/P padding | [/] {/} columns | b theme | 1/2/3 toggles | Esc back",
        AppMode::Import => "One entry per line: <fen> or <fen> // <caption>. Enter = new line, Ctrl-S = apply, Esc = cancel",
        _ => "Enter = save, Esc = cancel",
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        rows[1],
    );

    if let Some(notice) = &app.notice {
        notice.render(frame, rows[2]);
    }
}

fn last_line(text: &str) -> &str {
    text.lines().last().unwrap_or("")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{prefix}…")
    }
}
