use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    fn color(self) -> Color {
        match self {
            NoticeKind::Success => Color::Green,
            NoticeKind::Error => Color::Red,
            NoticeKind::Info => Color::Yellow,
        }
    }
}

/// Transient status message shown on the bottom line.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub created_at: Instant,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Info)
    }

    fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(self.kind.color())
            .add_modifier(Modifier::BOLD);
        frame.render_widget(Paragraph::new(self.message.as_str()).style(style), area);
    }
}
