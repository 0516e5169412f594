use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::LocationStatus;
use crate::ui::theme::{
    COFFEE_ORANGE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, status: &LocationStatus) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(COFFEE_ORANGE);

        let (dot, dot_style, detail) = match status {
            LocationStatus::Pending => ("○", Style::default().fg(HEADER_TEXT), "locating…".to_string()),
            LocationStatus::Located(coordinate) => (
                "●",
                Style::default().fg(STATUS_OK),
                format!("{:.4}, {:.4}", coordinate.lat, coordinate.lng),
            ),
            LocationStatus::Failed(_) => (
                "●",
                Style::default().fg(STATUS_ERROR),
                "location unavailable".to_string(),
            ),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("☕ Nearby Cafes", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(dot, dot_style),
            Span::styled(" ", text_style),
            Span::styled(detail, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
