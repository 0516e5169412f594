use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, COFFEE_ORANGE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
};
use crate::ui::view_model::ViewModel;

/// Sidebar: radius readout plus the visible cafe list.
pub fn render(frame: &mut Frame<'_>, area: Rect, view: &ViewModel<'_>, cursor: usize) {
    let block = Block::default()
        .title(format!(" Cafes ({}) ", view.visible.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let radius_line = Rect { height: 1, ..inner };
    let radius_text = if view.user_location.is_some() {
        format!("Show cafes within {:.0} km  ◂ ▸", view.filter_radius_km)
    } else {
        "Filter inactive until located".to_string()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            radius_text,
            Style::default().fg(MUTED_TEXT),
        ))),
        radius_line,
    );

    let list_area = Rect {
        y: inner.y + 1,
        height: inner.height.saturating_sub(1),
        ..inner
    };

    if view.visible.is_empty() {
        frame.render_widget(
            Paragraph::new("No cafes nearby ☹").style(Style::default().fg(MUTED_TEXT)),
            list_area,
        );
        return;
    }

    let selected_id = view.selected.map(|cafe| cafe.id);
    let items: Vec<ListItem> = view
        .visible
        .iter()
        .map(|entry| {
            let name_style = if Some(entry.cafe.id) == selected_id {
                Style::default()
                    .fg(COFFEE_ORANGE)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };

            let mut lines = vec![
                Line::from(Span::styled(entry.cafe.name.clone(), name_style)),
                Line::from(Span::styled(
                    entry.cafe.address.clone(),
                    Style::default().fg(MUTED_TEXT),
                )),
            ];
            if let Some(km) = entry.distance_km {
                lines.push(Line::from(Span::styled(
                    format!("📍 {km:.1} km"),
                    Style::default().fg(MUTED_TEXT),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut list_state = ListState::default();
    list_state.select(Some(cursor.min(view.visible.len() - 1)));
    frame.render_stateful_widget(list, list_area, &mut list_state);
}
