use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Context};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::geo::EARTH_RADIUS_KM;
use crate::ui::theme::{COFFEE_ORANGE, GLOBAL_BORDER, MUTED_TEXT, RADIUS_RING, USER_DOT};
use crate::ui::view_model::ViewModel;

/// Kilometers per degree of latitude on a great circle.
const KM_PER_DEG: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

/// Degrees of longitude spanned by the map pane at a given zoom level.
///
/// Tile-style scale: zoom 0 shows the whole world, each step halves the span.
fn lng_span(zoom: u8) -> f64 {
    360.0 / f64::powi(2.0, i32::from(zoom))
}

/// Map pane: all cafes as markers, the user position and filter radius ring.
///
/// Markers are deliberately drawn for every cafe, not just the filtered
/// list; out-of-radius cafes keep a dimmed marker.
pub fn render(frame: &mut Frame<'_>, area: Rect, view: &ViewModel<'_>) {
    let center = view.framing.center;
    let span_x = lng_span(view.framing.zoom);
    // Terminal cells are roughly twice as tall as wide; scale the latitude
    // span so the map is not vertically squashed.
    let span_y = if area.width > 2 {
        span_x * f64::from(area.height) * 2.0 / f64::from(area.width)
    } else {
        span_x
    };

    let selected_id = view.selected.map(|cafe| cafe.id);
    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(" Map ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .marker(Marker::Braille)
        .x_bounds([center.lng - span_x / 2.0, center.lng + span_x / 2.0])
        .y_bounds([center.lat - span_y / 2.0, center.lat + span_y / 2.0])
        .paint(|ctx| paint(ctx, view, selected_id));

    frame.render_widget(canvas, area);
}

fn paint(ctx: &mut Context<'_>, view: &ViewModel<'_>, selected_id: Option<u32>) {
    if let Some(user) = view.user_location {
        ctx.draw(&Circle {
            x: user.lng,
            y: user.lat,
            radius: view.filter_radius_km / KM_PER_DEG,
            color: RADIUS_RING,
        });
    }

    ctx.layer();

    for entry in &view.markers {
        let (glyph, style) = if Some(entry.cafe.id) == selected_id {
            (
                "◆",
                Style::default()
                    .fg(COFFEE_ORANGE)
                    .add_modifier(Modifier::BOLD),
            )
        } else if entry.in_radius {
            ("●", Style::default().fg(COFFEE_ORANGE))
        } else {
            ("○", Style::default().fg(MUTED_TEXT))
        };
        ctx.print(
            entry.cafe.lng,
            entry.cafe.lat,
            Span::styled(glyph, style),
        );
    }

    if let Some(user) = view.user_location {
        ctx.print(
            user.lng,
            user.lat,
            Span::styled("◉", Style::default().fg(USER_DOT)),
        );
    }
}
