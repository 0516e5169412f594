use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_body};
use crate::ui::view_model::ViewModel;
use crate::ui::{map_view, sidebar};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(app.location_status()), header);

    frame.render_widget(Clear, body);
    // The projection is cheap and rebuilt per frame; no caching.
    let view = ViewModel::project(app.map_state());
    let (list_area, map_area) = split_body(body);
    sidebar::render(frame, list_area, &view, app.list_cursor());
    map_view::render(frame, map_area, &view);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);
}
