use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Enter => app.select_under_cursor(),
        KeyCode::Left => app.adjust_radius(-1.0),
        KeyCode::Right => app.adjust_radius(1.0),
        _ => {}
    }
}
