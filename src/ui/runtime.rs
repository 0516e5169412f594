use std::io;
use std::time::Duration;

use crate::location::{LocationProvider, LocationRequest};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::map::MapState;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(map_state: MapState, provider: Box<dyn LocationProvider>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(map_state);
    let events = EventHandler::new(tick_rate);

    // Issued exactly once per session, fire-and-forget.
    let location_request = LocationRequest::spawn(provider, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {
                // Redrawn on the next loop pass with the new frame size
            }
            Ok(AppEvent::LocationResolved(coordinate)) => app.on_location_resolved(coordinate),
            Ok(AppEvent::LocationFailed(message)) => app.on_location_failed(message),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    location_request.cancel();
    location_request.join();
    drop(guard);
    Ok(())
}
