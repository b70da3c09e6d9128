use crate::config::Config;
use crate::loader::{spawn_load, QuoteLoader};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Run the widget until the user quits.
///
/// Input and the quote fetch live on other threads; every state change is
/// applied here, one event at a time.
pub fn run(config: &Config, runtime: &tokio::runtime::Runtime) -> io::Result<()> {
    let loader = QuoteLoader::new(&config.source).map_err(io::Error::other)?;
    let shutdown = ShutdownHandle::new();

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(&config.theme);
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let quotes_tx = events.sender();
    spawn_load(runtime.handle(), loader, shutdown.clone(), move |quotes| {
        let _ = quotes_tx.send(AppEvent::QuotesSettled(quotes));
    });

    let signal_tx = events.sender();
    let signal_shutdown = shutdown.clone();
    runtime.spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if result.is_ok() {
                    tracing::info!("Interrupt received");
                    let _ = signal_tx.send(AppEvent::Shutdown);
                }
            }
            _ = signal_shutdown.wait() => {}
        }
    });

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::QuotesSettled(quotes)) => app.on_quotes_settled(quotes),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}
