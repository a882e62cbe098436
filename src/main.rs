use quicklink::app::{App, AppMessage, Focus};
use quicklink::logging;
use quicklink::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("quicklink {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new();

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;

    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed (dirty flag)
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            // Terminal events (keys, paste, resize)
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    handle_event(app, event);
                }
            }

            // Async completions (shorten responses, ack expiries)
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Dispatch one terminal event against the app state.
fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Resize(_, _) => app.mark_dirty(),
        Event::Paste(text) => {
            // Pasting always targets the URL field
            if app.focus != Focus::Input {
                app.focus_input();
            }
            app.insert_paste(&text);
        }
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Global keybinds (always active)
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.quit();
                return;
            }
            if key.code == KeyCode::Tab {
                match app.focus {
                    Focus::Input => app.focus_links(),
                    Focus::Links => app.focus_input(),
                }
                return;
            }

            match app.focus {
                Focus::Input => handle_input_key(app, key.code, key.modifiers),
                Focus::Links => handle_links_key(app, key.code, key.modifiers),
            }
        }
        _ => {}
    }
}

fn handle_input_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete_char(),
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Home => app.move_cursor_home(),
        KeyCode::End => app.move_cursor_end(),
        KeyCode::Char(c)
            if !modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            app.insert_char(c)
        }
        _ => {}
    }
}

fn handle_links_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Up => app.select_prev_link(),
        KeyCode::Down => app.select_next_link(),
        KeyCode::Enter | KeyCode::Char('c') => app.copy_selected(),
        KeyCode::Char('o') => app.open_selected(),
        KeyCode::Esc => app.focus_input(),
        KeyCode::Char('q') => app.quit(),
        // Any other printable character refocuses the input field
        KeyCode::Char(c)
            if !modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            app.focus_input();
            app.insert_char(c);
        }
        _ => {}
    }
}
