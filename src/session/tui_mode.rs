//! TUI mode execution

use super::{
    SessionData,
    messages::{SessionMessage, session_exit_success, session_shutdown, session_starting},
};
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::{error::Error, path::Path};

/// Raw mode and the alternate screen, restored when dropped so an early
/// return or a failed UI run still leaves a usable terminal.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the dashboard in the terminal until the user quits or Ctrl+C.
///
/// Log records go to `log_path` while the dashboard is on screen.
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
    log_path: &Path,
) -> Result<(), Box<dyn Error>> {
    session_starting("TUI", &session.api_url).print();
    SessionMessage::info(format!("Writing logs to {}", log_path.display())).print();

    // Ctrl+C is delivered as a key event in raw mode; this covers signals sent from elsewhere.
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let ui_config = UIConfig::new(with_background, session.environment, session.api_url);
    let app = ui::App::new(
        session.widgets,
        session.dispatcher,
        session.update_receiver,
        session.shutdown_sender,
        ui_config,
    );

    let mut guard = TerminalGuard::enter()?;
    let result = ui::run(&mut guard.terminal, app).await;
    drop(guard);
    result?;

    session_shutdown().print();
    session_exit_success().print();

    Ok(())
}
