//! Headless mode execution

use super::{
    SessionData,
    messages::{
        card_summary, cards_mounted, session_exit_success, session_shutdown, session_starting,
    },
};
use std::error::Error;

/// Runs the dashboard without a terminal UI
///
/// Mounts the cards, prints every activity-log event to the console and
/// exits once no card is loading, or on Ctrl+C. The state each card ended
/// in is printed before exiting.
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    let SessionData {
        dispatcher,
        mut update_receiver,
        mut widgets,
        shutdown_sender,
        api_url,
        ..
    } = session;

    session_starting("headless", &api_url).print();

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });
    let mut shutdown_receiver = shutdown_sender.subscribe();

    cards_mounted(widgets.mounted()).print();
    for event in widgets.mount(&dispatcher) {
        if event.should_display() {
            println!("{}", event);
        }
    }

    // Event loop: log events to console until every card has resolved
    while widgets.any_loading() {
        tokio::select! {
            Some(update) = update_receiver.recv() => {
                let event = widgets.apply(update);
                if event.should_display() {
                    println!("{}", event);
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    session_shutdown().print();
    for message in card_summary(&widgets) {
        message.print();
    }
    session_exit_success().print();

    Ok(())
}
