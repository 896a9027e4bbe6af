//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::cli_messages::print_foods;
use crate::events::{Event, EventType};
use std::error::Error;
use tokio::sync::mpsc;

/// Print every queued event. Returns whether any of them was an error.
pub fn drain_events(event_receiver: &mut mpsc::Receiver<Event>) -> bool {
    let mut saw_error = false;
    while let Ok(event) = event_receiver.try_recv() {
        saw_error |= event.event_type == EventType::Error;
        if event.should_display() {
            println!("{}", event);
        }
    }
    saw_error
}

/// Runs the dashboard without a terminal UI
///
/// Loads the list once, logs the store's events to the console and prints the
/// resulting foods.
///
/// # Returns
/// * `Ok(())` - The list was loaded and printed
/// * `Err` - Loading failed
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.store.api_url());

    let result = session.store.load().await;
    drain_events(&mut session.event_receiver);
    result?;

    print_foods(&session.store.foods());
    print_session_exit_success();
    Ok(())
}
