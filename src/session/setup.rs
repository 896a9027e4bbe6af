//! Session setup and initialization

use crate::api::FoodApiClient;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event;
use crate::store::FoodStore;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session data shared by the TUI, headless mode and one-shot commands
pub struct SessionData {
    /// The store every intent goes through
    pub store: Arc<FoodStore>,
    /// Activity events reported by the store
    pub event_receiver: mpsc::Receiver<Event>,
    /// Base URL the store talks to
    pub api_url: String,
}

/// Builds the HTTP client and the store wired to an event channel.
///
/// # Arguments
/// * `api_url` - Base URL of the food API
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub fn setup_session(api_url: String) -> Result<SessionData, Box<dyn Error>> {
    let client = FoodApiClient::new(api_url.clone())?;
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let store = FoodStore::new(Arc::new(client)).with_events(event_sender);

    Ok(SessionData {
        store: Arc::new(store),
        event_receiver,
        api_url,
    })
}
