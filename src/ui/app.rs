//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::{POLL_INTERVAL, SPLASH_DURATION};
use crate::events::Event as StoreEvent;
use crate::store::{DashboardSnapshot, FoodStore, Intent};
use crate::ui::dashboard::{DashboardState, KeyAction, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, watch};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub api_url: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, api_url: String) -> Self {
        Self {
            with_background_color,
            api_url,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen listing the foods.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The store all intents are sent to.
    store: Arc<FoodStore>,

    /// Notified whenever the store's state changes.
    state_receiver: watch::Receiver<DashboardSnapshot>,

    /// Receives activity events from the store.
    event_receiver: mpsc::Receiver<StoreEvent>,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        store: Arc<FoodStore>,
        event_receiver: mpsc::Receiver<StoreEvent>,
        ui_config: UIConfig,
    ) -> Self {
        let state_receiver = store.subscribe();
        Self {
            store,
            state_receiver,
            event_receiver,
            current_screen: Screen::Splash,
            ui_config,
        }
    }

    fn show_dashboard(&mut self) {
        let state = DashboardState::new(&self.ui_config, self.store.snapshot());
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Hand an intent to the store. Backend calls run as their own task so the UI keeps drawing.
async fn perform(store: &Arc<FoodStore>, intent: Intent) {
    if intent.is_remote() {
        let store = Arc::clone(store);
        tokio::spawn(async move {
            // Failures are already reported through the store's events
            let _ = store.dispatch(intent).await;
        });
    } else {
        let _ = store.dispatch(intent).await;
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // Mount: load the list once
    perform(&app.store, Intent::Load).await;

    // UI event loop
    loop {
        if let Screen::Dashboard(state) = &mut app.current_screen {
            while let Ok(event) = app.event_receiver.try_recv() {
                state.add_to_activity_log(event);
            }
            let snapshot = app.state_receiver.borrow_and_update().clone();
            state.update(snapshot);
        }
        terminal.draw(|f| render(f, &app.current_screen, &app.ui_config))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= SPLASH_DURATION {
                app.show_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                let action = match &mut app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            return Ok(());
                        }
                        None
                    }
                    Screen::Dashboard(state) => Some(state.handle_key(key)),
                };

                match action {
                    // Any other key skips the splash screen
                    None => app.show_dashboard(),
                    Some(KeyAction::Quit) => return Ok(()),
                    Some(KeyAction::Dispatch(intents)) => {
                        for intent in intents {
                            perform(&app.store, intent).await;
                        }
                    }
                    Some(KeyAction::None) => {}
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen, ui_config: &UIConfig) {
    match screen {
        Screen::Splash => render_splash(f, ui_config),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
