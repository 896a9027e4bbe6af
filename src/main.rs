mod api;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod session;
mod store;
mod ui;

use crate::config::{Config, get_config_path, resolve_api_url};
use crate::models::{FoodDraft, FoodEdit};
use crate::session::{SessionData, drain_events, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard for a food catalogue API
struct Args {
    /// Base URL of the food API. Overrides FOOD_API_URL and the saved config.
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Command to execute. Starts the dashboard when omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dashboard
    Start {
        /// Load and print the list instead of opening the terminal UI
        #[arg(long, default_value = "false")]
        headless: bool,

        /// Disable background colors in the dashboard
        #[arg(long, default_value = "false")]
        no_background_color: bool,
    },
    /// Print every food
    List,
    /// Create a food
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        price: f64,
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Change fields of an existing food
    Edit {
        /// ID of the food to change
        #[arg(long, value_name = "ID")]
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Delete a food by id
    Delete {
        #[arg(long, value_name = "ID")]
        id: u64,
    },
    /// Save the API URL to the config file
    SetUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Remove the saved config file
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    log::set_max_level(logging::get_rust_log_level().into());
    let api_url = resolve_api_url(args.api_url, &config_path);

    let command = args.command.unwrap_or(Command::Start {
        headless: false,
        no_background_color: false,
    });

    match command {
        Command::Start {
            headless,
            no_background_color,
        } => {
            let session = setup_session(api_url)?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background_color).await
            }
        }
        Command::List => {
            let mut session = setup_session(api_url)?;
            load_or_report(&mut session).await?;
            cli_messages::print_foods(&session.store.foods());
            Ok(())
        }
        Command::Add {
            name,
            description,
            price,
            image,
        } => {
            let mut session = setup_session(api_url)?;
            load_or_report(&mut session).await?;
            let draft = FoodDraft {
                name,
                description,
                price,
                image,
            };
            session.store.create(draft).await;
            if drain_events(&mut session.event_receiver) {
                return Err(Box::from("Failed to create food"));
            }
            if let Some(food) = session.store.foods().iter().last() {
                print_cmd_success!("Food created.", "{}", food);
            }
            cli_messages::print_foods(&session.store.foods());
            Ok(())
        }
        Command::Edit {
            id,
            name,
            description,
            price,
            image,
        } => {
            let edit = FoodEdit {
                name,
                description,
                price,
                image,
            };
            if edit.is_empty() {
                return Err(Box::from("Nothing to change. Pass at least one field."));
            }

            let mut session = setup_session(api_url)?;
            load_or_report(&mut session).await?;
            let Some(food) = session.store.foods().find(id).map(Arc::clone) else {
                print_cmd_error!("Food not found.", &format!("No food with id {}", id));
                return Err(Box::from(format!("No food with id {}", id)));
            };

            session.store.begin_edit(food);
            session.store.update(edit).await;
            if drain_events(&mut session.event_receiver) {
                return Err(Box::from("Failed to update food"));
            }
            if let Some(food) = session.store.foods().find(id) {
                print_cmd_success!("Food updated.", "{}", food);
            }
            cli_messages::print_foods(&session.store.foods());
            Ok(())
        }
        Command::Delete { id } => {
            let mut session = setup_session(api_url)?;
            load_or_report(&mut session).await?;
            let result = session.store.delete(id).await;
            drain_events(&mut session.event_receiver);
            if let Err(e) = result {
                print_cmd_error!("Failed to delete food.", &e.to_string());
                return Err(e.into());
            }
            print_cmd_success!("Food deleted.", "#{}", id);
            cli_messages::print_foods(&session.store.foods());
            Ok(())
        }
        Command::SetUrl { url } => {
            Config::new(url.clone())
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("API URL saved.", "{}", url);
            Ok(())
        }
        Command::Reset => {
            print_cmd_info!("Clearing saved configuration...", "{}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Load the list, printing the store's events either way.
async fn load_or_report(session: &mut SessionData) -> Result<(), Box<dyn Error>> {
    print_cmd_info!("Loading foods...", "{}", session.api_url);
    let result = session.store.load().await;
    drain_events(&mut session.event_receiver);
    result.map_err(|e| {
        print_cmd_error!("Failed to load foods.", &e.to_string());
        e.into()
    })
}
