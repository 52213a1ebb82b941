use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use inquire::Text;
use tokio::sync::Mutex;

use crate::client::api_client::HttpApiClient;
use crate::client::fragment_poller::{remove_event, FragmentContainer, FragmentPoller};
use crate::models::event::{self, Event};
use crate::models::store::{save_db, DB};
use crate::service::event_service::EventService;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an event from arguments (time is RFC3339)
    Create {
        name: String,
        time: DateTime<Utc>,
        address1: String,
        city: String,
        state: String,
        zipcode: String,
        #[arg(long, default_value = "")]
        address2: String,
    },
    /// Create an event from interactive prompts
    CreatePrompt {},
    /// Delete an event on the server and print the refreshed list
    Delete { event_id: String },
}

pub async fn cli(
    shared_db: Arc<Mutex<DB<Event>>>,
    base_url: String,
    display_tz: Tz,
    poll_interval: Duration,
) {
    // Fine to panic here
    let cli = Cli::parse();
    match &cli.command {
        Commands::Create {
            name,
            time,
            address1,
            city,
            state,
            zipcode,
            address2,
        } => {
            let mut db = shared_db.lock().await;
            let event =
                EventService::create(&mut db, name, *time, address1, address2, city, state, zipcode);
            match save_db(&event::get_db_location(), &db) {
                Ok(()) => println!("Created event {}", event.id),
                Err(e) => println!("Failed to save event: {}", e),
            }
        }
        Commands::CreatePrompt {} => {
            let mut db = shared_db.lock().await;
            if let Err(e) = create_event_from_prompt(&mut db, display_tz).await {
                println!("Failed to create event from prompt: {}", e);
            }
        }
        Commands::Delete { event_id } => {
            let api = Arc::new(HttpApiClient::new(&base_url));
            let container = Arc::new(FragmentContainer::new());
            let poller = FragmentPoller::new(
                api.clone(),
                "/upcoming_events",
                poll_interval,
                container.clone(),
            );
            match remove_event(api.as_ref(), &poller, event_id).await {
                Ok(()) => println!("{}", container.get()),
                Err(err) => println!("Failed to delete event: {}", err),
            }
        }
    }
}

async fn create_event_from_prompt(
    db: &mut DB<Event>,
    display_tz: Tz,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = Text::new("Event name:").prompt()?;
    let date = Text::new("Date (YYYY-MM-DD):").prompt()?;
    let time_of_day = Text::new("Time (HH:MM):").prompt()?;
    let address1 = Text::new("Address:").prompt()?;
    let city = Text::new("City:").prompt()?;
    let state = Text::new("State:").prompt()?;
    let zipcode = Text::new("Zip code:").prompt()?;

    let naive = NaiveDateTime::parse_from_str(
        &format!("{} {}", date, time_of_day),
        "%Y-%m-%d %H:%M",
    )?;
    let local = display_tz
        .from_local_datetime(&naive)
        .single()
        .ok_or("Ambiguous or invalid local time")?;
    let time = local.with_timezone(&Utc);

    let event = EventService::create(db, &name, time, &address1, "", &city, &state, &zipcode);
    save_db(&event::get_db_location(), db)?;
    println!("Created event {}", event.id);
    Ok(())
}
