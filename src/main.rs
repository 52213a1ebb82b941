#![allow(non_snake_case)]

use std::sync::Arc;
use std::time::Duration;

use chrono_tz::Tz;

use eventBoard::cli;
use eventBoard::config::AppConfig;
use eventBoard::models::event;
use eventBoard::models::store::{load_db, DB};
use eventBoard::runtime;

const DEFAULT_RUN_MODE: &str = "server";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;
const DEFAULT_DISPLAY_TZ: &str = "America/New_York";

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = AppConfig::load();

    let run_mode = config.get_or("RUN_MODE", DEFAULT_RUN_MODE);
    let poll_interval =
        Duration::from_millis(config.get_millis("POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS));
    let display_tz = config
        .get_or("DISPLAY_TZ", DEFAULT_DISPLAY_TZ)
        .parse::<Tz>()
        .expect("DISPLAY_TZ must be a valid timezone name");

    if run_mode == "server" {
        let db: DB<event::Event> =
            load_db(&event::get_db_location()).expect("Unable to load event database.");
        let shared_db = Arc::new(tokio::sync::Mutex::new(db));
        let bind_addr = config.get_or("BIND_ADDR", DEFAULT_BIND_ADDR);
        runtime::run_server(shared_db, bind_addr, event::get_db_location(), display_tz).await;
    } else if run_mode == "watch" {
        let base_url = config.get_or("BASE_URL", DEFAULT_BASE_URL);
        runtime::run_watch(base_url, poll_interval).await;
    } else if run_mode == "cli" {
        let db: DB<event::Event> =
            load_db(&event::get_db_location()).expect("Unable to load event database.");
        let shared_db = Arc::new(tokio::sync::Mutex::new(db));
        let base_url = config.get_or("BASE_URL", DEFAULT_BASE_URL);
        cli::cli(shared_db, base_url, display_tz, poll_interval).await;
    } else {
        println!("Invalid run mode {}", run_mode);
    }
}
