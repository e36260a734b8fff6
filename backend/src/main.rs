mod config;
mod feed;
mod services;
mod store;

use crate::config::Config;
use crate::feed::{start_feed_updater, ChangeFeed};
use crate::store::DocumentStore;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();
    let url = config.url();

    let store = DocumentStore::open(&config.database_path).map_err(io::Error::other)?;
    let initial = store.list_all().map_err(io::Error::other)?;
    info!(
        "Loaded {} documents from {}",
        initial.len(),
        config.database_path.display()
    );

    let (feed, rx) = ChangeFeed::new(initial);
    actix_web::rt::spawn(start_feed_updater(feed.clone(), store.clone(), rx));

    if config.open_browser {
        let browser_url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&browser_url) {
                warn!("could not open browser: {}", err);
            }
        });
    }

    let settings = config.client_settings();
    info!("Server running at {}", url);
    info!("Extraction service: {}", settings.extraction_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024))
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(feed.clone()))
            .app_data(web::Data::new(settings.clone()))
            .service(services::documents::configure_routes())
            .service(services::settings::configure_routes())
            .default_service(web::route().to(services::client::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
