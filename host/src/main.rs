mod config;
mod site;

use std::thread;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};

use crate::config::HostConfig;
use crate::site::SiteSource;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = HostConfig::from_lookup(|key| std::env::var(key).ok())?;
    let url = config.url();

    let source = SiteSource::from_config(&config);
    if !source.has_index().await {
        warn!("No index.html in {}; build the frontend with trunk first", source.describe());
    }
    info!("Serving {}", source.describe());

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("Could not open a browser: {err}");
            }
        });
    }

    info!("Server running at {}", url);

    let source = web::Data::new(source);
    HttpServer::new(move || {
        App::new()
            .app_data(source.clone())
            .default_service(web::route().to(site::serve))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
