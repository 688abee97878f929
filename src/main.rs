use crate::config::Config;
use crate::services::{spawn_link_sweeper, LinkRegistry, Mp3Converter, VideoSearch};
use actix_rt::signal::unix;
use actix_web::middleware::{from_fn, Logger};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use conversion_processors::ConversionProcessor;
use futures_lite::FutureExt;
use media_providers::{RapidApiMp3Client, YouTubeSearchClient};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod config;
mod http;
mod services;
mod types;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let mut terminate = unix::signal(unix::SignalKind::terminate())?;
    let mut interrupt = unix::signal(unix::SignalKind::interrupt())?;

    dotenv::dotenv().ok();
    env_logger::init();

    let config = Arc::from(Config::from_env());

    info!("Starting application...");
    info!(
        provider = %config.provider_endpoint,
        search = %config.search_endpoint,
        cors_origins = %config.cors_origins,
        link_ttl_hours = config.link_ttl_hours,
        "Loaded configuration"
    );

    let mp3_client = RapidApiMp3Client::create(
        &config.provider_endpoint,
        &config.rapidapi.key,
        &config.rapidapi.host,
    )
    .expect("Unable to initialize conversion provider client");
    let search_client = YouTubeSearchClient::create(&config.search_endpoint)
        .expect("Unable to initialize search client");
    let link_registry = Arc::new(LinkRegistry::new(config.link_ttl()));

    let conversion_processor = {
        Arc::new(
            ConversionProcessor::new(
                Arc::new(Mp3Converter(Arc::from(mp3_client))),
                Arc::new(VideoSearch(Arc::from(search_client))),
                link_registry.clone(),
            )
            .with_default_quality(&config.default_quality),
        )
    };

    let sweeper_shutdown = CancellationToken::new();
    let sweeper = spawn_link_sweeper(
        Arc::clone(&link_registry),
        config.sweep_interval(),
        sweeper_shutdown.clone(),
    );

    let cors_policy = http::CorsPolicy::new(config.cors_origins());
    let shutdown_timeout = config.shutdown_timeout;
    let bind_address = config.bind_address.clone();

    let server = HttpServer::new({
        move || {
            App::new()
                .app_data(Data::new(Arc::clone(&conversion_processor)))
                .app_data(Data::new(Arc::clone(&link_registry)))
                .app_data(Data::new(Arc::clone(&config)))
                .app_data(Data::new(cors_policy.clone()))
                .wrap(from_fn(http::cors_headers))
                .wrap(Logger::default())
                .configure(http::configure)
        }
    })
    .shutdown_timeout(shutdown_timeout)
    .bind(bind_address)?
    .run();

    let server_handle = server.handle();

    actix_rt::spawn({
        async move {
            if let Err(error) = server.await {
                error!(?error, "Error on http server");
            }
        }
    });

    info!("Application started");

    interrupt.recv().or(terminate.recv()).await;

    info!("Received shutdown signal. Shutting down gracefully...");

    server_handle.stop(true).await;
    sweeper_shutdown.cancel();

    if let Err(error) = sweeper.await {
        error!(?error, "Download link sweeper terminated abnormally");
    }

    Ok(())
}
