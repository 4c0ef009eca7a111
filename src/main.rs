mod art;
mod config;
mod error;
mod web;

use actix_web::{App, HttpServer, web::Data};
use anyhow::Context;
use dotenv::dotenv;
use log::{info, error};
use tera::Tera;

use art::ArtClient;
use config::AppConfig;
use web::routes;

// App state structure
struct AppState {
    tera: Tera,
    generator: ArtClient,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting logo generator");

    let config = AppConfig::from_env();

    std::fs::create_dir_all(&config.generated_dir).with_context(|| {
        format!("Failed to create output directory {}", config.generated_dir.display())
    })?;

    let generator = match ArtClient::new(config.provider.clone(), config.generated_dir.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to initialize image provider client: {}", e);
            std::process::exit(1);
        }
    };
    info!("Generated images go to: {}", generator.output_dir().display());

    // Initialize template engine
    let mut tera = match Tera::new(&config.templates_glob) {
        Ok(t) => t,
        Err(e) => {
            error!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    tera.autoescape_on(vec![".html"]);

    let app_state = Data::new(AppState { tera, generator });
    let generated_dir = config.generated_dir.clone();

    info!("Listening on {}:{}", config.host, config.port);

    // Start web server
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(routes::generated_images(generated_dir.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
