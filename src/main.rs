use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;

use tasktracker::{auth::TokenKeys, db, routes, Config};

fn other_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

fn cors(config: &Config) -> Cors {
    let cors = match &config.cors_allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };
    cors.allow_any_method().allow_any_header().max_age(3600)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| other_error("Invalid configuration", e))?;

    let pool = db::create_pool(&config)
        .await
        .map_err(|e| other_error("Failed to connect to database", e))?;
    db::run_migrations(&pool)
        .await
        .map_err(|e| other_error("Failed to run migrations", e))?;
    db::check_connection(&pool)
        .await
        .map_err(|e| other_error("Database is not reachable", e))?;

    let pool = web::Data::new(pool);
    let keys = web::Data::new(TokenKeys::from_secret(&config.jwt_secret));
    let server_config = config.clone();

    log::info!("Starting tasktracker server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .wrap(cors(&server_config))
            .wrap(Logger::default())
            .configure(routes::app_config(pool.clone(), keys.clone()))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
