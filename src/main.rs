// src/main.rs

mod app_state;
mod config;
mod error;
mod repository;
mod task;
mod validation;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::error;

use crate::app_state::AppState;
use crate::repository::{PgTaskRepository, TaskRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = config::Config::from_env();

    let repo = match PgTaskRepository::connect(&config).await {
        Ok(repo) => repo,
        Err(e) => {
            error!("Could not connect to the database: {}", e);
            return Err(std::io::Error::other(e));
        }
    };
    repo.ensure_schema().await;
    let repo: Arc<dyn TaskRepository> = Arc::new(repo);

    let frontend_origin = config.frontend_origin.clone();

    println!("Server running at http://0.0.0.0:8080");
    println!("Allowed CORS Origin: {}", frontend_origin);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&frontend_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![http::header::CONTENT_TYPE, http::header::ACCEPT])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(AppState { repo: repo.clone() }))
            .configure(task::configure)
    })
    .bind("0.0.0.0:8080")?
    .run()
    .await
}
