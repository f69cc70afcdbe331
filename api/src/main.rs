//! CinHub API Server
//!
//! A film catalog service: films, their directors and their categories.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresCategoryRepository, PostgresDirectorRepository, PostgresFilmRepository};
use app::{CategoryService, DirectorService, FilmService};
use config::Config;
use domain::ports::{CategoryRepository, DirectorRepository, FilmRepository};

/// Application state shared across all handlers
pub struct AppState<FR, DR, CR>
where
    FR: FilmRepository,
    DR: DirectorRepository,
    CR: CategoryRepository,
{
    pub film_service: Arc<FilmService<FR, DR, CR>>,
    pub director_service: Arc<DirectorService<DR, FR>>,
    pub category_service: Arc<CategoryService<CR, FR>>,
}

// Derived Clone would require the repositories themselves to be Clone.
impl<FR, DR, CR> Clone for AppState<FR, DR, CR>
where
    FR: FilmRepository,
    DR: DirectorRepository,
    CR: CategoryRepository,
{
    fn clone(&self) -> Self {
        Self {
            film_service: self.film_service.clone(),
            director_service: self.director_service.clone(),
            category_service: self.category_service.clone(),
        }
    }
}

impl<FR, DR, CR> AppState<FR, DR, CR>
where
    FR: FilmRepository,
    DR: DirectorRepository,
    CR: CategoryRepository,
{
    /// Wire the three services over one shared set of repositories
    pub fn new(films: Arc<FR>, directors: Arc<DR>, categories: Arc<CR>) -> Self {
        Self {
            film_service: Arc::new(FilmService::new(
                films.clone(),
                directors.clone(),
                categories.clone(),
            )),
            director_service: Arc::new(DirectorService::new(directors, films.clone())),
            category_service: Arc::new(CategoryService::new(categories, films)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with every catalog route
pub fn router<FR, DR, CR>(state: AppState<FR, DR, CR>) -> Router
where
    FR: FilmRepository + 'static,
    DR: DirectorRepository + 'static,
    CR: CategoryRepository + 'static,
{
    use handlers::{categories, directors, films};

    Router::new()
        // Health check
        .route("/health", get(health))
        // Films
        .route(
            "/films",
            get(films::list_films::<FR, DR, CR>).post(films::create_film::<FR, DR, CR>),
        )
        .route(
            "/films/:id",
            get(films::get_film::<FR, DR, CR>)
                .put(films::update_film::<FR, DR, CR>)
                .delete(films::delete_film::<FR, DR, CR>),
        )
        .route(
            "/films/search/title",
            get(films::search_by_title::<FR, DR, CR>),
        )
        .route(
            "/films/search/year",
            get(films::search_by_year::<FR, DR, CR>),
        )
        .route(
            "/films/search/years",
            get(films::search_by_year_range::<FR, DR, CR>),
        )
        .route(
            "/films/search/category/:category_id",
            get(films::search_by_category::<FR, DR, CR>),
        )
        .route(
            "/films/search/rating",
            get(films::search_by_min_rating::<FR, DR, CR>),
        )
        .route(
            "/films/director/:director_id",
            get(films::search_by_director::<FR, DR, CR>),
        )
        // Directors
        .route(
            "/directors",
            get(directors::list_directors::<FR, DR, CR>)
                .post(directors::create_director::<FR, DR, CR>),
        )
        .route(
            "/directors/:id",
            get(directors::get_director::<FR, DR, CR>)
                .put(directors::update_director::<FR, DR, CR>)
                .delete(directors::delete_director::<FR, DR, CR>),
        )
        .route(
            "/directors/:id/filmography",
            get(directors::get_filmography::<FR, DR, CR>),
        )
        .route(
            "/directors/search/lastname",
            get(directors::search_by_last_name::<FR, DR, CR>),
        )
        .route(
            "/directors/search/firstname",
            get(directors::search_by_first_name::<FR, DR, CR>),
        )
        .route(
            "/directors/search/nationality",
            get(directors::search_by_nationality::<FR, DR, CR>),
        )
        // Categories
        .route(
            "/categories",
            get(categories::list_categories::<FR, DR, CR>)
                .post(categories::create_category::<FR, DR, CR>),
        )
        .route(
            "/categories/:id",
            get(categories::get_category::<FR, DR, CR>)
                .put(categories::update_category::<FR, DR, CR>)
                .delete(categories::delete_category::<FR, DR, CR>),
        )
        .route(
            "/categories/:id/films",
            get(categories::list_category_films::<FR, DR, CR>),
        )
        .route(
            "/categories/search",
            get(categories::search_categories::<FR, DR, CR>),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cinhub_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CinHub API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("Failed to apply migrations")?;
        tracing::info!("Migrations applied");
    }

    // Create adapters
    let film_repo = Arc::new(PostgresFilmRepository::new(db.clone()));
    let director_repo = Arc::new(PostgresDirectorRepository::new(db.clone()));
    let category_repo = Arc::new(PostgresCategoryRepository::new(db));

    let state = AppState::new(film_repo, director_repo, category_repo);

    let app = router(state)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
