mod controller;
pub mod handlers;
mod page;
mod types;

pub use controller::{UiController, View};
pub use page::{escape_html, render_page};

use crate::{Result, blog::BlogGenerator, config::Config, generation::create_text_generator};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Routes for the page, the JSON API and the health probe.
pub fn router(controller: UiController) -> Router {
    let app_state = handlers::AppState { controller };

    Router::new()
        .route("/", get(handlers::index).post(handlers::generate_page))
        .route("/api/generate", post(handlers::generate_api))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    // Model handle lives for the whole process
    let text_generator = create_text_generator(&config.generation)?;
    let blog_generator = Arc::new(BlogGenerator::new(text_generator));
    let controller = UiController::new(blog_generator);

    let app = router(controller);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
