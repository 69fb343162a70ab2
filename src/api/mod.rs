//! API handlers for the books REST endpoints

pub mod books;
pub mod openapi;
pub mod student;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{error::AppError, models::Principal, AppState};

/// Extractor for the principal authenticated by Basic credentials
pub struct AuthenticatedUser(pub Principal);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let principal = state
            .services
            .auth
            .authenticate(parts.headers.get(AUTHORIZATION))?;
        Ok(AuthenticatedUser(principal))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = state.config.static_files.clone();

    let api = Router::new()
        .route("/me", get(student::whoami))
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .with_state(state);

    let mut app = Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router());

    if static_files.enabled {
        app = app.fallback_service(ServeDir::new(&static_files.dir));
    }

    app.layer(TraceLayer::new_for_http()).layer(cors)
}
