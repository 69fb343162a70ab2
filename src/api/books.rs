//! Book API endpoints

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequestParts, Path, State},
    http::{header::LOCATION, request::Parts, HeaderName, StatusCode},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFields},
    AppState,
};

use super::AuthenticatedUser;

/// Integer id taken from the path; anything else matches no book.
///
/// Extracted ahead of credentials, so a malformed id is 404 even when unauthenticated.
pub struct BookId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::NotFound(e.body_text()))?;
        raw.parse::<i32>()
            .map(BookId)
            .map_err(|_| AppError::NotFound(format!("Book {} not found", raw)))
    }
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Books ordered by id", body = Vec<Book>),
        (status = 401, description = "Missing or invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    AuthenticatedUser(_principal): AuthenticatedUser,
) -> Json<Vec<Book>> {
    Json(state.services.books.list().await)
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    security(("basic_auth" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 401, description = "Missing or invalid credentials", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    AuthenticatedUser(_principal): AuthenticatedUser,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("basic_auth" = [])),
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book,
            headers(("Location" = String, description = "URL of the created book"))),
        (status = 400, description = "Unparsable body", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    payload: Result<Json<Book>, JsonRejection>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Book>)> {
    let Json(book) = payload?;
    let book = state.services.books.create(book).await?;
    tracing::debug!(
        "Book {} created by {} ({})",
        book.id,
        principal.name,
        principal.scheme
    );
    let location = format!("/api/books/{}", book.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(book)))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    security(("basic_auth" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Unparsable body", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    AuthenticatedUser(_principal): AuthenticatedUser,
    payload: Result<Json<Book>, JsonRejection>,
) -> AppResult<Json<Book>> {
    let Json(input) = payload?;
    let book = state.services.books.update(id, &BookFields::from(input)).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("basic_auth" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 401, description = "Missing or invalid credentials", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    AuthenticatedUser(_principal): AuthenticatedUser,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
