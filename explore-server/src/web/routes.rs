//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{error, warn};

use crate::domain::{InvalidSortMode, QueryError, SearchQuery, SortMode};
use crate::explore::{
    ExploreError, ExploreSession, PageOutcome, resolve_countries, resolve_photo_url,
};
use crate::places::PlaceProvider;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<P: PlaceProvider + 'static>(state: AppState<P>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/explore/search", get(search::<P>))
        .route("/api/explore/next", get(next_page::<P>))
        .route("/api/explore/previous", get(previous_page::<P>))
        .route("/api/explore/sort", get(set_sort::<P>))
        .route("/api/countries", get(countries::<P>))
        .route("/api/photo", get(photo::<P>))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Start a new search in a session, creating the session if needed.
async fn search<P: PlaceProvider + 'static>(
    State(state): State<AppState<P>>,
    Query(req): Query<SearchRequest>,
) -> Result<Json<PageResponse>, AppError> {
    let query = SearchQuery::new(&req.keyword, req.city.as_deref(), req.country.as_deref())?;
    let mode: SortMode = req.sort.as_deref().unwrap_or("").parse()?;

    let session = state.sessions.get_or_create(&req.session).await;
    let outcome = session.search(query, mode).await;

    page_response(&state, outcome)
}

async fn next_page<P: PlaceProvider + 'static>(
    State(state): State<AppState<P>>,
    Query(req): Query<SessionRequest>,
) -> Result<Json<PageResponse>, AppError> {
    let session = existing_session(&state, &req.session).await?;
    let outcome = session.next_page().await?;
    page_response(&state, outcome)
}

async fn previous_page<P: PlaceProvider + 'static>(
    State(state): State<AppState<P>>,
    Query(req): Query<SessionRequest>,
) -> Result<Json<PageResponse>, AppError> {
    let session = existing_session(&state, &req.session).await?;
    let outcome = session.previous_page().await?;
    page_response(&state, outcome)
}

/// Re-rank the current page. Makes no provider request.
async fn set_sort<P: PlaceProvider + 'static>(
    State(state): State<AppState<P>>,
    Query(req): Query<SortRequest>,
) -> Result<Json<PageResponse>, AppError> {
    let mode: SortMode = req.mode.parse()?;
    let session = existing_session(&state, &req.session).await?;
    let view = session.set_sort_mode(mode);

    Ok(Json(PageResponse::from_view(
        &view,
        state.provider.as_ref(),
        state.config.photo_max_width,
    )))
}

/// Country autocomplete. Never fails; lookup problems give an empty list.
async fn countries<P: PlaceProvider + 'static>(
    State(state): State<AppState<P>>,
    Query(req): Query<CountryRequest>,
) -> Json<CountryResponse> {
    let countries = resolve_countries(
        state.provider.as_ref(),
        &req.q,
        state.config.country_min_chars,
    )
    .await;

    Json(CountryResponse { countries })
}

async fn photo<P: PlaceProvider + 'static>(
    State(state): State<AppState<P>>,
    Query(req): Query<PhotoRequest>,
) -> Json<PhotoResponse> {
    let max_width = req.max_width.unwrap_or(state.config.photo_max_width);
    let url = resolve_photo_url(state.provider.as_ref(), req.reference.as_deref(), max_width);

    Json(PhotoResponse { url })
}

async fn existing_session<P: PlaceProvider + 'static>(
    state: &AppState<P>,
    id: &str,
) -> Result<Arc<ExploreSession<P>>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown session: {id}"),
        })
}

fn page_response<P: PlaceProvider + 'static>(
    state: &AppState<P>,
    outcome: PageOutcome,
) -> Result<Json<PageResponse>, AppError> {
    match outcome {
        PageOutcome::Applied(view) => Ok(Json(PageResponse::from_view(
            &view,
            state.provider.as_ref(),
            state.config.photo_max_width,
        ))),
        PageOutcome::Superseded { generation } => Err(AppError::Conflict {
            message: format!("Request {generation} was superseded by a newer search"),
        }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidSortMode> for AppError {
    fn from(e: InvalidSortMode) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<ExploreError> for AppError {
    fn from(e: ExploreError) -> Self {
        let message = e.to_string();
        match e {
            ExploreError::Query(_) => AppError::BadRequest { message },
            ExploreError::SessionBusy => AppError::Conflict { message },
            ExploreError::NoSearch | ExploreError::NoNextPage | ExploreError::NoPreviousPage => {
                AppError::BadRequest { message }
            }
            ExploreError::Provider(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
