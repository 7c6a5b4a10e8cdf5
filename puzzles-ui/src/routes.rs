//! HTTP route handlers for the puzzle pages and the JSON API.

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use puzzles::core::types::{Answers, Day};
use puzzles::solve::solve;
use tracing::{error, info};

use crate::state::AppState;
use crate::view::{ViewConfig, day1_page, day3_page, day4_page, index_page};

/// Build the page router.
pub fn page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/day1", get(day1))
        .route("/day3", get(day3))
        .route("/day4", get(day4))
}

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/days/{day}", get(get_answers))
}

/// Request failure. The cause is logged; the client sees a generic 500.
#[derive(Debug)]
pub struct PageError(anyhow::Error);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %format!("{:#}", self.0), "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

impl<E> From<E> for PageError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

async fn health() -> &'static str {
    "ok"
}

/// GET / - links to every day.
async fn index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    Ok(Html(state.renderer.render_index(&index_page())?))
}

/// GET /day1 - grouped sums with the "Do sums" and "Filter" toggles.
async fn day1(
    State(state): State<AppState>,
    Query(view): Query<ViewConfig>,
) -> Result<Html<String>, PageError> {
    let raw = state.load_input(Day::One).await?;
    let page = day1_page(&raw, view);
    info!(groups = page.groups.len(), sums = view.sums, filter = view.filter, "render day1");
    Ok(Html(state.renderer.render_day(Day::One, &page)?))
}

/// GET /day3 - every line split into halves.
async fn day3(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let raw = state.load_input(Day::Three).await?;
    let page = day3_page(&raw);
    info!(rows = page.rows.len(), "render day3");
    Ok(Html(state.renderer.render_day(Day::Three, &page)?))
}

/// GET /day4 - range pairs over the shared index strip.
async fn day4(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let raw = state.load_input(Day::Four).await?;
    let page = day4_page(&raw)?;
    info!(rows = page.rows.len(), strip = page.strip.len(), "render day4");
    Ok(Html(state.renderer.render_day(Day::Four, &page)?))
}

/// GET /api/days/:day - both answers for a day as JSON.
async fn get_answers(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Response, PageError> {
    let Ok(day) = day.parse::<Day>() else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    let raw = state.load_input(day).await?;
    let answers: Answers = solve(day, &raw)?;
    Ok(Json(answers).into_response())
}
