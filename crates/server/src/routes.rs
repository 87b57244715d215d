//! HTTP handlers and router assembly.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::Query;
use catalog::{Catalog, Movie};
use tracing::debug;

use crate::query::BrowseQuery;
use crate::state::AppState;

/// Assemble the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Serve frontend
        .route("/", get(index))
        // API routes
        .route("/api/movies", get(browse))
        .route("/api/genres", get(genres))
        .route("/api/mpaa-ratings", get(mpaa_ratings))
        .with_state(state)
}

/// GET / - static demo page driving the JSON API
async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// GET /api/movies - the filtered catalog listing.
///
/// All query parameters are optional; the response is the subset of the
/// catalog meeting every active criterion, in catalog order, with no
/// pagination or count limit.
pub async fn browse(
    State(state): State<AppState>,
    Query(params): Query<BrowseQuery>,
) -> Result<Json<Vec<Movie>>, (StatusCode, String)> {
    let criteria = params.into_criteria();
    debug!("Browse request: {criteria}");

    let results = state
        .pipeline
        .apply(state.catalog.all().iter().collect(), &criteria)
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Filter error: {e}"),
            )
        })?;

    Ok(Json(results.into_iter().cloned().collect()))
}

/// GET /api/genres - distinct genres derived from the catalog at load
pub async fn genres(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.genres().to_vec())
}

/// GET /api/mpaa-ratings - the fixed MPAA rating choice list
pub async fn mpaa_ratings() -> Json<Vec<&'static str>> {
    Json(Catalog::mpaa_rating_choices().to_vec())
}
