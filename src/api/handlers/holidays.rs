//! Public holiday listing backed by the external feed.

use crate::feed::{Holiday, HolidayFeed};
use axum::{extract::Extension, response::IntoResponse, Json};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/v1/holidays",
    responses(
        (status = 200, description = "Normalized holiday list; empty when the feed is down or malformed", body = [Holiday])
    ),
    tag = "holidays"
)]
pub async fn holidays(feed: Extension<Arc<HolidayFeed>>) -> impl IntoResponse {
    // Feed failures surface as an empty list, never an error status.
    Json(feed.fetch().await)
}
